//! Monitor handles and their video modes.

use glfw_sys as sys;

/// An opaque handle to a connected monitor, owned by GLFW.
#[derive(Debug)]
pub struct Monitor {
    raw: *mut sys::GLFWmonitor,
}

/// The resolution of a monitor's current video mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    pub width: i32,
    pub height: i32,
}

/// Returns the user's primary monitor, or `None` when no monitor is
/// connected or the library has not been initialized.
pub fn primary_monitor() -> Option<Monitor> {
    let api = sys::glfw().ok()?;
    let raw = unsafe { (api.glfwGetPrimaryMonitor)() };
    if raw.is_null() {
        None
    } else {
        Some(Monitor { raw })
    }
}

impl Monitor {
    /// The raw native handle.
    pub fn raw(&self) -> *mut sys::GLFWmonitor {
        self.raw
    }

    /// The monitor's current video mode.
    pub fn video_mode(&self) -> Option<VideoMode> {
        let api = sys::glfw().ok()?;
        let mode = unsafe { (api.glfwGetVideoMode)(self.raw) };
        if mode.is_null() {
            return None;
        }
        let mode = unsafe { &*mode };
        Some(VideoMode { width: mode.width, height: mode.height })
    }
}
