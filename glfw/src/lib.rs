//! A safe binding for the GLFW windowing and input library.
//!
//! The native library is loaded at runtime and treated as an opaque
//! collaborator; this crate adds exactly two things on top of the 1:1 call
//! surface. Per-window event routing: each [`Window`] owns seven
//! replaceable handler slots, and fixed C trampolines forward native events
//! to whichever handler is currently installed. And a mirrored constant
//! set: [`consts`] is extracted mechanically from `GLFW/glfw3.h` by the
//! `glfw-generator` tool and committed, so it can be diffed on header
//! upgrades.
//!
//! The expected call discipline is GLFW's own: initialize with [`init`],
//! create windows and install handlers from the main thread, pump
//! [`poll_events`] from that same thread, and [`Window::destroy`] every
//! window before [`terminate`]. Handlers run synchronously inside the event
//! processing call.
//!
//! ```no_run
//! glfw::init().unwrap();
//! glfw::window_hint(glfw::consts::Resizable, glfw::consts::False);
//! let window = glfw::Window::create(640, 480, "triangle", None, None).unwrap();
//! window.set_key_callback(|window, key, _, action, _| {
//!     if key == glfw::Key(glfw::consts::KeyEscape) && action == glfw::Action::PRESS {
//!         window.set_should_close(true);
//!     }
//! });
//! window.make_context_current();
//! while !window.should_close() {
//!     glfw::poll_events();
//!     window.swap_buffers();
//! }
//! window.destroy();
//! glfw::terminate();
//! ```

#![deny(missing_debug_implementations)]

use std::ptr;

use log::debug;

pub mod consts;
mod error;
mod events;
mod monitor;
mod window;

/// The raw ABI layer, for code that needs to talk to GLFW directly.
pub use glfw_sys as sys;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::events::{Action, Key, Modifiers, MouseButton, Scancode};
pub use crate::monitor::{primary_monitor, Monitor, VideoMode};
pub use crate::window::{
    CursorPosCallback, FramebufferSizeCallback, Image, KeyCallback, MouseButtonCallback,
    RefreshCallback, ScrollCallback, SizeCallback, Window,
};

/// Resolves the native entry point table, reporting a load failure as an
/// initialization error.
pub(crate) fn api() -> Result<&'static sys::Glfw> {
    sys::glfw().map_err(|err| Error::new(None, Some(err.to_string()), ErrorKind::Initialization))
}

/// Initializes the GLFW library. Must succeed before any window call; a
/// failure means no further native calls are safe.
pub fn init() -> Result<()> {
    let api = api()?;
    if unsafe { (api.glfwInit)() } != sys::GLFW_TRUE {
        return Err(Error::last_native(ErrorKind::Initialization));
    }
    debug!("GLFW initialized");
    Ok(())
}

/// Destroys all remaining windows and releases everything GLFW allocated.
pub fn terminate() {
    if let Ok(api) = sys::glfw() {
        unsafe { (api.glfwTerminate)() };
    }
}

/// Sets a hint for the next call to [`Window::create`]. Hints are named by
/// the [`consts`] module, e.g. `window_hint(consts::Resizable, consts::False)`.
pub fn window_hint(hint: i32, value: i32) {
    if let Ok(api) = sys::glfw() {
        unsafe { (api.glfwWindowHint)(hint, value) };
    }
}

/// Processes pending events, firing window handlers synchronously on the
/// calling thread, then returns immediately.
pub fn poll_events() {
    if let Ok(api) = sys::glfw() {
        unsafe { (api.glfwPollEvents)() };
    }
}

/// Blocks until at least one event arrives, then processes events like
/// [`poll_events`].
pub fn wait_events() {
    if let Ok(api) = sys::glfw() {
        unsafe { (api.glfwWaitEvents)() };
    }
}

/// Posts an empty event to wake a thread blocked in [`wait_events`].
pub fn post_empty_event() {
    if let Ok(api) = sys::glfw() {
        unsafe { (api.glfwPostEmptyEvent)() };
    }
}

/// Sets the swap interval for the current context.
pub fn swap_interval(interval: i32) {
    if let Ok(api) = sys::glfw() {
        unsafe { (api.glfwSwapInterval)(interval) };
    }
}

/// The raw handle whose context is current on the calling thread, or null.
pub fn current_context() -> *mut sys::GLFWwindow {
    match sys::glfw() {
        Ok(api) => unsafe { (api.glfwGetCurrentContext)() },
        Err(_) => ptr::null_mut(),
    }
}

/// Detaches the current OpenGL context from the calling thread.
pub fn detach_current_context() {
    if let Ok(api) = sys::glfw() {
        unsafe { (api.glfwMakeContextCurrent)(ptr::null_mut()) };
    }
}

#[cfg(test)]
mod tests {
    use crate::consts;

    #[test]
    fn mirrored_constants_keep_their_header_values() {
        assert_eq!(consts::True, 1);
        assert_eq!(consts::False, 0);
        assert_eq!(consts::Resizable, 0x00020003);
        assert_eq!(consts::Visible, 0x00020004);
        assert_eq!(consts::OpenGLForwardCompatible, 0x00022006);
    }

    #[test]
    fn alias_constants_track_the_native_symbols() {
        assert_eq!(consts::KeyLast, consts::KeyMenu);
        assert_eq!(consts::MouseButtonLeft, consts::MouseButton1);
        assert_eq!(consts::JoystickLast, glfw_sys::GLFW_JOYSTICK_16);
    }
}
