//! Raw ABI surface of the GLFW shared library.
//!
//! This crate does not link against GLFW at build time. The library is
//! opened at runtime with `libloading` and every entry point the binding
//! uses is resolved into a [`Fns`] table, the same way the safe layer of a
//! GL stack reaches libEGL or libGLX. The table is process-wide and loaded
//! on first use through [`glfw()`].
//!
//! `src/constants.rs` is generated by the `glfw-generator` tool from
//! `GLFW/glfw3.h` and committed, so header upgrades show up as reviewable
//! diffs.

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::ops::Deref;

use libc::{c_char, c_double, c_int, c_uchar, c_void};
use libloading::Library;
use once_cell::sync::Lazy;

mod constants;
pub use constants::*;

#[repr(C)]
pub struct GLFWwindow {
    _private: [u8; 0],
}

#[repr(C)]
pub struct GLFWmonitor {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GLFWvidmode {
    pub width: c_int,
    pub height: c_int,
    pub redBits: c_int,
    pub greenBits: c_int,
    pub blueBits: c_int,
    pub refreshRate: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GLFWimage {
    pub width: c_int,
    pub height: c_int,
    pub pixels: *mut c_uchar,
}

pub type GLFWcursorposfun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_double, c_double)>;
pub type GLFWwindowsizefun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int)>;
pub type GLFWframebuffersizefun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int)>;
pub type GLFWkeyfun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int, c_int, c_int)>;
pub type GLFWmousebuttonfun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int, c_int)>;
pub type GLFWscrollfun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_double, c_double)>;
pub type GLFWwindowrefreshfun = Option<unsafe extern "C" fn(*mut GLFWwindow)>;

/// Failure to open the GLFW shared library or resolve one of its symbols.
#[derive(Debug, Clone)]
pub enum LoadError {
    Library { message: String },
    MissingSymbol { symbol: &'static str },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Library { message } => write!(f, "{message}"),
            LoadError::MissingSymbol { symbol } => {
                write!(f, "symbol `{symbol}` missing from the GLFW library")
            },
        }
    }
}

impl std::error::Error for LoadError {}

macro_rules! glfw_fns {
    ($(fn $name:ident($($arg:ident: $argty:ty),* $(,)?) $(-> $ret:ty)?;)+) => {
        /// Every GLFW entry point used by the binding, resolved up front so
        /// a missing symbol surfaces at load time rather than mid-frame.
        pub struct Fns {
            $(pub $name: unsafe extern "C" fn($($argty),*) $(-> $ret)?,)+
        }

        impl Fns {
            fn load(lib: &Library) -> Result<Self, LoadError> {
                unsafe {
                    Ok(Self {
                        $($name: *lib
                            .get::<unsafe extern "C" fn($($argty),*) $(-> $ret)?>(
                                concat!(stringify!($name), "\0").as_bytes(),
                            )
                            .map_err(|_| LoadError::MissingSymbol {
                                symbol: stringify!($name),
                            })?,)+
                    })
                }
            }
        }
    };
}

glfw_fns! {
    fn glfwInit() -> c_int;
    fn glfwTerminate();
    fn glfwGetError(description: *mut *const c_char) -> c_int;
    fn glfwWindowHint(hint: c_int, value: c_int);
    fn glfwCreateWindow(
        width: c_int,
        height: c_int,
        title: *const c_char,
        monitor: *mut GLFWmonitor,
        share: *mut GLFWwindow,
    ) -> *mut GLFWwindow;
    fn glfwDestroyWindow(window: *mut GLFWwindow);
    fn glfwShowWindow(window: *mut GLFWwindow);
    fn glfwWindowShouldClose(window: *mut GLFWwindow) -> c_int;
    fn glfwSetWindowShouldClose(window: *mut GLFWwindow, value: c_int);
    fn glfwSetWindowUserPointer(window: *mut GLFWwindow, pointer: *mut c_void);
    fn glfwGetWindowUserPointer(window: *mut GLFWwindow) -> *mut c_void;
    fn glfwSetCursorPosCallback(
        window: *mut GLFWwindow,
        callback: GLFWcursorposfun,
    ) -> GLFWcursorposfun;
    fn glfwSetWindowSizeCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowsizefun,
    ) -> GLFWwindowsizefun;
    fn glfwSetFramebufferSizeCallback(
        window: *mut GLFWwindow,
        callback: GLFWframebuffersizefun,
    ) -> GLFWframebuffersizefun;
    fn glfwSetKeyCallback(window: *mut GLFWwindow, callback: GLFWkeyfun) -> GLFWkeyfun;
    fn glfwSetMouseButtonCallback(
        window: *mut GLFWwindow,
        callback: GLFWmousebuttonfun,
    ) -> GLFWmousebuttonfun;
    fn glfwSetScrollCallback(window: *mut GLFWwindow, callback: GLFWscrollfun) -> GLFWscrollfun;
    fn glfwSetWindowRefreshCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowrefreshfun,
    ) -> GLFWwindowrefreshfun;
    fn glfwPollEvents();
    fn glfwWaitEvents();
    fn glfwPostEmptyEvent();
    fn glfwMakeContextCurrent(window: *mut GLFWwindow);
    fn glfwGetCurrentContext() -> *mut GLFWwindow;
    fn glfwSwapInterval(interval: c_int);
    fn glfwSwapBuffers(window: *mut GLFWwindow);
    fn glfwGetCursorPos(window: *mut GLFWwindow, xpos: *mut c_double, ypos: *mut c_double);
    fn glfwGetWindowPos(window: *mut GLFWwindow, xpos: *mut c_int, ypos: *mut c_int);
    fn glfwSetWindowPos(window: *mut GLFWwindow, xpos: c_int, ypos: c_int);
    fn glfwGetWindowSize(window: *mut GLFWwindow, width: *mut c_int, height: *mut c_int);
    fn glfwGetFramebufferSize(window: *mut GLFWwindow, width: *mut c_int, height: *mut c_int);
    fn glfwSetWindowMonitor(
        window: *mut GLFWwindow,
        monitor: *mut GLFWmonitor,
        xpos: c_int,
        ypos: c_int,
        width: c_int,
        height: c_int,
        refreshRate: c_int,
    );
    fn glfwSetWindowIcon(window: *mut GLFWwindow, count: c_int, images: *const GLFWimage);
    fn glfwGetPrimaryMonitor() -> *mut GLFWmonitor;
    fn glfwGetVideoMode(monitor: *mut GLFWmonitor) -> *const GLFWvidmode;
}

#[cfg(target_os = "windows")]
const LIBRARY_CANDIDATES: &[&str] = &["glfw3.dll", "glfw.dll"];
#[cfg(target_os = "macos")]
const LIBRARY_CANDIDATES: &[&str] = &["libglfw.3.dylib", "libglfw.dylib"];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const LIBRARY_CANDIDATES: &[&str] = &["libglfw.so.3", "libglfw.so"];

/// The loaded GLFW library together with its resolved entry points.
///
/// The [`Library`] handle is kept alive for as long as the table exists so
/// the function pointers stay valid.
pub struct Glfw {
    fns: Fns,
    _lib: Library,
}

impl Deref for Glfw {
    type Target = Fns;

    fn deref(&self) -> &Fns {
        &self.fns
    }
}

impl Glfw {
    /// Opens the GLFW shared library and resolves the entry point table.
    ///
    /// The `GLFW_LIBRARY` environment variable overrides the per-platform
    /// default names.
    pub fn load() -> Result<Glfw, LoadError> {
        let candidates: Vec<OsString> = match env::var_os("GLFW_LIBRARY") {
            Some(path) => vec![path],
            None => LIBRARY_CANDIDATES.iter().map(OsString::from).collect(),
        };

        let mut last_error = None;
        for name in &candidates {
            match unsafe { Library::new(name) } {
                Ok(lib) => {
                    let fns = Fns::load(&lib)?;
                    return Ok(Glfw { fns, _lib: lib });
                },
                Err(err) => last_error = Some(err),
            }
        }

        let detail = match last_error {
            Some(err) => format!(": {err}"),
            None => String::new(),
        };
        Err(LoadError::Library {
            message: format!("could not open the GLFW library, tried {candidates:?}{detail}"),
        })
    }
}

static GLFW: Lazy<Result<Glfw, LoadError>> = Lazy::new(Glfw::load);

/// The process-wide entry point table, loaded on first use.
pub fn glfw() -> Result<&'static Glfw, &'static LoadError> {
    GLFW.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_constants_match_the_header() {
        assert_eq!(GLFW_TRUE, 1);
        assert_eq!(GLFW_FALSE, 0);
    }

    #[test]
    fn load_error_formats_the_missing_symbol() {
        let err = LoadError::MissingSymbol { symbol: "glfwInit" };
        assert_eq!(err.to_string(), "symbol `glfwInit` missing from the GLFW library");
    }
}
