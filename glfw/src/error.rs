//! Binding error handling.

use std::fmt;
use std::ptr;

use libc::c_char;

use glfw_sys as sys;

/// A specialized [`Result`] type for binding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all operations that can fail natively.
#[derive(Debug, Clone)]
pub struct Error {
    /// The raw code of the underlying GLFW error.
    raw_code: Option<i64>,

    /// The human readable description reported by GLFW, when present.
    raw_os_message: Option<String>,

    /// The simplified error kind to handle matching.
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(
        raw_code: Option<i64>,
        raw_os_message: Option<String>,
        kind: ErrorKind,
    ) -> Self {
        Self { raw_code, raw_os_message, kind }
    }

    /// Builds an error of the given kind carrying whatever `glfwGetError`
    /// has to say about the most recent native failure.
    pub(crate) fn last_native(kind: ErrorKind) -> Self {
        let api = match sys::glfw() {
            Ok(api) => api,
            Err(err) => return Error::new(None, Some(err.to_string()), kind),
        };

        unsafe {
            let mut description: *const c_char = ptr::null();
            let code = (api.glfwGetError)(&mut description);
            if code == sys::GLFW_NO_ERROR {
                return kind.into();
            }
            let message = if description.is_null() {
                None
            } else {
                Some(std::ffi::CStr::from_ptr(description).to_string_lossy().into_owned())
            };
            Error::new(Some(code as i64), message, kind)
        }
    }

    /// The underlying error kind.
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    /// The underlying raw code in case it's present.
    #[inline]
    pub fn raw_code(&self) -> Option<i64> {
        self.raw_code
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(raw_code) = self.raw_code {
            write!(f, "[{raw_code:x}] ")?;
        }

        let msg = if let Some(raw_os_message) = self.raw_os_message.as_ref() {
            raw_os_message
        } else {
            self.kind.as_str()
        };

        write!(f, "{msg}")
    }
}

impl std::error::Error for Error {}

/// Build an error with just a kind.
impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { raw_code: None, raw_os_message: None, kind }
    }
}

/// The two failure categories the binding distinguishes.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// The native library could not be loaded or failed to initialize. No
    /// further native calls are safe.
    Initialization,

    /// Window creation failed, for example because no compatible context
    /// was available. No partial window object is left behind.
    Creation,
}

impl ErrorKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match *self {
            ErrorKind::Initialization => "initialization failed",
            ErrorKind::Creation => "window creation failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_raw_code() {
        let err = Error::new(Some(0x10008), Some("borked".into()), ErrorKind::Creation);
        assert_eq!(err.to_string(), "[10008] borked");
    }

    #[test]
    fn display_falls_back_to_the_kind() {
        let err = Error::from(ErrorKind::Initialization);
        assert_eq!(err.to_string(), "initialization failed");
    }
}
