//! Window wrappers and per-window event routing.
//!
//! GLFW delivers events through fixed C function pointers and a single
//! opaque user pointer per window. The wrapper object is heap allocated and
//! its address is stored as that user pointer, so each trampoline can
//! recover the owning [`Window`] and forward the event to whichever handler
//! is currently installed in the matching slot. All seven slots start out
//! as no-ops, which keeps the dispatch path safe before any handler is set.

use std::cell::{Cell, RefCell};
use std::ffi::CString;
use std::fmt;
use std::ptr;
use std::rc::Rc;

use libc::{c_double, c_int, c_uchar, c_void};
use log::debug;

use glfw_sys as sys;

use crate::error::{Error, ErrorKind, Result};
use crate::events::{Action, Key, Modifiers, MouseButton, Scancode};
use crate::monitor::Monitor;

pub type CursorPosCallback = dyn Fn(&Window, f64, f64);
pub type SizeCallback = dyn Fn(&Window, i32, i32);
pub type FramebufferSizeCallback = dyn Fn(&Window, i32, i32);
pub type KeyCallback = dyn Fn(&Window, Key, Scancode, Action, Modifiers);
pub type MouseButtonCallback = dyn Fn(&Window, MouseButton, Action, Modifiers);
pub type ScrollCallback = dyn Fn(&Window, f64, f64);
pub type RefreshCallback = dyn Fn(&Window);

/// One replaceable handler per event category.
///
/// A dispatch clones the `Rc` out of the slot before the call, so replacing
/// a handler from inside a running handler never tears the invocation in
/// progress.
struct CallbackSlots {
    cursor_pos: RefCell<Rc<CursorPosCallback>>,
    size: RefCell<Rc<SizeCallback>>,
    framebuffer_size: RefCell<Rc<FramebufferSizeCallback>>,
    key: RefCell<Rc<KeyCallback>>,
    mouse_button: RefCell<Rc<MouseButtonCallback>>,
    scroll: RefCell<Rc<ScrollCallback>>,
    refresh: RefCell<Rc<RefreshCallback>>,
}

impl Default for CallbackSlots {
    fn default() -> Self {
        let cursor_pos: Rc<CursorPosCallback> = Rc::new(|_, _, _| {});
        let size: Rc<SizeCallback> = Rc::new(|_, _, _| {});
        let framebuffer_size: Rc<FramebufferSizeCallback> = Rc::new(|_, _, _| {});
        let key: Rc<KeyCallback> = Rc::new(|_, _, _, _, _| {});
        let mouse_button: Rc<MouseButtonCallback> = Rc::new(|_, _, _, _| {});
        let scroll: Rc<ScrollCallback> = Rc::new(|_, _, _| {});
        let refresh: Rc<RefreshCallback> = Rc::new(|_| {});
        Self {
            cursor_pos: RefCell::new(cursor_pos),
            size: RefCell::new(size),
            framebuffer_size: RefCell::new(framebuffer_size),
            key: RefCell::new(key),
            mouse_button: RefCell::new(mouse_button),
            scroll: RefCell::new(scroll),
            refresh: RefCell::new(refresh),
        }
    }
}

/// An RGBA image handed to [`Window::set_icon`]. `pixels` is tightly
/// packed, row major, four bytes per pixel.
#[derive(Debug, Clone)]
pub struct Image {
    pub width: i32,
    pub height: i32,
    pub pixels: Vec<u8>,
}

/// A created window together with its event handler slots.
///
/// The wrapper lives behind a `Box` because its address doubles as the
/// native user pointer; it must not move for the handle's entire lifetime.
/// The native resource is owned by GLFW and is only released by an explicit
/// [`Window::destroy`]. Dropping the box without destroying leaks the
/// native window by contract.
pub struct Window {
    handle: *mut sys::GLFWwindow,
    user_pointer: Cell<*mut c_void>,
    callbacks: CallbackSlots,
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window").field("handle", &self.handle).finish()
    }
}

impl Window {
    /// Creates a window and its OpenGL context.
    ///
    /// On success the wrapper is registered as the handle's user pointer
    /// and all seven trampolines are installed, so handlers set later take
    /// effect without further native calls. Pass `monitor` for fullscreen
    /// and `share` to share the new context's objects with another window.
    pub fn create(
        width: i32,
        height: i32,
        title: &str,
        monitor: Option<&Monitor>,
        share: Option<&Window>,
    ) -> Result<Box<Window>> {
        let api = crate::api()?;

        let title = CString::new(title).map_err(|_| {
            Error::new(None, Some("window title contains a NUL byte".into()), ErrorKind::Creation)
        })?;
        let monitor = monitor.map_or(ptr::null_mut(), Monitor::raw);
        let share = share.map_or(ptr::null_mut(), |window| window.handle);

        let handle =
            unsafe { (api.glfwCreateWindow)(width, height, title.as_ptr(), monitor, share) };
        if handle.is_null() {
            return Err(Error::last_native(ErrorKind::Creation));
        }

        let window = Box::new(Window {
            handle,
            user_pointer: Cell::new(ptr::null_mut()),
            callbacks: CallbackSlots::default(),
        });

        unsafe {
            (api.glfwSetWindowUserPointer)(handle, &*window as *const Window as *mut c_void);
            (api.glfwSetCursorPosCallback)(handle, Some(trampolines::cursor_pos));
            (api.glfwSetWindowSizeCallback)(handle, Some(trampolines::size));
            (api.glfwSetFramebufferSizeCallback)(handle, Some(trampolines::framebuffer_size));
            (api.glfwSetKeyCallback)(handle, Some(trampolines::key));
            (api.glfwSetMouseButtonCallback)(handle, Some(trampolines::mouse_button));
            (api.glfwSetScrollCallback)(handle, Some(trampolines::scroll));
            (api.glfwSetWindowRefreshCallback)(handle, Some(trampolines::refresh));
        }

        debug!("created window {:?} ({}x{}, {:?})", handle, width, height, title);
        Ok(window)
    }

    /// The raw native handle.
    pub fn raw(&self) -> *mut sys::GLFWwindow {
        self.handle
    }

    /// Destroys the native window. The Live to Destroyed transition is one
    /// way; the wrapper is consumed so no handler can fire afterwards.
    pub fn destroy(self: Box<Self>) {
        if let Ok(api) = sys::glfw() {
            debug!("destroying window {:?}", self.handle);
            unsafe { (api.glfwDestroyWindow)(self.handle) };
        }
    }

    pub fn set_cursor_pos_callback<F>(&self, callback: F)
    where
        F: Fn(&Window, f64, f64) + 'static,
    {
        *self.callbacks.cursor_pos.borrow_mut() = Rc::new(callback);
    }

    pub fn set_size_callback<F>(&self, callback: F)
    where
        F: Fn(&Window, i32, i32) + 'static,
    {
        *self.callbacks.size.borrow_mut() = Rc::new(callback);
    }

    pub fn set_framebuffer_size_callback<F>(&self, callback: F)
    where
        F: Fn(&Window, i32, i32) + 'static,
    {
        *self.callbacks.framebuffer_size.borrow_mut() = Rc::new(callback);
    }

    pub fn set_key_callback<F>(&self, callback: F)
    where
        F: Fn(&Window, Key, Scancode, Action, Modifiers) + 'static,
    {
        *self.callbacks.key.borrow_mut() = Rc::new(callback);
    }

    pub fn set_mouse_button_callback<F>(&self, callback: F)
    where
        F: Fn(&Window, MouseButton, Action, Modifiers) + 'static,
    {
        *self.callbacks.mouse_button.borrow_mut() = Rc::new(callback);
    }

    pub fn set_scroll_callback<F>(&self, callback: F)
    where
        F: Fn(&Window, f64, f64) + 'static,
    {
        *self.callbacks.scroll.borrow_mut() = Rc::new(callback);
    }

    pub fn set_refresh_callback<F>(&self, callback: F)
    where
        F: Fn(&Window) + 'static,
    {
        *self.callbacks.refresh.borrow_mut() = Rc::new(callback);
    }

    fn dispatch_cursor_pos(&self, xpos: c_double, ypos: c_double) {
        let callback = self.callbacks.cursor_pos.borrow().clone();
        callback(self, xpos, ypos);
    }

    fn dispatch_size(&self, width: c_int, height: c_int) {
        let callback = self.callbacks.size.borrow().clone();
        callback(self, width, height);
    }

    fn dispatch_framebuffer_size(&self, width: c_int, height: c_int) {
        let callback = self.callbacks.framebuffer_size.borrow().clone();
        callback(self, width, height);
    }

    fn dispatch_key(&self, key: c_int, scancode: c_int, action: c_int, mods: c_int) {
        let callback = self.callbacks.key.borrow().clone();
        callback(
            self,
            Key(key),
            Scancode(scancode),
            Action(action),
            Modifiers::from_bits_retain(mods),
        );
    }

    fn dispatch_mouse_button(&self, button: c_int, action: c_int, mods: c_int) {
        let callback = self.callbacks.mouse_button.borrow().clone();
        callback(self, MouseButton(button), Action(action), Modifiers::from_bits_retain(mods));
    }

    fn dispatch_scroll(&self, xoffset: c_double, yoffset: c_double) {
        let callback = self.callbacks.scroll.borrow().clone();
        callback(self, xoffset, yoffset);
    }

    fn dispatch_refresh(&self) {
        let callback = self.callbacks.refresh.borrow().clone();
        callback(self);
    }

    /// Makes the window's OpenGL context current on the calling thread.
    pub fn make_context_current(&self) {
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwMakeContextCurrent)(self.handle) };
        }
    }

    /// Makes a previously hidden window visible.
    pub fn show(&self) {
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwShowWindow)(self.handle) };
        }
    }

    pub fn should_close(&self) -> bool {
        match sys::glfw() {
            Ok(api) => unsafe { (api.glfwWindowShouldClose)(self.handle) == sys::GLFW_TRUE },
            Err(_) => false,
        }
    }

    pub fn set_should_close(&self, value: bool) {
        if let Ok(api) = sys::glfw() {
            let value = if value { sys::GLFW_TRUE } else { sys::GLFW_FALSE };
            unsafe { (api.glfwSetWindowShouldClose)(self.handle, value) };
        }
    }

    pub fn swap_buffers(&self) {
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwSwapBuffers)(self.handle) };
        }
    }

    pub fn cursor_pos(&self) -> (f64, f64) {
        let (mut xpos, mut ypos): (c_double, c_double) = (0.0, 0.0);
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwGetCursorPos)(self.handle, &mut xpos, &mut ypos) };
        }
        (xpos, ypos)
    }

    pub fn pos(&self) -> (i32, i32) {
        let (mut xpos, mut ypos): (c_int, c_int) = (0, 0);
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwGetWindowPos)(self.handle, &mut xpos, &mut ypos) };
        }
        (xpos, ypos)
    }

    pub fn set_pos(&self, xpos: i32, ypos: i32) {
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwSetWindowPos)(self.handle, xpos, ypos) };
        }
    }

    pub fn size(&self) -> (i32, i32) {
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwGetWindowSize)(self.handle, &mut width, &mut height) };
        }
        (width, height)
    }

    pub fn framebuffer_size(&self) -> (i32, i32) {
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        if let Ok(api) = sys::glfw() {
            unsafe { (api.glfwGetFramebufferSize)(self.handle, &mut width, &mut height) };
        }
        (width, height)
    }

    /// Moves the window to a monitor for fullscreen, or back to windowed
    /// mode when `monitor` is `None`.
    pub fn set_monitor(
        &self,
        monitor: Option<&Monitor>,
        xpos: i32,
        ypos: i32,
        width: i32,
        height: i32,
        refresh_rate: i32,
    ) {
        if let Ok(api) = sys::glfw() {
            let monitor = monitor.map_or(ptr::null_mut(), Monitor::raw);
            unsafe {
                (api.glfwSetWindowMonitor)(
                    self.handle,
                    monitor,
                    xpos,
                    ypos,
                    width,
                    height,
                    refresh_rate,
                )
            };
        }
    }

    /// Sets the window icon set. An empty slice reverts to the platform
    /// default icon.
    pub fn set_icon(&self, images: &[Image]) {
        let Ok(api) = sys::glfw() else { return };
        let native: Vec<sys::GLFWimage> = images
            .iter()
            .map(|image| {
                debug_assert_eq!(image.pixels.len(), image.width as usize * image.height as usize * 4);
                sys::GLFWimage {
                    width: image.width,
                    height: image.height,
                    pixels: image.pixels.as_ptr() as *mut c_uchar,
                }
            })
            .collect();
        let images = if native.is_empty() { ptr::null() } else { native.as_ptr() };
        unsafe { (api.glfwSetWindowIcon)(self.handle, native.len() as c_int, images) };
    }

    /// Stores a caller-owned pointer on the wrapper. The native user
    /// pointer slot is occupied by the wrapper itself, so this shadow slot
    /// stands in for it.
    pub fn set_user_pointer(&self, pointer: *mut c_void) {
        self.user_pointer.set(pointer);
    }

    pub fn user_pointer(&self) -> *mut c_void {
        self.user_pointer.get()
    }

    #[cfg(test)]
    fn detached() -> Box<Window> {
        Box::new(Window {
            handle: ptr::null_mut(),
            user_pointer: Cell::new(ptr::null_mut()),
            callbacks: CallbackSlots::default(),
        })
    }
}

/// Recovers the wrapper from a native user pointer value.
///
/// A null user pointer means the handle was never associated with a
/// wrapper, which violates the creation invariant; dispatch is skipped
/// rather than dereferenced.
unsafe fn from_user_pointer<'a>(pointer: *mut c_void) -> Option<&'a Window> {
    if pointer.is_null() {
        None
    } else {
        Some(&*(pointer as *const Window))
    }
}

/// The fixed native-facing entry points registered for every window.
///
/// Each one runs synchronously inside the event processing call, on the
/// thread that created the window.
mod trampolines {
    use super::*;

    unsafe fn recover<'a>(handle: *mut sys::GLFWwindow) -> Option<&'a Window> {
        let api = sys::glfw().ok()?;
        from_user_pointer((api.glfwGetWindowUserPointer)(handle))
    }

    pub(super) unsafe extern "C" fn cursor_pos(
        handle: *mut sys::GLFWwindow,
        xpos: c_double,
        ypos: c_double,
    ) {
        if let Some(window) = recover(handle) {
            window.dispatch_cursor_pos(xpos, ypos);
        }
    }

    pub(super) unsafe extern "C" fn size(
        handle: *mut sys::GLFWwindow,
        width: c_int,
        height: c_int,
    ) {
        if let Some(window) = recover(handle) {
            window.dispatch_size(width, height);
        }
    }

    pub(super) unsafe extern "C" fn framebuffer_size(
        handle: *mut sys::GLFWwindow,
        width: c_int,
        height: c_int,
    ) {
        if let Some(window) = recover(handle) {
            window.dispatch_framebuffer_size(width, height);
        }
    }

    pub(super) unsafe extern "C" fn key(
        handle: *mut sys::GLFWwindow,
        key: c_int,
        scancode: c_int,
        action: c_int,
        mods: c_int,
    ) {
        if let Some(window) = recover(handle) {
            window.dispatch_key(key, scancode, action, mods);
        }
    }

    pub(super) unsafe extern "C" fn mouse_button(
        handle: *mut sys::GLFWwindow,
        button: c_int,
        action: c_int,
        mods: c_int,
    ) {
        if let Some(window) = recover(handle) {
            window.dispatch_mouse_button(button, action, mods);
        }
    }

    pub(super) unsafe extern "C" fn scroll(
        handle: *mut sys::GLFWwindow,
        xoffset: c_double,
        yoffset: c_double,
    ) {
        if let Some(window) = recover(handle) {
            window.dispatch_scroll(xoffset, yoffset);
        }
    }

    pub(super) unsafe extern "C" fn refresh(handle: *mut sys::GLFWwindow) {
        if let Some(window) = recover(handle) {
            window.dispatch_refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    #[test]
    fn default_slots_are_safe_to_dispatch() {
        let window = Window::detached();
        window.dispatch_cursor_pos(1.0, 2.0);
        window.dispatch_size(3, 4);
        window.dispatch_framebuffer_size(5, 6);
        window.dispatch_key(consts::KeyA, 30, consts::Press, 0);
        window.dispatch_mouse_button(consts::MouseButtonLeft, consts::Release, 0);
        window.dispatch_scroll(0.5, -0.5);
        window.dispatch_refresh();
    }

    #[test]
    fn key_dispatch_converts_native_arguments() {
        let window = Window::detached();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        window.set_key_callback(move |_, key, scancode, action, mods| {
            log.borrow_mut().push((key, scancode, action, mods));
        });

        window.dispatch_key(consts::KeyEscape, 9, consts::Press, consts::ModShift);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        let (key, scancode, action, mods) = seen[0];
        assert_eq!(key, Key(256));
        assert_eq!(scancode, Scancode(9));
        assert_eq!(action, Action::PRESS);
        assert_eq!(mods, Modifiers::SHIFT);
    }

    #[test]
    fn cursor_dispatch_passes_exact_coordinates() {
        let window = Window::detached();
        let seen = Rc::new(Cell::new((0.0f64, 0.0f64)));
        let cell = seen.clone();
        window.set_cursor_pos_callback(move |_, x, y| cell.set((x, y)));

        window.dispatch_cursor_pos(12.25, -3.5);
        assert_eq!(seen.get(), (12.25, -3.5));
    }

    #[test]
    fn framebuffer_dispatch_passes_pixel_dimensions() {
        let window = Window::detached();
        let seen = Rc::new(Cell::new((0, 0)));
        let cell = seen.clone();
        window.set_framebuffer_size_callback(move |_, width, height| cell.set((width, height)));

        window.dispatch_framebuffer_size(1280, 720);
        assert_eq!(seen.get(), (1280, 720));
    }

    #[test]
    fn one_event_invokes_the_handler_exactly_once() {
        let window = Window::detached();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        window.set_refresh_callback(move |_| counter.set(counter.get() + 1));

        window.dispatch_refresh();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn replacing_a_handler_only_affects_later_dispatches() {
        let window = Window::detached();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let counter = first.clone();
        window.set_scroll_callback(move |_, _, _| counter.set(counter.get() + 1));
        window.dispatch_scroll(0.0, 1.0);

        let counter = second.clone();
        window.set_scroll_callback(move |_, _, _| counter.set(counter.get() + 1));
        window.dispatch_scroll(0.0, 1.0);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn a_handler_may_replace_its_own_slot_mid_dispatch() {
        let window = Window::detached();
        let outer = Rc::new(Cell::new(0));
        let inner = Rc::new(Cell::new(0));

        let outer_counter = outer.clone();
        let inner_counter = inner.clone();
        window.set_size_callback(move |window, _, _| {
            outer_counter.set(outer_counter.get() + 1);
            let counter = inner_counter.clone();
            window.set_size_callback(move |_, _, _| counter.set(counter.get() + 1));
        });

        // The in-flight dispatch keeps the handler captured at its start.
        window.dispatch_size(640, 480);
        assert_eq!((outer.get(), inner.get()), (1, 0));

        window.dispatch_size(640, 480);
        assert_eq!((outer.get(), inner.get()), (1, 1));
    }

    #[test]
    fn windows_never_share_a_dispatch() {
        let first = Window::detached();
        let second = Window::detached();
        let first_calls = Rc::new(Cell::new(0));
        let second_calls = Rc::new(Cell::new(0));

        let counter = first_calls.clone();
        first.set_mouse_button_callback(move |_, _, _, _| counter.set(counter.get() + 1));
        let counter = second_calls.clone();
        second.set_mouse_button_callback(move |_, _, _, _| counter.set(counter.get() + 1));

        second.dispatch_mouse_button(consts::MouseButtonRight, consts::Press, 0);
        assert_eq!((first_calls.get(), second_calls.get()), (0, 1));
    }

    #[test]
    fn handlers_receive_the_owning_window() {
        let window = Window::detached();
        let expected = &*window as *const Window as usize;
        let seen = Rc::new(Cell::new(0usize));
        let cell = seen.clone();
        window.set_refresh_callback(move |owner| cell.set(owner as *const Window as usize));

        window.dispatch_refresh();
        assert_eq!(seen.get(), expected);
    }

    #[test]
    fn user_pointer_recovery_round_trips() {
        let window = Window::detached();
        let pointer = &*window as *const Window as *mut c_void;

        let recovered = unsafe { from_user_pointer(pointer) }.unwrap();
        assert!(ptr::eq(recovered, &*window));
        assert!(unsafe { from_user_pointer(ptr::null_mut()) }.is_none());
    }

    #[test]
    fn user_pointer_slot_is_caller_owned() {
        let window = Window::detached();
        assert!(window.user_pointer().is_null());

        let mut value = 7i32;
        window.set_user_pointer(&mut value as *mut i32 as *mut c_void);
        assert_eq!(window.user_pointer() as *mut i32, &mut value as *mut i32);
    }
}
