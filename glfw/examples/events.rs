//! Opens a window and prints every routed event until Escape is pressed.

use glfw::{consts, Action, Key};

fn main() {
    env_logger::init();

    glfw::init().expect("GLFW failed to initialize");

    glfw::window_hint(consts::Resizable, consts::True);
    glfw::window_hint(consts::ContextVersionMajor, 3);
    glfw::window_hint(consts::ContextVersionMinor, 3);

    let window = glfw::Window::create(800, 600, "events", None, None)
        .expect("window creation failed");

    window.set_key_callback(|window, key, scancode, action, mods| {
        println!("key {key:?} (scancode {scancode:?}) {action:?} mods {mods:?}");
        if key == Key(consts::KeyEscape) && action == Action::PRESS {
            window.set_should_close(true);
        }
    });
    window.set_cursor_pos_callback(|_, x, y| println!("cursor ({x:.1}, {y:.1})"));
    window.set_size_callback(|_, width, height| println!("size {width}x{height}"));
    window.set_framebuffer_size_callback(|_, width, height| {
        println!("framebuffer {width}x{height}");
    });
    window.set_mouse_button_callback(|_, button, action, mods| {
        println!("button {button:?} {action:?} mods {mods:?}");
    });
    window.set_scroll_callback(|_, x, y| println!("scroll ({x:.1}, {y:.1})"));
    window.set_refresh_callback(|_| println!("refresh"));

    window.make_context_current();
    glfw::swap_interval(1);
    window.show();

    while !window.should_close() {
        glfw::poll_events();
        window.swap_buffers();
    }

    window.destroy();
    glfw::terminate();
}
