//! Value types delivered to event handlers.
//!
//! All of these are thin wrappers over the native integer codes, so every
//! code GLFW can deliver maps to exactly one host value and back. Named
//! codes live in [`consts`](crate::consts).

use libc::c_int;

use crate::consts;

/// A keyboard key code, e.g. [`consts::KeyEscape`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub c_int);

/// A platform-specific scancode, stable across keyboard layouts.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scancode(pub c_int);

/// A key or mouse button state transition.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action(pub c_int);

impl Action {
    pub const RELEASE: Action = Action(consts::Release);
    pub const PRESS: Action = Action(consts::Press);
    pub const REPEAT: Action = Action(consts::Repeat);
}

/// A mouse button code, e.g. [`consts::MouseButtonLeft`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButton(pub c_int);

bitflags::bitflags! {
    /// Modifier keys held down when an input event was generated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: c_int {
        const SHIFT = consts::ModShift;
        const CONTROL = consts::ModControl;
        const ALT = consts::ModAlt;
        const SUPER = consts::ModSuper;
        const CAPS_LOCK = consts::ModCapsLock;
        const NUM_LOCK = consts::ModNumLock;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_bits_match_the_native_mask() {
        let mods = Modifiers::from_bits_retain(consts::ModShift | consts::ModControl);
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(mods.contains(Modifiers::CONTROL));
        assert!(!mods.contains(Modifiers::ALT));
        assert_eq!(mods.bits(), 0x0003);
    }

    #[test]
    fn unknown_modifier_bits_are_retained() {
        let mods = Modifiers::from_bits_retain(0x4000);
        assert_eq!(mods.bits(), 0x4000);
    }

    #[test]
    fn actions_compare_by_native_code() {
        assert_eq!(Action::PRESS, Action(1));
        assert_ne!(Action::PRESS, Action::RELEASE);
        assert_eq!(Action::REPEAT.0, consts::Repeat);
    }

    #[test]
    fn key_codes_round_trip() {
        let key = Key(consts::KeyEscape);
        assert_eq!(key.0, 256);
        assert_eq!(key, Key(256));
    }
}
