//! Input codec: the host's modifier/button bit-set and mouse-button ids,
//! decoded into stable, queryable types.
//!
//! The windowing system reports keyboard modifiers and held mouse buttons as
//! one bit-set per event, and the pressed/released button as a small integer.
//! [`ModifierState`] retains the bits verbatim and exposes named predicates;
//! [`Button`] is the closed decoding of the integer id. Both are pure value
//! types with no host dependency, so tools can match on them without linking
//! any windowing API.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

/// The raw modifier/button bit-set of a pointer occurrence, kept verbatim.
///
/// Bit layout follows the X11-style convention of the host: keyboard
/// modifiers in the low byte, held mouse buttons from bit 8 up. Bits outside
/// the named masks (caps lock, extra buttons) are retained but have no
/// predicate; flag tests are independent and combinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierState(u32);

impl ModifierState {
    /// Shift key held.
    pub const SHIFT: u32 = 1 << 0;
    /// Control key held.
    pub const CONTROL: u32 = 1 << 2;
    /// Alt key held (Mod1 on X11-style hosts).
    pub const ALT: u32 = 1 << 3;
    /// Left mouse button held.
    pub const BUTTON1: u32 = 1 << 8;
    /// Right mouse button held.
    pub const BUTTON3: u32 = 1 << 10;

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The untouched bit-set, for flag tests this type does not name.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether any bit of `mask` is set.
    #[must_use]
    pub const fn contains(self, mask: u32) -> bool {
        self.0 & mask != 0
    }

    #[must_use]
    pub const fn is_alt_pressed(self) -> bool {
        self.contains(Self::ALT)
    }

    #[must_use]
    pub const fn is_control_pressed(self) -> bool {
        self.contains(Self::CONTROL)
    }

    #[must_use]
    pub const fn is_shift_pressed(self) -> bool {
        self.contains(Self::SHIFT)
    }

    #[must_use]
    pub const fn is_left_mouse_pressed(self) -> bool {
        self.contains(Self::BUTTON1)
    }

    #[must_use]
    pub const fn is_right_mouse_pressed(self) -> bool {
        self.contains(Self::BUTTON3)
    }
}

/// The mouse button a press/release occurrence is about.
///
/// `None` is reserved for motion, which has no button transition. `Back` and
/// `Forward` exist for hosts that report navigation buttons by name;
/// positional decoding never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Button {
    /// No button transition (motion occurrences).
    #[default]
    None,
    /// Left / primary button.
    Left,
    /// Middle button (wheel click).
    Middle,
    /// Right / secondary button.
    Right,
    /// Navigation back button.
    Back,
    /// Navigation forward button.
    Forward,
    /// Any raw id without a positional mapping.
    Unknown,
}

impl Button {
    /// Decode a host button id. Total over all ids: 1, 2, 3 are the
    /// positional left/middle/right convention, everything else (including
    /// 0) is `Unknown` so unrecognized devices degrade instead of failing.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            _ => Self::Unknown,
        }
    }
}
