use crate::api::params::ForceMode;

pub const KEY_SPACE: u32 = 32;
pub const KEY_DIGIT_1: u32 = 49;
pub const KEY_DIGIT_8: u32 = 56;
pub const KEY_B: u32 = 66;
pub const KEY_R: u32 = 82;
pub const KEY_S: u32 = 83;
pub const KEY_T: u32 = 84;

/// What a key press does to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SelectMode(ForceMode),
    NextMode,
    Reset,
    ToggleTrails,
    ToggleBloom,
    ToggleStats,
}

impl KeyAction {
    /// Map a DOM `keyCode`. Unbound keys yield `None`.
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_DIGIT_1..=KEY_DIGIT_8 => ForceMode::from_index(key_code - KEY_DIGIT_1).map(Self::SelectMode),
            KEY_SPACE => Some(Self::NextMode),
            KEY_R => Some(Self::Reset),
            KEY_T => Some(Self::ToggleTrails),
            KEY_B => Some(Self::ToggleBloom),
            KEY_S => Some(Self::ToggleStats),
            _ => None,
        }
    }
}
