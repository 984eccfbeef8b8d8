//! Selectable bird characters
//!
//! Each variant carries its own flight constants. Only the Black bird has a
//! gameplay-visible ability: doubled particle bursts.

use serde::{Deserialize, Serialize};

/// The closed set of bird variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKind {
    #[default]
    Red,
    Blue,
    Yellow,
    Black,
}

/// Static description of a bird variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterProfile {
    pub name: &'static str,
    /// Body colour (0xRRGGBB)
    pub color: u32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set on flap (negative is up)
    pub flap_impulse: f32,
    pub ability: &'static str,
    pub description: &'static str,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 4] = [
        CharacterKind::Red,
        CharacterKind::Blue,
        CharacterKind::Yellow,
        CharacterKind::Black,
    ];

    /// Stable id used as the persisted value
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterKind::Red => "red",
            CharacterKind::Blue => "blue",
            CharacterKind::Yellow => "yellow",
            CharacterKind::Black => "black",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(CharacterKind::Red),
            "blue" => Some(CharacterKind::Blue),
            "yellow" => Some(CharacterKind::Yellow),
            "black" => Some(CharacterKind::Black),
            _ => None,
        }
    }

    pub fn profile(&self) -> CharacterProfile {
        match self {
            CharacterKind::Red => CharacterProfile {
                name: "Red Bird",
                color: 0xFF4444,
                gravity: 0.1,
                flap_impulse: -5.0,
                ability: "Standard flight",
                description: "Classic angry bird with balanced stats",
            },
            CharacterKind::Blue => CharacterProfile {
                name: "Blue Bird",
                color: 0x4444FF,
                gravity: 0.1,
                flap_impulse: -5.0,
                ability: "Light weight",
                description: "Slower fall, gentler flap for precise control",
            },
            CharacterKind::Yellow => CharacterProfile {
                name: "Yellow Bird",
                color: 0xFFFF44,
                gravity: 0.1,
                flap_impulse: -5.0,
                ability: "Speed boost",
                description: "Faster fall but powerful flap for quick movement",
            },
            CharacterKind::Black => CharacterProfile {
                name: "Black Bird",
                color: 0x444444,
                gravity: 0.1,
                flap_impulse: -5.0,
                ability: "Explosive power",
                description: "Standard stats with explosive particle effects",
            },
        }
    }

    /// Multiplier applied to every particle burst
    pub fn particle_multiplier(&self) -> usize {
        if *self == CharacterKind::Black { 2 } else { 1 }
    }
}
