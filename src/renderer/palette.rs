//! Colours shared by renderers (0xRRGGBB)

use crate::sim::PowerUpKind;

pub const SKY: u32 = 0x87CEEB;
pub const CLOUD: u32 = 0xFFFFFF;
pub const OBSTACLE: u32 = 0x8B4513;
pub const OBSTACLE_DETAIL: u32 = 0x654321;
pub const PIG: u32 = 0x90EE90;
pub const PIG_SNOUT: u32 = 0xFFB6C1;
pub const ARROW_SHAFT: u32 = 0x8B4513;
pub const ARROW_TIP: u32 = 0x555555;
pub const BEAK: u32 = 0xFFA500;
pub const SHIELD_RING: u32 = 0x00BFFF;

/// Fill colour, outline colour and glyph of a power-up
pub fn power_up_style(kind: PowerUpKind) -> (u32, u32, &'static str) {
    match kind {
        PowerUpKind::Shield => (0x00BFFF, 0x0080FF, "S"),
        PowerUpKind::Speed => (0x32CD32, 0x228B22, ">"),
        PowerUpKind::Slow => (0xFF6347, 0xFF4500, "<"),
    }
}

/// CSS hex string for a colour
pub fn css(color: u32) -> String {
    format!("#{:06X}", color & 0xFF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(css(0xFF4444), "#FF4444");
        assert_eq!(css(0x00BFFF), "#00BFFF");
        assert_eq!(css(0xAB_123456), "#123456");
    }

    #[test]
    fn test_power_up_glyphs_are_distinct() {
        let a = power_up_style(PowerUpKind::Shield).2;
        let b = power_up_style(PowerUpKind::Speed).2;
        let c = power_up_style(PowerUpKind::Slow).2;
        assert!(a != b && b != c && a != c);
    }
}
