//! 16-colour retro palette
//!
//! Colours are stored as palette indices. Simulation code treats them as opaque;
//! only the vertex batcher resolves them to RGBA.

use serde::{Deserialize, Serialize};

/// Number of entries in the palette
pub const PALETTE_SIZE: usize = 16;

/// Default palette as 0xRRGGBB
pub const PALETTE: [u32; PALETTE_SIZE] = [
    0x000000, 0x2B335F, 0x7E2072, 0x19959C, 0x8B4852, 0x395C98, 0xA9C1FF, 0xEEEEEE, 0xD4186C,
    0xD38441, 0xE9C35B, 0x70C6A9, 0x7696DE, 0xA3A3A3, 0xFF9798, 0xEDC7B0,
];

/// A palette index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const WHITE: Color = Color(7);
    pub const RED: Color = Color(8);
    pub const ORANGE: Color = Color(9);
    pub const YELLOW: Color = Color(10);
    pub const GREEN: Color = Color(11);

    /// RGBA in 0-1 range. Out-of-range indices wrap around the palette.
    pub fn to_rgba(self) -> [f32; 4] {
        let rgb = PALETTE[self.0 as usize % PALETTE_SIZE];
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
        [channel(16), channel(8), channel(0), 1.0]
    }
}
