//! Sprite-sheet animation
//!
//! A sheet holds `frames` equally wide frames side by side. The animation picks
//! a frame from the toolkit's frame counter; the blit itself is up to the host.

use crate::config::SpriteConfig;

/// Source rectangle of one frame within the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRect {
    pub u: u32,
    pub v: u32,
    pub w: u32,
    pub h: u32,
}

/// Frame cycling over a horizontal sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    pub sheet_width: u32,
    pub sheet_height: u32,
    frames: u32,
    ticks_per_frame: u64,
    frame: u32,
}

impl SpriteAnimation {
    /// `frames` and `ticks_per_frame` are raised to at least 1
    pub fn new(sheet_width: u32, sheet_height: u32, frames: u32, ticks_per_frame: u64) -> Self {
        Self {
            sheet_width,
            sheet_height,
            frames: frames.max(1),
            ticks_per_frame: ticks_per_frame.max(1),
            frame: 0,
        }
    }

    pub fn from_config(config: &SpriteConfig) -> Self {
        Self::new(
            config.sheet_width,
            config.sheet_height,
            config.frames,
            config.ticks_per_frame,
        )
    }

    pub fn frame_width(&self) -> u32 {
        self.sheet_width / self.frames
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Select the frame for the toolkit's global frame counter
    pub fn update(&mut self, frame_count: u64) {
        self.frame = ((frame_count / self.ticks_per_frame) % self.frames as u64) as u32;
    }

    /// Rectangle of the current frame
    pub fn source_rect(&self) -> SpriteRect {
        let w = self.frame_width();
        SpriteRect {
            u: w * self.frame,
            v: 0,
            w,
            h: self.sheet_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_cycle() {
        let mut anim = SpriteAnimation::new(48, 16, 3, 4);
        let frames: Vec<u32> = (0..14)
            .map(|t| {
                anim.update(t);
                anim.frame()
            })
            .collect();
        assert_eq!(frames, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 0, 0]);
    }

    #[test]
    fn test_source_rect() {
        let mut anim = SpriteAnimation::from_config(&SpriteConfig::default());
        anim.update(9);
        assert_eq!(
            anim.source_rect(),
            SpriteRect {
                u: 32,
                v: 0,
                w: 16,
                h: 16
            }
        );
    }

    #[test]
    fn test_zero_frames_clamped() {
        let mut anim = SpriteAnimation::new(30, 10, 0, 0);
        anim.update(5);
        assert_eq!(anim.frame(), 0);
        assert_eq!(anim.frame_width(), 30);
    }
}
