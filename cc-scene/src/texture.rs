use crate::SceneError;

pub const SEAM_COLOR: [u8; 4] = [0x1a, 0x1a, 0x2e, 0xff];
pub const BASE_COLOR: [u8; 4] = [0x0f, 0x0f, 0x1e, 0xff];

pub const DEFAULT_SIZE: u32 = 512;
pub const DEFAULT_STRIPE_WIDTH: u32 = 20;
/// Largest accepted width or height.
pub const MAX_SIZE: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
}

/// Corrugated panel pattern: RGBA8 rows, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturePattern {
    width: u32,
    height: u32,
    pub wrap_u: WrapMode,
    pub wrap_v: WrapMode,
    rgba: Vec<u8>,
}

impl TexturePattern {
    /// Builds the striped pattern.
    ///
    /// A column is a seam when its index is a multiple of two stripe widths,
    /// everything else gets the base color. A trailing band narrower than
    /// `stripe_width` is always base colored.
    pub fn generate(width: u32, height: u32, stripe_width: u32) -> Result<Self, SceneError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .filter(|_| width <= MAX_SIZE && height <= MAX_SIZE);
        let Some(len) = len.filter(|&len| len > 0 && stripe_width > 0) else {
            return Err(SceneError::DegenerateTexture {
                width,
                height,
                stripe_width,
            });
        };

        let row: Vec<[u8; 4]> = (0..width)
            .map(|x| {
                if is_seam_column(x, width, stripe_width) {
                    SEAM_COLOR
                } else {
                    BASE_COLOR
                }
            })
            .collect();

        let mut rgba = Vec::with_capacity(len);
        for _ in 0..height {
            for px in &row {
                rgba.extend_from_slice(px);
            }
        }

        Ok(Self {
            width,
            height,
            wrap_u: WrapMode::Repeat,
            wrap_v: WrapMode::Repeat,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.rgba[idx..idx + 4]);
        Some(px)
    }

    pub fn is_tileable(&self) -> bool {
        self.wrap_u == WrapMode::Repeat && self.wrap_v == WrapMode::Repeat
    }
}

fn is_seam_column(x: u32, width: u32, stripe_width: u32) -> bool {
    let band_start = x - x % stripe_width;
    let band_complete = band_start + stripe_width <= width;
    band_complete && x % (2 * stripe_width) == 0
}
