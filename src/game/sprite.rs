use std::{fs, path::Path};

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use log::debug;

use super::feed::HalfExtents;

/// Native pixel size of the food image. Only the size matters to the game;
/// drawing the pixels is the renderer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub width:  u32,
    pub height: u32,
}

impl Sprite {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// # Errors
    ///
    /// Fails if the file is missing, does not decode as a PNG or JPEG image,
    /// or has no pixels.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).wrap_err_with(|| format!("failed to read sprite {}", path.display()))?;

        let sprite = Self::decode(&bytes)
            .wrap_err_with(|| format!("failed to decode sprite {}", path.display()))?;
        debug!(
            "sprite {} is {}x{}",
            path.display(),
            sprite.width,
            sprite.height
        );
        Ok(sprite)
    }

    /// Decodes the whole image so a damaged file is caught at startup rather
    /// than passing on a valid header alone.
    ///
    /// # Errors
    ///
    /// Fails if `bytes` is not a complete image in a supported format, or the
    /// image is empty.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            bail!("image is empty ({}x{})", width, height);
        }

        Ok(Self { width, height })
    }

    /// Half of the displayed size once the sprite is scaled, rounding down at
    /// each step as pixel sizes must.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn half_extents(&self, scale: f64) -> HalfExtents {
        let displayed = |n: u32| (f64::from(n) * scale).floor() as i64;
        HalfExtents {
            width:  displayed(self.width) / 2,
            height: displayed(self.height) / 2,
        }
    }
}
