//! Pixel surfaces the rasterizer writes into.
//!
//! A [`PixelBuffer`] is a caller-owned RGBA8 image stored row-major in one
//! contiguous allocation. Rows never share storage, so writing one pixel can
//! only ever change that pixel. The buffer's bytes go straight to the GPU
//! texture upload, and it can be exported as PNG for snapshots.

use std::path::Path;

use glam::{IVec2, UVec2};

use crate::error::{ConfigError, SurfaceError};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `ratio`, rounding to nearest.
    ///
    /// `ratio` is clamped to `[0, 1]`, so the result never exceeds `self`.
    pub fn scale(self, ratio: f64) -> Rgb {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let channel = |c: u8| (c as f64 * ratio).round() as u8;
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }

    #[inline]
    fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Row-major RGBA8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Allocate a black, fully opaque buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSurface { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::BLACK.to_rgba(); width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba());
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| {
            let [r, g, b, _] = self.pixels[i];
            Rgb::new(r, g, b)
        })
    }

    /// Write one pixel; writes outside the buffer are dropped.
    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_rgba();
        }
    }

    /// Fill the `size` rectangle at `origin`, clipped to the buffer.
    pub fn fill_rect(&mut self, origin: IVec2, size: UVec2, color: Rgb) {
        let x0 = origin.x.max(0) as i64;
        let y0 = origin.y.max(0) as i64;
        let x1 = (origin.x as i64 + size.x as i64).min(self.width as i64);
        let y1 = (origin.y as i64 + size.y as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let rgba = color.to_rgba();
        let stride = self.width as usize;
        for y in y0 as usize..y1 as usize {
            let row = &mut self.pixels[y * stride..(y + 1) * stride];
            row[x0 as usize..x1 as usize].fill(rgba);
        }
    }

    /// Pixels of row `y` as RGBA quadruplets.
    pub fn row(&self, y: u32) -> &[[u8; 4]] {
        let stride = self.width as usize;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// Raw RGBA bytes, row-major, `4 * width` bytes per row.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an [`image::RgbaImage`].
    pub fn to_image(&self) -> Result<image::RgbaImage, SurfaceError> {
        image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec()).ok_or(
            SurfaceError::SizeMismatch {
                width: self.width,
                height: self.height,
            },
        )
    }

    /// Write the buffer to `path` as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        let path = path.as_ref();
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        tracing::info!(path = %path.display(), "saved snapshot");
        Ok(())
    }
}
