use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
};
use log::{trace, warn};

/// Packed monochrome bitmap: 1 bit per pixel, 8 pixels per byte, MSB first,
/// row-major.  Rows are padded to whole bytes, so the byte stride of a row
/// is `ceil(width / 8)`.
///
/// Resource table entries are `Bitmap<'static>` statics, which keeps the
/// pixel data in the read-only segment of the firmware image; nothing is
/// allocated or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: u16,
    height: u16,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Packed buffer size in bytes for the given dimensions.
    pub const fn buffer_size(width: u16, height: u16) -> usize {
        (width as usize).div_ceil(8) * height as usize
    }

    /// Wraps packed pixel data.
    ///
    /// The buffer length must be exactly [`Bitmap::buffer_size`] for the
    /// claimed dimensions.  In a `const` or `static` initializer a mismatch
    /// fails the build.
    pub const fn new(width: u16, height: u16, data: &'a [u8]) -> Self {
        assert!(
            data.len() == Self::buffer_size(width, height),
            "packed buffer does not match the bitmap dimensions"
        );
        Self { width, height, data }
    }

    /// Runtime-checked [`Bitmap::new`] for buffers built at runtime.
    pub fn try_new(width: u16, height: u16, data: &'a [u8]) -> Result<Self, BitmapError> {
        let expected = Self::buffer_size(width, height);
        if data.len() != expected {
            return Err(BitmapError::SizeMismatch { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bytes per row.
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Raw packed bytes, for callers that hand the data straight to a
    /// rendering routine.
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Single pixel lookup.  `None` outside the bitmap.
    pub fn pixel(&self, x: u16, y: u16) -> Option<BinaryColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte_index = y as usize * self.stride() + x as usize / 8;
        let bit_index = 7 - (x as usize % 8);
        if (self.data[byte_index] >> bit_index) & 1 == 1 {
            Some(BinaryColor::On)
        } else {
            Some(BinaryColor::Off)
        }
    }

    /// Packed rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        // stride is zero only for an empty bitmap, where chunks_exact(0) panics
        self.data.chunks_exact(self.stride().max(1))
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> Pixels<'a> {
        Pixels { bitmap: *self, x: 0, y: 0 }
    }

    /// Draws the bitmap with its top left corner at `top_left`.
    ///
    /// Pixels falling outside the target are dropped by the target itself; a
    /// bitmap placed entirely past the bottom right corner is skipped.
    pub fn draw<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let size = target.bounding_box().size;
        if top_left.x >= size.width as i32 || top_left.y >= size.height as i32 {
            warn!("Bitmap not placed on the target");
            return Ok(());
        }
        trace!(
            "Drawing {}x{} bitmap at ({}, {})",
            self.width, self.height, top_left.x, top_left.y
        );
        target.draw_iter(self.pixels().map(|Pixel(point, color)| Pixel(point + top_left, color)))
    }
}

impl OriginDimensions for Bitmap<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

/// Error type for runtime bitmap construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    /// Buffer length differs from `ceil(width / 8) * height`
    SizeMismatch { expected: usize, actual: usize },
}

/// Iterator over the pixels of a [`Bitmap`] in row-major order.
pub struct Pixels<'a> {
    bitmap: Bitmap<'a>,
    x: u16,
    y: u16,
}

impl Iterator for Pixels<'_> {
    type Item = Pixel<BinaryColor>;

    fn next(&mut self) -> Option<Self::Item> {
        let point = Point::new(self.x as i32, self.y as i32);
        let color = self.bitmap.pixel(self.x, self.y)?;
        self.x += 1;
        if self.x >= self.bitmap.width {
            self.x = 0;
            self.y += 1;
        }
        Some(Pixel(point, color))
    }
}
