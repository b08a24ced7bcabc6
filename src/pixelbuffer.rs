// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The working image.
//!
//! A flat, RGB-interleaved byte buffer with a row stride fixed at
//! three bytes times the source width.  Removing a seam compacts each
//! row in place and shrinks the *logical* width; the storage itself
//! never moves, so a whole resize sequence runs without allocating.

use image::{DynamicImage, GenericImageView, Pixel, RgbImage};

use crate::error::CarveError;
use crate::seam::VerticalSeam;

/// An owned RGB pixel grid with a mutable logical width inside a fixed
/// capacity.  Exclusively owned by the resize engine and mutated
/// destructively in place.
#[derive(Debug)]
pub struct PixelBuffer {
    src_width: u32,
    src_height: u32,
    current_width: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a buffer for a `src_width × src_height` image.  Like
    /// the scratch maps, this is the only allocation the buffer ever
    /// performs.
    pub fn new(src_width: u32, src_height: u32) -> Self {
        PixelBuffer {
            src_width,
            src_height,
            current_width: src_width,
            data: vec![0; 3 * src_width as usize * src_height as usize],
        }
    }

    // Same rule as the scratch maps: all of the stride arithmetic
    // lives here and nowhere else.
    fn get_index(&self, x: u32, y: u32) -> usize {
        3 * ((y as usize) * (self.src_width as usize) + (x as usize))
    }

    /// The logical width of the working image.
    pub fn width(&self) -> u32 {
        self.current_width
    }

    /// The height, which seam edits never change.
    pub fn height(&self) -> u32 {
        self.src_height
    }

    /// The fixed column capacity.
    pub fn source_width(&self) -> u32 {
        self.src_width
    }

    /// Read one pixel.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.get_index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    fn put(&mut self, x: u32, y: u32, px: [u8; 3]) {
        let i = self.get_index(x, y);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Validate a decoded source image and copy it into the working
    /// buffer, resetting the logical width to full capacity.  The
    /// image must be 8-bit RGB without alpha and match the buffer's
    /// fixed dimensions exactly; anything else is refused.
    pub fn load(&mut self, img: &DynamicImage) -> Result<(), CarveError> {
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            return Err(CarveError::NullInput);
        }
        let rgb = match img {
            DynamicImage::ImageRgb8(buf) => buf,
            _ => return Err(CarveError::UnsupportedFormat),
        };
        if w != self.src_width || h != self.src_height {
            return Err(CarveError::DimensionMismatch {
                got_width: w,
                got_height: h,
                expected_width: self.src_width,
                expected_height: self.src_height,
            });
        }
        for (x, y, px) in rgb.enumerate_pixels() {
            let c = px.channels();
            self.put(x, y, [c[0], c[1], c[2]]);
        }
        self.current_width = self.src_width;
        Ok(())
    }

    /// Take one column out of the image along `seam`, capturing the
    /// removed colors into it.  Every pixel right of the seam moves
    /// one step left; the logical width drops by one.
    pub fn remove_column(&mut self, seam: &mut VerticalSeam) {
        for y in 0..self.src_height {
            let sx = seam.positions[y as usize];
            seam.colors[y as usize] = self.get(sx, y);
            for x in sx..self.current_width - 1 {
                let right = self.get(x + 1, y);
                self.put(x, y, right);
            }
        }
        self.current_width -= 1;
    }

    /// Reopen a column along `seam` and refill it with the captured
    /// colors.  Every pixel at or right of the seam moves one step
    /// right; the logical width grows by one.  The caller guarantees
    /// there is still capacity for the extra column.
    pub fn insert_column(&mut self, seam: &VerticalSeam) {
        for y in 0..self.src_height {
            let sx = seam.positions[y as usize];
            let mut x = self.current_width;
            while x > sx {
                let left = self.get(x - 1, y);
                self.put(x, y, left);
                x -= 1;
            }
            self.put(sx, y, seam.colors[y as usize]);
        }
        self.current_width += 1;
    }

    /// Copy the logical viewport out into an owned image.  The result
    /// is a point-in-time copy: the engine reuses this buffer for its
    /// next mutation, so the returned image never aliases it.
    pub fn snapshot(&self) -> RgbImage {
        let w = self.current_width;
        let h = self.src_height;
        let mut out = Vec::with_capacity(3 * w as usize * h as usize);
        for y in 0..h {
            let start = self.get_index(0, y);
            out.extend_from_slice(&self.data[start..start + 3 * w as usize]);
        }
        RgbImage::from_raw(w, h, out).expect("snapshot buffer matches its own dimensions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_image(w: u32, h: u32, raw: Vec<u8>) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, raw).unwrap())
    }

    // A 3x2 image whose bytes spell out their own coordinates.
    fn sample() -> DynamicImage {
        rgb_image(
            3,
            2,
            vec![
                0, 1, 2, 10, 11, 12, 20, 21, 22, //
                100, 101, 102, 110, 111, 112, 120, 121, 122,
            ],
        )
    }

    #[test]
    fn load_copies_pixels() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.load(&sample()).unwrap();
        assert_eq!(buf.get(0, 0), [0, 1, 2]);
        assert_eq!(buf.get(2, 0), [20, 21, 22]);
        assert_eq!(buf.get(1, 1), [110, 111, 112]);
        assert_eq!(buf.width(), 3);
    }

    #[test]
    fn load_rejects_empty_input() {
        let mut buf = PixelBuffer::new(3, 2);
        let empty = rgb_image(0, 0, vec![]);
        assert_eq!(buf.load(&empty), Err(CarveError::NullInput));
    }

    #[test]
    fn load_rejects_alpha() {
        let mut buf = PixelBuffer::new(2, 2);
        let rgba = DynamicImage::ImageRgba8(
            image::ImageBuffer::from_raw(2, 2, vec![0u8; 16]).unwrap(),
        );
        assert_eq!(buf.load(&rgba), Err(CarveError::UnsupportedFormat));
    }

    #[test]
    fn load_rejects_wrong_dimensions() {
        let mut buf = PixelBuffer::new(4, 2);
        assert_eq!(
            buf.load(&sample()),
            Err(CarveError::DimensionMismatch {
                got_width: 3,
                got_height: 2,
                expected_width: 4,
                expected_height: 2,
            })
        );
    }

    #[test]
    fn remove_column_compacts_rows_and_captures_colors() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.load(&sample()).unwrap();

        let mut seam = VerticalSeam::new(2);
        seam.positions = vec![1, 0];
        buf.remove_column(&mut seam);

        assert_eq!(buf.width(), 2);
        assert_eq!(seam.colors, vec![[10, 11, 12], [100, 101, 102]]);
        // Row 0 lost its middle column, row 1 its first.
        assert_eq!(buf.get(0, 0), [0, 1, 2]);
        assert_eq!(buf.get(1, 0), [20, 21, 22]);
        assert_eq!(buf.get(0, 1), [110, 111, 112]);
        assert_eq!(buf.get(1, 1), [120, 121, 122]);
    }

    #[test]
    fn insert_column_is_the_exact_inverse_of_remove() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.load(&sample()).unwrap();
        let before = buf.snapshot();

        let mut seam = VerticalSeam::new(2);
        seam.positions = vec![2, 1];
        buf.remove_column(&mut seam);
        buf.insert_column(&seam);

        assert_eq!(buf.width(), 3);
        assert_eq!(buf.snapshot().into_raw(), before.into_raw());
    }

    #[test]
    fn snapshot_is_limited_to_the_logical_width() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.load(&sample()).unwrap();
        let mut seam = VerticalSeam::new(2);
        seam.positions = vec![0, 0];
        buf.remove_column(&mut seam);

        let shot = buf.snapshot();
        assert_eq!(shot.dimensions(), (2, 2));
        assert_eq!(
            shot.into_raw(),
            vec![
                10, 11, 12, 20, 21, 22, //
                110, 111, 112, 120, 121, 122,
            ]
        );
    }
}
