// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The resize engine.
//!
//! Owns the working pixel buffer, the energy and flow maps, and the
//! removal history, and keeps all four consistent across every seam
//! edit.  One instance is a session: construct it for a source image,
//! `set_source` to replace the picture later, and shrink or grow the
//! width at will in between.  Removal records every seam it takes out,
//! so growing back up to the source width restores the original image
//! byte for byte.

use image::{DynamicImage, GenericImageView, GrayImage, RgbImage};
use log::{debug, trace};

use crate::dump;
use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::flowmap::FlowMap;
use crate::pixelbuffer::PixelBuffer;
use crate::seam::SeamHistory;
use crate::seamfinder::find_seam;

/// A content-aware width resizer over a fixed-size working buffer.
///
/// Every mutating operation takes `&mut self`, so the borrow checker
/// enforces what the design demands anyway: no reentrant or concurrent
/// calls while a pass is in flight.  Returned images are owned
/// point-in-time copies and never alias the working storage.
pub struct SeamCarver {
    src_width: u32,
    src_height: u32,
    pixels: PixelBuffer,
    energy: EnergyMap,
    flow: FlowMap,
    history: SeamHistory,
}

impl SeamCarver {
    /// Fix the engine's capacity to the source image's dimensions and
    /// load it.  All three grids are allocated here, once; resizing
    /// afterwards only moves logical widths around.
    pub fn new(img: &DynamicImage) -> Result<Self, CarveError> {
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            return Err(CarveError::NullInput);
        }
        let mut carver = SeamCarver {
            src_width: w,
            src_height: h,
            pixels: PixelBuffer::new(w, h),
            energy: EnergyMap::new(w, h),
            flow: FlowMap::new(w, h),
            history: SeamHistory::new(),
        };
        carver.set_source(img)?;
        Ok(carver)
    }

    /// Load or replace the source picture.  The grid must be 8-bit
    /// RGB without alpha and match the engine's fixed dimensions
    /// exactly.  On success every previously removed seam is forgotten
    /// and the full-image analysis runs once.
    pub fn set_source(&mut self, img: &DynamicImage) -> Result<(), CarveError> {
        self.pixels.load(img)?;
        self.history.clear();
        self.energy.recompute_full(&self.pixels);
        self.flow
            .rebuild(&self.energy, self.pixels.width(), self.pixels.height());
        debug!("source loaded at {}x{}", self.src_width, self.src_height);
        Ok(())
    }

    /// Carve `n` seams out of the image and return the shrunk result.
    /// A count that would leave no columns at all is treated as zero:
    /// the caller gets the image back unchanged rather than an error.
    pub fn remove_seams(&mut self, n: u32) -> RgbImage {
        let mut n = n;
        if n >= self.pixels.width() {
            debug!(
                "remove_seams({}) at width {} clamped to a no-op",
                n,
                self.pixels.width()
            );
            n = 0;
        }
        for _ in 0..n {
            let mut seam = find_seam(&self.flow, self.pixels.width(), self.pixels.height());
            self.pixels.remove_column(&mut seam);
            self.energy.recompute_after_shrink(&self.pixels, &seam);
            trace!(
                "removed seam through x={} at the top row, width now {}",
                seam.positions[0],
                self.pixels.width()
            );
            self.history.push(seam);
            self.flow
                .rebuild(&self.energy, self.pixels.width(), self.pixels.height());
        }
        self.pixels.snapshot()
    }

    /// Reinsert the `n` most recently removed seams, most recent
    /// first, and return the widened result.  A count that would grow
    /// past the source width is treated as zero, and the count is also
    /// clamped to the recorded history, so popping an empty stack is
    /// impossible.
    pub fn insert_seams(&mut self, n: u32) -> RgbImage {
        let mut n = n;
        if n > self.src_width - self.pixels.width() {
            debug!(
                "insert_seams({}) at width {} clamped to a no-op",
                n,
                self.pixels.width()
            );
            n = 0;
        }
        let n = n.min(self.history.depth());
        for _ in 0..n {
            let seam = match self.history.pop() {
                Some(seam) => seam,
                None => break,
            };
            self.pixels.insert_column(&seam);
            self.energy.recompute_after_grow(&self.pixels, &seam);
            trace!(
                "restored seam through x={} at the top row, width now {}",
                seam.positions[0],
                self.pixels.width()
            );
            self.flow
                .rebuild(&self.energy, self.pixels.width(), self.pixels.height());
        }
        self.pixels.snapshot()
    }

    /// The current energy map rendered as a grayscale picture, bright
    /// where the image fights back against carving.
    pub fn energy_image(&self) -> GrayImage {
        dump::energy_to_image(&self.energy, self.pixels.width(), self.pixels.height())
    }

    /// The fixed source width the engine was constructed with.
    pub fn source_width(&self) -> u32 {
        self.src_width
    }

    /// The fixed source height.
    pub fn source_height(&self) -> u32 {
        self.src_height
    }

    /// The width of the working image right now.
    pub fn current_width(&self) -> u32 {
        self.pixels.width()
    }

    /// The height of the working image, which never changes.
    pub fn current_height(&self) -> u32 {
        self.src_height
    }

    /// How many removed seams could still be reinserted.
    pub fn seams_removed(&self) -> u32 {
        self.history.depth()
    }
}
