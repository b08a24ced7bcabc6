// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The importance metric.
//!
//! Energy is the magnitude of the 3×3 Sobel gradient at each pixel,
//! summed over the three color channels.  The map supports a full pass
//! and a windowed pass that touches only the columns a seam edit could
//! have disturbed; everything further away keeps its old value, merely
//! slid one column toward (or away from) the edit.

use crate::cq;
use crate::gridmap::GridMap;
use crate::pixelbuffer::PixelBuffer;
use crate::seam::VerticalSeam;

/// Per-pixel importance scores over the working image, logically valid
/// for the buffer's current width and height.
#[derive(Debug)]
pub struct EnergyMap {
    map: GridMap<i32>,
}

impl EnergyMap {
    pub fn new(cap_width: u32, cap_height: u32) -> Self {
        EnergyMap {
            map: GridMap::new(cap_width, cap_height),
        }
    }

    /// The energy at one pixel.
    pub fn get(&self, x: u32, y: u32) -> i32 {
        self.map[(x, y)]
    }

    // Sobel magnitude at an interior pixel, summed over the channels:
    //
    //  | +1  0  -1 |        | +1  +2  +1 |
    //  | +2  0  -2 |  and   |  0   0   0 |
    //  | +1  0  -1 |        | -1  -2  -1 |
    //
    // followed by the rounded length of the (dx, dy) gradient.
    fn sobel(px: &PixelBuffer, x: u32, y: u32) -> i32 {
        let nw = px.get(x - 1, y - 1);
        let n = px.get(x, y - 1);
        let ne = px.get(x + 1, y - 1);
        let w = px.get(x - 1, y);
        let e = px.get(x + 1, y);
        let sw = px.get(x - 1, y + 1);
        let s = px.get(x, y + 1);
        let se = px.get(x + 1, y + 1);

        let mut value = 0i32;
        for c in 0..3 {
            let dx = (i32::from(nw[c]) + 2 * i32::from(w[c]) + i32::from(sw[c]))
                - (i32::from(ne[c]) + 2 * i32::from(e[c]) + i32::from(se[c]));
            let dy = (i32::from(nw[c]) + 2 * i32::from(n[c]) + i32::from(ne[c]))
                - (i32::from(sw[c]) + 2 * i32::from(s[c]) + i32::from(se[c]));
            value += f64::from(dx * dx + dy * dy).sqrt().round() as i32;
        }
        value
    }

    /// Recompute every interior pixel from scratch, then extrapolate
    /// the borders.
    pub fn recompute_full(&mut self, px: &PixelBuffer) {
        let (w, h) = (px.width(), px.height());
        for y in 1..h.saturating_sub(1) {
            for x in 1..w.saturating_sub(1) {
                self.map[(x, y)] = Self::sobel(px, x, y);
            }
        }
        self.extrapolate_borders(w, h);
    }

    // The only pixels whose 3×3 neighborhood a seam edit can have
    // disturbed lie within one column of the seam's position in this
    // row and the two adjacent rows.  Returns the half-open recompute
    // window for row y, clipped to the interior.
    fn seam_window(seam: &VerticalSeam, y: u32, width: u32) -> (u32, u32) {
        let above = seam.positions[(y - 1) as usize];
        let here = seam.positions[y as usize];
        let below = seam.positions[(y + 1) as usize];
        let lo = above.min(here).min(below);
        let hi = above.max(here).max(below);
        let x_start = cq!(lo <= 1, 1, lo - 1);
        let x_end = (hi + 1).min(width.saturating_sub(1));
        (x_start, x_end)
    }

    /// Windowed update after a column removal.  Inside the window the
    /// values are recomputed outright; the columns right of it reuse
    /// their previous values slid one step left, because a one-column
    /// edit cannot change the gradient that far away.
    pub fn recompute_after_shrink(&mut self, px: &PixelBuffer, seam: &VerticalSeam) {
        let (w, h) = (px.width(), px.height());
        for y in 1..h.saturating_sub(1) {
            let (x_start, x_end) = Self::seam_window(seam, y, w);
            for x in x_start..x_end {
                self.map[(x, y)] = Self::sobel(px, x, y);
            }
            for x in x_end..w.saturating_sub(1) {
                self.map[(x, y)] = self.map[(x + 1, y)];
            }
        }
        self.extrapolate_borders(w, h);
    }

    /// Windowed update after a column reinsertion.  The columns right
    /// of the window first reclaim their previous values slid one step
    /// right, then the window itself is recomputed outright.
    pub fn recompute_after_grow(&mut self, px: &PixelBuffer, seam: &VerticalSeam) {
        let (w, h) = (px.width(), px.height());
        for y in 1..h.saturating_sub(1) {
            let (x_start, x_end) = Self::seam_window(seam, y, w);
            for x in (x_end..=w - 2).rev() {
                self.map[(x, y)] = self.map[(x - 1, y)];
            }
            for x in x_start..x_end {
                self.map[(x, y)] = Self::sobel(px, x, y);
            }
        }
        self.extrapolate_borders(w, h);
    }

    // The border rows and columns cannot host a full 3×3 kernel; the
    // nearest interior value stands in for them.  Columns first, then
    // rows, so the corners end up with row-extrapolated values.
    fn extrapolate_borders(&mut self, w: u32, h: u32) {
        if w >= 2 {
            for y in 0..h {
                self.map[(0, y)] = self.map[(1, y)];
                self.map[(w - 1, y)] = self.map[(w - 2, y)];
            }
        }
        if h >= 2 {
            for x in 0..w {
                self.map[(x, 0)] = self.map[(x, 1)];
                self.map[(x, h - 1)] = self.map[(x, h - 2)];
            }
        }
    }
}

#[cfg(test)]
impl EnergyMap {
    // Test helper: build a map directly from row-major values.
    pub(crate) fn from_raw(width: u32, height: u32, values: &[i32]) -> Self {
        let mut energy = EnergyMap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                energy.map[(x, y)] = values[(y * width + x) as usize];
            }
        }
        energy
    }

    // Test helper: the logically valid region as a row-major vector.
    pub(crate) fn to_raw(&self, width: u32, height: u32) -> Vec<i32> {
        let mut out = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                out.push(self.map[(x, y)]);
            }
        }
        out
    }
}
