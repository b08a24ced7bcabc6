// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative cost table.
//!
//! Bellman's optimality principle, row by row: the cheapest path from
//! the top of the image to a pixel costs that pixel's own energy plus
//! the cheapest of the three paths that can reach it from the row
//! above.  The table is rebuilt in full after every seam edit; that
//! pass is linear in the image area, which the engine accepts in
//! exchange for keeping the windowed energy update simple.

use crate::cq;
use crate::energy::EnergyMap;
use crate::gridmap::GridMap;

/// Minimum accumulated importance of any top-to-bottom path ending at
/// each pixel, logically valid for the working image's current size.
#[derive(Debug)]
pub struct FlowMap {
    map: GridMap<i32>,
}

impl FlowMap {
    pub fn new(cap_width: u32, cap_height: u32) -> Self {
        FlowMap {
            map: GridMap::new(cap_width, cap_height),
        }
    }

    /// The accumulated cost at one pixel.
    pub fn get(&self, x: u32, y: u32) -> i32 {
        self.map[(x, y)]
    }

    /// Rebuild the whole table from the energy map over the logical
    /// `w × h` region.
    pub fn rebuild(&mut self, energy: &EnergyMap, w: u32, h: u32) {
        // The first row has no paths above it.
        for x in 0..w {
            self.map[(x, 0)] = energy.get(x, 0);
        }

        for y in 1..h {
            // Left edge: only "up" and "up-right" exist.
            let above = cq!(
                w > 1,
                self.map[(0, y - 1)].min(self.map[(1, y - 1)]),
                self.map[(0, y - 1)]
            );
            self.map[(0, y)] = energy.get(0, y) + above;

            for x in 1..w.saturating_sub(1) {
                let above = self.map[(x - 1, y - 1)]
                    .min(self.map[(x, y - 1)])
                    .min(self.map[(x + 1, y - 1)]);
                self.map[(x, y)] = energy.get(x, y) + above;
            }

            // Right edge: only "up-left" and "up".
            if w > 1 {
                let x = w - 1;
                let above = self.map[(x - 1, y - 1)].min(self.map[(x, y - 1)]);
                self.map[(x, y)] = energy.get(x, y) + above;
            }
        }
    }
}

#[cfg(test)]
impl FlowMap {
    // Test helper: build a flow table directly from row-major values.
    pub(crate) fn from_raw(width: u32, height: u32, values: &[i32]) -> Self {
        let mut flow = FlowMap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                flow.map[(x, y)] = values[(y * width + x) as usize];
            }
        }
        flow
    }
}
