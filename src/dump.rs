// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render the energy map as a picture.
//!
//! A debugging aid: scale the valid region of the map against its
//! maximum and write it out as an 8-bit graymap, bright where the
//! image fights back against carving.

use image::GrayImage;
use itertools::iproduct;
use num_traits::{clamp, NumCast};

use crate::energy::EnergyMap;

/// Normalize the logically valid `w × h` region of the energy map into
/// an 8-bit grayscale image.
pub fn energy_to_image(energy: &EnergyMap, w: u32, h: u32) -> GrayImage {
    // A flat map (a uniform image) normalizes against 1 instead of
    // dividing by zero.
    let factor = iproduct!(0..h, 0..w)
        .map(|(y, x)| energy.get(x, y))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut out = Vec::with_capacity(w as usize * h as usize);
    for (y, x) in iproduct!(0..h, 0..w) {
        let scaled = <i64 as From<_>>::from(energy.get(x, y)) * 255 / <i64 as From<_>>::from(factor);
        let value: u8 = NumCast::from(clamp(scaled, 0, 255)).unwrap();
        out.push(value);
    }
    GrayImage::from_raw(w, h, out).expect("graymap buffer matches its dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_against_the_maximum() {
        let energy = EnergyMap::from_raw(3, 1, &[0, 100, 200]);
        let img = energy_to_image(&energy, 3, 1);
        assert_eq!(img.into_raw(), vec![0, 127, 255]);
    }

    #[test]
    fn a_flat_map_stays_black() {
        let energy = EnergyMap::from_raw(2, 2, &[0, 0, 0, 0]);
        let img = energy_to_image(&energy, 2, 2);
        assert_eq!(img.into_raw(), vec![0; 4]);
    }

    #[test]
    fn ignores_stale_columns_past_the_logical_width() {
        let energy = EnergyMap::from_raw(3, 2, &[8, 4, 9999, 0, 8, 9999]);
        let img = energy_to_image(&energy, 2, 2);
        assert_eq!(img.into_raw(), vec![255, 127, 0, 255]);
    }
}
