// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam extraction.
//!
//! Given a freshly rebuilt flow map, walk from the cheapest cell in
//! the bottom row back up to the top, one row at a time, always moving
//! to a strictly cheaper neighbor when one exists.

use crate::flowmap::FlowMap;
use crate::seam::VerticalSeam;

/// Extract the lowest-cost vertical seam from the flow map.
///
/// Ties on the bottom row go to the lowest x, because the scan only
/// replaces its candidate on a strict improvement.  On the walk upward
/// the order of preference is the same column, then its left neighbor,
/// then its right neighbor, again with strict comparisons.  That
/// ordering is part of the engine's observable behavior: it is what
/// makes repeated runs pick identical seams.  The seam's colors are
/// not populated here; the pixel buffer captures them at removal time.
pub fn find_seam(flow: &FlowMap, width: u32, height: u32) -> VerticalSeam {
    let mut seam = VerticalSeam::new(height);
    let bottom = height - 1;

    let mut min_val = i32::max_value();
    for x in 0..width {
        if flow.get(x, bottom) < min_val {
            min_val = flow.get(x, bottom);
            seam.positions[bottom as usize] = x;
        }
    }

    for y in (0..bottom).rev() {
        let start_x = seam.positions[(y + 1) as usize];
        let mut min_val = flow.get(start_x, y);
        seam.positions[y as usize] = start_x;

        if start_x > 0 && flow.get(start_x - 1, y) < min_val {
            min_val = flow.get(start_x - 1, y);
            seam.positions[y as usize] = start_x - 1;
        }
        if start_x < width - 1 && flow.get(start_x + 1, y) < min_val {
            seam.positions[y as usize] = start_x + 1;
        }
    }

    seam
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(seam: &VerticalSeam) -> bool {
        seam.positions
            .windows(2)
            .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1)
    }

    #[test]
    fn flat_bottom_row_takes_the_first_minimum() {
        let flow = FlowMap::from_raw(3, 1, &[5, 5, 5]);
        let seam = find_seam(&flow, 3, 1);
        assert_eq!(seam.positions, vec![0]);
    }

    #[test]
    fn prefers_staying_in_the_same_column_on_a_tie() {
        let flow = FlowMap::from_raw(
            3,
            2,
            &[
                0, 0, 0, //
                7, 7, 7,
            ],
        );
        let seam = find_seam(&flow, 3, 2);
        // Bottom row starts at x = 0; neither neighbor above is
        // strictly cheaper, so the seam stays put.
        assert_eq!(seam.positions, vec![0, 0]);
    }

    #[test]
    fn prefers_the_left_neighbor_over_an_equal_right_one() {
        let flow = FlowMap::from_raw(
            3,
            2,
            &[
                3, 5, 3, //
                9, 1, 9,
            ],
        );
        let seam = find_seam(&flow, 3, 2);
        assert_eq!(seam.positions, vec![0, 1]);
    }

    #[test]
    fn takes_the_right_neighbor_only_when_strictly_cheapest() {
        let flow = FlowMap::from_raw(
            3,
            2,
            &[
                5, 4, 2, //
                9, 1, 9,
            ],
        );
        let seam = find_seam(&flow, 3, 2);
        assert_eq!(seam.positions, vec![2, 1]);
    }

    #[test]
    fn walks_a_longer_table_and_stays_connected() {
        // The flow table from the energy fixture in flowmap.rs.
        let flow = FlowMap::from_raw(
            5,
            4,
            &[
                9, 9, 0, 9, 9, //
                18, 1, 9, 8, 18, //
                10, 10, 10, 17, 8, //
                19, 19, 19, 8, 17,
            ],
        );
        let seam = find_seam(&flow, 5, 4);
        assert_eq!(seam.positions, vec![2, 3, 4, 3]);
        assert!(connected(&seam));
    }
}
