// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reversible content-aware width resizing.
//!
//! Hand [`SeamCarver`] a decoded RGB image and it will repeatedly
//! carve out the vertical seam of least visual importance, remembering
//! every seam it takes so the removal can be undone exactly.  Energy
//! is recomputed incrementally in a narrow window around each edit;
//! the cumulative cost table is rebuilt in full each time.

mod ternary;

pub mod dump;
pub mod energy;
pub mod error;
pub mod flowmap;
pub mod gridmap;
pub mod pixelbuffer;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;

pub use crate::error::CarveError;
pub use crate::seamcarver::SeamCarver;
