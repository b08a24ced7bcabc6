// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways an image can be refused.
//!
//! Every error here is fatal and surfaces synchronously from the call
//! that triggered it.  Out-of-range seam counts are deliberately *not*
//! errors; the engine clamps them to a no-op instead.

use failure::Fail;

/// What went wrong while handing a source image to the carver.
#[derive(Debug, Fail, PartialEq, Eq, Clone, Copy)]
pub enum CarveError {
    /// The supplied grid has no pixels at all.
    #[fail(display = "no source image supplied (zero-pixel grid)")]
    NullInput,

    /// The supplied grid does not match the engine's fixed capacity.
    #[fail(
        display = "source dimensions {}x{} do not match the engine's {}x{}",
        got_width, got_height, expected_width, expected_height
    )]
    DimensionMismatch {
        got_width: u32,
        got_height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    /// The supplied grid is not 8-bit RGB without alpha.
    #[fail(display = "unsupported pixel format, expected 8-bit RGB without alpha")]
    UnsupportedFormat,
}
