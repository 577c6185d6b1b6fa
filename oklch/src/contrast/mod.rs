// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Two independent contrast metrics over pairs of [`SrgbColor`](crate::SrgbColor)s:
//!
//! - [`compute_apca`]: APCA lightness contrast (Lc), signed by polarity, with
//!   [`apca_description`] to bucket it into usage labels.
//! - [`compute_wcag`]: WCAG 2.x contrast ratio, symmetric, in `[1, 21]`, with
//!   [`wcag_level`] for AA / AAA conformance.
//!
//! Note that the two metrics linearize sRGB differently. APCA uses a plain `2.4`
//! power curve, WCAG the piecewise sRGB transfer function.

// Attach.
mod apca;
mod wcag;

// Re-export.
pub use apca::*;
pub use wcag::*;
