// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure numeric conversions between the color spaces this crate understands.
//!
//! This module provides:
//! - **Primitive types**: [`SrgbColor`], [`LinearSrgbColor`], [`OklabColor`],
//!   [`OklchColor`] and [`HslColor`], all `f64` based.
//! - **Conversion logic**: sRGB ↔ linear sRGB (piecewise transfer), linear sRGB ↔
//!   OKLab (Björn Ottosson's LMS matrices), OKLab ↔ OKLCH (polar form), HSL → sRGB.
//! - **Encoding**: OKLCH → `#rrggbb` and hex digit decoding.
//! - **Gamut test**: [`is_in_srgb_gamut`].
//!
//! None of these functions clamp their output. Values outside `[0, 1]` are how an out
//! of gamut color shows up, and clamping for display is left to the caller (see
//! [`SrgbColor::clamped`]).
//!
//! Reference: <https://bottosson.github.io/posts/oklab/>

// Attach.
mod color_types;
mod hex_color;
mod hsl_convert;
mod oklab_convert;
mod srgb_transfer;

// Re-export.
pub use color_types::*;
pub use hex_color::*;
pub use hsl_convert::*;
pub use oklab_convert::*;
pub use srgb_transfer::*;
