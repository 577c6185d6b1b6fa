// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derived colors: lighter, darker, desaturated or hue shifted variants of a base
//! color, as values and as CSS relative color expressions
//! (`oklch(from var(--base) ...)`).
//!
//! - [`RelativeTransform`] holds the per channel adjustments.
//! - [`DerivePreset`] builds common ones (readable text, subtle background, border,
//!   complementary).
//! - [`find_accessible_text_lightness`] searches the text lightness that reaches a
//!   target APCA contrast on the base color.
//!
//! Only generating relative color expressions is supported. The scanner still skips
//! them when they show up in text.

// Attach.
mod accessible_text;
mod derive_preset;
mod relative_transform;

// Re-export.
pub use accessible_text::*;
pub use derive_preset::*;
pub use relative_transform::*;
