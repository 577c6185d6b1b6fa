// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Serializes colors back to `oklch()` text. Everything printed here scans back to
//! the same color, within rounding.

// Attach.
mod color_presentation;
mod format_oklch;
mod format_options;

// Re-export.
pub use color_presentation::*;
pub use format_oklch::*;
pub use format_options::*;
