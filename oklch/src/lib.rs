// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_oklch
//!
//! Color science and lexical scanning for CSS color literals embedded in free-form
//! text. The crate has three layers, leaf first:
//!
//! 1. [`color_space`]: pure numeric conversions between sRGB, linear sRGB, OKLab,
//!    OKLCH and HSL, hex encoding and an sRGB gamut test.
//! 2. [`scanner`]: finds `oklch()`, `oklab()`, `rgb()`/`rgba()`, `hsl()`/`hsla()`,
//!    hex and named color literals in any text (CSS, SCSS, JSX, Markdown, ...),
//!    without parsing the surrounding language, and normalizes every one of them to
//!    an OKLCH + alpha [`CssColorMatch`].
//! 3. [`contrast`]: APCA (Lc) and WCAG 2.x contrast between two sRGB colors, and
//!    their mapping to usability labels and conformance levels.
//!
//! On top of those, [`format`] serializes colors back to `oklch()` text (the output
//! is always re-parseable by the scanner), and [`derive`] computes relative colors
//! (lighter, darker, desaturated, hue shifted) and the text lightness needed to hit a
//! target APCA contrast.
//!
//! ```text
//! text + offset ──▶ scanner ──▶ CssColorMatch ──▶ color_space ──▶ SrgbColor
//!                                                                   │
//!                                      contrast ◀── SrgbColor pair ◀┘
//! ```
//!
//! The [`cli`] module backs the `oklch` binary, and [`log`] sets up [`tracing`]
//! output for it (the library itself only emits events).
//!
//! The color, scanner and contrast APIs are synchronous and side effect free. The only
//! shared state is the set of scanner regexes (named color matcher included), built
//! once on first use and read-only after that.
//!
//! # Example
//!
//! ```
//! use r3bl_oklch::{CssColorFormat, find_color_at_offset, oklch_to_hex};
//!
//! let text = "body { color: oklch(0.7 0.15 180); }";
//! let offset = text.find("oklch").unwrap();
//! let it = find_color_at_offset(text, offset).unwrap();
//! assert_eq!(it.original_format, CssColorFormat::Oklch);
//! assert_eq!(&text[it.start_offset..it.end_offset], "oklch(0.7 0.15 180)");
//! assert_eq!(oklch_to_hex(it.color).len(), 7);
//! ```
//!
//! Offsets are character (not byte) indices into the text that was scanned.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod cli;
pub mod color_space;
pub mod common;
pub mod contrast;
pub mod decl_macros;
pub mod derive;
pub mod format;
pub mod log;
pub mod scanner;

// Re-export.
pub use cli::*;
pub use color_space::*;
pub use common::*;
pub use contrast::*;
pub use derive::*;
pub use format::*;
pub use log::*;
pub use scanner::*;
