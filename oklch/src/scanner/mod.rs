// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Finds CSS color literals in arbitrary text (CSS, SCSS, Less, JSX, Markdown, plain
//! prose) without parsing the surrounding language.
//!
//! # Syntaxes
//!
//! | Syntax                     | Example                          | Format  |
//! |----------------------------|----------------------------------|---------|
//! | `oklch()`                  | `oklch(0.7 0.15 180 / 50%)`      | `oklch` |
//! | `oklab()`                  | `oklab(0.5 0.1 -0.1)`            | `oklab` |
//! | `rgb()` / `rgba()`         | `rgba(255, 0, 0, 0.5)`           | `rgb`   |
//! | `hsl()` / `hsla()`         | `hsl(120deg 100% 50%)`           | `hsl`   |
//! | hex                        | `#f60`, `#ff660080`              | `hex`   |
//! | named                      | `rebeccapurple`                  | `named` |
//!
//! Every literal is decoded to an [`OklchColor`](crate::OklchColor) plus alpha, and
//! tagged with its character span and [`CssColorFormat`].
//!
//! # How it works
//!
//! Each syntax has its own pass. A [`regex`] locates candidates, and the numeric
//! tokens inside them are parsed with [`nom`] ([`NumericToken`]). A candidate that
//! does not decode is skipped (logged at `trace` level with its [`Rejection`]), never
//! reported as an error. Relative color syntax (`oklch(from ...)`) is not supported
//! and is always skipped.
//!
//! - [`find_color_at_offset`]: point query with a fixed priority between passes.
//! - [`find_all_colors`]: every literal, sorted by start offset.
//! - [`find_property_context`]: the property name a color is assigned to.

// Attach.
mod char_offsets;
mod color_args;
mod css_color_match;
mod named_colors;
mod numeric_token;
mod property_context;
mod rejection;
mod scan_api;
mod scan_functional;
mod scan_hex;
mod scan_named;
mod scan_oklch;

// Re-export.
pub use char_offsets::*;
pub use color_args::*;
pub use css_color_match::*;
pub use named_colors::*;
pub use numeric_token::*;
pub use property_context::*;
pub use rejection::*;
pub use scan_api::*;
pub use scan_functional::*;
pub use scan_hex::*;
pub(crate) use scan_named::*;
pub use scan_oklch::*;
