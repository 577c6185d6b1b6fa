// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! The color conversion, scanning and contrast functions never fail. Only the edges of
//! the crate (loading format configuration, reading files, parsing CLI arguments)
//! return [`CommonResult`].

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// Works hand in hand w/ the typed [`miette::Diagnostic`] errors in this crate, eg:
/// [`crate::OklchConfigError`] and [`crate::ColorArgError`].
pub type CommonResult<T> = miette::Result<T>;
