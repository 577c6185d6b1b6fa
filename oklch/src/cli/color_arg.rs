// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

use crate::{CommonResult, CssColorMatch, find_all_colors};

pub mod color_arg_error {
    use super::Diagnostic;

    #[derive(thiserror::Error, Debug, Diagnostic, PartialEq, Eq)]
    pub enum ColorArgError {
        #[error("🎨 '{arg}' is not a color")]
        #[diagnostic(
            code(r3bl_oklch::cli::not_a_color),
            help(
                "Use oklch(), oklab(), rgb(), rgba(), hsl(), hsla(), #hex or a CSS \
                 color name, eg: 'oklch(0.7 0.15 180)' or '#ff6600'"
            )
        )]
        NotAColor { arg: String },

        #[error("✂️ '{arg}' has extra text after the color: '{trailing}'")]
        #[diagnostic(
            code(r3bl_oklch::cli::trailing_text),
            help("Pass a single color literal, quoted if it has spaces")
        )]
        TrailingText { arg: String, trailing: String },
    }
}
pub use color_arg_error::ColorArgError;

/// Parses a command line argument that must be exactly one color literal (surrounding
/// whitespace is ignored). The offsets of the returned match are relative to the
/// trimmed argument.
///
/// # Errors
///
/// - [`ColorArgError::NotAColor`] if no color literal starts the argument.
/// - [`ColorArgError::TrailingText`] if one does, but does not span all of it.
pub fn parse_color_arg(arg: &str) -> CommonResult<CssColorMatch> {
    let trimmed = arg.trim();
    let char_count = trimmed.chars().count();

    match find_all_colors(trimmed)
        .into_iter()
        .find(|it| it.start_offset == 0)
    {
        Some(it) if it.end_offset == char_count => Ok(it),
        Some(it) => Err(ColorArgError::TrailingText {
            arg: arg.to_string(),
            trailing: trimmed.chars().skip(it.end_offset).collect(),
        }
        .into()),
        None => Err(ColorArgError::NotAColor {
            arg: arg.to_string(),
        }
        .into()),
    }
}
