// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{HueFormat, NumberFormat, OklchFormatOptions};
use crate::{CHROMA_PERCENT_REFERENCE, OklchColor, round_to_string};

/// Decimal places for `L` and `C` as plain numbers.
pub const LC_DECIMALS: usize = 4;
/// Decimal places for `H`, alpha, and for percentages.
pub const H_ALPHA_DECIMALS: usize = 2;

/// Prints `color` as an `oklch()` literal, eg: `oklch(0.7 0.15 180 / 0.5)`.
///
/// | Channel | `number`           | `percentage` / `deg`          |
/// |---------|--------------------|-------------------------------|
/// | `L`     | 4 decimals         | `L × 100`, 2 decimals, `%`    |
/// | `C`     | 4 decimals         | `C / 0.4 × 100`, 2 decimals, `%` |
/// | `H`     | 2 decimals         | 2 decimals, `deg`             |
/// | alpha   | 2 decimals         | `alpha × 100`, integer, `%`   |
///
/// The alpha term is left out when `alpha >= 1`. Numbers are printed in their
/// shortest form (`0.7`, not `0.7000`). The output can always be scanned back with
/// [`crate::find_all_oklch_colors`].
///
/// ```
/// use r3bl_oklch::{OklchColor, OklchFormatOptions, format_oklch};
///
/// let it = OklchColor::new(0.700_04, 0.15, 180.0);
/// assert_eq!(format_oklch(it, 1.0, &OklchFormatOptions::default()), "oklch(0.7 0.15 180)");
/// assert_eq!(
///     format_oklch(it, 0.5, &OklchFormatOptions::default()),
///     "oklch(0.7 0.15 180 / 0.5)"
/// );
/// ```
#[must_use]
pub fn format_oklch(color: OklchColor, alpha: f64, options: &OklchFormatOptions) -> String {
    let l = match options.lightness_format {
        NumberFormat::Number => round_to_string(color.l, LC_DECIMALS),
        NumberFormat::Percentage => {
            format!("{}%", round_to_string(color.l * 100.0, H_ALPHA_DECIMALS))
        }
    };

    let c = match options.chroma_format {
        NumberFormat::Number => round_to_string(color.c, LC_DECIMALS),
        NumberFormat::Percentage => format!(
            "{}%",
            round_to_string(color.c / CHROMA_PERCENT_REFERENCE * 100.0, H_ALPHA_DECIMALS)
        ),
    };

    let h = round_to_string(color.h, H_ALPHA_DECIMALS);
    let h = match options.hue_format {
        HueFormat::Number => h,
        HueFormat::Deg => format!("{h}deg"),
    };

    if alpha < 1.0 {
        let a = match options.alpha_format {
            NumberFormat::Number => round_to_string(alpha, H_ALPHA_DECIMALS),
            NumberFormat::Percentage => format!("{}%", round_to_string(alpha * 100.0, 0)),
        };
        format!("oklch({l} {c} {h} / {a})")
    } else {
        format!("oklch({l} {c} {h})")
    }
}
