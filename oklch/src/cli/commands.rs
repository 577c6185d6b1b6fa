// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One report type per subcommand. Each one serializes to JSON (`--json`) and
//! displays as plain text.

use std::{fmt::{Display, Formatter},
          path::Path};

use miette::{IntoDiagnostic, WrapErr};
use serde::Serialize;

use super::{CLIArg, CLICommand, PresetArg, parse_color_arg};
use crate::{CharOffsets, CommonResult, CssColorFormat, CssColorMatch, OklchColor,
            OklchFormatOptions, RelativeTransform, WcagLevel, apca_description,
            compute_apca, compute_wcag, find_all_colors, find_color_at_offset,
            find_property_context_before_byte, format_oklch, is_in_srgb_gamut, oklch_to_hex,
            oklch_to_srgb, round_to, wcag_level};

/// Runs the subcommand in `cli_arg` and returns what should be printed to stdout.
///
/// # Errors
///
/// If an input file or the format config can't be read, or a color argument is not
/// a single color literal.
pub fn try_run_command(cli_arg: &CLIArg) -> CommonResult<String> {
    // % is Display, ? is Debug.
    tracing::debug!(message = "run command", command = ?cli_arg.command);
    let json = cli_arg.global_options.json;

    match &cli_arg.command {
        CLICommand::Scan { file } => {
            let text = try_read_input(file)?;
            render(&scan_report(&text), json)
        }
        CLICommand::At { file, offset } => {
            let text = try_read_input(file)?;
            render(&at_report(&text, *offset), json)
        }
        CLICommand::Convert { color, config } => {
            let options = match config {
                Some(path) => OklchFormatOptions::try_load_from_file(path)?,
                None => OklchFormatOptions::default(),
            };
            render(&try_convert_report(color, &options)?, json)
        }
        CLICommand::Contrast { text, bg, large } => {
            render(&try_contrast_report(text, bg, *large)?, json)
        }
        CLICommand::Derive {
            color,
            preset,
            target_lc,
            base_var,
        } => render(
            &try_derive_report(color, *preset, *target_lc, base_var)?,
            json,
        ),
    }
}

fn try_read_input(file: &Path) -> CommonResult<String> {
    std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("📑 Could not read input file: '{}'", file.display()))
}

fn render<T: Serialize + Display>(report: &T, json: bool) -> CommonResult<String> {
    if json {
        serde_json::to_string_pretty(report).into_diagnostic()
    } else {
        Ok(report.to_string())
    }
}

/// One color literal found in a file.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorReport {
    pub start_offset: usize,
    pub end_offset: usize,
    pub literal: String,
    pub format: CssColorFormat,
    pub oklch: String,
    pub color: OklchColor,
    pub alpha: f64,
    pub hex: String,
    pub in_gamut: bool,
    /// The CSS property (or custom property) the literal is the value of.
    pub property: Option<String>,
}

impl ColorReport {
    fn new(text: &str, offsets: &CharOffsets, it: CssColorMatch) -> Self {
        Self {
            start_offset: it.start_offset,
            end_offset: it.end_offset,
            literal: offsets
                .slice(text, it.start_offset, it.end_offset)
                .unwrap_or_default()
                .to_string(),
            format: it.original_format,
            oklch: format_oklch(it.color, it.alpha, &OklchFormatOptions::default()),
            color: it.color,
            alpha: it.alpha,
            hex: oklch_to_hex(it.color),
            in_gamut: is_in_srgb_gamut(it.color),
            property: offsets
                .char_to_byte(it.start_offset)
                .and_then(|byte_index| find_property_context_before_byte(text, byte_index)),
        }
    }
}

impl Display for ColorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}  {:<5}  {}  ->  {}  {}",
            self.start_offset, self.end_offset, self.format, self.literal, self.oklch, self.hex
        )?;
        if !self.in_gamut {
            write!(f, " (out of gamut)")?;
        }
        if let Some(property) = &self.property {
            write!(f, "  [{property}]")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    pub colors: Vec<ColorReport>,
}

#[must_use]
pub fn scan_report(text: &str) -> ScanReport {
    let offsets = CharOffsets::new(text);
    ScanReport {
        colors: find_all_colors(text)
            .into_iter()
            .map(|it| ColorReport::new(text, &offsets, it))
            .collect(),
    }
}

impl Display for ScanReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.colors.is_empty() {
            return write!(f, "no colors");
        }
        let lines: Vec<String> = self.colors.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AtReport {
    pub color: Option<ColorReport>,
}

#[must_use]
pub fn at_report(text: &str, offset: usize) -> AtReport {
    let offsets = CharOffsets::new(text);
    AtReport {
        color: find_color_at_offset(text, offset)
            .map(|it| ColorReport::new(text, &offsets, it)),
    }
}

impl Display for AtReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.color {
            Some(it) => write!(f, "{it}"),
            None => write!(f, "no color"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertReport {
    pub format: CssColorFormat,
    pub oklch: String,
    pub hex: String,
    pub alpha: f64,
    pub in_gamut: bool,
}

/// # Errors
///
/// If `color` is not a single color literal.
pub fn try_convert_report(
    color: &str,
    options: &OklchFormatOptions,
) -> CommonResult<ConvertReport> {
    let it = parse_color_arg(color)?;
    Ok(ConvertReport {
        format: it.original_format,
        oklch: format_oklch(it.color, it.alpha, options),
        hex: oklch_to_hex(it.color),
        alpha: it.alpha,
        in_gamut: is_in_srgb_gamut(it.color),
    })
}

impl Display for ConvertReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "format:   {}", self.format)?;
        writeln!(f, "oklch:    {}", self.oklch)?;
        writeln!(f, "hex:      {}", self.hex)?;
        write!(f, "in gamut: {}", yes_no(self.in_gamut))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub text_hex: String,
    pub bg_hex: String,
    /// Rounded to 1 decimal. Negative for light text on a dark background.
    pub apca_lc: f64,
    pub apca_description: &'static str,
    /// Rounded to 2 decimals.
    pub wcag_ratio: f64,
    pub wcag: WcagLevel,
    pub large_text: bool,
}

/// Alpha is ignored: both colors are graded as if they were opaque.
///
/// # Errors
///
/// If `text` or `bg` is not a single color literal.
pub fn try_contrast_report(text: &str, bg: &str, large_text: bool) -> CommonResult<ContrastReport> {
    let text = parse_color_arg(text)?.color;
    let bg = parse_color_arg(bg)?.color;
    let text_srgb = oklch_to_srgb(text).clamped();
    let bg_srgb = oklch_to_srgb(bg).clamped();

    let lc = compute_apca(text_srgb, bg_srgb);
    let ratio = compute_wcag(text_srgb, bg_srgb);

    Ok(ContrastReport {
        text_hex: oklch_to_hex(text),
        bg_hex: oklch_to_hex(bg),
        apca_lc: round_to(lc, 1),
        apca_description: apca_description(lc),
        wcag_ratio: round_to(ratio, 2),
        wcag: wcag_level(ratio, large_text),
        large_text,
    })
}

impl Display for ContrastReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} on {}", self.text_hex, self.bg_hex)?;
        writeln!(f, "APCA Lc:  {} ({})", self.apca_lc, self.apca_description)?;
        write!(
            f,
            "WCAG:     {}:1  AA {}  AAA {}{}",
            self.wcag_ratio,
            yes_no(self.wcag.aa),
            yes_no(self.wcag.aaa),
            if self.large_text { "  (large text)" } else { "" }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveReport {
    pub preset: PresetArg,
    pub base: String,
    pub derived: String,
    pub hex: String,
    pub css_expression: String,
    pub transform: RelativeTransform,
}

/// The derived color keeps the alpha of `color`.
///
/// # Errors
///
/// If `color` is not a single color literal.
pub fn try_derive_report(
    color: &str,
    preset: PresetArg,
    target_lc: f64,
    base_var: &str,
) -> CommonResult<DeriveReport> {
    let base = parse_color_arg(color)?;
    let transform = RelativeTransform::from_preset(preset.to_preset(target_lc), base.color);
    let derived = transform.apply(base.color);
    let options = OklchFormatOptions::default();

    Ok(DeriveReport {
        preset,
        base: format_oklch(base.color, base.alpha, &options),
        derived: format_oklch(derived, base.alpha, &options),
        hex: oklch_to_hex(derived),
        css_expression: transform.to_css_expression(base_var),
        transform,
    })
}

impl Display for DeriveReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {} -> {} {}", self.preset, self.base, self.derived, self.hex)?;
        write!(f, "css:  {}", self.css_expression)
    }
}

fn yes_no(it: bool) -> &'static str { if it { "yes" } else { "no" } }

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{GlobalOption, assert_eq2};

    const CSS: &str = ".card {\n  color: oklch(0.7 0.15 180);\n  border-color: #ff000080;\n}\n";

    fn write_temp_css() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSS.as_bytes()).unwrap();
        file
    }

    fn cli_arg(command: CLICommand, json: bool) -> CLIArg {
        CLIArg {
            command,
            global_options: GlobalOption {
                enable_logging: false,
                json,
            },
        }
    }

    #[test]
    fn test_scan_report() {
        let it = scan_report(CSS);
        assert_eq2!(it.colors.len(), 2);

        let first = &it.colors[0];
        assert_eq2!(first.literal, "oklch(0.7 0.15 180)");
        assert_eq2!(first.format, CssColorFormat::Oklch);
        assert_eq2!(first.oklch, "oklch(0.7 0.15 180)");
        assert_eq2!(first.property.as_deref(), Some("color"));

        let second = &it.colors[1];
        assert_eq2!(second.literal, "#ff000080");
        assert_eq2!(second.hex, "#ff0000");
        assert_eq2!(second.property.as_deref(), Some("border-color"));

        assert_eq2!(scan_report("nothing here").to_string(), "no colors");
    }

    #[test]
    fn test_at_report() {
        let offset = CSS.find("#ff").unwrap() + 2;
        let it = at_report(CSS, offset);
        assert_eq2!(it.color.unwrap().format, CssColorFormat::Hex);

        let it = at_report(CSS, 0);
        assert_eq2!(it.to_string(), "no color");
        assert_eq2!(serde_json::to_string(&it).unwrap(), "null");
    }

    #[test]
    fn test_convert_report() {
        let it = try_convert_report("#ff0000", &OklchFormatOptions::default()).unwrap();
        assert_eq2!(it.oklch, "oklch(0.628 0.2577 29.23)");
        assert_eq2!(it.hex, "#ff0000");
        assert!(it.in_gamut);
        assert_eq2!(
            it.to_string(),
            "format:   hex\noklch:    oklch(0.628 0.2577 29.23)\nhex:      #ff0000\nin gamut: yes"
        );

        let out = try_convert_report("oklch(0.7 0.4 150)", &OklchFormatOptions::default())
            .unwrap();
        assert!(!out.in_gamut);

        assert!(try_convert_report("banana", &OklchFormatOptions::default()).is_err());
    }

    #[test]
    fn test_contrast_report() {
        let it = try_contrast_report("#767676", "white", false).unwrap();
        assert_eq2!(it.wcag_ratio, 4.54);
        assert_eq2!(it.wcag, WcagLevel { aa: true, aaa: false });
        assert_eq2!(it.apca_lc, 71.6);
        assert_eq2!(it.apca_description, "Content text / 16px bold");

        let reverse = try_contrast_report("white", "black", true).unwrap();
        assert_eq2!(reverse.apca_lc, -107.9);
        assert_eq2!(reverse.wcag, WcagLevel { aa: true, aaa: true });
    }

    #[test]
    fn test_derive_report() {
        let it =
            try_derive_report("oklch(0.9 0.1 120)", PresetArg::Border, 75.0, "--brand").unwrap();
        assert_eq2!(it.derived, "oklch(0.75 0.07 120)");
        assert_eq2!(
            it.css_expression,
            "oklch(from var(--brand) calc(l - 0.15) calc(c * 0.70) h)"
        );
        assert!(it.to_string().starts_with("border: "));
    }

    #[test]
    fn test_try_run_command_scan_json() {
        let file = write_temp_css();
        let output = try_run_command(&cli_arg(
            CLICommand::Scan {
                file: file.path().to_path_buf(),
            },
            true,
        ))
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let colors = value.as_array().unwrap();
        assert_eq2!(colors.len(), 2);
        assert_eq2!(colors[1]["format"], "hex");
        assert!(colors[1]["alpha"].as_f64().unwrap() > 0.5);
        assert_eq2!(colors[0]["startOffset"], CSS.find("oklch").unwrap());
    }

    #[test]
    fn test_try_run_command_missing_file() {
        let result = try_run_command(&cli_arg(
            CLICommand::At {
                file: "/definitely/not/here.css".into(),
                offset: 0,
            },
            false,
        ));
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Could not read input file"), "{message}");
    }

    #[test]
    fn test_try_run_command_convert_with_config() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        config
            .write_all(br#"{ "lightnessFormat": "percentage", "hueFormat": "deg" }"#)
            .unwrap();

        let output = try_run_command(&cli_arg(
            CLICommand::Convert {
                color: "oklch(0.7 0.15 180)".to_string(),
                config: Some(config.path().to_path_buf()),
            },
            false,
        ))
        .unwrap();
        assert!(output.contains("oklch(70% 0.15 180deg)"), "{output}");
    }
}
