// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use strum_macros::Display;

use crate::{DEFAULT_TARGET_LC, DerivePreset};

#[derive(Debug, Parser)]
#[command(bin_name = "oklch")]
#[command(about = "🎨 Find, convert and grade CSS colors in OKLCH")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to stderr (scan passes, rejected literals)"
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, short = 'j', help = "Print JSON instead of plain text")]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🔍 List every color literal in a file\n💡 Eg: `oklch scan styles.css`")]
    Scan {
        #[arg(value_name = "file")]
        file: PathBuf,
    },

    #[clap(
        about = "📍 Show the color literal under a character offset\n💡 Eg: `oklch at styles.css 120`"
    )]
    At {
        #[arg(value_name = "file")]
        file: PathBuf,
        #[arg(value_name = "offset", help = "Character (not byte) offset into the file")]
        offset: usize,
    },

    #[clap(
        about = "🔁 Convert any color literal to oklch and hex\n💡 Eg: `oklch convert '#ff6600'`"
    )]
    Convert {
        #[arg(value_name = "color")]
        color: String,
        #[arg(
            long,
            short = 'c',
            value_name = "json file",
            help = "Format options: lightnessFormat, chromaFormat, hueFormat, alphaFormat"
        )]
        config: Option<PathBuf>,
    },

    #[clap(
        about = "🌗 Grade text on a background with APCA and WCAG 2.x\n💡 Eg: `oklch contrast '#767676' white`"
    )]
    Contrast {
        #[arg(value_name = "text color")]
        text: String,
        #[arg(value_name = "background color")]
        bg: String,
        #[arg(long, help = "Large text (18pt, or 14pt bold) for the WCAG levels")]
        large: bool,
    },

    #[clap(
        about = "🧪 Derive a related color and its CSS relative color expression\n💡 Eg: `oklch derive 'oklch(0.6 0.2 300)' --preset border`"
    )]
    Derive {
        #[arg(value_name = "color")]
        color: String,
        #[arg(long, short = 'p', value_enum, default_value_t = PresetArg::AccessibleText)]
        preset: PresetArg,
        #[arg(
            long,
            default_value_t = DEFAULT_TARGET_LC,
            help = "APCA |Lc| that accessible text must reach"
        )]
        target_lc: f64,
        #[arg(
            long,
            default_value = "--base",
            allow_hyphen_values = true,
            help = "Custom property the CSS expression derives from"
        )]
        base_var: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PresetArg {
    #[clap(help = "Readable text on the color")]
    AccessibleText,
    #[clap(help = "A faint tint for hover or selected backgrounds")]
    SubtleBackground,
    #[clap(help = "A stronger step for outlines and dividers")]
    Border,
    #[clap(help = "Opposite hue")]
    Complementary,
}

impl PresetArg {
    #[must_use]
    pub fn to_preset(self, target_lc: f64) -> DerivePreset {
        match self {
            PresetArg::AccessibleText => DerivePreset::AccessibleText { target_lc },
            PresetArg::SubtleBackground => DerivePreset::SubtleBackground,
            PresetArg::Border => DerivePreset::Border,
            PresetArg::Complementary => DerivePreset::Complementary,
        }
    }
}
