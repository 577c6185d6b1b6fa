// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! How [`crate::format_oklch`] prints each channel. The options are plain data that
//! can be loaded from JSON, with the same camelCase keys that editor settings use:
//!
//! ```json
//! {
//!   "lightnessFormat": "percentage",
//!   "chromaFormat": "number",
//!   "hueFormat": "deg",
//!   "alphaFormat": "percentage"
//! }
//! ```
//!
//! Missing keys fall back to [`OklchFormatOptions::default`].

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::CommonResult;

/// For lightness, chroma and alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NumberFormat {
    #[default]
    Number,
    Percentage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HueFormat {
    #[default]
    Number,
    Deg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OklchFormatOptions {
    pub lightness_format: NumberFormat,
    pub chroma_format: NumberFormat,
    pub hue_format: HueFormat,
    pub alpha_format: NumberFormat,
}

pub mod oklch_config_error {
    use super::{Diagnostic, PathBuf};

    #[derive(thiserror::Error, Debug, Diagnostic)]
    pub enum OklchConfigError {
        #[error("📑 Could not read format config file: '{path}'")]
        #[diagnostic(
            code(r3bl_oklch::config::read_file),
            help("Check that the file exists and is readable")
        )]
        ReadFile {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },

        #[error("🔧 Could not parse format config JSON")]
        #[diagnostic(
            code(r3bl_oklch::config::parse_json),
            help(
                "Expected keys are lightnessFormat, chromaFormat, alphaFormat \
                 (\"number\" | \"percentage\") and hueFormat (\"number\" | \"deg\")"
            )
        )]
        ParseJson(#[source] serde_json::Error),
    }
}
pub use oklch_config_error::OklchConfigError;

impl OklchFormatOptions {
    /// # Errors
    ///
    /// Returns [`OklchConfigError::ParseJson`] if `json` is not an object with the
    /// expected keys and values.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let it = serde_json::from_str(json).map_err(OklchConfigError::ParseJson)?;
        Ok(it)
    }

    /// # Errors
    ///
    /// Returns [`OklchConfigError::ReadFile`] if the file can't be read, and
    /// [`OklchConfigError::ParseJson`] if its contents are not valid options.
    pub fn try_load_from_file(path: impl AsRef<Path>) -> CommonResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            OklchConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let it = Self::try_from_json_str(&json)?;
        tracing::debug!(message = "loaded format options", path = %path.display(), options = ?it);
        Ok(it)
    }
}
