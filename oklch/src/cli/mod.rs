// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything behind the `oklch` binary: argument parsing with [`clap`], color
//! arguments, and the subcommands, which return their output as a `String` so they can
//! be tested without capturing stdout.

// Attach.
mod clap_config;
mod color_arg;
mod commands;

// Re-export.
pub use clap_config::*;
pub use color_arg::*;
pub use commands::*;
