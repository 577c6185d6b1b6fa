// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_oklch::{CLIArg, CommonResult, DisplayPreference, TracingConfig, WriterConfig,
                 try_initialize_logging_global, try_run_command};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        // Stdout carries the command output, so logs go to stderr.
        try_initialize_logging_global(TracingConfig {
            level_filter: tracing_core::LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
        })?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let output = try_run_command(&cli_arg)?;
    println!("{output}");

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}
