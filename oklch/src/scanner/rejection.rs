// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

/// Why a span that looks like a color literal was not turned into a match. These are
/// never surfaced to callers (a rejected candidate is simply skipped), they only show
/// up in `trace` level logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Rejection {
    /// `oklch(from var(--x) l c h)` and friends.
    RelativeColorSyntax,
    TooManySlashes,
    WrongChannelCount,
    BadNumericToken,
    BadAlpha,
    /// Hex digit count other than 3, 4, 6 or 8.
    BadHexLength,
    /// `abc#fff`, `--x#fff`: the `#` is part of a longer identifier.
    IdentifierBeforeHex,
    /// `--red`, `dark-red`: part of a custom property or hyphenated identifier.
    DashBeforeName,
    /// `red(`: looks like a function call.
    ParenAfterName,
    UnknownName,
}

/// Result of decoding one candidate literal.
pub type DecodeResult<T> = Result<T, Rejection>;
