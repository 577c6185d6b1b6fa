// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod common_math;
mod common_result;

// Re-export.
pub use common_math::*;
pub use common_result::*;
