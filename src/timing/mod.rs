// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Timing tools.
//!
//! Tap tempo measurement with injected timestamps.

pub mod tap;

pub use tap::{SessionState, TapSession, INACTIVITY_MS};
