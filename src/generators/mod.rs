// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generative tools.
//!
//! Unlike the analysis tools these rely on randomness by design, so
//! every generator takes its `Rng` from the caller.

pub mod progression;

pub use progression::{catalog, pick, render, Progression, SUPPORTED_MODES};
