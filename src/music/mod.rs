// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives shared by all tools.
//!
//! This module provides the chromatic note table, scale/mode catalog,
//! and chord construction that the analysis and generation tools
//! build on.

pub mod chord;
pub mod note;
pub mod scale;

pub use chord::{Chord, ChordQuality};
pub use note::{Note, Pitch, Semitones};
pub use scale::{Scale, ScaleType};
