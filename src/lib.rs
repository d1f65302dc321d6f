// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! PRODKIT - Music production toolkit.
//!
//! A library of small tools for producers and songwriters: key and
//! scale detection, a piano chord reference, chord progression
//! generation, tap tempo, vocal range classification, rhyme lookup,
//! song structure planning, and an EQ frequency chart.
//!
//! Every tool is a pure function or a small state object; the only
//! nondeterminism (progression picking) and the only clock (tap tempo)
//! are injected by the caller.

pub mod analysis;
pub mod arrangement;
pub mod error;
pub mod generators;
pub mod lyrics;
pub mod mixing;
pub mod music;
pub mod timing;
pub mod vocal;

pub use error::ToolError;
