// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the toolkit.
//!
//! Two families: validation errors (the caller supplied out-of-contract
//! input, caught before any computation) and no-match results (the input
//! was well-formed but the domain has no confident answer). Everything
//! is recoverable at the call site and rendered as a user-facing message.

use thiserror::Error;

/// Errors surfaced by the toolkit's operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    // --- validation ---
    /// Key detection needs more distinct notes
    #[error("select at least {needed} notes ({got} selected)")]
    InsufficientNotes { needed: usize, got: usize },

    /// Vocal range with highest not strictly above lowest
    #[error("highest note must be higher than lowest note")]
    RangeInverted,

    /// Progression catalog has no entries for this mode
    #[error("no progressions available for {0} (try major, minor, dorian, or mixolydian)")]
    UnsupportedMode(String),

    /// Rhyme lookup called with a blank word
    #[error("please enter a word")]
    EmptyWord,

    /// Unparseable note name
    #[error("unknown note: {0}")]
    InvalidNote(String),

    /// Unparseable pitch (note + octave)
    #[error("unknown pitch: {0} (expected e.g. C3 or F#4)")]
    InvalidPitch(String),

    /// Unknown scale/mode name
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    /// Unknown chord quality name
    #[error("unknown chord type: {0}")]
    UnknownChord(String),

    /// Unknown arrangement template name
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    // --- no confident match ---
    /// Detection ran but no candidate cleared the acceptance threshold
    #[error("could not determine key; try adding more notes")]
    NoKeyMatch,

    /// Word is not in the rhyme dictionary
    #[error("no rhymes found for \"{word}\"; try: {}", .suggestions.join(", "))]
    WordNotFound {
        word: String,
        suggestions: Vec<String>,
    },
}

impl ToolError {
    /// Whether this error was raised before any computation ran
    /// (as opposed to a computation that found no confident answer).
    pub fn is_validation(&self) -> bool {
        !matches!(self, ToolError::NoKeyMatch | ToolError::WordNotFound { .. })
    }
}
