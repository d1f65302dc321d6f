// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale and mode catalog.
//!
//! Eight diatonic modes with their interval patterns. Catalog order
//! matters: key detection scans modes in declaration order and keeps
//! the first best-scoring candidate, so reordering changes tie-breaks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::{Note, Semitones};
use crate::error::ToolError;

/// Scale modes supported by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian, // same intervals as Minor, kept as a separate catalog entry
    Locrian,
}

impl ScaleType {
    /// All modes in catalog order
    pub const ALL: [ScaleType; 8] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
    ];

    /// Get the intervals (semitones from root) for this mode
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => [0, 2, 3, 5, 7, 8, 10],
            ScaleType::Dorian => [0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => [0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            ScaleType::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            ScaleType::Locrian => [0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// Parse mode from string
    pub fn parse(s: &str) -> Result<Self, ToolError> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "major" | "ionian" => Ok(ScaleType::Major),
            "minor" => Ok(ScaleType::Minor),
            "dorian" => Ok(ScaleType::Dorian),
            "phrygian" => Ok(ScaleType::Phrygian),
            "lydian" => Ok(ScaleType::Lydian),
            "mixolydian" => Ok(ScaleType::Mixolydian),
            "aeolian" => Ok(ScaleType::Aeolian),
            "locrian" => Ok(ScaleType::Locrian),
            _ => Err(ToolError::UnknownScale(s.trim().to_string())),
        }
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Aeolian => "Aeolian",
            ScaleType::Locrian => "Locrian",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A complete scale with root and mode
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: Note,
    scale_type: ScaleType,
    notes: [Note; 7],
}

impl Scale {
    /// Create a new scale from root and mode
    pub fn new(root: Note, scale_type: ScaleType) -> Self {
        let intervals = scale_type.intervals();
        let mut notes = [root; 7];
        for (slot, &i) in notes.iter_mut().zip(intervals.iter()) {
            *slot = root.transpose(i as Semitones);
        }

        Self {
            root,
            scale_type,
            notes,
        }
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the mode
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Get the notes in this scale
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Check if a note is in this scale
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Get the scale degree (1-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: Note) -> Option<usize> {
        self.notes.iter().position(|&n| n == note).map(|i| i + 1)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type)
    }
}
