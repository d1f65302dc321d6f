// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord qualities and chord construction.
//!
//! Each quality is a fixed set of semitone offsets from the root. Built
//! chords keep template order (root first), preserving voicing intent
//! rather than sorting pitch-ascending.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::{Note, Semitones};
use crate::error::ToolError;

/// Chord qualities supported by the chord reference tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Major7,
    Minor7,
    Dominant7,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
}

impl ChordQuality {
    /// All qualities in catalog order
    pub const ALL: [ChordQuality; 9] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Dominant7,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
    ];

    /// Get the intervals (semitones from root) for this quality
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
        }
    }

    /// Parse quality from string (e.g., "major", "min7", "sus4")
    pub fn parse(s: &str) -> Result<Self, ToolError> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "major" | "maj" => Ok(ChordQuality::Major),
            "minor" | "min" => Ok(ChordQuality::Minor),
            "maj7" | "major7" => Ok(ChordQuality::Major7),
            "min7" | "minor7" => Ok(ChordQuality::Minor7),
            "dom7" | "7" => Ok(ChordQuality::Dominant7),
            "dim" | "diminished" => Ok(ChordQuality::Diminished),
            "aug" | "augmented" => Ok(ChordQuality::Augmented),
            "sus2" => Ok(ChordQuality::Sus2),
            "sus4" => Ok(ChordQuality::Sus4),
            _ => Err(ToolError::UnknownChord(s.trim().to_string())),
        }
    }

    /// Get a human-readable label for this quality
    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Major7 => "Major 7th",
            ChordQuality::Minor7 => "Minor 7th",
            ChordQuality::Dominant7 => "Dominant 7th",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::Augmented => "Augmented",
            ChordQuality::Sus2 => "Sus2",
            ChordQuality::Sus4 => "Sus4",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A chord: root note, quality, and realized note names
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    root: Note,
    quality: ChordQuality,
    notes: Vec<Note>,
}

impl Chord {
    /// Build a chord from root and quality.
    ///
    /// The result keeps template order: the root is always first.
    pub fn build(root: Note, quality: ChordQuality) -> Self {
        let notes = quality
            .intervals()
            .iter()
            .map(|&i| root.transpose(i as Semitones))
            .collect();

        Self {
            root,
            quality,
            notes,
        }
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the quality
    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Get the chord tones in template order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Check if a note is a chord tone
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}
