// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key and scale detection.
//!
//! Given a handful of pitch classes from a melody or chord progression,
//! find the (root, mode) pair whose scale contains the most of them.

use tracing::debug;

use crate::error::ToolError;
use crate::music::{Note, Scale, ScaleType};

/// Minimum distinct notes required before detection runs
pub const MIN_NOTES: usize = 3;

/// Minimum overlap a candidate must reach to be reported
pub const MIN_SCORE: usize = 3;

/// A detected key: root, mode, and how many input notes it covered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch {
    pub root: Note,
    pub scale_type: ScaleType,
    pub score: usize,
}

impl KeyMatch {
    /// The full scale for this match
    pub fn scale(&self) -> Scale {
        Scale::new(self.root, self.scale_type)
    }
}

/// Detect the best-matching key for a set of selected notes.
///
/// Scans all 12 roots (chromatic order) crossed with every mode in
/// catalog order and scores each candidate by how many distinct input
/// notes fall inside its scale. The comparison is strictly
/// greater-than, so among equally scored candidates the first one in
/// scan order wins. That tie-break is deterministic but musically
/// arbitrary; callers wanting a specific enharmonic answer should
/// supply more notes.
///
/// Duplicates in the input are ignored. Fewer than [`MIN_NOTES`]
/// distinct notes is a validation error; a best score below
/// [`MIN_SCORE`] reports no confident match.
pub fn detect_key(selected: &[Note]) -> Result<KeyMatch, ToolError> {
    let mut distinct: Vec<Note> = Vec::with_capacity(selected.len());
    for &note in selected {
        if !distinct.contains(&note) {
            distinct.push(note);
        }
    }

    if distinct.len() < MIN_NOTES {
        return Err(ToolError::InsufficientNotes {
            needed: MIN_NOTES,
            got: distinct.len(),
        });
    }

    let mut best: Option<KeyMatch> = None;

    for root in Note::ALL {
        for scale_type in ScaleType::ALL {
            let scale = Scale::new(root, scale_type);
            let score = distinct.iter().filter(|&&n| scale.contains(n)).count();

            if score > best.map_or(0, |b| b.score) {
                best = Some(KeyMatch {
                    root,
                    scale_type,
                    score,
                });
            }
        }
    }

    match best {
        Some(m) if m.score >= MIN_SCORE => {
            debug!(root = %m.root, scale = %m.scale_type, score = m.score, "key detected");
            Ok(m)
        }
        _ => Err(ToolError::NoKeyMatch),
    }
}
