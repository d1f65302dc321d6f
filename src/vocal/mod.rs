// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Vocal range measurement and voice type classification.
//!
//! Given a singer's lowest and highest comfortable notes, computes the
//! range in semitones and buckets the singer into a standard voice
//! type. Bucketing compares the center of the sung range against the
//! center of each canonical voice range and takes the nearest, with
//! ties going to the lower voice. A range centered more than an octave
//! from every canonical center is classified Unknown.

use std::fmt;

use tracing::debug;

use crate::error::ToolError;
use crate::music::{Note, Pitch};

/// Standard voice type classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceType {
    Bass,
    Baritone,
    Tenor,
    Alto,
    MezzoSoprano,
    Soprano,
    Unknown,
}

impl VoiceType {
    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            VoiceType::Bass => "Bass",
            VoiceType::Baritone => "Baritone",
            VoiceType::Tenor => "Tenor",
            VoiceType::Alto => "Alto",
            VoiceType::MezzoSoprano => "Mezzo-Soprano",
            VoiceType::Soprano => "Soprano",
            VoiceType::Unknown => "Unknown",
        }
    }

    /// Short description of the voice type
    pub fn description(self) -> &'static str {
        match self {
            VoiceType::Bass => "Lowest male voice",
            VoiceType::Baritone => "Most common male voice",
            VoiceType::Tenor => "Higher male voice",
            VoiceType::Alto => "Lower female voice",
            VoiceType::MezzoSoprano => "Most common female voice",
            VoiceType::Soprano => "Highest female voice",
            VoiceType::Unknown => "Outside typical voice ranges",
        }
    }

    /// Well-known songs that sit comfortably in this range
    pub fn suggested_songs(self) -> &'static [&'static str] {
        match self {
            VoiceType::Bass => &[
                "Johnny Cash - Ring of Fire",
                "Barry White - Can't Get Enough",
                "Leonard Cohen - Hallelujah",
            ],
            VoiceType::Baritone => &[
                "Frank Sinatra - My Way",
                "Elvis Presley - Can't Help Falling in Love",
                "John Legend - All of Me",
            ],
            VoiceType::Tenor => &[
                "Ed Sheeran - Perfect",
                "Bruno Mars - Just The Way You Are",
                "Sam Smith - Stay With Me",
            ],
            VoiceType::Alto => &[
                "Adele - Someone Like You",
                "Amy Winehouse - Back to Black",
                "Lorde - Royals",
            ],
            VoiceType::MezzoSoprano => &[
                "Beyoncé - Halo",
                "Taylor Swift - Love Story",
                "Ariana Grande - Thank U, Next",
            ],
            VoiceType::Soprano => &[
                "Mariah Carey - Hero",
                "Whitney Houston - I Will Always Love You",
                "Christina Aguilera - Beautiful",
            ],
            VoiceType::Unknown => &[],
        }
    }
}

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Canonical comfortable range for each named voice type, low to high.
/// Ordered lowest voice first; classification ties resolve to the
/// earlier entry.
const CANONICAL_RANGES: [(VoiceType, Pitch, Pitch); 6] = [
    (VoiceType::Bass, Pitch { note: Note::E, octave: 2 }, Pitch { note: Note::E, octave: 4 }),
    (VoiceType::Baritone, Pitch { note: Note::A, octave: 2 }, Pitch { note: Note::A, octave: 4 }),
    (VoiceType::Tenor, Pitch { note: Note::C, octave: 3 }, Pitch { note: Note::C, octave: 5 }),
    (VoiceType::Alto, Pitch { note: Note::F, octave: 3 }, Pitch { note: Note::F, octave: 5 }),
    (VoiceType::MezzoSoprano, Pitch { note: Note::A, octave: 3 }, Pitch { note: Note::A, octave: 5 }),
    (VoiceType::Soprano, Pitch { note: Note::C, octave: 4 }, Pitch { note: Note::C, octave: 6 }),
];

/// A center further than this from every canonical center is Unknown
const MAX_CENTER_DISTANCE: i32 = 12;

/// Result of a range classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeProfile {
    pub lowest: Pitch,
    pub highest: Pitch,
    pub semitones: u32,
    pub voice_type: VoiceType,
}

/// The canonical ranges, for display (name, low, high, description)
pub fn canonical_ranges() -> impl Iterator<Item = (VoiceType, Pitch, Pitch)> {
    CANONICAL_RANGES.iter().copied()
}

/// Classify a vocal range.
///
/// `highest` must be strictly above `lowest`; anything else is a
/// validation error, never a silent swap.
pub fn classify(lowest: Pitch, highest: Pitch) -> Result<RangeProfile, ToolError> {
    let span = lowest.semitones_to(highest);
    if span <= 0 {
        return Err(ToolError::RangeInverted);
    }

    // Compare range centers in doubled semitones to avoid rounding
    // the midpoint of an odd span.
    let center2 = span + 2 * chroma_of(lowest);
    let mut voice_type = VoiceType::Unknown;
    let mut best_distance = i32::MAX;

    for (candidate, low, high) in CANONICAL_RANGES {
        let candidate_center2 = low.semitones_to(high) + 2 * chroma_of(low);
        let distance = (center2 - candidate_center2).abs();
        if distance < best_distance {
            best_distance = distance;
            voice_type = candidate;
        }
    }

    if best_distance > 2 * MAX_CENTER_DISTANCE {
        voice_type = VoiceType::Unknown;
    }

    debug!(%lowest, %highest, span, voice = %voice_type, "range classified");

    Ok(RangeProfile {
        lowest,
        highest,
        semitones: span as u32,
        voice_type,
    })
}

fn chroma_of(p: Pitch) -> i32 {
    p.octave as i32 * 12 + p.note.pitch_class() as i32
}
