// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for PRODKIT
//!
//! These tests exercise the tools together through the public API, the
//! way the CLI drives them.

use rand::rngs::StdRng;
use rand::SeedableRng;

use prodkit::analysis::detect_key;
use prodkit::arrangement::{Arrangement, Section, SectionKind};
use prodkit::generators::progression;
use prodkit::lyrics;
use prodkit::mixing;
use prodkit::music::{Chord, ChordQuality, Note, Pitch, Scale, ScaleType};
use prodkit::timing::{SessionState, TapSession};
use prodkit::vocal;
use prodkit::ToolError;

/// Detect a key from chord tones, then generate a progression in it
#[test]
fn test_detect_then_generate() {
    // The user plays an A minor triad
    let chord = Chord::build(Note::A, ChordQuality::Minor);
    let m = detect_key(chord.notes()).unwrap();
    assert_eq!(m.score, 3);

    // Whatever key detection picked, a supported mode yields a progression
    let mode = if progression::catalog(m.scale_type).is_some() {
        m.scale_type
    } else {
        ScaleType::Major
    };
    let mut rng = StdRng::seed_from_u64(3);
    let picked = progression::pick(mode, &mut rng).unwrap();
    let text = progression::render(m.root, mode, picked);
    assert!(text.contains(&m.root.to_string()));
}

/// Every chord the reference tool can build stays inside some
/// detectable scale when it has enough distinct tones
#[test]
fn test_chords_detectable() {
    for root in Note::ALL {
        for quality in [ChordQuality::Major, ChordQuality::Minor] {
            let chord = Chord::build(root, quality);
            let m = detect_key(chord.notes()).unwrap();
            assert!(m.score >= 3, "{} {}", root, quality);
            let scale = m.scale();
            for &tone in chord.notes() {
                assert!(scale.contains(tone));
            }
        }
    }
}

/// Full tap workflow: steady taps, pause detection, restart
#[test]
fn test_tap_workflow() {
    let mut session = TapSession::new();

    // Steady 140 BPM tapping (428ms intervals, rounded)
    let mut t = 0u64;
    for _ in 0..8 {
        session.tap(t);
        t += 428;
    }
    let bpm = session.bpm().unwrap();
    assert!((139..=141).contains(&bpm));

    // The user walks away; the pending wake-up fires
    let deadline = session.idle_deadline().unwrap();
    session.tick(deadline);
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.bpm(), Some(bpm));

    // Coming back after 10 seconds starts a fresh session
    session.tap(t + 10_000);
    assert_eq!(session.tap_count(), 1);
    assert_eq!(session.bpm(), None);

    session.reset();
    assert_eq!(session.state(), SessionState::Empty);
}

/// Vocal range classification feeds the song suggestions
#[test]
fn test_vocal_range_to_songs() {
    let lowest = Pitch::parse("C3").unwrap();
    let highest = Pitch::parse("C5").unwrap();
    let profile = vocal::classify(lowest, highest).unwrap();

    assert_eq!(profile.semitones, 24);
    assert_eq!(profile.voice_type, vocal::VoiceType::Tenor);
    assert!(!profile.voice_type.suggested_songs().is_empty());
}

/// Error taxonomy: validation errors vs no-match results
#[test]
fn test_error_taxonomy() {
    // Validation: rejected before any computation
    let err = detect_key(&[Note::C, Note::D]).unwrap_err();
    assert!(err.is_validation());

    let err = vocal::classify(
        Pitch::parse("C3").unwrap(),
        Pitch::parse("C2").unwrap(),
    )
    .unwrap_err();
    assert_eq!(err, ToolError::RangeInverted);
    assert!(err.is_validation());

    // No match: well-formed input, no confident answer
    let err = lyrics::lookup("zebra").unwrap_err();
    assert!(!err.is_validation());
    assert!(!ToolError::NoKeyMatch.is_validation());
}

/// Plans survive a save/load round trip and report consistent totals
#[test]
fn test_arrangement_persistence() {
    let mut arr = Arrangement::from_template("Hip-Hop").unwrap();
    arr.add(Section::new(SectionKind::Solo, 8));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("song.yaml");
    arr.save(&path).unwrap();

    let loaded = Arrangement::load(&path).unwrap();
    assert_eq!(loaded, arr);
    assert_eq!(loaded.total_bars(), arr.total_bars());
}

/// The EQ chart covers every octave's fundamental
#[test]
fn test_eq_covers_pitches() {
    // A4 = 440 Hz lands in the low mids on this chart
    assert_eq!(mixing::band_for(440).unwrap().name, "Low Mids");

    // Every frequency from 20 Hz to 20 kHz lands in exactly one band
    for hz in [20, 59, 60, 249, 250, 499, 500, 1999, 2000, 5999, 6000, 19_999, 20_000] {
        assert!(mixing::band_for(hz).is_some(), "{} Hz", hz);
    }
}

/// Scales generated for detection agree with the chord builder
#[test]
fn test_scale_chord_agreement() {
    // Diatonic triads of C major are built from scale notes only
    let c_major = Scale::new(Note::C, ScaleType::Major);
    for (degree, quality) in [
        (Note::C, ChordQuality::Major),
        (Note::D, ChordQuality::Minor),
        (Note::E, ChordQuality::Minor),
        (Note::F, ChordQuality::Major),
        (Note::G, ChordQuality::Major),
        (Note::A, ChordQuality::Minor),
        (Note::B, ChordQuality::Diminished),
    ] {
        let chord = Chord::build(degree, quality);
        for &tone in chord.notes() {
            assert!(c_major.contains(tone), "{} {} has {}", degree, quality, tone);
        }
    }
}
