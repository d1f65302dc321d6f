// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progression generator.
//!
//! Picks a roman-numeral degree sequence at random from a curated
//! catalog keyed by mode. Randomness comes from a caller-supplied
//! `Rng`, so tests can seed it for deterministic output.

use rand::Rng;

use crate::error::ToolError;
use crate::music::{Note, ScaleType};

/// A progression: ordered roman-numeral degree labels
pub type Progression = &'static [&'static str];

const MAJOR: &[Progression] = &[
    &["I", "V", "vi", "IV"],
    &["I", "IV", "V", "IV"],
    &["I", "vi", "IV", "V"],
    &["I", "V", "vi", "iii", "IV", "I", "IV", "V"],
    &["I", "IV", "vi", "V"],
    &["I", "iii", "IV", "V"],
];

const MINOR: &[Progression] = &[
    &["i", "VI", "III", "VII"],
    &["i", "iv", "VII", "III"],
    &["i", "VI", "iv", "V"],
    &["i", "iv", "v", "i"],
    &["i", "VII", "VI", "V"],
];

const DORIAN: &[Progression] = &[
    &["i", "IV", "v", "i"],
    &["i", "ii", "IV", "v"],
    &["i", "IV", "VII", "i"],
];

const MIXOLYDIAN: &[Progression] = &[
    &["I", "VII", "IV", "I"],
    &["I", "VII", "IV", "V"],
    &["I", "IV", "VII", "IV"],
];

/// Modes the catalog covers, in catalog order
pub const SUPPORTED_MODES: [ScaleType; 4] = [
    ScaleType::Major,
    ScaleType::Minor,
    ScaleType::Dorian,
    ScaleType::Mixolydian,
];

/// Get the catalog entries for a mode, if it is covered
pub fn catalog(mode: ScaleType) -> Option<&'static [Progression]> {
    match mode {
        ScaleType::Major => Some(MAJOR),
        ScaleType::Minor => Some(MINOR),
        ScaleType::Dorian => Some(DORIAN),
        ScaleType::Mixolydian => Some(MIXOLYDIAN),
        _ => None,
    }
}

/// Pick a progression uniformly at random for the given mode.
///
/// Re-invocation may return a different progression; that
/// nondeterminism is the point of a generator. Modes outside the
/// catalog are a caller error.
pub fn pick<R: Rng + ?Sized>(mode: ScaleType, rng: &mut R) -> Result<Progression, ToolError> {
    let entries = catalog(mode).ok_or_else(|| ToolError::UnsupportedMode(mode.to_string()))?;
    Ok(entries[rng.gen_range(0..entries.len())])
}

/// Render a progression in the copyable "C Major: I - V - vi - IV" form
pub fn render(key: Note, mode: ScaleType, progression: Progression) -> String {
    format!("{} {}: {}", key, mode, progression.join(" - "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(catalog(ScaleType::Major).unwrap().len(), 6);
        assert_eq!(catalog(ScaleType::Minor).unwrap().len(), 5);
        assert_eq!(catalog(ScaleType::Dorian).unwrap().len(), 3);
        assert_eq!(catalog(ScaleType::Mixolydian).unwrap().len(), 3);
        assert!(catalog(ScaleType::Locrian).is_none());
    }

    #[test]
    fn test_catalogs_non_empty_sequences() {
        for mode in SUPPORTED_MODES {
            for progression in catalog(mode).unwrap() {
                assert!(!progression.is_empty());
            }
        }
    }

    #[test]
    fn test_pick_returns_catalog_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = pick(ScaleType::Major, &mut rng).unwrap();
            assert!(catalog(ScaleType::Major).unwrap().contains(&p));
        }
    }

    #[test]
    fn test_pick_unsupported_mode() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = pick(ScaleType::Phrygian, &mut rng).unwrap_err();
        assert!(matches!(err, ToolError::UnsupportedMode(_)));
    }

    #[test]
    fn test_pick_deterministic_with_seeded_rng() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                pick(ScaleType::Minor, &mut a).unwrap(),
                pick(ScaleType::Minor, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_pick_covers_catalog() {
        // With enough draws every entry should come up at least once
        let mut rng = StdRng::seed_from_u64(1);
        let entries = catalog(ScaleType::Major).unwrap();
        let mut seen = vec![false; entries.len()];
        for _ in 0..200 {
            let p = pick(ScaleType::Major, &mut rng).unwrap();
            let idx = entries.iter().position(|&e| e == p).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_render() {
        let text = render(Note::C, ScaleType::Major, &["I", "V", "vi", "IV"]);
        assert_eq!(text, "C Major: I - V - vi - IV");
    }
}
