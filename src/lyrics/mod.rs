// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Rhyme lookup for lyric writing.
//!
//! A small built-in dictionary of common songwriting words, each with
//! perfect and near rhymes. Lookup is case-insensitive.

use crate::error::ToolError;

/// Rhymes for a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeSet {
    pub word: &'static str,
    pub perfect: &'static [&'static str],
    pub near: &'static [&'static str],
}

const DICTIONARY: [RhymeSet; 8] = [
    RhymeSet {
        word: "love",
        perfect: &["above", "dove", "glove", "shove", "thereof"],
        near: &["move", "prove", "groove", "remove", "approve"],
    },
    RhymeSet {
        word: "heart",
        perfect: &["art", "part", "start", "chart", "smart", "apart"],
        near: &["hard", "guard", "yard", "card", "regard"],
    },
    RhymeSet {
        word: "night",
        perfect: &["light", "sight", "right", "fight", "bright", "flight", "might", "tight"],
        near: &["life", "time", "mind", "find", "kind"],
    },
    RhymeSet {
        word: "dream",
        perfect: &["beam", "cream", "stream", "team", "scheme", "theme"],
        near: &["free", "see", "believe", "achieve", "breathe"],
    },
    RhymeSet {
        word: "fire",
        perfect: &["desire", "inspire", "require", "admire", "acquire", "retire"],
        near: &["higher", "wire", "tired", "inspired"],
    },
    RhymeSet {
        word: "time",
        perfect: &["rhyme", "climb", "prime", "crime", "sublime", "chime"],
        near: &["mind", "find", "kind", "blind", "behind"],
    },
    RhymeSet {
        word: "soul",
        perfect: &["goal", "whole", "control", "roll", "toll", "stroll"],
        near: &["hold", "cold", "bold", "gold", "told"],
    },
    RhymeSet {
        word: "way",
        perfect: &["day", "say", "play", "stay", "away", "today", "gray"],
        near: &["make", "take", "break", "wake", "shake"],
    },
];

/// Words the dictionary covers
pub fn available_words() -> impl Iterator<Item = &'static str> {
    DICTIONARY.iter().map(|r| r.word)
}

/// Look up rhymes for a word.
///
/// Blank input is a validation error; a well-formed word missing from
/// the dictionary reports no match, with a few covered words as
/// suggestions.
pub fn lookup(word: &str) -> Result<RhymeSet, ToolError> {
    let normalized = word.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ToolError::EmptyWord);
    }

    DICTIONARY
        .iter()
        .find(|r| r.word == normalized)
        .copied()
        .ok_or_else(|| ToolError::WordNotFound {
            word: normalized,
            suggestions: available_words().take(5).map(String::from).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit() {
        let rhymes = lookup("love").unwrap();
        assert!(rhymes.perfect.contains(&"above"));
        assert!(rhymes.near.contains(&"move"));
    }

    #[test]
    fn test_lookup_normalizes() {
        assert_eq!(lookup("  Heart "), lookup("heart"));
    }

    #[test]
    fn test_lookup_miss() {
        let err = lookup("cat").unwrap_err();
        match err {
            ToolError::WordNotFound { word, suggestions } => {
                assert_eq!(word, "cat");
                assert_eq!(suggestions.len(), 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(lookup("   ").unwrap_err(), ToolError::EmptyWord);
    }

    #[test]
    fn test_dictionary_well_formed() {
        for entry in DICTIONARY {
            assert!(!entry.perfect.is_empty(), "{}", entry.word);
            assert!(!entry.near.is_empty(), "{}", entry.word);
        }
        assert_eq!(available_words().count(), 8);
    }
}
