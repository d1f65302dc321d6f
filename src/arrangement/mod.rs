// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song structure planning.
//!
//! Build an ordered list of sections (intro, verse, chorus, ...) with
//! bar counts, estimate total length at a tempo, and save/load plans
//! as YAML.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Section types available to the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Intro,
    Verse,
    PreChorus,
    Chorus,
    Bridge,
    Break,
    Outro,
    Solo,
    Drop,
}

impl SectionKind {
    /// All section types in menu order
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Intro,
        SectionKind::Verse,
        SectionKind::PreChorus,
        SectionKind::Chorus,
        SectionKind::Bridge,
        SectionKind::Break,
        SectionKind::Outro,
        SectionKind::Solo,
        SectionKind::Drop,
    ];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Intro => "Intro",
            SectionKind::Verse => "Verse",
            SectionKind::PreChorus => "Pre-Chorus",
            SectionKind::Chorus => "Chorus",
            SectionKind::Bridge => "Bridge",
            SectionKind::Break => "Break",
            SectionKind::Outro => "Outro",
            SectionKind::Solo => "Solo",
            SectionKind::Drop => "Drop",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One section of a song plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Length in bars
    pub bars: u32,
}

impl Section {
    pub fn new(kind: SectionKind, bars: u32) -> Self {
        Self { kind, bars }
    }
}

/// An ordered song structure plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    /// Plan name
    pub name: String,
    /// Sections in playback order
    #[serde(default)]
    sections: Vec<Section>,
}

impl Arrangement {
    /// Create an empty plan
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// The default starting layout: a basic verse/chorus song
    pub fn standard() -> Self {
        let mut arr = Self::new("Untitled");
        arr.sections = vec![
            Section::new(SectionKind::Intro, 8),
            Section::new(SectionKind::Verse, 16),
            Section::new(SectionKind::Chorus, 16),
            Section::new(SectionKind::Verse, 16),
            Section::new(SectionKind::Chorus, 16),
            Section::new(SectionKind::Outro, 8),
        ];
        arr
    }

    /// Load a named template
    pub fn from_template(name: &str) -> Result<Self, ToolError> {
        let (title, sections): (&str, &[(SectionKind, u32)]) = match name
            .trim()
            .to_lowercase()
            .as_str()
        {
            "pop" | "pop standard" => (
                "Pop Standard",
                &[
                    (SectionKind::Intro, 4),
                    (SectionKind::Verse, 16),
                    (SectionKind::Chorus, 16),
                    (SectionKind::Verse, 16),
                    (SectionKind::Chorus, 16),
                    (SectionKind::Bridge, 8),
                    (SectionKind::Chorus, 16),
                    (SectionKind::Outro, 8),
                ],
            ),
            "edm" | "edm drop" => (
                "EDM Drop",
                &[
                    (SectionKind::Intro, 16),
                    (SectionKind::Verse, 16),
                    (SectionKind::PreChorus, 8),
                    (SectionKind::Drop, 16),
                    (SectionKind::Break, 8),
                    (SectionKind::Drop, 16),
                    (SectionKind::Outro, 16),
                ],
            ),
            "hiphop" | "hip-hop" | "hip hop" => (
                "Hip-Hop",
                &[
                    (SectionKind::Intro, 8),
                    (SectionKind::Verse, 16),
                    (SectionKind::Chorus, 8),
                    (SectionKind::Verse, 16),
                    (SectionKind::Chorus, 8),
                    (SectionKind::Verse, 16),
                    (SectionKind::Chorus, 8),
                    (SectionKind::Outro, 8),
                ],
            ),
            _ => return Err(ToolError::UnknownTemplate(name.trim().to_string())),
        };

        let mut arr = Self::new(title);
        arr.sections = sections.iter().map(|&(k, b)| Section::new(k, b)).collect();
        Ok(arr)
    }

    /// Template names accepted by [`Arrangement::from_template`]
    pub fn template_names() -> [&'static str; 3] {
        ["Pop Standard", "EDM Drop", "Hip-Hop"]
    }

    /// Sections in order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Append a section
    pub fn add(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Remove the section at an index; None if out of range
    pub fn remove(&mut self, index: usize) -> Option<Section> {
        if index < self.sections.len() {
            Some(self.sections.remove(index))
        } else {
            None
        }
    }

    /// Replace the section at an index; false if out of range
    pub fn update(&mut self, index: usize, section: Section) -> bool {
        match self.sections.get_mut(index) {
            Some(slot) => {
                *slot = section;
                true
            }
            None => false,
        }
    }

    /// Total length in bars
    pub fn total_bars(&self) -> u32 {
        self.sections.iter().map(|s| s.bars).sum()
    }

    /// Estimated duration in seconds at a tempo, assuming 4/4
    pub fn duration_secs(&self, bpm: f64) -> f64 {
        let beats = self.total_bars() as f64 * 4.0;
        beats * 60.0 / bpm
    }

    /// Load a plan from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read arrangement file: {:?}", path.as_ref()))?;
        serde_yaml::from_str(&contents).context("Failed to parse arrangement YAML")
    }

    /// Save a plan to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize arrangement")?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write arrangement file: {:?}", path.as_ref()))
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} bars)", self.name, self.total_bars())?;
        for section in &self.sections {
            writeln!(f, "  {} - {} bars", section.kind, section.bars)?;
        }
        Ok(())
    }
}
