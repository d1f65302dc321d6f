// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! EQ frequency reference.
//!
//! The audible spectrum split into the seven bands mix engineers work
//! in, plus per-instrument EQ guidance.

/// A named region of the audible spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    pub name: &'static str,
    pub low_hz: u32,
    pub high_hz: u32,
    pub description: &'static str,
    pub instruments: &'static [&'static str],
}

/// The seven standard mixing bands, low to high
pub const BANDS: [FrequencyBand; 7] = [
    FrequencyBand {
        name: "Sub Bass",
        low_hz: 20,
        high_hz: 60,
        description: "Felt more than heard. Rumble and power.",
        instruments: &["Kick Drum", "Bass Guitar", "Synth Bass"],
    },
    FrequencyBand {
        name: "Bass",
        low_hz: 60,
        high_hz: 250,
        description: "Warmth and body. Foundation of the mix.",
        instruments: &["Bass Guitar", "Kick Drum", "Toms", "Cello"],
    },
    FrequencyBand {
        name: "Low Mids",
        low_hz: 250,
        high_hz: 500,
        description: "Muddiness lives here. Cut carefully.",
        instruments: &["Guitars", "Snare", "Vocals", "Piano"],
    },
    FrequencyBand {
        name: "Midrange",
        low_hz: 500,
        high_hz: 2_000,
        description: "Presence and clarity. Most important for vocals.",
        instruments: &["Vocals", "Guitars", "Piano", "Strings"],
    },
    FrequencyBand {
        name: "Upper Mids",
        low_hz: 2_000,
        high_hz: 4_000,
        description: "Attack and definition. Can be harsh.",
        instruments: &["Vocals", "Snare", "Hi-Hats", "Cymbals"],
    },
    FrequencyBand {
        name: "Presence",
        low_hz: 4_000,
        high_hz: 6_000,
        description: "Clarity and intelligibility. Vocal presence.",
        instruments: &["Vocals", "Acoustic Guitar", "Hi-Hats"],
    },
    FrequencyBand {
        name: "Brilliance",
        low_hz: 6_000,
        high_hz: 20_000,
        description: "Air and sparkle. High-end detail.",
        instruments: &["Cymbals", "Hi-Hats", "Strings", "Vocals (air)"],
    },
];

/// EQ guidance for one instrument
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentProfile {
    pub name: &'static str,
    pub fundamental: &'static str,
    pub body: &'static str,
    pub attack: &'static str,
    pub tips: &'static str,
}

/// Per-instrument EQ cheat sheet
pub const INSTRUMENTS: [InstrumentProfile; 4] = [
    InstrumentProfile {
        name: "Kick Drum",
        fundamental: "50-100 Hz",
        body: "60-80 Hz",
        attack: "2-4 kHz",
        tips: "Boost 60-80 Hz for body, 2-4 kHz for beater attack. Cut 200-500 Hz to reduce mud.",
    },
    InstrumentProfile {
        name: "Snare",
        fundamental: "150-250 Hz",
        body: "200 Hz",
        attack: "3-5 kHz",
        tips: "Boost 200 Hz for body, 3-5 kHz for crack. Cut 300-600 Hz if boxy.",
    },
    InstrumentProfile {
        name: "Bass Guitar",
        fundamental: "40-250 Hz",
        body: "80-120 Hz",
        attack: "700 Hz-1 kHz",
        tips: "Boost 80-120 Hz for warmth, 700 Hz-1 kHz for definition. High-pass below 40 Hz.",
    },
    InstrumentProfile {
        name: "Vocals",
        fundamental: "100-300 Hz",
        body: "200-500 Hz",
        attack: "2-5 kHz",
        tips: "High-pass below 80 Hz. Boost 2-5 kHz for presence, 10 kHz+ for air.",
    },
];

/// Find the band containing a frequency. Band edges belong to the
/// lower band; outside 20 Hz - 20 kHz there is no band.
pub fn band_for(hz: u32) -> Option<&'static FrequencyBand> {
    BANDS
        .iter()
        .find(|b| hz >= b.low_hz && (hz < b.high_hz || (hz == b.high_hz && b.high_hz == 20_000)))
}

/// Look up EQ guidance for an instrument by name (case-insensitive)
pub fn instrument(name: &str) -> Option<&'static InstrumentProfile> {
    let lower = name.trim().to_lowercase();
    INSTRUMENTS.iter().find(|i| i.name.to_lowercase() == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_contiguous() {
        for w in BANDS.windows(2) {
            assert_eq!(w[0].high_hz, w[1].low_hz);
        }
        assert_eq!(BANDS[0].low_hz, 20);
        assert_eq!(BANDS[6].high_hz, 20_000);
    }

    #[test]
    fn test_band_lookup() {
        assert_eq!(band_for(40).unwrap().name, "Sub Bass");
        assert_eq!(band_for(60).unwrap().name, "Bass");
        assert_eq!(band_for(1_000).unwrap().name, "Midrange");
        assert_eq!(band_for(10_000).unwrap().name, "Brilliance");
        assert_eq!(band_for(20_000).unwrap().name, "Brilliance");
        assert!(band_for(19).is_none());
        assert!(band_for(25_000).is_none());
    }

    #[test]
    fn test_instrument_lookup() {
        assert_eq!(instrument("vocals").unwrap().attack, "2-5 kHz");
        assert_eq!(instrument("Kick Drum").unwrap().body, "60-80 Hz");
        assert!(instrument("theremin").is_none());
    }
}
