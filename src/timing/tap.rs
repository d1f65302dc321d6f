// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tap tempo session.
//!
//! Records timestamped taps and derives a BPM estimate from the mean
//! inter-tap interval. Time is injected: every operation takes a
//! caller-supplied millisecond timestamp from a monotonic source, so
//! tests simulate the clock instead of sleeping.
//!
//! Two separate 3-second rules share the same threshold:
//! - at tap time, a gap longer than the threshold restarts the session
//!   with just the new tap (the user stopped and started again);
//! - between taps, [`TapSession::tick`] flips the session to `Idle`
//!   once the threshold elapses. Idle only affects presentation; the
//!   tap history and BPM stay intact.

/// Milliseconds of silence after which a session restarts or goes idle
pub const INACTIVITY_MS: u64 = 3000;

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No taps recorded
    Empty,
    /// Actively tapping
    Tapping,
    /// Taps recorded but the inactivity timeout has passed
    Idle,
}

/// A tap tempo session
#[derive(Debug, Clone, Default)]
pub struct TapSession {
    /// Tap timestamps in milliseconds, monotonic, ascending
    taps: Vec<u64>,
    /// Current estimate, present once two taps exist
    bpm: Option<u32>,
    /// Set by `tick` after the timeout, cleared by any tap
    idle: bool,
}

impl TapSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tap at the given monotonic timestamp.
    ///
    /// A gap above [`INACTIVITY_MS`] since the previous tap discards
    /// the old session; only the new tap remains and the BPM estimate
    /// is cleared.
    pub fn tap(&mut self, now_ms: u64) {
        if let Some(&last) = self.taps.last() {
            if now_ms.saturating_sub(last) > INACTIVITY_MS {
                self.taps.clear();
                self.taps.push(now_ms);
                self.bpm = None;
                self.idle = false;
                return;
            }
        }

        self.taps.push(now_ms);
        self.idle = false;

        if self.taps.len() >= 2 {
            let total: u64 = self.taps.windows(2).map(|w| w[1] - w[0]).sum();
            let avg_interval = total as f64 / (self.taps.len() - 1) as f64;
            self.bpm = Some((60_000.0 / avg_interval).round() as u32);
        }
    }

    /// Advance the clock without a tap.
    ///
    /// Flips the session to `Idle` once the timeout has elapsed since
    /// the last tap. A wake-up scheduled against an older tap is
    /// harmless: the check is always against the current last tap, so
    /// a stale deadline never flips a session that has tapped since.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(&last) = self.taps.last() {
            if now_ms.saturating_sub(last) >= INACTIVITY_MS {
                self.idle = true;
            }
        }
    }

    /// When the session should next be woken to go idle, if ever
    pub fn idle_deadline(&self) -> Option<u64> {
        if self.idle {
            return None;
        }
        self.taps.last().map(|&last| last + INACTIVITY_MS)
    }

    /// Clear all session state unconditionally
    pub fn reset(&mut self) {
        self.taps.clear();
        self.bpm = None;
        self.idle = false;
    }

    /// Current BPM estimate, if at least two taps exist
    pub fn bpm(&self) -> Option<u32> {
        self.bpm
    }

    /// Number of taps in the current session
    pub fn tap_count(&self) -> usize {
        self.taps.len()
    }

    /// Current observable state
    pub fn state(&self) -> SessionState {
        if self.taps.is_empty() {
            SessionState::Empty
        } else if self.idle {
            SessionState::Idle
        } else {
            SessionState::Tapping
        }
    }
}
