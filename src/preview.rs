//! Live preview support for interactive callers.
//!
//! Conversion is the expensive step, so callers coalesce bursts of edits with
//! [`TrailingDebounce`] and drop stale results with [`PreviewGeneration`].
//! Both take the current time as an argument instead of reading a clock.

use std::time::{Duration, Instant};

use image::RgbaImage;

use crate::{arg_parsers::ConversionMode, operations::grayscale::grayscale};

pub const DEFAULT_PREVIEW_DELAY: Duration = Duration::from_millis(150);

/// Grayscale copy of `source` for display next to the original.
pub fn live_preview(source: &RgbaImage, mode: ConversionMode) -> RgbaImage {
    let mut preview = source.clone();
    grayscale(&mut preview, mode);
    preview
}

/// Fires once, `delay` after the most recent edit.
#[derive(Debug, Clone, Copy)]
pub struct TrailingDebounce {
    delay: Duration,
    last_edit: Option<Instant>,
}

impl Default for TrailingDebounce {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_DELAY)
    }
}

impl TrailingDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_edit: None,
        }
    }

    /// Records an edit, restarting the wait.
    pub fn edit(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_edit.is_some()
    }

    /// Returns `true` exactly once per burst of edits, when the burst has settled.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_edit {
            Some(last) if now.saturating_duration_since(last) >= self.delay => {
                self.last_edit = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until [`poll`](Self::poll) would fire, if anything is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.last_edit
            .map(|last| self.delay.saturating_sub(now.saturating_duration_since(last)))
    }
}

/// Identifies one preview request. Only the latest one may be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreviewTicket(u64);

#[derive(Debug, Default)]
pub struct PreviewGeneration {
    latest: u64,
}

impl PreviewGeneration {
    /// Starts a new request, superseding all earlier ones.
    pub fn begin(&mut self) -> PreviewTicket {
        self.latest += 1;
        PreviewTicket(self.latest)
    }

    pub fn is_current(&self, ticket: PreviewTicket) -> bool {
        ticket.0 == self.latest
    }
}
