//! Terminal-style boot intro.
//!
//! Lines are revealed one per [`LINE_INTERVAL`]; [`SETTLE_DELAY`] after the
//! last line the sequence completes. Completion is reported exactly once.

use std::time::Duration;

pub const LINE_INTERVAL: Duration = Duration::from_millis(120);
pub const SETTLE_DELAY: Duration = Duration::from_millis(1200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    /// Lines are still being printed.
    Running,
    /// All lines shown, waiting out the settle delay.
    Settling,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootEvent {
    /// Index of the line that became visible.
    Line(usize),
    Complete,
}

#[derive(Clone, Debug)]
pub struct BootSequence {
    lines: usize,
    interval: Duration,
    settle: Duration,
    elapsed: Duration,
    shown: usize,
    completed: bool,
}

impl BootSequence {
    pub fn new(lines: usize) -> Self {
        Self::with_timing(lines, LINE_INTERVAL, SETTLE_DELAY)
    }

    pub fn with_timing(lines: usize, interval: Duration, settle: Duration) -> Self {
        Self {
            lines,
            interval,
            settle,
            elapsed: Duration::ZERO,
            shown: 0,
            completed: false,
        }
    }

    pub fn phase(&self) -> BootPhase {
        if self.completed {
            BootPhase::Finished
        } else if self.shown < self.lines {
            BootPhase::Running
        } else {
            BootPhase::Settling
        }
    }

    /// Number of lines currently visible.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Time from start at which `Complete` becomes due.
    pub fn completes_at(&self) -> Duration {
        self.interval
            .saturating_mul(saturating_u32(self.lines))
            .saturating_add(self.settle)
    }

    /// Advances the clock by `dt` and returns every event that became due,
    /// in order. Returns nothing once finished.
    pub fn advance(&mut self, dt: Duration) -> Vec<BootEvent> {
        if self.completed {
            return Vec::new();
        }
        self.elapsed = self.elapsed.saturating_add(dt);

        let due = if self.interval.is_zero() {
            self.lines
        } else {
            let ticks = self.elapsed.as_nanos() / self.interval.as_nanos();
            usize::try_from(ticks).unwrap_or(usize::MAX).min(self.lines)
        };

        let mut events: Vec<BootEvent> = (self.shown..due).map(BootEvent::Line).collect();
        self.shown = due;

        if self.shown == self.lines && self.elapsed >= self.completes_at() {
            self.completed = true;
            log::info!("boot sequence complete after {} lines", self.lines);
            events.push(BootEvent::Complete);
        }
        events
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_tick_in_order() {
        let mut seq = BootSequence::new(3);
        assert_eq!(seq.advance(LINE_INTERVAL), vec![BootEvent::Line(0)]);
        assert_eq!(seq.advance(LINE_INTERVAL), vec![BootEvent::Line(1)]);
        assert_eq!(seq.advance(LINE_INTERVAL), vec![BootEvent::Line(2)]);
        assert_eq!(seq.phase(), BootPhase::Settling);
    }

    #[test]
    fn nothing_before_first_interval() {
        let mut seq = BootSequence::new(3);
        assert!(seq.advance(Duration::from_millis(119)).is_empty());
        assert_eq!(seq.phase(), BootPhase::Running);
    }

    #[test]
    fn large_jump_flushes_in_order() {
        let mut seq = BootSequence::new(4);
        let events = seq.advance(Duration::from_secs(10));
        assert_eq!(
            events,
            vec![
                BootEvent::Line(0),
                BootEvent::Line(1),
                BootEvent::Line(2),
                BootEvent::Line(3),
                BootEvent::Complete,
            ]
        );
    }

    #[test]
    fn empty_script_completes_after_settle() {
        let mut seq = BootSequence::new(0);
        assert!(seq.advance(SETTLE_DELAY - Duration::from_millis(1)).is_empty());
        assert_eq!(seq.advance(Duration::from_millis(1)), vec![BootEvent::Complete]);
    }

    #[test]
    fn zero_interval_shows_everything_at_once() {
        let mut seq = BootSequence::with_timing(2, Duration::ZERO, Duration::ZERO);
        assert_eq!(
            seq.advance(Duration::ZERO),
            vec![BootEvent::Line(0), BootEvent::Line(1), BootEvent::Complete]
        );
    }
}
