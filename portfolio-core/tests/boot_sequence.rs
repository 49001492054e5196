use portfolio_core::boot::{LINE_INTERVAL, SETTLE_DELAY};
use portfolio_core::content::BOOT_LINES;
use portfolio_core::{BootEvent, BootPhase, BootSequence};
use std::time::Duration;

/// Drives the sequence the way the intro does: one fixed-interval tick at a
/// time, recording when each event fired.
fn run_ticks(seq: &mut BootSequence, tick: Duration, max_ticks: u32) -> Vec<(Duration, BootEvent)> {
    let mut fired = Vec::new();
    for n in 1..=max_ticks {
        for event in seq.advance(tick) {
            fired.push((tick * n, event));
        }
    }
    fired
}

#[test]
fn lines_arrive_in_script_order_then_complete_once() {
    let mut seq = BootSequence::new(BOOT_LINES.len());
    let fired = run_ticks(&mut seq, LINE_INTERVAL, 100);

    let lines: Vec<usize> = fired
        .iter()
        .filter_map(|(_, e)| match e {
            BootEvent::Line(i) => Some(*i),
            BootEvent::Complete => None,
        })
        .collect();
    assert_eq!(lines, (0..BOOT_LINES.len()).collect::<Vec<_>>());

    let completes: Vec<Duration> = fired
        .iter()
        .filter(|(_, e)| *e == BootEvent::Complete)
        .map(|(at, _)| *at)
        .collect();
    assert_eq!(completes.len(), 1);

    let last_line_at = fired
        .iter()
        .filter(|(_, e)| matches!(e, BootEvent::Line(_)))
        .map(|(at, _)| *at)
        .max()
        .expect("lines fired");
    assert_eq!(completes[0] - last_line_at, SETTLE_DELAY);
    assert_eq!(seq.phase(), BootPhase::Finished);
}

#[test]
fn each_tick_reveals_exactly_one_line() {
    let mut seq = BootSequence::new(BOOT_LINES.len());
    for expected in 1..=BOOT_LINES.len() {
        let events = seq.advance(LINE_INTERVAL);
        assert_eq!(events, vec![BootEvent::Line(expected - 1)]);
        assert_eq!(seq.shown(), expected);
    }
}

#[test]
fn finished_sequence_stays_silent() {
    let mut seq = BootSequence::new(2);
    seq.advance(seq.completes_at());
    assert_eq!(seq.phase(), BootPhase::Finished);
    assert!(seq.advance(Duration::from_secs(3600)).is_empty());
}
