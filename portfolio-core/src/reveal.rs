//! Multi-stage entrance animation applied to each content section.
//!
//! A [`SeenLatch`] decides when the sequence starts; the [`RevealSequence`]
//! then walks the stages in order from a single elapsed-time clock.

use rand::Rng;
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_FLIGHT: Duration = Duration::from_millis(1500);
const PARTICLE_SPREAD_X: f64 = 1500.0;
const PARTICLE_SPREAD_Y: f64 = 1000.0;
const PARTICLE_MAX_ROTATION: f64 = 720.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealStage {
    /// Not yet seen. Content is hidden and the drive is parked off-screen.
    Hidden,
    FlyIn,
    Pause,
    Flash,
    Vanish,
    ContentReveal,
    Done,
}

impl RevealStage {
    const TIMED: [RevealStage; 5] = [
        RevealStage::FlyIn,
        RevealStage::Pause,
        RevealStage::Flash,
        RevealStage::Vanish,
        RevealStage::ContentReveal,
    ];

    /// Declared duration; `None` for the untimed endpoints.
    pub fn duration(self) -> Option<Duration> {
        match self {
            RevealStage::Hidden | RevealStage::Done => None,
            RevealStage::FlyIn => Some(Duration::from_millis(1200)),
            RevealStage::Pause => Some(Duration::from_millis(500)),
            RevealStage::Flash => Some(Duration::from_millis(300)),
            RevealStage::Vanish => Some(Duration::from_millis(100)),
            RevealStage::ContentReveal => Some(Duration::from_millis(600)),
        }
    }

    pub fn total() -> Duration {
        Self::TIMED.iter().filter_map(|s| s.duration()).sum()
    }

    /// Stage in effect `elapsed` after the sequence started.
    pub fn at(elapsed: Duration) -> RevealStage {
        let mut boundary = Duration::ZERO;
        for stage in Self::TIMED {
            boundary += stage.duration().unwrap_or_default();
            if elapsed < boundary {
                return stage;
            }
        }
        RevealStage::Done
    }

    pub fn content_visible(self) -> bool {
        self >= RevealStage::ContentReveal
    }

    pub fn drive_gone(self) -> bool {
        self >= RevealStage::Vanish
    }

    pub fn particles_launched(self) -> bool {
        self >= RevealStage::Flash
    }
}

/// One-shot "has this been seen" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeenLatch {
    seen: bool,
}

impl SeenLatch {
    pub fn is_set(&self) -> bool {
        self.seen
    }

    /// Feeds a visibility sample. Returns `true` only for the sample that
    /// sets the latch; everything after is ignored.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.seen || !visible {
            return false;
        }
        self.seen = true;
        true
    }
}

#[derive(Clone, Debug)]
pub struct RevealSequence {
    stage: RevealStage,
    elapsed: Duration,
}

impl Default for RevealSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealSequence {
    pub fn new() -> Self {
        Self {
            stage: RevealStage::Hidden,
            elapsed: Duration::ZERO,
        }
    }

    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    /// Enters `FlyIn`. Has no effect once started.
    pub fn start(&mut self) -> bool {
        if self.stage != RevealStage::Hidden {
            return false;
        }
        self.stage = RevealStage::FlyIn;
        log::debug!("reveal sequence started");
        true
    }

    /// Moves the clock to `elapsed` since start. Returns the new stage when it
    /// changed. A jump past several boundaries lands on the latest stage, so
    /// the content-visible state never depends on intermediate ticks.
    pub fn advance_to(&mut self, elapsed: Duration) -> Option<RevealStage> {
        if self.stage == RevealStage::Hidden || self.stage == RevealStage::Done {
            return None;
        }
        self.elapsed = self.elapsed.max(elapsed);
        let next = RevealStage::at(self.elapsed);
        if next == self.stage {
            return None;
        }
        log::debug!("reveal stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
        Some(next)
    }

    pub fn advance(&mut self, dt: Duration) -> Option<RevealStage> {
        let target = self.elapsed.saturating_add(dt);
        self.advance_to(target)
    }

    pub fn is_done(&self) -> bool {
        self.stage == RevealStage::Done
    }
}

/// A fragment of the hard-drive burst. Offsets are in pixels from the centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub size: f64,
}

impl Particle {
    pub fn burst<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
        (0..count)
            .map(|_| Particle {
                x: (rng.gen::<f64>() - 0.5) * PARTICLE_SPREAD_X,
                y: (rng.gen::<f64>() - 0.5) * PARTICLE_SPREAD_Y,
                rotation: rng.gen::<f64>() * PARTICLE_MAX_ROTATION,
                size: rng.gen::<f64>() * 10.0 + 2.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stages_follow_declared_boundaries() {
        assert_eq!(RevealStage::at(ms(0)), RevealStage::FlyIn);
        assert_eq!(RevealStage::at(ms(1199)), RevealStage::FlyIn);
        assert_eq!(RevealStage::at(ms(1200)), RevealStage::Pause);
        assert_eq!(RevealStage::at(ms(1700)), RevealStage::Flash);
        assert_eq!(RevealStage::at(ms(2000)), RevealStage::Vanish);
        assert_eq!(RevealStage::at(ms(2100)), RevealStage::ContentReveal);
        assert_eq!(RevealStage::at(ms(2700)), RevealStage::Done);
        assert_eq!(RevealStage::total(), ms(2700));
    }

    #[test]
    fn sequence_visits_every_stage_in_order() {
        let mut seq = RevealSequence::new();
        assert!(seq.start());
        let mut seen = vec![seq.stage()];
        for _ in 0..60 {
            if let Some(stage) = seq.advance(ms(50)) {
                seen.push(stage);
            }
        }
        assert_eq!(
            seen,
            vec![
                RevealStage::FlyIn,
                RevealStage::Pause,
                RevealStage::Flash,
                RevealStage::Vanish,
                RevealStage::ContentReveal,
                RevealStage::Done,
            ]
        );
    }

    #[test]
    fn late_tick_still_reveals_content() {
        let mut seq = RevealSequence::new();
        seq.start();
        assert_eq!(seq.advance_to(ms(10_000)), Some(RevealStage::Done));
        assert!(seq.stage().content_visible());
        assert_eq!(seq.advance_to(ms(20_000)), None);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut seq = RevealSequence::new();
        seq.start();
        seq.advance_to(ms(1800));
        assert_eq!(seq.advance_to(ms(100)), None);
        assert_eq!(seq.stage(), RevealStage::Flash);
    }

    #[test]
    fn unstarted_sequence_ignores_time() {
        let mut seq = RevealSequence::new();
        assert_eq!(seq.advance(ms(5000)), None);
        assert_eq!(seq.stage(), RevealStage::Hidden);
        assert!(!seq.stage().content_visible());
    }

    #[test]
    fn drive_leaves_as_the_flash_ends() {
        assert!(!RevealStage::Hidden.drive_gone());
        assert!(!RevealStage::Flash.drive_gone());
        assert!(RevealStage::Vanish.drive_gone());
        assert!(RevealStage::Done.drive_gone());
        assert!(!RevealStage::Pause.particles_launched());
        assert!(RevealStage::Flash.particles_launched());
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = SeenLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_set());
    }

    #[test]
    fn particles_stay_within_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        let burst = Particle::burst(&mut rng, PARTICLE_COUNT);
        assert_eq!(burst.len(), PARTICLE_COUNT);
        for p in burst {
            assert!(p.x.abs() <= 750.0);
            assert!(p.y.abs() <= 500.0);
            assert!((0.0..720.0).contains(&p.rotation));
            assert!((2.0..12.0).contains(&p.size));
        }
    }
}
