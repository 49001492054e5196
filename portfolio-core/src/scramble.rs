//! Hover-triggered text scramble.
//!
//! Each tick re-rolls every unsettled position; one more position locks in
//! every [`TICKS_PER_LOCK`] ticks. Progress is counted in whole ticks so the
//! one-third-per-tick rate never accumulates rounding error.

use rand::Rng;
use std::time::Duration;

pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890@#$%&";
pub const TICK: Duration = Duration::from_millis(30);
pub const TICKS_PER_LOCK: usize = 3;

#[derive(Clone, Debug)]
pub struct Scramble {
    target: Vec<char>,
    display: String,
    tick: Option<usize>,
    locked: usize,
}

impl Scramble {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            display: text.to_string(),
            tick: None,
            locked: text.chars().count(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Starts (or restarts) the reveal and renders its first, fully scrambled
    /// frame. Returns whether further steps are needed.
    pub fn trigger<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.tick = Some(0);
        self.step(rng)
    }

    /// Renders one frame. Returns `false` once the text has settled; further
    /// calls do nothing until the next trigger.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> bool {
        let Some(tick) = self.tick else {
            return false;
        };

        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(index, &ch)| {
                if index * TICKS_PER_LOCK < tick {
                    ch
                } else {
                    random_glyph(rng)
                }
            })
            .collect();
        self.locked = tick
            .div_ceil(TICKS_PER_LOCK)
            .min(self.target.len());

        if tick >= self.target.len() * TICKS_PER_LOCK {
            self.tick = None;
            return false;
        }
        self.tick = Some(tick + 1);
        true
    }

    /// Stops immediately and shows the source text.
    pub fn settle(&mut self) {
        self.tick = None;
        self.display = self.target.iter().collect();
        self.locked = self.target.len();
    }

    /// Leading positions of the current frame that show the source text.
    pub fn locked(&self) -> usize {
        self.locked
    }
}

fn random_glyph<R: Rng>(rng: &mut R) -> char {
    char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_to_rest(s: &mut Scramble, rng: &mut StdRng) -> usize {
        let mut frames = 0;
        while s.step(rng) {
            frames += 1;
            assert!(frames < 10_000, "scramble never settled");
        }
        frames + 1
    }

    #[test]
    fn idle_text_is_the_source() {
        let s = Scramble::new("ABOUT ME");
        assert_eq!(s.display(), "ABOUT ME");
        assert!(!s.is_running());
    }

    #[test]
    fn settles_on_source_and_stops() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = Scramble::new("PROJECTS");
        assert!(s.trigger(&mut rng));
        let frames = run_to_rest(&mut s, &mut rng);
        assert_eq!(frames, "PROJECTS".len() * TICKS_PER_LOCK);
        assert_eq!(s.display(), "PROJECTS");
        assert!(!s.is_running());
        assert!(!s.step(&mut rng));
        assert_eq!(s.display(), "PROJECTS");
    }

    #[test]
    fn one_position_locks_every_three_ticks() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut s = Scramble::new("SKILLS");
        s.trigger(&mut rng);
        assert_eq!(s.locked(), 0);
        let mut locked = Vec::new();
        while s.is_running() {
            s.step(&mut rng);
            locked.push(s.locked());
        }
        assert_eq!(&locked[..7], &[1, 1, 1, 2, 2, 2, 3]);
        assert_eq!(locked.last(), Some(&6));
    }

    #[test]
    fn unsettled_positions_use_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = Scramble::new("hello world");
        s.trigger(&mut rng);
        assert!(s.display().bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn retrigger_restarts_from_scratch() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut s = Scramble::new("CONTACT");
        s.trigger(&mut rng);
        for _ in 0..10 {
            s.step(&mut rng);
        }
        assert!(s.locked() > 0);
        s.trigger(&mut rng);
        assert_eq!(s.locked(), 0);
        assert!(s.is_running());
        run_to_rest(&mut s, &mut rng);
        assert_eq!(s.display(), "CONTACT");
    }

    #[test]
    fn settle_cuts_the_reveal_short() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut s = Scramble::new("AWARDS");
        s.trigger(&mut rng);
        s.settle();
        assert!(!s.is_running());
        assert_eq!(s.display(), "AWARDS");
        assert_eq!(s.locked(), 6);
    }

    #[test]
    fn empty_text_settles_immediately() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = Scramble::new("");
        assert!(!s.trigger(&mut rng));
        assert!(!s.is_running());
        assert_eq!(s.display(), "");
    }
}
