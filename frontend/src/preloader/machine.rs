use crate::config::{
    PRELOADER_EXIT_MS, PRELOADER_MAX_INCREMENT, PRELOADER_SETTLE_MS, PRELOADER_TICK_MS,
};

pub const FULL: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub tick_ms: u32,
    pub settle_ms: u32,
    pub exit_ms: u32,
    pub max_increment: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_ms: PRELOADER_TICK_MS,
            settle_ms: PRELOADER_SETTLE_MS,
            exit_ms: PRELOADER_EXIT_MS,
            max_increment: PRELOADER_MAX_INCREMENT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Progress below 100, ticking.
    Loading,
    /// Holding at 100 before the overlay fades.
    Settling,
    /// Overlay fading out.
    Exiting,
    Done,
}

/// What a single [`PreloaderMachine::step`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Progress(f64),
    Settled,
    Completed,
    Idle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreloaderMachine {
    progress: f64,
    phase: Phase,
    max_increment: f64,
}

impl PreloaderMachine {
    pub fn new(timing: &Timing) -> Self {
        Self {
            progress: 0.0,
            phase: Phase::Loading,
            max_increment: timing.max_increment,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Delay until the next [`step`](Self::step), or `None` once done.
    pub fn next_delay(&self, timing: &Timing) -> Option<u32> {
        match self.phase {
            Phase::Loading => Some(timing.tick_ms),
            Phase::Settling => Some(timing.settle_ms),
            Phase::Exiting => Some(timing.exit_ms),
            Phase::Done => None,
        }
    }

    /// Advances one scheduled step. `increment` only matters while loading; it
    /// is clamped to `[0, max_increment]` so progress never goes backwards.
    pub fn step(&mut self, increment: f64) -> Step {
        match self.phase {
            Phase::Loading => {
                let increment = if increment.is_finite() {
                    increment.clamp(0.0, self.max_increment)
                } else {
                    0.0
                };
                self.progress = (self.progress + increment).min(FULL);
                if self.progress >= FULL {
                    self.phase = Phase::Settling;
                }
                Step::Progress(self.progress)
            }
            Phase::Settling => {
                self.phase = Phase::Exiting;
                Step::Settled
            }
            Phase::Exiting => {
                self.phase = Phase::Done;
                Step::Completed
            }
            Phase::Done => Step::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> PreloaderMachine {
        PreloaderMachine::new(&Timing::default())
    }

    #[test]
    fn clamps_at_full() {
        let mut m = machine();
        for _ in 0..6 {
            m.step(14.9);
        }
        assert!(m.progress() < FULL);
        assert_eq!(m.phase(), Phase::Loading);
        assert_eq!(m.step(14.9), Step::Progress(FULL));
        assert_eq!(m.phase(), Phase::Settling);
    }

    #[test]
    fn increments_are_bounded_and_never_negative() {
        let mut m = machine();
        m.step(1_000.0);
        assert_eq!(m.progress(), PRELOADER_MAX_INCREMENT);
        m.step(-50.0);
        m.step(f64::NAN);
        assert_eq!(m.progress(), PRELOADER_MAX_INCREMENT);
    }

    #[test]
    fn phases_follow_in_order_and_complete_once() {
        let timing = Timing::default();
        let mut m = machine();
        let mut completed = 0;
        let mut steps = Vec::new();
        while let Some(delay) = m.next_delay(&timing) {
            let step = m.step(10.0);
            if step == Step::Completed {
                completed += 1;
            }
            steps.push((delay, step));
        }
        assert_eq!(completed, 1);
        let tail = &steps[steps.len() - 2..];
        assert_eq!(tail[0], (timing.settle_ms, Step::Settled));
        assert_eq!(tail[1], (timing.exit_ms, Step::Completed));
        assert_eq!(m.step(10.0), Step::Idle);
        assert_eq!(m.phase(), Phase::Done);
    }

    #[test]
    fn nothing_settles_before_full() {
        let mut m = machine();
        for _ in 0..9 {
            assert!(matches!(m.step(10.0), Step::Progress(_)));
        }
        assert_eq!(m.phase(), Phase::Loading);
        assert_eq!(m.step(10.0), Step::Progress(FULL));
    }
}
