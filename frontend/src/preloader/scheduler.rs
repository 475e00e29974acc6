use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// One-shot timer source. Dropping the returned handle cancels the callback
/// if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers through `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

pub trait IncrementSource {
    fn next_increment(&mut self) -> f64;
}

/// Uniform increments in `[0, max)`.
pub struct RandomIncrements {
    rng: SmallRng,
    max: f64,
}

impl RandomIncrements {
    pub fn new(max: f64) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            max,
        }
    }
}

impl IncrementSource for RandomIncrements {
    fn next_increment(&mut self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..self.max)
    }
}
