use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use super::machine::{PreloaderMachine, Step, Timing};
use super::scheduler::{IncrementSource, Scheduler};

/// Listeners for the preloader's progress. `on_complete` is emitted exactly once.
#[derive(Clone, Default)]
pub struct PreloaderEvents {
    pub on_progress: Callback<f64>,
    pub on_settled: Callback<()>,
    pub on_complete: Callback<()>,
}

struct State<S: Scheduler> {
    machine: PreloaderMachine,
    timing: Timing,
    scheduler: S,
    increments: Box<dyn IncrementSource>,
    events: PreloaderEvents,
    pending: Option<S::Handle>,
}

/// Runs a [`PreloaderMachine`] on a [`Scheduler`], one timer at a time.
///
/// Dropping the driver drops the pending timer handle, which cancels it; a
/// callback that still slips through finds the state gone and does nothing.
pub struct PreloaderDriver<S: Scheduler + 'static> {
    state: Rc<RefCell<State<S>>>,
}

impl<S: Scheduler + 'static> PreloaderDriver<S> {
    pub fn start(
        scheduler: S,
        increments: Box<dyn IncrementSource>,
        timing: Timing,
        events: PreloaderEvents,
    ) -> Self {
        let state = Rc::new(RefCell::new(State {
            machine: PreloaderMachine::new(&timing),
            timing,
            scheduler,
            increments,
            events,
            pending: None,
        }));
        arm(&state);
        Self { state }
    }

    pub fn progress(&self) -> f64 {
        self.state.borrow().machine.progress()
    }
}

fn arm<S: Scheduler + 'static>(state: &Rc<RefCell<State<S>>>) {
    let weak: Weak<RefCell<State<S>>> = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    let Some(delay) = guard.machine.next_delay(&guard.timing) else {
        guard.pending = None;
        return;
    };
    let handle = guard.scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(state) = weak.upgrade() {
                fire(&state);
            }
        }),
    );
    guard.pending = Some(handle);
}

fn fire<S: Scheduler + 'static>(state: &Rc<RefCell<State<S>>>) {
    let (step, events) = {
        let mut guard = state.borrow_mut();
        let increment = guard.increments.next_increment();
        let step = guard.machine.step(increment);
        (step, guard.events.clone())
    };

    // Listeners run without the borrow held; they may re-render or drop the driver.
    match step {
        Step::Progress(progress) => events.on_progress.emit(progress),
        Step::Settled => {
            debug!("Preloader settled at 100%");
            events.on_settled.emit(());
        }
        Step::Completed => {
            debug!("Preloader complete");
            events.on_complete.emit(());
        }
        Step::Idle => {}
    }

    arm(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Virtual clock: timers only fire when the test advances time.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        now: Rc<Cell<u64>>,
        queue: Rc<RefCell<Vec<Task>>>,
    }

    struct Task {
        due: u64,
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Task {
                due: self.now.get() + u64::from(delay_ms),
                cancelled: cancelled.clone(),
                callback,
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    queue.retain(|t| !t.cancelled.get());
                    let earliest = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| t.due)
                        .map(|(i, _)| i);
                    earliest.map(|i| queue.remove(i))
                };
                let Some(task) = next else { break };
                self.now.set(task.due);
                (task.callback)();
            }
            self.now.set(target);
        }

        fn pending(&self) -> usize {
            self.queue.borrow().iter().filter(|t| !t.cancelled.get()).count()
        }
    }

    struct Fixed(f64);

    impl IncrementSource for Fixed {
        fn next_increment(&mut self) -> f64 {
            self.0
        }
    }

    #[derive(Default)]
    struct Recorder {
        progress: Rc<RefCell<Vec<f64>>>,
        settled: Rc<Cell<u32>>,
        completed: Rc<Cell<u32>>,
        progress_at_completion: Rc<Cell<f64>>,
    }

    impl Recorder {
        fn events(&self) -> PreloaderEvents {
            let progress = self.progress.clone();
            let settled = self.settled.clone();
            let completed = self.completed.clone();
            let seen = self.progress.clone();
            let at_completion = self.progress_at_completion.clone();
            PreloaderEvents {
                on_progress: Callback::from(move |p| progress.borrow_mut().push(p)),
                on_settled: Callback::from(move |_| settled.set(settled.get() + 1)),
                on_complete: Callback::from(move |_| {
                    completed.set(completed.get() + 1);
                    at_completion.set(seen.borrow().last().copied().unwrap_or(0.0));
                }),
            }
        }
    }

    fn timing() -> Timing {
        Timing {
            tick_ms: 150,
            settle_ms: 500,
            exit_ms: 800,
            max_increment: 15.0,
        }
    }

    #[test]
    fn completes_exactly_once_after_full_and_both_delays() {
        let scheduler = ManualScheduler::default();
        let recorder = Recorder::default();
        let driver = PreloaderDriver::start(
            scheduler.clone(),
            Box::new(Fixed(10.0)),
            timing(),
            recorder.events(),
        );

        // Ten ticks of 10 reach 100.
        scheduler.advance(150 * 10);
        assert_eq!(driver.progress(), 100.0);
        assert_eq!(recorder.progress.borrow().len(), 10);
        assert_eq!(recorder.settled.get(), 0);
        assert_eq!(recorder.completed.get(), 0);

        scheduler.advance(499);
        assert_eq!(recorder.settled.get(), 0);
        scheduler.advance(1);
        assert_eq!(recorder.settled.get(), 1);
        assert_eq!(recorder.completed.get(), 0);

        scheduler.advance(799);
        assert_eq!(recorder.completed.get(), 0);
        scheduler.advance(1);
        assert_eq!(recorder.completed.get(), 1);
        assert_eq!(recorder.progress_at_completion.get(), 100.0);

        scheduler.advance(60_000);
        assert_eq!(recorder.completed.get(), 1);
        assert_eq!(recorder.progress.borrow().len(), 10);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn progress_reports_are_monotonic_and_capped() {
        let scheduler = ManualScheduler::default();
        let recorder = Recorder::default();
        let _driver = PreloaderDriver::start(
            scheduler.clone(),
            Box::new(Fixed(14.0)),
            timing(),
            recorder.events(),
        );
        scheduler.advance(10_000);

        let progress = recorder.progress.borrow();
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress.last().copied(), Some(100.0));
        assert!(progress.iter().all(|p| *p <= 100.0));
        assert_eq!(recorder.completed.get(), 1);
    }

    #[test]
    fn dropping_the_driver_cancels_pending_timer() {
        let scheduler = ManualScheduler::default();
        let recorder = Recorder::default();
        let driver = PreloaderDriver::start(
            scheduler.clone(),
            Box::new(Fixed(50.0)),
            timing(),
            recorder.events(),
        );
        scheduler.advance(150);
        assert_eq!(recorder.progress.borrow().len(), 1);

        drop(driver);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(60_000);
        assert_eq!(recorder.progress.borrow().len(), 1);
        assert_eq!(recorder.completed.get(), 0);
    }

    #[test]
    fn stalled_source_never_completes() {
        let scheduler = ManualScheduler::default();
        let recorder = Recorder::default();
        let driver = PreloaderDriver::start(
            scheduler.clone(),
            Box::new(Fixed(0.0)),
            timing(),
            recorder.events(),
        );
        scheduler.advance(60_000);
        assert_eq!(driver.progress(), 0.0);
        assert_eq!(recorder.completed.get(), 0);
        assert_eq!(scheduler.pending(), 1);
    }
}
