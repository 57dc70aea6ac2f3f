//! Repeating timer resource with a cancellation token.
//!
//! The host timer lives behind [`Scheduler`] so the browser interval can be
//! swapped for a manual clock in tests. A [`RevealTimer`] owns both the host
//! handle and a [`CancelToken`]; the token is checked before every tick, so
//! once it trips no tick reaches the callback even if the host already queued
//! one.

use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Something that can call a closure every `period_ms` until its handle is dropped.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser `setInterval` through gloo. Dropping the handle clears it.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A running repeating timer. Stops when the tick callback breaks or when
/// the timer is dropped, whichever comes first.
pub struct RevealTimer<H> {
    token: CancelToken,
    _handle: H,
}

impl<H> RevealTimer<H> {
    pub fn start<S, F>(scheduler: &S, period_ms: u32, mut on_tick: F) -> Self
    where
        S: Scheduler<Handle = H>,
        F: FnMut() -> ControlFlow<()> + 'static,
    {
        let token = CancelToken::new();
        let guard = token.clone();
        let handle = scheduler.every(
            period_ms,
            Box::new(move || {
                if guard.is_cancelled() {
                    return;
                }
                if on_tick().is_break() {
                    guard.cancel();
                }
            }),
        );
        RevealTimer {
            token,
            _handle: handle,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Silences further ticks. The host timer stays registered until drop.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl<H> Drop for RevealTimer<H> {
    fn drop(&mut self) {
        // The handle field is dropped right after, releasing the host timer.
        self.cancel();
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct Slot {
        period_ms: u32,
        live: Rc<Cell<bool>>,
        tick: Box<dyn FnMut()>,
    }

    /// Deterministic clock: ticks fire only when the test advances it.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    pub struct ManualHandle {
        live: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let live = Rc::new(Cell::new(true));
            self.slots.borrow_mut().push(Slot {
                period_ms,
                live: Rc::clone(&live),
                tick,
            });
            ManualHandle { live }
        }
    }

    impl ManualScheduler {
        /// Fires every live timer `ticks` times.
        pub fn advance(&self, ticks: usize) {
            for _ in 0..ticks {
                self.fire(false);
            }
        }

        /// Fires every timer ever scheduled, released or not, once. Models a
        /// host tick that was already queued when the handle went away.
        pub fn fire_stale(&self) {
            self.fire(true);
        }

        fn fire(&self, include_released: bool) {
            let mut slots = self.slots.borrow_mut();
            for slot in slots.iter_mut() {
                if include_released || slot.live.get() {
                    (slot.tick)();
                }
            }
        }

        pub fn scheduled(&self) -> usize {
            self.slots.borrow().len()
        }

        pub fn live(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.live.get()).count()
        }

        pub fn periods(&self) -> Vec<u32> {
            self.slots.borrow().iter().map(|s| s.period_ms).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{ManualHandle, ManualScheduler};
    use super::*;

    fn counting_timer(
        clock: &ManualScheduler,
        stop_after: usize,
    ) -> (RevealTimer<ManualHandle>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let timer = RevealTimer::start(clock, 100, move || {
            seen.set(seen.get() + 1);
            if seen.get() >= stop_after {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        (timer, count)
    }

    #[test]
    fn ticks_until_callback_breaks() {
        let clock = ManualScheduler::default();
        let (timer, count) = counting_timer(&clock, 3);

        clock.advance(2);
        assert!(timer.is_active());
        clock.advance(5);
        assert_eq!(count.get(), 3);
        assert!(!timer.is_active());
        assert_eq!(clock.periods(), vec![100]);
    }

    #[test]
    fn drop_releases_handle_and_silences_ticks() {
        let clock = ManualScheduler::default();
        let (timer, count) = counting_timer(&clock, 10);

        clock.advance(1);
        drop(timer);
        assert_eq!(clock.live(), 0);

        clock.advance(3);
        clock.fire_stale();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn explicit_cancel_stops_ticks_while_handle_is_held() {
        let clock = ManualScheduler::default();
        let (timer, count) = counting_timer(&clock, 10);

        clock.advance(2);
        timer.cancel();
        assert!(!timer.is_active());
        assert_eq!(clock.live(), 1);

        clock.advance(4);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn token_is_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }
}
