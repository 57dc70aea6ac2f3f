use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use log::{debug, info};

use super::machine::{RevealFrame, RevealPhase, Typewriter};
use super::timer::{RevealTimer, Scheduler};

/// One playthrough of the reveal for one string.
///
/// The session pushes a frame to `on_frame` when it starts and after every
/// tick. Empty text never schedules a timer. Dropping the session before the
/// reveal completes cancels the pending ticks.
pub struct RevealSession<H> {
    typewriter: Rc<RefCell<Typewriter>>,
    timer: Option<RevealTimer<H>>,
}

impl<H> RevealSession<H> {
    pub fn start<S, F>(text: &str, scheduler: &S, period_ms: u32, on_frame: F) -> Self
    where
        S: Scheduler<Handle = H>,
        F: Fn(RevealFrame) + 'static,
    {
        let typewriter = Rc::new(RefCell::new(Typewriter::new(text)));
        let initial = typewriter.borrow().frame();
        let empty = typewriter.borrow().is_empty();
        on_frame(initial);

        let timer = if empty {
            None
        } else {
            debug!("typewriter started: {} chars every {}ms", text.chars().count(), period_ms);
            let typewriter = Rc::clone(&typewriter);
            Some(RevealTimer::start(scheduler, period_ms, move || {
                let (phase, frame) = {
                    let mut typewriter = typewriter.borrow_mut();
                    (typewriter.tick(), typewriter.frame())
                };
                on_frame(frame);
                match phase {
                    RevealPhase::Revealing => ControlFlow::Continue(()),
                    RevealPhase::Complete => {
                        info!("typewriter finished");
                        ControlFlow::Break(())
                    }
                }
            }))
        };

        RevealSession { typewriter, timer }
    }

    #[cfg(test)]
    pub fn frame(&self) -> RevealFrame {
        self.typewriter.borrow().frame()
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().map_or(false, RevealTimer::is_active)
    }
}

impl<H> Drop for RevealSession<H> {
    fn drop(&mut self) {
        if self.is_running() {
            let typewriter = self.typewriter.borrow();
            debug!(
                "typewriter torn down at {}/{}",
                typewriter.revealed_len(),
                typewriter.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::timer::testing::ManualScheduler;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(RevealFrame) + 'static) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        (frames, move |frame: RevealFrame| {
            sink.borrow_mut().push(frame.rendered())
        })
    }

    #[test]
    fn hi_plays_out_frame_by_frame() {
        let clock = ManualScheduler::default();
        let (frames, on_frame) = recorder();
        let session = RevealSession::start("Hi", &clock, 100, on_frame);

        assert_eq!(clock.periods(), vec![100]);
        clock.advance(1);
        assert_eq!(frames.borrow().last().map(String::as_str), Some("H|"));
        clock.advance(1);
        assert_eq!(*frames.borrow(), vec!["|", "H|", "Hi"]);
        assert!(!session.is_running());

        clock.advance(5);
        assert_eq!(frames.borrow().len(), 3);
        assert_eq!(session.frame().text, "Hi");
    }

    #[test]
    fn empty_text_schedules_nothing() {
        let clock = ManualScheduler::default();
        let (frames, on_frame) = recorder();
        let session = RevealSession::start("", &clock, 100, on_frame);

        assert_eq!(clock.scheduled(), 0);
        assert!(!session.is_running());
        assert_eq!(*frames.borrow(), vec![""]);
    }

    #[test]
    fn teardown_mid_animation_stops_updates() {
        let clock = ManualScheduler::default();
        let (frames, on_frame) = recorder();
        let session = RevealSession::start("Hello", &clock, 100, on_frame);

        clock.advance(2);
        assert!(session.is_running());
        drop(session);

        let before = frames.borrow().clone();
        clock.advance(10);
        clock.fire_stale();
        assert_eq!(*frames.borrow(), before);
        assert_eq!(before.last().map(String::as_str), Some("He|"));
        assert_eq!(clock.live(), 0);
    }

    #[test]
    fn new_session_replays_from_the_start() {
        let clock = ManualScheduler::default();
        let (frames, on_frame) = recorder();
        let first = RevealSession::start("ab", &clock, 100, on_frame);
        clock.advance(2);
        assert_eq!(first.frame().text, "ab");
        drop(first);

        let (replay, on_frame) = recorder();
        let second = RevealSession::start("ab", &clock, 100, on_frame);
        assert_eq!(second.frame().text, "");
        clock.advance(1);
        assert_eq!(*replay.borrow(), vec!["|", "a|"]);
        assert_eq!(frames.borrow().len(), 3);
    }
}
