/// Slot for the slider's repeating timer. Holds at most one handle; dropping
/// a handle cancels its timer, so replacing or clearing the slot is the only
/// way timers stop.
#[derive(Debug)]
pub struct Autoplay<H> {
    handle: Option<H>,
}

impl<H> Default for Autoplay<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Autoplay<H> {
    /// Starts a fresh timer from `spawn`. A timer that is already running is
    /// cancelled first, never left alongside the new one.
    pub fn start(&mut self, spawn: impl FnOnce() -> H) {
        self.stop();
        self.handle = Some(spawn());
    }

    /// Cancels the running timer. Returns whether there was one.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::carousel::mode::{CarouselAction, ModeController};
    use crate::carousel::navigator::SlideNavigator;

    struct Scheduled {
        id: usize,
        period: u32,
        due: u32,
        tick: Rc<RefCell<dyn FnMut()>>,
    }

    /// Hand-cranked stand-in for the browser's interval timers.
    #[derive(Default)]
    struct FakeTimers {
        now: Cell<u32>,
        next_id: Cell<usize>,
        scheduled: RefCell<Vec<Scheduled>>,
    }

    struct FakeHandle {
        id: usize,
        timers: Rc<FakeTimers>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.timers.scheduled.borrow_mut().retain(|s| s.id != self.id);
        }
    }

    impl FakeTimers {
        fn every(self: &Rc<Self>, period: u32, tick: impl FnMut() + 'static) -> FakeHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.scheduled.borrow_mut().push(Scheduled {
                id,
                period,
                due: self.now.get() + period,
                tick: Rc::new(RefCell::new(tick)),
            });
            FakeHandle { id, timers: Rc::clone(self) }
        }

        fn live(&self) -> usize {
            self.scheduled.borrow().len()
        }

        fn advance(&self, millis: u32) {
            let target = self.now.get() + millis;
            loop {
                let tick = {
                    let mut scheduled = self.scheduled.borrow_mut();
                    let Some(next) = scheduled.iter_mut().filter(|s| s.due <= target).min_by_key(|s| s.due) else {
                        break;
                    };
                    self.now.set(next.due);
                    next.due += next.period;
                    Rc::clone(&next.tick)
                };
                let mut tick = tick.borrow_mut();
                (*tick)();
            }
            self.now.set(target);
        }
    }

    fn sliding_carousel(cards: usize) -> Rc<RefCell<ModeController>> {
        let mut carousel = ModeController::new(768.0, cards);
        carousel.evaluate(500.0);
        Rc::new(RefCell::new(carousel))
    }

    fn resume(autoplay: &mut Autoplay<FakeHandle>, timers: &Rc<FakeTimers>, carousel: &Rc<RefCell<ModeController>>) {
        let carousel = Rc::clone(carousel);
        autoplay.start(|| timers.every(5000, move || {
            carousel.borrow_mut().apply(CarouselAction::Next);
        }));
    }

    fn current(carousel: &Rc<RefCell<ModeController>>) -> Option<usize> {
        carousel.borrow().slider().map(SlideNavigator::current)
    }

    #[test]
    fn advances_every_interval() {
        let timers = Rc::new(FakeTimers::default());
        let carousel = sliding_carousel(4);
        let mut autoplay = Autoplay::default();

        resume(&mut autoplay, &timers, &carousel);
        timers.advance(4999);
        assert_eq!(current(&carousel), Some(0));
        timers.advance(1);
        assert_eq!(current(&carousel), Some(1));
        timers.advance(15000);
        assert_eq!(current(&carousel), Some(0));
    }

    #[test]
    fn hover_cancels_and_leave_resumes() {
        let timers = Rc::new(FakeTimers::default());
        let carousel = sliding_carousel(4);
        let mut autoplay = Autoplay::default();
        resume(&mut autoplay, &timers, &carousel);

        // pointer enters
        assert!(autoplay.stop());
        assert_eq!(timers.live(), 0);
        timers.advance(5000);
        assert_eq!(current(&carousel), Some(0));

        // pointer leaves
        resume(&mut autoplay, &timers, &carousel);
        assert_eq!(timers.live(), 1);
        timers.advance(5000);
        assert_eq!(current(&carousel), Some(1));
    }

    #[test]
    fn restarting_never_stacks_timers() {
        let timers = Rc::new(FakeTimers::default());
        let carousel = sliding_carousel(4);
        let mut autoplay = Autoplay::default();

        resume(&mut autoplay, &timers, &carousel);
        resume(&mut autoplay, &timers, &carousel);
        resume(&mut autoplay, &timers, &carousel);
        assert_eq!(timers.live(), 1);

        timers.advance(5000);
        assert_eq!(current(&carousel), Some(1));
    }

    #[test]
    fn dropping_the_slot_cancels_the_timer() {
        let timers = Rc::new(FakeTimers::default());
        let carousel = sliding_carousel(3);
        let mut autoplay = Autoplay::default();
        resume(&mut autoplay, &timers, &carousel);

        drop(autoplay);
        assert_eq!(timers.live(), 0);
    }

    #[test]
    fn stopping_an_idle_slot_is_harmless() {
        let mut autoplay: Autoplay<FakeHandle> = Autoplay::default();
        assert!(!autoplay.stop());
    }
}
