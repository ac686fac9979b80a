// Bookkeeping for the single outstanding animation-frame callback.
// Restart cancels the pending handle before scheduling its replacement, so
// rapid resize events can never stack a second tick loop on top of the
// first.

#[derive(Default)]
pub struct FrameHandle {
    pending: Option<i32>,
}

impl FrameHandle {
    pub fn new() -> FrameHandle {
        FrameHandle { pending: None }
    }

    /// Cancels any outstanding callback, then schedules the next one.
    pub fn restart<C, S>(&mut self, cancel: C, schedule: S)
    where
        C: FnOnce(i32),
        S: FnOnce() -> i32,
    {
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
        self.pending = Some(schedule());
    }

    /// Records the handle the currently running tick scheduled for the
    /// next frame.
    pub fn store(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// Takes the pending handle so the caller can cancel it.
    pub fn clear(&mut self) -> Option<i32> {
        self.pending.take()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::FrameHandle;
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct FakeScheduler {
        next: i32,
        active: HashSet<i32>,
    }

    impl FakeScheduler {
        fn new() -> FakeScheduler {
            FakeScheduler {
                next: 0,
                active: HashSet::new(),
            }
        }

        fn schedule(&mut self) -> i32 {
            self.next += 1;
            self.active.insert(self.next);
            self.next
        }

        fn cancel(&mut self, handle: i32) {
            self.active.remove(&handle);
        }
    }

    #[test]
    fn starting_twice_leaves_a_single_active_callback() {
        let scheduler = RefCell::new(FakeScheduler::new());
        let mut frame = FrameHandle::new();

        for _ in 0..2 {
            frame.restart(
                |handle| scheduler.borrow_mut().cancel(handle),
                || scheduler.borrow_mut().schedule(),
            );
        }

        let scheduler = scheduler.into_inner();
        assert_eq!(scheduler.active.len(), 1);
        // The survivor is the most recently scheduled callback.
        assert!(scheduler.active.contains(&2));
        assert!(frame.is_scheduled());
    }

    #[test]
    fn clear_hands_back_the_pending_handle_once() {
        let mut frame = FrameHandle::new();
        frame.store(7);

        assert_eq!(frame.clear(), Some(7));
        assert_eq!(frame.clear(), None);
        assert!(!frame.is_scheduled());
    }

    #[test]
    fn restart_on_an_idle_handle_cancels_nothing() {
        let scheduler = RefCell::new(FakeScheduler::new());
        let mut frame = FrameHandle::new();

        frame.restart(
            |_| panic!("nothing should be cancelled on first start"),
            || scheduler.borrow_mut().schedule(),
        );

        assert_eq!(scheduler.into_inner().active.len(), 1);
    }
}
