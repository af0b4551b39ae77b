use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Coalesces any number of triggers into at most one piece of work per
/// display frame. While a frame is pending further `schedule` calls are ignored.
#[derive(Default)]
pub struct FrameLatch {
    pending: RefCell<Option<AnimationFrame>>,
}

impl FrameLatch {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn schedule<F>(self: &Rc<Self>, work: F)
    where
        F: FnOnce() + 'static,
    {
        if self.is_pending() {
            return;
        }

        let latch = Rc::downgrade(self);
        let handle = request_animation_frame(move |_timestamp| {
            work();
            if let Some(latch) = latch.upgrade() {
                latch.pending.borrow_mut().take();
            }
        });
        *self.pending.borrow_mut() = Some(handle);
    }
}
