use crate::dom::drop_later;
use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;

struct Pending {
    frame: RefCell<Option<AnimationFrame>>,
    draw: Box<dyn Fn()>,
}

/// Coalesces redraw requests: any number of `schedule` calls between two
/// animation frames result in a single `draw`.
#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<Pending>,
}

impl FrameScheduler {
    pub fn new(draw: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(Pending {
                frame: RefCell::new(None),
                draw: Box::new(draw),
            }),
        }
    }

    pub fn schedule(&self) {
        if self.inner.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let frame = request_animation_frame(move |_ts| {
            if let Some(inner) = weak.upgrade() {
                let done = inner.frame.borrow_mut().take();
                (inner.draw)();
                drop_later(done);
            }
        });
        *self.inner.frame.borrow_mut() = Some(frame);
    }
}
