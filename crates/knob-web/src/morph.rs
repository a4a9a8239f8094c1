//! Frame-driven hover morph.
//!
//! Hovering the target or dragging the knob eases the morph toward 1;
//! leaving and releasing eases it back. Each retarget replaces the pending
//! animation frame, which cancels the previous tween's callback.

use crate::dom::drop_later;
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use knob_core::MorphState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct MorphLoop {
    state: MorphState,
    frame: Option<AnimationFrame>,
    apply: Box<dyn Fn(f64)>,
}

pub struct HoverMorph {
    state: Rc<RefCell<MorphLoop>>,
    _hover: [EventListener; 2],
}

/// Weak handle for knob listeners.
#[derive(Clone)]
pub struct MorphHandle(Weak<RefCell<MorphLoop>>);

impl HoverMorph {
    /// `apply` receives eased progress in `[0, 1]` once per frame while moving.
    pub fn new(target: &web::Element, apply: impl Fn(f64) + 'static) -> Self {
        let state = Rc::new(RefCell::new(MorphLoop {
            state: MorphState::new(Instant::now()),
            frame: None,
            apply: Box::new(apply),
        }));
        let hover = |event: &'static str, hovered: bool| {
            let weak = Rc::downgrade(&state);
            EventListener::new(target, event, move |_| {
                if let Some(state) = weak.upgrade() {
                    retarget(&state, |s, now| s.set_hovered(hovered, now));
                }
            })
        };
        let listeners = [hover("mouseenter", true), hover("mouseleave", false)];
        Self {
            state,
            _hover: listeners,
        }
    }

    pub fn handle(&self) -> MorphHandle {
        MorphHandle(Rc::downgrade(&self.state))
    }

    pub fn progress(&self) -> f64 {
        self.state.borrow().state.tween().progress_at(Instant::now())
    }
}

impl MorphHandle {
    pub fn set_dragging(&self, dragging: bool) {
        if let Some(state) = self.0.upgrade() {
            retarget(&state, |s, now| s.set_dragging(dragging, now));
        }
    }
}

fn retarget(
    cell: &Rc<RefCell<MorphLoop>>,
    f: impl FnOnce(&mut MorphState, Instant) -> Option<u64>,
) {
    let mut l = cell.borrow_mut();
    if let Some(generation) = f(&mut l.state, Instant::now()) {
        log::trace!(
            "[morph] retarget to {} (gen {})",
            l.state.tween().target(),
            generation
        );
        // replacing the handle cancels the superseded frame
        l.frame = Some(schedule(cell, generation));
    }
}

fn schedule(cell: &Rc<RefCell<MorphLoop>>, generation: u64) -> AnimationFrame {
    let weak = Rc::downgrade(cell);
    request_animation_frame(move |_ts| {
        let Some(cell) = weak.upgrade() else {
            return;
        };
        let mut l = cell.borrow_mut();
        if l.state.tween().generation() != generation {
            return;
        }
        let now = Instant::now();
        let progress = l.state.tween().progress_at(now);
        (l.apply)(progress);
        let next = if l.state.tween().is_settled_at(now) {
            None
        } else {
            Some(schedule(&cell, generation))
        };
        let finished = std::mem::replace(&mut l.frame, next);
        drop(l);
        drop_later(finished);
    })
}
