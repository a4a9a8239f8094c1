use crate::knob::{EventKind, KnobEvent};
use smallvec::SmallVec;
use std::rc::Rc;

/// Handle returned by [`Listeners::add`]; pass it back to detach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

pub type Callback = Rc<dyn Fn(&KnobEvent)>;

/// Registry of knob event callbacks.
///
/// Callbacks are handed out as cloned `Rc`s so the caller can release any
/// borrow on the knob before invoking them; a callback is then free to read
/// or write the knob it listens to.
#[derive(Default)]
pub struct Listeners {
    next_id: u32,
    entries: SmallVec<[(ListenerId, EventKind, Callback); 4]>,
}

impl Listeners {
    pub fn add(&mut self, kind: EventKind, callback: impl Fn(&KnobEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, kind, Rc::new(callback)));
        id
    }

    /// Returns false when `id` was not registered (already removed).
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _, _)| *eid != id);
        self.entries.len() != before
    }

    pub fn matching(&self, kind: EventKind) -> SmallVec<[Callback; 4]> {
        self.entries
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, cb)| cb.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deliver `events` in order. Takes the registry by `RefCell` so no borrow is
/// held while user callbacks run.
pub fn dispatch(listeners: &std::cell::RefCell<Listeners>, events: &[KnobEvent]) {
    for ev in events {
        let callbacks = listeners.borrow().matching(ev.kind());
        for cb in callbacks {
            cb(ev);
        }
    }
}
