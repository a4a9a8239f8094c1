// Host-side tests for the headless knob and its event contract.

use glam::DVec2;
use knob_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Recorder {
    updates: Vec<(f64, f64)>,
    marks: Vec<(Marker, bool)>,
}

impl Renderer for Recorder {
    fn update(&mut self, norm: f64, value: f64) {
        self.updates.push((norm, value));
    }

    fn mark(&mut self, marker: Marker, active: bool) {
        self.marks.push((marker, active));
    }
}

fn percent_knob() -> Knob<Recorder> {
    let cfg = KnobConfig {
        min: 0.0,
        max: 100.0,
        initial: Some(50.0),
        ..Default::default()
    };
    Knob::new(&cfg, Recorder::default()).expect("valid config")
}

fn mouse_start(y: f64) -> Gesture {
    Gesture::Start {
        source: DragSource::Mouse,
        pos: DVec2::new(0.0, y),
        center: DVec2::ZERO,
    }
}

fn mouse_move(y: f64) -> Gesture {
    Gesture::Move {
        source: DragSource::Mouse,
        pos: DVec2::new(0.0, y),
        primary_held: true,
    }
}

fn mouse_end(y: f64) -> Gesture {
    Gesture::End {
        source: DragSource::Mouse,
        pos: DVec2::new(0.0, y),
    }
}

#[test]
fn construction_renders_initial_value() {
    let knob = percent_knob();
    assert_eq!(knob.renderer().updates, vec![(0.5, 50.0)]);
    assert_eq!(knob.value(), 50.0);
}

#[test]
fn construction_rejects_invalid_config() {
    let cfg = KnobConfig {
        min: 5.0,
        max: 5.0,
        ..Default::default()
    };
    assert!(matches!(
        Knob::new(&cfg, NullRenderer),
        Err(KnobError::InvalidRange { .. })
    ));
}

#[test]
fn full_drag_emits_final_change_before_drag_end() {
    let mut knob = percent_knob();
    knob.take_events();

    knob.handle(mouse_start(100.0));
    assert_eq!(knob.take_events().as_slice(), &[KnobEvent::DragStart]);
    assert!(knob.is_dragging());

    knob.handle(mouse_move(70.0));
    assert_eq!(
        knob.take_events().as_slice(),
        &[KnobEvent::Change { value: 60.0 }]
    );

    knob.handle(mouse_end(70.0));
    assert_eq!(
        knob.take_events().as_slice(),
        &[KnobEvent::Change { value: 60.0 }, KnobEvent::DragEnd]
    );
    assert_eq!(knob.value(), 60.0);
    assert_eq!(
        knob.renderer().marks,
        vec![(Marker::Drag, true), (Marker::Drag, false)]
    );
}

#[test]
fn superseding_gesture_ends_old_drag_without_change() {
    let mut knob = percent_knob();
    knob.handle(mouse_start(100.0));
    knob.handle(mouse_move(70.0));
    knob.take_events();

    knob.handle(Gesture::Start {
        source: DragSource::Touch(4),
        pos: DVec2::new(0.0, 0.0),
        center: DVec2::ZERO,
    });
    assert_eq!(
        knob.take_events().as_slice(),
        &[KnobEvent::DragEnd, KnobEvent::DragStart]
    );
    assert_eq!(knob.value(), 60.0);
}

#[test]
fn wheel_emits_exactly_one_change() {
    let mut knob = percent_knob();
    knob.take_events();
    knob.handle(Gesture::Wheel { delta_y: 100.0 });
    assert_eq!(
        knob.take_events().as_slice(),
        &[KnobEvent::Change { value: 47.5 }]
    );
    assert!(!knob.is_dragging());
}

#[test]
fn reset_during_drag_ends_drag_then_changes() {
    let mut knob = percent_knob();
    knob.handle(mouse_start(100.0));
    knob.handle(mouse_move(10.0));
    knob.take_events();

    knob.handle(Gesture::Reset);
    assert_eq!(
        knob.take_events().as_slice(),
        &[KnobEvent::DragEnd, KnobEvent::Change { value: 50.0 }]
    );
    assert_eq!(knob.value(), 50.0);
    assert!(!knob.is_dragging());
}

#[test]
fn ignored_input_emits_nothing() {
    let mut knob = percent_knob();
    knob.take_events();
    let updates_before = knob.renderer().updates.len();
    knob.handle(mouse_move(0.0));
    knob.handle(mouse_end(0.0));
    assert!(knob.take_events().is_empty());
    assert_eq!(knob.renderer().updates.len(), updates_before);
}

#[test]
fn set_value_renders_and_notifies() {
    let mut knob = percent_knob();
    knob.take_events();
    assert_eq!(knob.set_value(140.0), 100.0);
    assert_eq!(
        knob.take_events().as_slice(),
        &[KnobEvent::Change { value: 100.0 }]
    );
    assert_eq!(knob.renderer().updates.last(), Some(&(1.0, 100.0)));
}

#[test]
fn focus_marker_toggles_once_per_change() {
    let mut knob = percent_knob();
    knob.set_focus(true);
    knob.set_focus(true);
    knob.set_focus(false);
    assert_eq!(
        knob.renderer().marks,
        vec![(Marker::Focus, true), (Marker::Focus, false)]
    );
    assert!(!knob.is_focused());
}

#[test]
fn listeners_receive_only_their_kind() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let listeners = RefCell::new(Listeners::default());
    let s = seen.clone();
    listeners.borrow_mut().add(EventKind::Change, move |ev| {
        if let KnobEvent::Change { value } = ev {
            s.borrow_mut().push(*value);
        }
    });
    let ends = Rc::new(RefCell::new(0));
    let e = ends.clone();
    listeners
        .borrow_mut()
        .add(EventKind::DragEnd, move |_| *e.borrow_mut() += 1);

    let mut knob = percent_knob();
    knob.handle(mouse_start(100.0));
    knob.handle(mouse_move(97.0));
    knob.handle(mouse_end(94.0));
    dispatch(&listeners, &knob.take_events());

    assert_eq!(*seen.borrow(), vec![51.0, 52.0]);
    assert_eq!(*ends.borrow(), 1);
}

#[test]
fn removed_listener_is_not_called() {
    let count = Rc::new(RefCell::new(0));
    let listeners = RefCell::new(Listeners::default());
    let c = count.clone();
    let id = listeners
        .borrow_mut()
        .add(EventKind::Change, move |_| *c.borrow_mut() += 1);
    assert!(listeners.borrow_mut().remove(id));
    assert!(!listeners.borrow_mut().remove(id));
    assert!(listeners.borrow().is_empty());

    dispatch(&listeners, &[KnobEvent::Change { value: 1.0 }]);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn listener_may_register_during_dispatch() {
    let listeners = Rc::new(RefCell::new(Listeners::default()));
    let inner = listeners.clone();
    listeners.borrow_mut().add(EventKind::DragStart, move |_| {
        inner.borrow_mut().add(EventKind::DragEnd, |_| {});
    });
    dispatch(&listeners, &[KnobEvent::DragStart]);
    assert_eq!(listeners.borrow().len(), 2);
}

#[test]
fn event_kind_names_match_dom_events() {
    assert_eq!(EventKind::Change.as_str(), "change");
    assert_eq!(KnobEvent::DragStart.kind().as_str(), "knobdragstart");
    assert_eq!(KnobEvent::DragEnd.kind().as_str(), "knobdragend");
}
