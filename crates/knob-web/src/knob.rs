//! DOM-backed knob input.
//!
//! A transparent `<input type="range">` sits over the visual and receives all
//! pointer, wheel and keyboard interaction. Mouse and touch drags attach
//! temporary listeners to `document.body` so tracking continues outside the
//! knob; those are released as soon as the gesture finishes or is replaced.
//! Knob events are delivered to Rust callbacks registered with
//! [`KnobInput::add_listener`], always after the internal state borrow has
//! been released so callbacks may freely call back into the input. The same
//! events are then re-dispatched on the range input as DOM events
//! (`change`, `knobdragstart`, `knobdragend`).

use crate::constants::{CONTAINER_CLASS, INPUT_CLASS, VISUAL_CLASS};
use crate::dom::{
    contains, dom_err, drop_later, element_center, element_origin, find_touch, last_touch,
    mouse_pos, set_class, touch_pos, window_document,
};
use crate::skins::{RotationSkin, Skin};
use crate::svg::DefsRegistry;
use gloo_events::{EventListener, EventListenerOptions};
use glam::DVec2;
use knob_core::{
    dispatch, DragMode, DragSource, EventKind, Gesture, Knob, KnobConfig, KnobError, KnobEvent,
    ListenerId, Listeners, Marker, MarkerClasses, Outcome, Renderer, BODY_DRAG_ACTIVE_CLASS,
};
use smallvec::{smallvec, SmallVec};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

type DragListeners = SmallVec<[EventListener; 3]>;

/// Wraps the skin and mirrors focus/drag markers onto the container and body.
struct DomRenderer {
    skin: Box<dyn Renderer>,
    container: web::Element,
    body: Option<web::HtmlElement>,
    markers: MarkerClasses,
}

impl Renderer for DomRenderer {
    fn update(&mut self, norm: f64, value: f64) {
        self.skin.update(norm, value);
    }

    fn mark(&mut self, marker: Marker, active: bool) {
        match marker {
            Marker::Focus => set_class(&self.container, &self.markers.focus, active),
            Marker::Drag => {
                set_class(&self.container, &self.markers.drag, active);
                if let Some(body) = &self.body {
                    set_class(body, BODY_DRAG_ACTIVE_CLASS, active);
                }
            }
        }
        self.skin.mark(marker, active);
    }
}

struct Inner {
    knob: Knob<DomRenderer>,
    input: web::HtmlInputElement,
    visual: web::Element,
    body: Option<web::HtmlElement>,
    drag_listeners: DragListeners,
}

impl Inner {
    fn center(&self) -> DVec2 {
        match self.knob.controller().mode() {
            DragMode::Angular {
                center: Some(local),
            } => element_origin(&self.visual) + local,
            _ => element_center(&self.visual),
        }
    }

    fn active_touch(&self) -> Option<i32> {
        match self.knob.controller().session()?.source {
            DragSource::Touch(id) => Some(id),
            _ => None,
        }
    }

    fn sync_input(&self) {
        self.input.set_value(&self.knob.value().to_string());
    }

    fn release_drag_listeners(&mut self) {
        let listeners = std::mem::take(&mut self.drag_listeners);
        if !listeners.is_empty() {
            // may be running inside one of these listeners
            drop_later(listeners);
        }
    }
}

struct Shared {
    inner: RefCell<Inner>,
    listeners: RefCell<Listeners>,
}

impl Shared {
    /// Runs `f` against the knob state, then delivers queued events with no
    /// borrow held. `f` must not trigger DOM events synchronously (e.g. focus).
    fn apply<T>(self: &Rc<Self>, f: impl FnOnce(&Rc<Self>, &mut Inner) -> T) -> T {
        let (out, events, input) = {
            let mut inner = self.inner.borrow_mut();
            let out = f(self, &mut inner);
            inner.sync_input();
            (out, inner.knob.take_events(), inner.input.clone())
        };
        dispatch(&self.listeners, &events);
        for event in &events {
            mirror_dom_event(&input, event.kind());
        }
        out
    }

    fn start(self: &Rc<Self>, source: DragSource, pos: DVec2) {
        let input = self.apply(|shared, inner| {
            inner.release_drag_listeners();
            let center = inner.center();
            inner.knob.handle(Gesture::Start {
                source,
                pos,
                center,
            });
            inner.drag_listeners = match (source, inner.body.as_ref()) {
                (DragSource::Mouse, Some(body)) => mouse_drag_listeners(shared, body),
                (DragSource::Touch(_), Some(body)) => touch_drag_listeners(shared, body),
                _ => SmallVec::new(),
            };
            inner.input.clone()
        });
        _ = input.focus();
    }

    /// Wheel, reset and cancel never leave a drag running.
    fn one_shot(self: &Rc<Self>, gesture: Gesture) -> Outcome {
        self.apply(|_, inner| {
            let outcome = inner.knob.handle(gesture);
            inner.release_drag_listeners();
            outcome
        })
    }
}

/// Re-dispatches a knob event on the range input so page scripts can
/// observe it with `addEventListener`.
fn mirror_dom_event(input: &web::HtmlInputElement, kind: EventKind) {
    match web::Event::new(kind.as_str()) {
        Ok(event) => {
            _ = input.dispatch_event(&event);
        }
        Err(e) => log::error!("[knob] failed to create {} event: {:?}", kind.as_str(), e),
    }
}

fn mouse_drag_listeners(shared: &Rc<Shared>, body: &web::HtmlElement) -> DragListeners {
    let weak = Rc::downgrade(shared);
    let on_move = {
        let weak = weak.clone();
        EventListener::new(body, "mousemove", move |event| {
            let (Some(shared), Some(ev)) = (weak.upgrade(), event.dyn_ref::<web::MouseEvent>())
            else {
                return;
            };
            let gesture = Gesture::Move {
                source: DragSource::Mouse,
                pos: mouse_pos(ev),
                primary_held: ev.buttons() & 1 != 0,
            };
            shared.apply(|_, inner| {
                if let Outcome::Finalized { .. } = inner.knob.handle(gesture) {
                    log::debug!("[mouse] drag finalized on move without primary button");
                    inner.release_drag_listeners();
                }
            });
        })
    };
    let on_up = EventListener::new(body, "mouseup", move |event| {
        let (Some(shared), Some(ev)) = (weak.upgrade(), event.dyn_ref::<web::MouseEvent>()) else {
            return;
        };
        let gesture = Gesture::End {
            source: DragSource::Mouse,
            pos: mouse_pos(ev),
        };
        shared.apply(|_, inner| {
            inner.knob.handle(gesture);
            inner.release_drag_listeners();
        });
    });
    smallvec![on_move, on_up]
}

fn touch_drag_listeners(shared: &Rc<Shared>, body: &web::HtmlElement) -> DragListeners {
    let weak = Rc::downgrade(shared);
    let on_move = {
        let weak = weak.clone();
        EventListener::new_with_options(
            body,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let (Some(shared), Some(ev)) =
                    (weak.upgrade(), event.dyn_ref::<web::TouchEvent>())
                else {
                    return;
                };
                shared.apply(|_, inner| {
                    let Some(id) = inner.active_touch() else {
                        return;
                    };
                    ev.prevent_default();
                    if let Some(touch) = find_touch(&ev.changed_touches(), id) {
                        inner.knob.handle(Gesture::Move {
                            source: DragSource::Touch(id),
                            pos: touch_pos(&touch),
                            primary_held: true,
                        });
                    } else if find_touch(&ev.touches(), id).is_none() {
                        log::debug!("[touch] active touch {} vanished; cancelling", id);
                        inner.knob.handle(Gesture::Cancel {
                            source: DragSource::Touch(id),
                        });
                        inner.release_drag_listeners();
                    }
                });
            },
        )
    };
    let on_end = {
        let weak = weak.clone();
        EventListener::new(body, "touchend", move |event| {
            let (Some(shared), Some(ev)) = (weak.upgrade(), event.dyn_ref::<web::TouchEvent>())
            else {
                return;
            };
            shared.apply(|_, inner| {
                let Some(id) = inner.active_touch() else {
                    return;
                };
                if let Some(touch) = find_touch(&ev.changed_touches(), id) {
                    inner.knob.handle(Gesture::End {
                        source: DragSource::Touch(id),
                        pos: touch_pos(&touch),
                    });
                    inner.release_drag_listeners();
                }
            });
        })
    };
    let on_cancel = EventListener::new(body, "touchcancel", move |event| {
        let (Some(shared), Some(ev)) = (weak.upgrade(), event.dyn_ref::<web::TouchEvent>()) else {
            return;
        };
        shared.apply(|_, inner| {
            let Some(id) = inner.active_touch() else {
                return;
            };
            if find_touch(&ev.changed_touches(), id).is_some() {
                inner.knob.handle(Gesture::Cancel {
                    source: DragSource::Touch(id),
                });
                inner.release_drag_listeners();
            }
        });
    });
    smallvec![on_move, on_end, on_cancel]
}

/// A knob bound to a container and a visual element.
pub struct KnobInput {
    shared: Rc<Shared>,
    container: web::Element,
    _handlers: Vec<EventListener>,
}

impl KnobInput {
    /// Binds to existing elements. `visual` must be a descendant of `container`;
    /// `renderer` draws the value onto it (see [`crate::skins::RotationSkin`]).
    pub fn new(
        container: &web::Element,
        visual: &web::Element,
        config: KnobConfig,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, KnobError> {
        if !contains(container, visual) {
            return Err(KnobError::VisualNotContained);
        }
        config.validate()?;
        let document = container
            .owner_document()
            .or_else(window_document)
            .ok_or_else(|| KnobError::Dom("no document".into()))?;
        let body = document.body();

        let input: web::HtmlInputElement = document
            .create_element("input")
            .map_err(dom_err)?
            .dyn_into()
            .map_err(|_| KnobError::Dom("input element has unexpected type".into()))?;
        input.set_type("range");
        input.set_min(&config.min.to_string());
        input.set_max(&config.max.to_string());
        input.set_step(&config.step.attr_value());
        _ = input.class_list().add_1(INPUT_CLASS);

        _ = container.class_list().add_1(CONTAINER_CLASS);
        _ = visual.class_list().add_1(VISUAL_CLASS);
        container.append_child(&input).map_err(dom_err)?;

        let renderer = DomRenderer {
            skin: renderer,
            container: container.clone(),
            body: body.clone(),
            markers: config.markers.clone(),
        };
        let knob = Knob::new(&config, renderer)?;
        let inner = Inner {
            knob,
            input: input.clone(),
            visual: visual.clone(),
            body,
            drag_listeners: SmallVec::new(),
        };
        inner.sync_input();
        let shared = Rc::new(Shared {
            inner: RefCell::new(inner),
            listeners: RefCell::new(Listeners::default()),
        });
        let handlers = input_handlers(&shared, &input);
        log::info!(
            "[knob] mounted range {}..{} at {}",
            config.min,
            config.max,
            shared.inner.borrow().knob.value()
        );
        Ok(Self {
            shared,
            container: container.clone(),
            _handlers: handlers,
        })
    }

    /// Binds with the default renderer, which rotates `visual` through 0..360°.
    pub fn with_rotation(
        container: &web::Element,
        visual: &web::Element,
        config: KnobConfig,
    ) -> Result<Self, KnobError> {
        Self::new(container, visual, config, Box::new(RotationSkin::new(visual)))
    }

    /// Looks both elements up by CSS selector, the visual inside the container.
    pub fn mount(
        document: &web::Document,
        container_selector: &str,
        visual_selector: &str,
        config: KnobConfig,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, KnobError> {
        let container = document
            .query_selector(container_selector)
            .ok()
            .flatten()
            .ok_or(KnobError::MissingContainer)?;
        let visual = container
            .query_selector(visual_selector)
            .ok()
            .flatten()
            .ok_or(KnobError::MissingVisual)?;
        Self::new(&container, &visual, config, renderer)
    }

    /// Builds the skin's visual, appends it to `container` and binds to it.
    pub fn with_skin<S: Skin + 'static>(
        container: &web::Element,
        config: KnobConfig,
        mut skin: S,
        defs: &mut DefsRegistry,
    ) -> Result<Self, KnobError> {
        config.validate()?;
        let document = defs.document().clone();
        let visual = skin.build(&document, defs)?;
        if let Some(class) = skin.container_class() {
            _ = container.class_list().add_1(class);
        }
        container.append_child(&visual).map_err(dom_err)?;
        Self::new(container, &visual, config, Box::new(skin))
    }

    pub fn value(&self) -> f64 {
        self.shared.inner.borrow().knob.value()
    }

    pub fn norm(&self) -> f64 {
        self.shared.inner.borrow().knob.norm()
    }

    /// Clamps, renders and notifies `change` listeners. An in-flight drag
    /// keeps its own base value.
    pub fn set_value(&self, v: f64) -> f64 {
        self.shared.apply(|_, inner| inner.knob.set_value(v))
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.inner.borrow().knob.is_dragging()
    }

    pub fn add_listener(
        &self,
        kind: EventKind,
        callback: impl Fn(&KnobEvent) + 'static,
    ) -> ListenerId {
        self.shared.listeners.borrow_mut().add(kind, callback)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.shared.listeners.borrow_mut().remove(id)
    }

    pub fn focus(&self) {
        let input = self.input();
        _ = input.focus();
    }

    pub fn blur(&self) {
        let input = self.input();
        _ = input.blur();
    }

    pub fn container(&self) -> &web::Element {
        &self.container
    }

    pub fn input(&self) -> web::HtmlInputElement {
        self.shared.inner.borrow().input.clone()
    }
}

type Handler = fn(&Rc<Shared>, &web::Event);

fn bind(weak: &Weak<Shared>, handler: Handler) -> impl FnMut(&web::Event) + 'static {
    let weak = weak.clone();
    move |event: &web::Event| {
        if let Some(shared) = weak.upgrade() {
            handler(&shared, event);
        }
    }
}

fn input_handlers(shared: &Rc<Shared>, input: &web::HtmlInputElement) -> Vec<EventListener> {
    let weak = Rc::downgrade(shared);
    let active = |name: &'static str, handler: Handler| {
        EventListener::new_with_options(
            input,
            name,
            EventListenerOptions::enable_prevent_default(),
            bind(&weak, handler),
        )
    };
    let passive = |name: &'static str, handler: Handler| {
        EventListener::new(input, name, bind(&weak, handler))
    };
    vec![
        active("mousedown", on_mouse_down),
        active("touchstart", on_touch_start),
        active("wheel", on_wheel),
        passive("dblclick", on_double_click),
        passive("focus", on_focus),
        passive("blur", on_blur),
        passive("input", on_input_value),
        passive("change", on_input_value),
    ]
}

fn on_mouse_down(shared: &Rc<Shared>, event: &web::Event) {
    let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
        return;
    };
    match ev.button() {
        0 => {
            ev.prevent_default();
            log::debug!("[mouse] begin drag at ({}, {})", ev.client_x(), ev.client_y());
            shared.start(DragSource::Mouse, mouse_pos(ev));
        }
        1 => {
            ev.prevent_default();
            log::debug!("[mouse] middle click reset");
            shared.one_shot(Gesture::Reset);
        }
        _ => {}
    }
}

fn on_touch_start(shared: &Rc<Shared>, event: &web::Event) {
    let Some(ev) = event.dyn_ref::<web::TouchEvent>() else {
        return;
    };
    ev.prevent_default();
    if let Some(touch) = last_touch(&ev.changed_touches()) {
        log::debug!("[touch] begin drag with touch {}", touch.identifier());
        shared.start(DragSource::Touch(touch.identifier()), touch_pos(&touch));
    }
}

fn on_wheel(shared: &Rc<Shared>, event: &web::Event) {
    let Some(ev) = event.dyn_ref::<web::WheelEvent>() else {
        return;
    };
    ev.prevent_default();
    shared.one_shot(Gesture::Wheel {
        delta_y: ev.delta_y(),
    });
    let input = shared.inner.borrow().input.clone();
    _ = input.focus();
}

fn on_focus(shared: &Rc<Shared>, _event: &web::Event) {
    shared.apply(|_, inner| inner.knob.set_focus(true));
}

fn on_blur(shared: &Rc<Shared>, _event: &web::Event) {
    shared.apply(|_, inner| inner.knob.set_focus(false));
}

fn on_double_click(shared: &Rc<Shared>, _event: &web::Event) {
    shared.one_shot(Gesture::Reset);
}

/// Keyboard and assistive-tech changes arrive through the range input itself.
fn on_input_value(shared: &Rc<Shared>, _event: &web::Event) {
    shared.apply(|_, inner| {
        let v = inner.input.value_as_number();
        if v.is_finite() && v != inner.knob.value() {
            inner.knob.set_value(v);
        }
    });
}
