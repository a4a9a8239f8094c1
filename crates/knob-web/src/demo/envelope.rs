//! Envelope panel: six stage knobs and three tension knobs driving an
//! ADSR-style curve. Redraws are coalesced to one per animation frame.

use super::labeled_knob;
use crate::constants::*;
use crate::dom::{dom_err, div};
use crate::frame::FrameScheduler;
use crate::knob::KnobInput;
use crate::skins::{StandardKnob, StandardKnobOptions};
use crate::svg::{self, DefsRegistry, SvgBuilder};
use knob_core::geometry::num;
use knob_core::{
    palette, EnvelopeParams, EventKind, KnobConfig, KnobError, RingType, Rgb, ENVELOPE_HEIGHT,
};
use std::rc::{Rc, Weak};
use web_sys as web;

struct Stage {
    key: &'static str,
    label: &'static str,
    initial: f64,
    tension: Option<f64>, // initial tension, if the stage has one
}

const fn stage(
    key: &'static str,
    label: &'static str,
    initial: f64,
    tension: Option<f64>,
) -> Stage {
    Stage {
        key,
        label,
        initial,
        tension,
    }
}

const STAGES: [Stage; 6] = [
    stage("delay", "Delay", 0.0, None),
    stage("attack", "Att", 40.0, Some(0.0)),
    stage("hold", "Hold", 75.0, None),
    stage("decay", "Dec", 85.0, Some(0.0)),
    stage("sustain", "Sus", 20.0, None),
    stage("release", "Rel", 55.0, Some(-80.0)),
];

/// Stage knobs in `STAGES` order; tension knobs for attack, decay, release.
struct EnvelopeKnobs {
    stages: Vec<KnobInput>,
    tension: Vec<KnobInput>,
}

impl EnvelopeKnobs {
    fn params(&self) -> EnvelopeParams {
        let stage = |i: usize| self.stages[i].value();
        let tension = |i: usize| self.tension[i].value();
        EnvelopeParams {
            delay: stage(0),
            attack: stage(1),
            hold: stage(2),
            decay: stage(3),
            sustain: stage(4),
            release: stage(5),
            attack_tension: tension(0),
            decay_tension: tension(1),
            release_tension: tension(2),
        }
    }
}

#[derive(Clone)]
struct Visualizer {
    shape: web::Element,
    delay: web::Element,
    attack: web::Element,
    hold: web::Element,
    decay: web::Element,
    release: web::Element,
}

impl Visualizer {
    fn draw(&self, params: &EnvelopeParams) {
        let s = params.shape();
        _ = self.shape.set_attribute("d", &s.path);
        _ = self.delay.set_attribute("cx", &num(s.delay_x));
        _ = self.attack.set_attribute("cx", &num(s.attack_x));
        _ = self.hold.set_attribute("cx", &num(s.hold_x));
        _ = self.decay.set_attribute("cx", &num(s.decay_x));
        _ = self.decay.set_attribute("cy", &num(s.sustain_y));
        _ = self.release.set_attribute("cx", &num(s.release_x));
    }
}

pub struct EnvelopeDemo {
    _knobs: Rc<EnvelopeKnobs>,
    _scheduler: FrameScheduler,
}

pub fn setup(
    document: &web::Document,
    parent: &web::HtmlElement,
    defs: &mut DefsRegistry,
) -> Result<EnvelopeDemo, KnobError> {
    let panel = div(document, "fl-envelope")?;
    let (visualizer_el, visualizer) = build_visualizer(document)?;
    let controls = div(document, "fl-envelope__controls")?;
    let tension_row = div(document, "fl-envelope__tension")?;
    panel.append_child(&visualizer_el).map_err(dom_err)?;
    panel.append_child(&controls).map_err(dom_err)?;
    panel.append_child(&tension_row).map_err(dom_err)?;
    parent.append_child(&panel).map_err(dom_err)?;

    let mut stages = Vec::with_capacity(STAGES.len());
    let mut tension = Vec::with_capacity(3);
    let mut prev_had_tension = false;
    for stage in &STAGES {
        let (control, knob_el) = labeled_knob(
            document,
            "fl-demo-knob fl-envelope__control",
            "fl-demo-knob fl-demo-envelope-knob",
            "fl-envelope__label",
            stage.key,
            stage.label,
        )?;
        controls.append_child(&control).map_err(dom_err)?;
        let config = KnobConfig {
            min: 0.0,
            max: 100.0,
            initial: Some(stage.initial),
            ..Default::default()
        };
        stages.push(StandardKnob::mount(
            &knob_el,
            config,
            StandardKnobOptions::default(),
            defs,
        )?);

        match stage.tension {
            Some(initial) => {
                let knob_el = div(document, "fl-demo-knob fl-demo-tension-knob")?;
                _ = knob_el.set_attribute("data-type", stage.key);
                tension_row.append_child(&knob_el).map_err(dom_err)?;
                let config = KnobConfig {
                    min: -100.0,
                    max: 100.0,
                    initial: Some(initial),
                    ..Default::default()
                };
                let options = StandardKnobOptions {
                    indicator_dot: false,
                    ring_type: RingType::Split,
                    ..Default::default()
                };
                tension.push(StandardKnob::mount(&knob_el, config, options, defs)?);
                prev_had_tension = true;
            }
            None => {
                let label = div(document, "fl-envelope__label")?;
                if prev_had_tension {
                    label.set_text_content(Some("Tension"));
                }
                tension_row.append_child(&label).map_err(dom_err)?;
                prev_had_tension = false;
            }
        }
    }

    let knobs = Rc::new(EnvelopeKnobs { stages, tension });
    let weak: Weak<EnvelopeKnobs> = Rc::downgrade(&knobs);
    let scheduler = FrameScheduler::new(move || {
        if let Some(knobs) = weak.upgrade() {
            visualizer.draw(&knobs.params());
        }
    });
    for knob in knobs.stages.iter().chain(&knobs.tension) {
        let scheduler = scheduler.clone();
        knob.add_listener(EventKind::Change, move |_| scheduler.schedule());
    }
    scheduler.schedule();
    log::info!(
        "[demo] envelope panel ready ({} stage knobs, {} tension knobs)",
        knobs.stages.len(),
        knobs.tension.len()
    );
    Ok(EnvelopeDemo {
        _knobs: knobs,
        _scheduler: scheduler,
    })
}

fn build_visualizer(document: &web::Document) -> Result<(web::Element, Visualizer), KnobError> {
    let stroke = palette::DEFAULT;
    let fill = palette::DEFAULT.mix(Rgb(0x000000), ENVELOPE_FILL_DARKEN);
    let point = |cy: f64| -> Result<web::Element, KnobError> {
        Ok(svg::circle(document, 0.0, cy, ENVELOPE_POINT_RADIUS)?
            .attr("stroke", stroke)
            .attr("fill", fill)
            .attr("strokeWidth", ENVELOPE_STROKE_WIDTH)
            .build())
    };
    let vis = Visualizer {
        shape: svg::path(document, "M0,100L0,0")?
            .attr("stroke", stroke)
            .attr("strokeWidth", ENVELOPE_STROKE_WIDTH)
            .build(),
        delay: point(ENVELOPE_HEIGHT)?,
        attack: point(0.0)?,
        hold: point(0.0)?,
        decay: point(ENVELOPE_HEIGHT)?,
        release: point(ENVELOPE_HEIGHT)?,
    };
    let root = SvgBuilder::new(document, "svg")?
        .class("fl-envelope__visualizer-svg")
        .attr("viewBox", ENVELOPE_VIEWBOX)
        .attr("preserveAspectRatio", "xMinYMid slice")
        .children([
            &vis.shape,
            &vis.delay,
            &vis.attack,
            &vis.hold,
            &vis.decay,
            &vis.release,
        ])
        .build();
    let container = div(document, "fl-envelope__visualizer")?;
    container.append_child(&root).map_err(dom_err)?;
    Ok((container, vis))
}
