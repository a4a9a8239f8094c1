use super::labeled_knob;
use crate::dom::{dom_err, div};
use crate::skins::{GripDialOptions, ReactiveGripDial};
use crate::svg::DefsRegistry;
use knob_core::{palette, KnobConfig, KnobError};
use web_sys as web;

pub struct ModWheelsDemo {
    pub dials: Vec<ReactiveGripDial>,
}

pub fn setup(
    document: &web::Document,
    parent: &web::HtmlElement,
    defs: &mut DefsRegistry,
) -> Result<ModWheelsDemo, KnobError> {
    let panel = div(document, "mod-wheels")?;
    parent.append_child(&panel).map_err(dom_err)?;

    let wheels = [
        (
            "env",
            "Env",
            GripDialOptions {
                indicator_color: Some(palette::VOLUME),
                guide_ticks: 7,
                grip_bumps: 3,
                grip_extrusion: 0.1,
                ..Default::default()
            },
        ),
        (
            "cut",
            "Cut",
            GripDialOptions {
                indicator_color: Some(palette::MOD_X),
                ..Default::default()
            },
        ),
        (
            "res",
            "Res",
            GripDialOptions {
                indicator_color: Some(palette::MOD_Y),
                ..Default::default()
            },
        ),
    ];

    let mut dials = Vec::with_capacity(wheels.len());
    for (key, label, options) in wheels {
        let (control, knob_el) = labeled_knob(
            document,
            "mod-wheels__control",
            "mod-wheels__knob",
            "mod-wheels__label",
            key,
            label,
        )?;
        panel.append_child(&control).map_err(dom_err)?;
        dials.push(ReactiveGripDial::mount(
            &knob_el,
            KnobConfig::default(),
            options,
            defs,
        )?);
    }
    log::info!("[demo] mod wheels ready ({} dials)", dials.len());
    Ok(ModWheelsDemo { dials })
}
