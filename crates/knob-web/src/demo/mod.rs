//! Demo panels shown by the bundled page.

pub mod envelope;
pub mod mod_wheels;

use crate::dom::{dom_err, div};
use crate::svg::DefsRegistry;
use knob_core::KnobError;
use web_sys as web;

/// Keeps every demo knob and its listeners alive.
pub struct Demos {
    pub envelope: envelope::EnvelopeDemo,
    pub mod_wheels: mod_wheels::ModWheelsDemo,
}

pub fn setup(document: &web::Document, defs: &mut DefsRegistry) -> Result<Demos, KnobError> {
    let body = document
        .body()
        .ok_or_else(|| KnobError::Dom("document has no body".into()))?;
    let envelope = envelope::setup(document, &body, defs)?;
    let mod_wheels = mod_wheels::setup(document, &body, defs)?;
    Ok(Demos {
        envelope,
        mod_wheels,
    })
}

/// `<div class=control><div class=knob/><div class=label>text</div></div>`;
/// returns `(control, knob)`.
fn labeled_knob(
    document: &web::Document,
    control_class: &str,
    knob_class: &str,
    label_class: &str,
    key: &str,
    text: &str,
) -> Result<(web::Element, web::Element), KnobError> {
    let control = div(document, control_class)?;
    let knob = div(document, knob_class)?;
    _ = knob.set_attribute("data-type", key);
    let label = div(document, label_class)?;
    label.set_text_content(Some(text));
    control.append_child(&knob).map_err(dom_err)?;
    control.append_child(&label).map_err(dom_err)?;
    Ok((control, knob))
}
