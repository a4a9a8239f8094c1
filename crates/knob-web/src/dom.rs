use glam::DVec2;
use knob_core::KnobError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn dom_err(e: JsValue) -> KnobError {
    KnobError::Dom(format!("{:?}", e))
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

pub fn div(document: &web::Document, class: &str) -> Result<web::Element, KnobError> {
    let el = document.create_element("div").map_err(dom_err)?;
    el.set_class_name(class);
    Ok(el)
}

/// Inline style property on either an HTML or an SVG element.
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    let style = if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        html.style()
    } else if let Some(svg) = el.dyn_ref::<web::SvgElement>() {
        svg.style()
    } else {
        return;
    };
    _ = style.set_property(property, value);
}

#[inline]
pub fn contains(outer: &web::Element, inner: &web::Element) -> bool {
    let node: &web::Node = inner;
    outer.contains(Some(node))
}

/// Top-left corner of the element's border box in client coordinates.
pub fn element_origin(el: &web::Element) -> DVec2 {
    let rect = el.get_bounding_client_rect();
    DVec2::new(rect.left(), rect.top())
}

pub fn element_center(el: &web::Element) -> DVec2 {
    let rect = el.get_bounding_client_rect();
    DVec2::new(
        rect.left() + 0.5 * rect.width(),
        rect.top() + 0.5 * rect.height(),
    )
}

#[inline]
pub fn mouse_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
pub fn touch_pos(touch: &web::Touch) -> DVec2 {
    DVec2::new(touch.client_x() as f64, touch.client_y() as f64)
}

pub fn find_touch(list: &web::TouchList, id: i32) -> Option<web::Touch> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .find(|t| t.identifier() == id)
}

pub fn last_touch(list: &web::TouchList) -> Option<web::Touch> {
    list.length().checked_sub(1).and_then(|i| list.item(i))
}

/// Drops `value` after the current event callback has returned.
pub fn drop_later<T: 'static>(value: T) {
    spawn_local(async move { drop(value) });
}
