// SVG element builders and the shared <defs> registry.

use crate::dom::dom_err;
use crate::names::{darken_matrix, kebab_case, percent, url_ref};
use fnv::FnvHashSet;
use knob_core::geometry::num;
use knob_core::{KnobError, Rgb, VIEWBOX_SIZE};
use std::fmt::Display;
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Chainable attribute writer. Attribute names are given in camelCase and
/// written kebab-cased.
pub struct SvgBuilder {
    el: web::Element,
}

impl SvgBuilder {
    pub fn new(document: &web::Document, tag: &str) -> Result<Self, KnobError> {
        let el = document
            .create_element_ns(Some(SVG_NS), tag)
            .map_err(dom_err)?;
        Ok(Self { el })
    }

    pub fn attr(self, name: &str, value: impl Display) -> Self {
        _ = self.el.set_attribute(&kebab_case(name), &value.to_string());
        self
    }

    pub fn class(self, class: &str) -> Self {
        for c in class.split_whitespace() {
            _ = self.el.class_list().add_1(c);
        }
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.el.set_id(id);
        self
    }

    pub fn child(self, child: &web::Element) -> Self {
        _ = self.el.append_child(child);
        self
    }

    pub fn children<'a>(self, children: impl IntoIterator<Item = &'a web::Element>) -> Self {
        for child in children {
            _ = self.el.append_child(child);
        }
        self
    }

    pub fn build(self) -> web::Element {
        self.el
    }
}

/// Root `<svg>` with the shared knob viewBox.
pub fn knob_svg(document: &web::Document, class: &str) -> Result<SvgBuilder, KnobError> {
    Ok(SvgBuilder::new(document, "svg")?
        .class(class)
        .attr("viewBox", format!("0 0 {VIEWBOX_SIZE} {VIEWBOX_SIZE}")))
}

pub fn group(document: &web::Document) -> Result<SvgBuilder, KnobError> {
    SvgBuilder::new(document, "g")
}

// Shapes default to a transparent fill instead of SVG's black; a later
// `attr("fill", ..)` overrides it.

pub fn rect(
    document: &web::Document,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
) -> Result<SvgBuilder, KnobError> {
    Ok(SvgBuilder::new(document, "rect")?
        .attr("fill", "transparent")
        .attr("x", x)
        .attr("y", y)
        .attr("width", w)
        .attr("height", h))
}

pub fn circle(document: &web::Document, cx: f64, cy: f64, r: f64) -> Result<SvgBuilder, KnobError> {
    Ok(SvgBuilder::new(document, "circle")?
        .attr("fill", "transparent")
        .attr("cx", num(cx))
        .attr("cy", num(cy))
        .attr("r", num(r)))
}

pub fn ellipse(
    document: &web::Document,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
) -> Result<SvgBuilder, KnobError> {
    Ok(SvgBuilder::new(document, "ellipse")?
        .attr("fill", "transparent")
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("rx", rx)
        .attr("ry", ry))
}

pub fn line(
    document: &web::Document,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> Result<SvgBuilder, KnobError> {
    Ok(SvgBuilder::new(document, "line")?
        .attr("x1", num(x1))
        .attr("y1", num(y1))
        .attr("x2", num(x2))
        .attr("y2", num(y2)))
}

pub fn path(document: &web::Document, d: &str) -> Result<SvgBuilder, KnobError> {
    Ok(SvgBuilder::new(document, "path")?
        .attr("fill", "transparent")
        .attr("d", d))
}

#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
    pub offset: f64, // percent
    pub color: Rgb,
    pub opacity: Option<f64>,
}

impl GradientStop {
    pub const fn solid(offset: f64, color: Rgb) -> Self {
        Self {
            offset,
            color,
            opacity: None,
        }
    }

    pub const fn faded(offset: f64, color: Rgb, opacity: f64) -> Self {
        Self {
            offset,
            color,
            opacity: Some(opacity),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gradient {
    Linear { x1: f64, y1: f64, x2: f64, y2: f64 },
    Radial { cx: f64, cy: f64, r: f64, focus: Option<(f64, f64)> },
}

/// Document-wide definitions (gradients, filters, masks) shared by every
/// knob on the page. Each id is created once; later requests return the
/// existing `url(#id)` reference.
pub struct DefsRegistry {
    document: web::Document,
    defs: web::Element,
    defined: FnvHashSet<String>,
    next_instance: u32,
}

impl DefsRegistry {
    pub fn new(document: &web::Document) -> Result<Self, KnobError> {
        let body = document
            .body()
            .ok_or_else(|| KnobError::Dom("document has no body".into()))?;
        let defs = SvgBuilder::new(document, "defs")?
            .id("knob-input-svg-defs")
            .build();
        let svg = SvgBuilder::new(document, "svg")?
            .attr(
                "style",
                "position:absolute;left:0;top:0;width:0;height:0;opacity:0",
            )
            .child(&defs)
            .build();
        body.append_child(&svg).map_err(dom_err)?;
        Ok(Self {
            document: document.clone(),
            defs,
            defined: FnvHashSet::default(),
            next_instance: 0,
        })
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    /// Fresh number for per-instance ids.
    pub fn next_instance(&mut self) -> u32 {
        let n = self.next_instance;
        self.next_instance += 1;
        n
    }

    fn get_or_insert(
        &mut self,
        id: &str,
        build: impl FnOnce(&web::Document) -> Result<web::Element, KnobError>,
    ) -> Result<String, KnobError> {
        if !self.defined.contains(id) {
            let el = build(&self.document)?;
            el.set_id(id);
            self.defs.append_child(&el).map_err(dom_err)?;
            self.defined.insert(id.to_string());
            log::debug!("[defs] defined #{}", id);
        }
        Ok(url_ref(id))
    }

    pub fn gradient(
        &mut self,
        id: &str,
        kind: Gradient,
        stops: &[GradientStop],
    ) -> Result<String, KnobError> {
        self.get_or_insert(id, |doc| {
            let mut el = match kind {
                Gradient::Linear { x1, y1, x2, y2 } => SvgBuilder::new(doc, "linearGradient")?
                    .attr("x1", x1)
                    .attr("y1", y1)
                    .attr("x2", x2)
                    .attr("y2", y2),
                Gradient::Radial { cx, cy, r, focus } => {
                    let b = SvgBuilder::new(doc, "radialGradient")?
                        .attr("cx", cx)
                        .attr("cy", cy)
                        .attr("r", r);
                    match focus {
                        Some((fx, fy)) => b.attr("fx", fx).attr("fy", fy),
                        None => b,
                    }
                }
            }
            .attr("colorInterpolation", "sRGB");
            for stop in stops {
                let mut s = SvgBuilder::new(doc, "stop")?
                    .attr("offset", percent(stop.offset))
                    .attr("stopColor", stop.color);
                if let Some(opacity) = stop.opacity {
                    s = s.attr("stopOpacity", opacity);
                }
                el = el.child(&s.build());
            }
            Ok(el.build())
        })
    }

    pub fn blur_filter(&mut self, id: &str, std_dev: f64) -> Result<String, KnobError> {
        self.get_or_insert(id, |doc| {
            let blur = SvgBuilder::new(doc, "feGaussianBlur")?
                .attr("in", "SourceGraphic")
                .attr("stdDeviation", std_dev)
                .build();
            Ok(filter(doc)?.child(&blur).build())
        })
    }

    pub fn darken_filter(
        &mut self,
        id: &str,
        coeff: f64,
        offset: f64,
    ) -> Result<String, KnobError> {
        self.get_or_insert(id, |doc| {
            let matrix = SvgBuilder::new(doc, "feColorMatrix")?
                .attr("in", "SourceGraphic")
                .attr("type", "matrix")
                .attr("values", darken_matrix(coeff, offset))
                .build();
            Ok(filter(doc)?.child(&matrix).build())
        })
    }

    /// Mask built from the elements returned by `children`; they are only
    /// constructed the first time `id` is requested.
    pub fn mask(
        &mut self,
        id: &str,
        children: impl FnOnce(&web::Document) -> Result<Vec<web::Element>, KnobError>,
    ) -> Result<String, KnobError> {
        self.get_or_insert(id, |doc| {
            let items = children(doc)?;
            Ok(SvgBuilder::new(doc, "mask")?.children(&items).build())
        })
    }
}

fn filter(document: &web::Document) -> Result<SvgBuilder, KnobError> {
    Ok(SvgBuilder::new(document, "filter")?.attr("colorInterpolationFilters", "sRGB"))
}
