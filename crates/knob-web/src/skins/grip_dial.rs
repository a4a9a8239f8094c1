//! Grip dial: a chrome-capped dial inside a notched guide ring. While the
//! dial is hovered or dragged its rim morphs into rounded grip bumps.

use super::Skin;
use crate::constants::*;
use crate::knob::KnobInput;
use crate::morph::HoverMorph;
use crate::names::{instance_id, url_ref};
use crate::svg::{self, DefsRegistry, Gradient, GradientStop};
use knob_core::geometry::{
    grip_outline_path, grip_rotation_bounds, guide_ring_path, guide_ticks, polar,
    rotate_about_center,
};
use knob_core::{
    palette, EventKind, KnobConfig, KnobError, ListenerId, Renderer, Rgb, DEFAULT_GRIP_BUMPS,
    DEFAULT_GRIP_EXTRUSION, DEFAULT_GUIDE_TICKS, GRIP_DOT_RADIUS, GRIP_RADIUS,
    VIEWBOX_CENTER,
};
use std::cell::OnceCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GripDialOptions {
    /// Indicator dot color; `None` hides the dot.
    pub indicator_color: Option<Rgb>,
    pub guide_ticks: u32,
    pub grip_bumps: u32,
    /// How far the bumps cut into the rim, in `[0, 1]`.
    pub grip_extrusion: f64,
    /// Rotation at `min`, degrees clockwise from straight down. Defaults to
    /// the first guide notch.
    pub min_rotation: Option<f64>,
    /// Rotation at `max`. Defaults to the last guide notch.
    pub max_rotation: Option<f64>,
}

impl Default for GripDialOptions {
    fn default() -> Self {
        Self {
            indicator_color: Some(palette::DEFAULT),
            guide_ticks: DEFAULT_GUIDE_TICKS,
            grip_bumps: DEFAULT_GRIP_BUMPS,
            grip_extrusion: DEFAULT_GRIP_EXTRUSION,
            min_rotation: None,
            max_rotation: None,
        }
    }
}

impl GripDialOptions {
    pub fn validate(&self) -> Result<(), KnobError> {
        if self.guide_ticks < 2 {
            return Err(KnobError::InvalidGuideTicks(self.guide_ticks));
        }
        if !(0.0..=1.0).contains(&self.grip_extrusion) {
            return Err(KnobError::InvalidExtrusion(self.grip_extrusion));
        }
        for (name, r) in [
            ("min_rotation", self.min_rotation),
            ("max_rotation", self.max_rotation),
        ] {
            if r.is_some_and(|r| !r.is_finite()) {
                return Err(KnobError::NonFiniteOption(name));
            }
        }
        Ok(())
    }

    pub fn rotation_bounds(&self) -> (f64, f64) {
        grip_rotation_bounds(self.guide_ticks, self.min_rotation, self.max_rotation)
    }
}

/// Elements whose outline follows the morph.
struct GripShapes {
    mask_path: web::Element,
    outline: web::Element,
}

pub struct GripDial {
    options: GripDialOptions,
    shapes: Rc<OnceCell<GripShapes>>,
    dot: Option<web::Element>,
}

impl GripDial {
    pub fn new(options: GripDialOptions) -> Self {
        Self {
            options,
            shapes: Rc::new(OnceCell::new()),
            dot: None,
        }
    }

    fn set_rotation(&self, deg: f64) {
        let transform = rotate_about_center(deg);
        if let Some(shapes) = self.shapes.get() {
            _ = shapes.mask_path.set_attribute("transform", &transform);
            _ = shapes.outline.set_attribute("transform", &transform);
        }
        if let Some(dot) = &self.dot {
            _ = dot.set_attribute("transform", &transform);
        }
    }

    fn build_guides(&self, document: &web::Document) -> Result<web::Element, KnobError> {
        let (min_rot, max_rot) = self.options.rotation_bounds();
        let ring = svg::path(document, &guide_ring_path(min_rot, max_rot))?
            .class("fl-reactive-grip-dial__guide-ring")
            .attr("stroke", Rgb(GUIDE_RING))
            .attr("strokeWidth", 3)
            .attr("strokeLinecap", "round")
            .build();
        let mut guides = svg::group(document)?
            .class("fl-reactive-grip-dial__guides")
            .child(&ring);
        for (outer, inner) in guide_ticks(self.options.guide_ticks, min_rot, max_rot) {
            let tick = svg::line(document, outer.x, outer.y, inner.x, inner.y)?
                .class("fl-reactive-grip-dial__guide-tick")
                .attr("stroke", Rgb(OUTLINE_DARK))
                .build();
            guides = guides.child(&tick);
        }
        Ok(guides.build())
    }

    /// One chrome layer: a shaded square with two diagonal glints.
    fn build_chrome_layer(
        document: &web::Document,
        blur_main: &str,
        blur_highlight: &str,
        gradients: &[String; 4],
    ) -> Result<Vec<web::Element>, KnobError> {
        let white = Rgb(WHITE);
        let backing = svg::rect(document, 12.0, 12.0, 16.0, 16.0)?
            .attr("fill", Rgb(CHROME_BASE))
            .build();
        let mut main = svg::group(document)?
            .attr("filter", blur_main)
            .child(&backing);
        let quads = [
            (12.0, 12.0, 8.0, 16.0),
            (20.0, 12.0, 8.0, 16.0),
            (12.0, 12.0, 16.0, 8.0),
            (12.0, 20.0, 16.0, 8.0),
        ];
        for ((x, y, w, h), fill) in quads.into_iter().zip(gradients) {
            main = main.child(&svg::rect(document, x, y, w, h)?.attr("fill", fill).build());
        }
        for (x1, y1, x2, y2) in [(12.0, 28.0, 19.0, 21.0), (21.0, 19.0, 28.0, 12.0)] {
            main = main.child(
                &svg::line(document, x1, y1, x2, y2)?
                    .attr("stroke", white)
                    .attr("strokeOpacity", 0.8)
                    .build(),
            );
        }
        let mut layer = vec![main.build()];
        for (x1, y1, x2, y2) in [(12.0, 28.0, 19.5, 20.5), (20.5, 19.5, 28.0, 12.0)] {
            layer.push(
                svg::line(document, x1, y1, x2, y2)?
                    .attr("stroke", white)
                    .attr("strokeOpacity", 0.5)
                    .attr("strokeWidth", 0.75)
                    .attr("filter", blur_highlight)
                    .build(),
            );
        }
        Ok(layer)
    }

    fn build_chrome(
        &self,
        document: &web::Document,
        defs: &mut DefsRegistry,
    ) -> Result<web::Element, KnobError> {
        let c = VIEWBOX_CENTER;
        let blur_main = defs.blur_filter("filter__fl-reactive-grip-dial__blur-base", 1.5)?;
        let blur_highlight =
            defs.blur_filter("filter__fl-reactive-grip-dial__blur-highlight", 0.5)?;
        let stops = [
            GradientStop::faded(0.0, Rgb(WHITE), 0.0),
            GradientStop::faded(100.0, Rgb(WHITE), 0.12),
        ];
        let linear = |x1, y1, x2, y2| Gradient::Linear { x1, y1, x2, y2 };
        let gradients = [
            defs.gradient(
                "grad__fl-reactive-grip-dial__gradient-a",
                linear(0.0, 0.0, 0.0, 1.0),
                &stops,
            )?,
            defs.gradient(
                "grad__fl-reactive-grip-dial__gradient-b",
                linear(0.0, 1.0, 0.0, 0.0),
                &stops,
            )?,
            defs.gradient(
                "grad__fl-reactive-grip-dial__gradient-c",
                linear(0.0, 0.0, 1.0, 0.0),
                &stops,
            )?,
            defs.gradient(
                "grad__fl-reactive-grip-dial__gradient-d",
                linear(1.0, 0.0, 0.0, 0.0),
                &stops,
            )?,
        ];
        let darken = defs.darken_filter("filter__fl-reactive-grip-dial__darken", 0.75, 0.05)?;
        let base_mask = defs.mask("mask__fl-reactive-grip__chrome-base", |doc| {
            Ok(vec![svg::circle(doc, c, c, 8.0)?.attr("fill", Rgb(WHITE)).build()])
        })?;
        let ridges_mask = defs.mask("mask__fl-reactive-grip__chrome-ridges", |doc| {
            (1..=10)
                .map(|i| -> Result<web::Element, KnobError> {
                    Ok(svg::circle(doc, c, c, i as f64 * 0.75)?
                        .attr("stroke", Rgb(WHITE))
                        .attr("strokeWidth", 0.375)
                        .build())
                })
                .collect()
        })?;

        let layer = || Self::build_chrome_layer(document, &blur_main, &blur_highlight, &gradients);
        let base = svg::group(document)?
            .class("fl-reactive-grip-dial__chrome-base")
            .attr("mask", &base_mask)
            .attr("transform", "rotate(-25 20 20)")
            .children(&layer()?)
            .build();
        let ridges = svg::group(document)?
            .class("fl-reactive-grip-dial__chrome-ridges")
            .attr("mask", &ridges_mask)
            .attr("transform", "rotate(-19 20 20)")
            .attr("filter", &darken)
            .children(&layer()?)
            .build();
        let outline = svg::circle(document, c, c, 8.0)?
            .class("fl-reactive-grip-dial__chrome-outline")
            .attr("stroke", Rgb(OUTLINE_DARK))
            .build();
        let highlight = svg::circle(document, c, c, 7.5)?
            .class("fl-reactive-grip-dial__chrome-highlight")
            .attr("stroke", Rgb(HIGHLIGHT))
            .attr("strokeOpacity", 0.6)
            .build();
        Ok(svg::group(document)?
            .class("fl-reactive-grip-dial__chrome")
            .child(&base)
            .child(&ridges)
            .child(&outline)
            .child(&highlight)
            .build())
    }
}

impl Skin for GripDial {
    fn build(
        &mut self,
        document: &web::Document,
        defs: &mut DefsRegistry,
    ) -> Result<web::Element, KnobError> {
        self.options.validate()?;
        let c = VIEWBOX_CENTER;
        let (min_rot, _) = self.options.rotation_bounds();
        let rest = grip_outline_path(self.options.grip_bumps, self.options.grip_extrusion, 0.0);

        // the grip mask belongs to this instance only
        let mask_id = instance_id("mask__fl-reactive-grip__grip-outline", defs.next_instance());
        let mask_path = svg::path(document, &rest)?
            .class("fl-reactive-grip-dial__grip-mask-path")
            .attr("fill", Rgb(WHITE))
            .build();
        let local_defs = svg::SvgBuilder::new(document, "defs")?
            .child(
                &svg::SvgBuilder::new(document, "mask")?
                    .id(&mask_id)
                    .child(&mask_path)
                    .build(),
            )
            .build();

        let grip_fill = defs.gradient(
            "grad__fl-reactive-grip-dial__grip-fill",
            Gradient::Radial {
                cx: 0.5,
                cy: -0.2,
                r: 1.2,
                focus: Some((0.5, -0.2)),
            },
            &[
                GradientStop::solid(0.0, Rgb(0x8b9499)),
                GradientStop::solid(70.0, Rgb(0x10191e)),
                GradientStop::solid(100.0, Rgb(0x2b3439)),
            ],
        )?;
        let outline = svg::path(document, &rest)?
            .class("fl-reactive-grip-dial__grip-outline")
            .attr("stroke", Rgb(OUTLINE_DARK))
            .attr("strokeWidth", 0.5)
            .build();
        let side = 2.0 * (GRIP_RADIUS + 1.0);
        let mut grip = svg::group(document)?
            .class("fl-reactive-grip-dial__grip")
            .child(
                &svg::rect(document, c - side / 2.0, c - side / 2.0, side, side)?
                    .class("fl-reactive-grip-dial__grip-fill")
                    .attr("fill", &grip_fill)
                    .attr("mask", url_ref(&mask_id))
                    .build(),
            )
            .child(&outline);
        if let Some(color) = self.options.indicator_color {
            let at = polar(GRIP_DOT_RADIUS, min_rot.to_radians());
            let dot = svg::circle(document, at.x, at.y, 1.0)?
                .class("fl-reactive-grip-dial__indicator-dot")
                .attr("fill", color)
                .build();
            grip = grip.child(&dot);
            self.dot = Some(dot);
        }

        let root = svg::knob_svg(document, "fl-reactive-grip-dial__svg")?
            .child(&local_defs)
            .child(&self.build_guides(document)?)
            .child(&grip.build())
            .child(&self.build_chrome(document, defs)?)
            .build();
        _ = self.shapes.set(GripShapes { mask_path, outline });
        Ok(root)
    }

    fn container_class(&self) -> Option<&'static str> {
        Some(GRIP_DIAL_CLASS)
    }
}

impl Renderer for GripDial {
    fn update(&mut self, norm: f64, _value: f64) {
        let (min_rot, max_rot) = self.options.rotation_bounds();
        // the dot already sits at `min_rot`, so only the sweep is applied
        self.set_rotation(norm * (max_rot - min_rot));
    }
}

/// Grip dial wired to its hover/drag morph.
pub struct ReactiveGripDial {
    input: KnobInput,
    _morph: HoverMorph,
    listener_ids: [ListenerId; 2],
}

impl ReactiveGripDial {
    pub fn mount(
        container: &web::Element,
        config: KnobConfig,
        options: GripDialOptions,
        defs: &mut DefsRegistry,
    ) -> Result<Self, KnobError> {
        options.validate()?;
        let skin = GripDial::new(options);
        let shapes = skin.shapes.clone();
        let input = KnobInput::with_skin(container, config, skin, defs)?;

        let (bumps, extrusion) = (options.grip_bumps, options.grip_extrusion);
        let morph = HoverMorph::new(container, move |progress| {
            if let Some(shapes) = shapes.get() {
                let d = grip_outline_path(bumps, extrusion, progress);
                _ = shapes.mask_path.set_attribute("d", &d);
                _ = shapes.outline.set_attribute("d", &d);
            }
        });
        let start = morph.handle();
        let end = morph.handle();
        let listener_ids = [
            input.add_listener(EventKind::DragStart, move |_| start.set_dragging(true)),
            input.add_listener(EventKind::DragEnd, move |_| end.set_dragging(false)),
        ];
        Ok(Self {
            input,
            _morph: morph,
            listener_ids,
        })
    }

    pub fn input(&self) -> &KnobInput {
        &self.input
    }
}

impl Drop for ReactiveGripDial {
    fn drop(&mut self) {
        for id in self.listener_ids {
            self.input.remove_listener(id);
        }
    }
}
