use super::Skin;
use crate::constants::*;
use crate::knob::KnobInput;
use crate::svg::{self, DefsRegistry, Gradient, GradientStop};
use knob_core::geometry::{ring_path, rotate_about_center};
use knob_core::{
    palette, KnobConfig, KnobError, Renderer, Rgb, RingType, STANDARD_DIAL_RADIUS,
    STANDARD_DOT_OFFSET, STANDARD_DOT_RADIUS, STANDARD_RING_RADIUS, STANDARD_RING_STROKE,
    VIEWBOX_CENTER,
};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardKnobOptions {
    pub indicator_dot: bool,
    pub ring_type: RingType,
    pub color: Rgb,
}

impl Default for StandardKnobOptions {
    fn default() -> Self {
        Self {
            indicator_dot: true,
            ring_type: RingType::Positive,
            color: palette::DEFAULT,
        }
    }
}

/// Dark dial inside a colored value ring, with an optional indicator dot.
pub struct StandardKnob {
    options: StandardKnobOptions,
    ring: Option<web::Element>,
    dot: Option<web::Element>,
}

impl StandardKnob {
    pub fn new(options: StandardKnobOptions) -> Self {
        Self {
            options,
            ring: None,
            dot: None,
        }
    }

    pub fn mount(
        container: &web::Element,
        config: KnobConfig,
        options: StandardKnobOptions,
        defs: &mut DefsRegistry,
    ) -> Result<KnobInput, KnobError> {
        KnobInput::with_skin(container, config, Self::new(options), defs)
    }

    fn ring_radius() -> f64 {
        STANDARD_RING_RADIUS - 0.5 * STANDARD_RING_STROKE
    }
}

impl Skin for StandardKnob {
    fn build(
        &mut self,
        document: &web::Document,
        defs: &mut DefsRegistry,
    ) -> Result<web::Element, KnobError> {
        let c = VIEWBOX_CENTER;
        let color = self.options.color;

        let glow = defs.blur_filter("filter__fl-standard-knob__focus-indicator-glow", 2.0)?;
        let soft_shadow = defs.gradient(
            "grad__fl-standard-knob__soft-shadow",
            Gradient::Radial {
                cx: 0.5,
                cy: 0.5,
                r: 0.5,
                focus: None,
            },
            &[
                GradientStop::faded(85.0, Rgb(SHADOW_DARK), 0.4),
                GradientStop::faded(100.0, Rgb(SHADOW_DARK), 0.0),
            ],
        )?;
        let vertical = Gradient::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 1.0,
        };
        let dial_base = defs.gradient(
            "grad__fl-standard-knob__dial-base",
            vertical,
            &[
                GradientStop::solid(0.0, Rgb(DIAL_LIGHT)),
                GradientStop::solid(100.0, Rgb(DIAL_DARK)),
            ],
        )?;
        let highlight = defs.gradient(
            "grad__fl-standard-knob__dial-highlight",
            vertical,
            &[
                GradientStop::faded(0.0, Rgb(HIGHLIGHT), 1.0),
                GradientStop::faded(40.0, Rgb(HIGHLIGHT), 0.0),
                GradientStop::faded(55.0, Rgb(HIGHLIGHT), 0.0),
                GradientStop::faded(100.0, Rgb(HIGHLIGHT), 0.3),
            ],
        )?;

        let focus_indicator = svg::circle(document, c, c, STANDARD_RING_RADIUS)?
            .class("fl-standard-knob__focus-indicator")
            .attr("fill", color)
            .attr("filter", &glow)
            .build();
        let ring_bg = svg::circle(document, c, c, STANDARD_RING_RADIUS)?
            .class("fl-standard-knob__indicator-ring-bg")
            .attr("fill", Rgb(RING_BG_FILL))
            .attr("stroke", Rgb(OUTLINE_DARK))
            .attr("strokeWidth", STANDARD_RING_STROKE)
            .build();
        let ring = svg::path(document, "M20,20Z")?
            .class("fl-standard-knob__indicator-ring")
            .attr("fill", color)
            .build();

        let mut dial = svg::group(document)?
            .class("fl-standard-knob__dial")
            .child(
                &svg::circle(document, c, c, STANDARD_DIAL_RADIUS + 2.0)?
                    .class("fl-standard-knob__dial-soft-shadow")
                    .attr("fill", &soft_shadow)
                    .build(),
            )
            .child(
                &svg::ellipse(
                    document,
                    c,
                    c + 2.0,
                    STANDARD_DIAL_RADIUS,
                    STANDARD_DIAL_RADIUS + 0.5,
                )?
                .class("fl-standard-knob__dial-hard-shadow")
                .attr("fill", Rgb(SHADOW_DARK))
                .attr("opacity", 0.15)
                .build(),
            )
            .child(
                &svg::circle(document, c, c, STANDARD_DIAL_RADIUS)?
                    .class("fl-standard-knob__dial-base")
                    .attr("fill", &dial_base)
                    .attr("stroke", Rgb(SHADOW_DARK))
                    .attr("strokeWidth", 1.5)
                    .build(),
            )
            .child(
                &svg::circle(document, c, c, STANDARD_DIAL_RADIUS - 1.0)?
                    .class("fl-standard-knob__dial-highlight-stroke")
                    .attr("stroke", &highlight)
                    .attr("strokeWidth", 1.5)
                    .build(),
            )
            .child(
                &svg::circle(document, c, c, STANDARD_DIAL_RADIUS)?
                    .class("fl-standard-knob__dial-highlight")
                    .attr("fill", Rgb(WHITE))
                    .build(),
            );
        if self.options.indicator_dot {
            let dot = svg::circle(document, c, c + STANDARD_DOT_OFFSET, STANDARD_DOT_RADIUS)?
                .class("fl-standard-knob__indicator-dot")
                .attr("fill", color)
                .build();
            dial = dial.child(&dot);
            self.dot = Some(dot);
        }

        let root = svg::knob_svg(document, "fl-standard-knob__svg")?
            .child(&focus_indicator)
            .child(&ring_bg)
            .child(&ring)
            .child(&dial.build())
            .build();
        self.ring = Some(ring);
        Ok(root)
    }

    fn container_class(&self) -> Option<&'static str> {
        Some(STANDARD_KNOB_CLASS)
    }
}

impl Renderer for StandardKnob {
    fn update(&mut self, norm: f64, _value: f64) {
        if let Some(ring) = &self.ring {
            let d = ring_path(self.options.ring_type, Self::ring_radius(), norm);
            _ = ring.set_attribute("d", &d);
        }
        if let Some(dot) = &self.dot {
            _ = dot.set_attribute("transform", &rotate_about_center(360.0 * norm));
        }
    }
}
