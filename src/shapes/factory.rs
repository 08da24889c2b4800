use rand::{Rng, RngCore, seq::SliceRandom};

use crate::{
    animation::decorate::{
        SmoothKind, add_opacity_pulse, add_radius_pulse, add_rotate, add_scale, add_smooth,
        add_stroke_width_pulse,
    },
    compose::canvas::Canvas,
    foundation::config::GenerationConfig,
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{BurstError, BurstResult},
    paint::color::{random_color, random_opacity},
    paint::fill::random_fill,
    shapes::element::{Element, Geometry, ShapeKind, Stroke},
};

/// Everything a constructor may touch while building one shape.
pub struct BuildCtx<'a> {
    /// Receives any gradient or pattern the fill needs.
    pub canvas: &'a mut Canvas,
    pub rng: &'a mut dyn RngCore,
    pub config: &'a GenerationConfig,
}

pub type ShapeCtor = fn(&mut BuildCtx<'_>) -> BurstResult<Element>;

/// Lookup table from shape kind to constructor.
#[derive(Clone, Debug)]
pub struct ShapeRegistry {
    entries: Vec<(ShapeKind, ShapeCtor)>,
}

impl ShapeRegistry {
    pub fn standard() -> Self {
        Self {
            entries: ShapeKind::ALL.iter().map(|k| (*k, constructor(*k))).collect(),
        }
    }

    /// Registry restricted to `kinds`, in the given order.
    pub fn with_kinds(kinds: &[ShapeKind]) -> BurstResult<Self> {
        if kinds.is_empty() {
            return Err(BurstError::config("shape registry needs at least one kind"));
        }
        let mut entries: Vec<(ShapeKind, ShapeCtor)> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if entries.iter().all(|(k, _)| k != kind) {
                entries.push((*kind, constructor(*kind)));
            }
        }
        Ok(Self { entries })
    }

    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uniform pick over the registered kinds.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> BurstResult<ShapeKind> {
        self.entries
            .choose(rng)
            .map(|(kind, _)| *kind)
            .ok_or_else(|| BurstError::compose("shape registry is empty"))
    }

    pub fn build(&self, kind: ShapeKind, ctx: &mut BuildCtx<'_>) -> BurstResult<Element> {
        let (_, ctor) = self
            .entries
            .iter()
            .find(|(k, _)| *k == kind)
            .ok_or_else(|| BurstError::compose(format!("no constructor registered for {kind}")))?;
        ctor(ctx)
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn constructor(kind: ShapeKind) -> ShapeCtor {
    match kind {
        ShapeKind::Circle => build_circle,
        ShapeKind::Rect => build_rect,
        ShapeKind::Hexagon => build_hexagon,
        ShapeKind::Line => build_line,
        ShapeKind::Triangle => build_triangle,
        ShapeKind::Ellipse => build_ellipse,
    }
}

const HEXAGON: [(f64, f64); 6] = [
    (50.0, 0.0),
    (100.0, 25.0),
    (100.0, 75.0),
    (50.0, 100.0),
    (0.0, 75.0),
    (0.0, 25.0),
];

const TRIANGLE: [(f64, f64); 3] = [(50.0, 15.0), (100.0, 100.0), (0.0, 100.0)];

fn polygon(points: &[(f64, f64)]) -> Geometry {
    Geometry::Polygon(points.iter().map(|(x, y)| Point::new(*x, *y)).collect())
}

/// Random fill and opacity for a closed shape.
fn filled(ctx: &mut BuildCtx<'_>, kind: ShapeKind, geometry: Geometry) -> Element {
    let mut el = Element::new(kind, geometry);
    el.fill = Some(random_fill(ctx.canvas, ctx.rng, &ctx.config.tiles));
    el.opacity = random_opacity(ctx.rng, ctx.config.opacity);
    el
}

fn chance(ctx: &mut BuildCtx<'_>) -> bool {
    ctx.rng.gen_bool(ctx.config.animation_chance)
}

/// Scale or rotate, evenly split.
fn build_circle(ctx: &mut BuildCtx<'_>) -> BurstResult<Element> {
    let radius = ctx.rng.gen_range(0.0..ctx.config.dims.circle_radius);
    let geometry = Geometry::Circle {
        center: Point::new(radius, radius),
        radius,
    };
    let mut el = filled(ctx, ShapeKind::Circle, geometry);
    let dur = ctx.config.animation_secs;
    if chance(ctx) {
        add_scale(&mut el, ctx.rng, dur)?;
    } else {
        add_rotate(&mut el, ctx.rng, dur)?;
    }
    Ok(el)
}

fn build_rect(ctx: &mut BuildCtx<'_>) -> BurstResult<Element> {
    let max = ctx.config.dims.rect;
    let w = ctx.rng.gen_range(0.0..max.width);
    let h = ctx.rng.gen_range(0.0..max.height);
    let mut el = filled(ctx, ShapeKind::Rect, Geometry::Rect(Rect::new(0.0, 0.0, w, h)));
    add_scale(&mut el, ctx.rng, ctx.config.animation_secs)?;
    Ok(el)
}

fn build_hexagon(ctx: &mut BuildCtx<'_>) -> BurstResult<Element> {
    let mut el = filled(ctx, ShapeKind::Hexagon, polygon(&HEXAGON));
    if chance(ctx) {
        add_smooth(
            &mut el,
            SmoothKind::ColorChange,
            ctx.rng,
            ctx.config.animation_secs,
            ctx.config.smooth_ease,
        )?;
    }
    Ok(el)
}

/// Lines are stroked, never filled.
fn build_line(ctx: &mut BuildCtx<'_>) -> BurstResult<Element> {
    let extent = ctx.config.dims.line_extent;
    let to = Point::new(
        ctx.rng.gen_range(0.0..extent),
        ctx.rng.gen_range(0.0..extent),
    );
    let mut el = Element::new(
        ShapeKind::Line,
        Geometry::Line {
            from: Point::ORIGIN,
            to,
        },
    );
    el.stroke = Some(Stroke {
        color: random_color(ctx.rng),
        width: ctx.rng.gen_range(0.0..ctx.config.dims.line_stroke_width),
    });
    el.opacity = random_opacity(ctx.rng, ctx.config.opacity);
    add_stroke_width_pulse(&mut el, ctx.config.animation_secs)?;
    Ok(el)
}

fn build_triangle(ctx: &mut BuildCtx<'_>) -> BurstResult<Element> {
    let mut el = filled(ctx, ShapeKind::Triangle, polygon(&TRIANGLE));
    if chance(ctx) {
        add_opacity_pulse(&mut el, ctx.config.animation_secs)?;
    }
    Ok(el)
}

fn build_ellipse(ctx: &mut BuildCtx<'_>) -> BurstResult<Element> {
    let max = ctx.config.dims.ellipse;
    let radii = Vec2::new(
        ctx.rng.gen_range(0.0..max.width) / 2.0,
        ctx.rng.gen_range(0.0..max.height) / 2.0,
    );
    let geometry = Geometry::Ellipse {
        center: radii.to_point(),
        radii,
    };
    let mut el = filled(ctx, ShapeKind::Ellipse, geometry);
    if chance(ctx) {
        add_radius_pulse(&mut el, ctx.config.animation_secs)?;
    }
    Ok(el)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/factory.rs"]
mod tests;
