use std::fmt;

use svg::Node as _;
use svg::node::element::Element as SvgElement;

use crate::{
    animation::anim::Animation,
    compose::canvas::ElementId,
    foundation::core::{Point, Rect, Vec2, fmt_num, fmt_points},
    foundation::error::{BurstError, BurstResult},
    paint::color::{Color, Pivot},
    paint::fill::Fill,
};

/// The primitive kinds the shape registry knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rect,
    Hexagon,
    Line,
    Triangle,
    Ellipse,
}

impl ShapeKind {
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Rect,
        Self::Hexagon,
        Self::Line,
        Self::Triangle,
        Self::Ellipse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Hexagon => "hexagon",
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape geometry in canvas units.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Circle { center: Point, radius: f64 },
    Rect(Rect),
    Ellipse { center: Point, radii: Vec2 },
    Line { from: Point, to: Point },
    Polygon(Vec<Point>),
}

impl Geometry {
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle { center, radius } => {
                Rect::from_center_size(*center, (radius * 2.0, radius * 2.0))
            }
            Self::Rect(r) => *r,
            Self::Ellipse { center, radii } => {
                Rect::from_center_size(*center, (radii.x * 2.0, radii.y * 2.0))
            }
            Self::Line { from, to } => Rect::from_points(*from, *to),
            Self::Polygon(points) => match points.split_first() {
                Some((first, rest)) => rest
                    .iter()
                    .fold(Rect::from_points(*first, *first), |bb, p| bb.union_pt(*p)),
                None => Rect::ZERO,
            },
        }
    }

    pub fn translate(&mut self, by: Vec2) {
        match self {
            Self::Circle { center, .. } | Self::Ellipse { center, .. } => *center += by,
            Self::Rect(r) => *r = *r + by,
            Self::Line { from, to } => {
                *from += by;
                *to += by;
            }
            Self::Polygon(points) => {
                for p in points.iter_mut() {
                    *p += by;
                }
            }
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Rect(_) => "rect",
            Self::Ellipse { .. } => "ellipse",
            Self::Line { .. } => "line",
            Self::Polygon(_) => "polygon",
        }
    }

    fn assign_attrs(&self, node: &mut SvgElement) {
        match self {
            Self::Circle { center, radius } => {
                node.assign("cx", fmt_num(center.x));
                node.assign("cy", fmt_num(center.y));
                node.assign("r", fmt_num(*radius));
            }
            Self::Rect(r) => {
                node.assign("x", fmt_num(r.x0));
                node.assign("y", fmt_num(r.y0));
                node.assign("width", fmt_num(r.width()));
                node.assign("height", fmt_num(r.height()));
            }
            Self::Ellipse { center, radii } => {
                node.assign("cx", fmt_num(center.x));
                node.assign("cy", fmt_num(center.y));
                node.assign("rx", fmt_num(radii.x));
                node.assign("ry", fmt_num(radii.y));
            }
            Self::Line { from, to } => {
                node.assign("x1", fmt_num(from.x));
                node.assign("y1", fmt_num(from.y));
                node.assign("x2", fmt_num(to.x));
                node.assign("y2", fmt_num(to.y));
            }
            Self::Polygon(points) => {
                node.assign("points", fmt_points(points));
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// One drawn primitive plus its paint and animations.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
    /// Transform origin for scale/rotate animations.
    pub pivot: Option<Pivot>,
    animations: Vec<Animation>,
}

impl Element {
    pub fn new(kind: ShapeKind, geometry: Geometry) -> Self {
        Self {
            kind,
            geometry,
            fill: None,
            stroke: None,
            opacity: 1.0,
            pivot: None,
            animations: Vec::new(),
        }
    }

    /// Move so the top-left corner of the bounding box lands on `to`.
    pub fn move_to(&mut self, to: Point) {
        let origin = self.geometry.bounding_box().origin();
        self.geometry.translate(to - origin);
    }

    /// Attach an animation. One animation per target; a second one for the
    /// same attribute or transform type is rejected.
    pub fn animate(&mut self, animation: Animation) -> BurstResult<()> {
        if self
            .animations
            .iter()
            .any(|a| a.target == animation.target)
        {
            return Err(BurstError::compose(format!(
                "{} already animates {}",
                self.kind, animation.target
            )));
        }
        self.animations.push(animation);
        Ok(())
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub(crate) fn to_node(&self, id: ElementId) -> SvgElement {
        let mut node = SvgElement::new(self.geometry.tag());
        node.assign("id", id.to_string());
        self.geometry.assign_attrs(&mut node);
        if let Some(fill) = self.fill {
            node.assign("fill", fill.to_string());
        }
        if let Some(stroke) = self.stroke {
            node.assign("stroke", stroke.color.to_string());
            node.assign("stroke-width", fmt_num(stroke.width));
        }
        node.assign("opacity", fmt_num(self.opacity));
        if let Some(pivot) = self.pivot {
            node.assign(
                "style",
                format!("transform-box:fill-box;transform-origin:{pivot}"),
            );
        }
        for anim in &self.animations {
            node.append(anim.to_node());
        }
        node
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/element.rs"]
mod tests;
