use std::fmt;

use rand::{Rng, seq::SliceRandom};
use svg::Node as _;
use svg::node::element::Element as SvgElement;

use crate::{
    compose::canvas::{Canvas, IdScope},
    foundation::config::TileSizes,
    foundation::core::fmt_num,
    paint::color::{Color, random_color},
};

/// Id of a definition registered on one [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefId {
    pub scope: IdScope,
    pub index: u32,
}

impl DefId {
    pub fn new(scope: IdScope, index: u32) -> Self {
        Self { scope, index }
    }
}

impl fmt::Display for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}fill{}", self.scope, self.index)
    }
}

/// Paint applied to an element's `fill`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Solid(Color),
    /// Reference to a gradient or pattern on the owning canvas.
    Def(DefId),
}

impl Fill {
    pub fn def_id(self) -> Option<DefId> {
        match self {
            Self::Solid(_) => None,
            Self::Def(id) => Some(id),
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(c) => write!(f, "{c}"),
            Self::Def(id) => write!(f, "url(#{id})"),
        }
    }
}

/// Reusable paint server stored in the canvas `<defs>`.
#[derive(Clone, Debug, PartialEq)]
pub enum FillDef {
    /// Two stops, offsets 0 and 1.
    LinearGradient { from: Color, to: Color },
    Pattern(PatternTile),
}

/// Square `userSpaceOnUse` tile: solid background plus one motif.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternTile {
    pub size: f64,
    pub background: Color,
    pub motif: Motif,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motif {
    /// Dot in the tile's top-left corner, half a tile across.
    Dot { color: Color },
    /// Horizontal stroke across the middle.
    Stripe { color: Color, width: f64 },
    /// Quadratic wave through the middle, unfilled.
    Wave { color: Color, width: f64 },
}

impl FillDef {
    pub(crate) fn to_node(&self, id: DefId) -> SvgElement {
        match self {
            Self::LinearGradient { from, to } => {
                let mut g = SvgElement::new("linearGradient");
                g.assign("id", id.to_string());
                g.append(stop("0", *from));
                g.append(stop("1", *to));
                g
            }
            Self::Pattern(tile) => {
                let size = fmt_num(tile.size);
                let mut p = SvgElement::new("pattern");
                p.assign("id", id.to_string());
                p.assign("x", "0");
                p.assign("y", "0");
                p.assign("width", size.clone());
                p.assign("height", size.clone());
                p.assign("patternUnits", "userSpaceOnUse");

                let mut bg = SvgElement::new("rect");
                bg.assign("width", size.clone());
                bg.assign("height", size);
                bg.assign("fill", tile.background.to_string());
                p.append(bg);
                p.append(tile.motif_node());
                p
            }
        }
    }
}

impl PatternTile {
    fn motif_node(&self) -> SvgElement {
        let s = self.size;
        let half = s / 2.0;
        match self.motif {
            Motif::Dot { color } => {
                let r = half / 2.0;
                let mut c = SvgElement::new("circle");
                c.assign("r", fmt_num(r));
                c.assign("cx", fmt_num(r));
                c.assign("cy", fmt_num(r));
                c.assign("fill", color.to_string());
                c
            }
            Motif::Stripe { color, width } => {
                let mut l = SvgElement::new("line");
                l.assign("x1", "0");
                l.assign("y1", fmt_num(half));
                l.assign("x2", fmt_num(s));
                l.assign("y2", fmt_num(half));
                l.assign("stroke", color.to_string());
                l.assign("stroke-width", fmt_num(width));
                l
            }
            Motif::Wave { color, width } => {
                let mut p = SvgElement::new("path");
                p.assign("d", wave_path(s));
                p.assign("fill", "none");
                p.assign("stroke", color.to_string());
                p.assign("stroke-width", fmt_num(width));
                p
            }
        }
    }
}

fn stop(offset: &str, color: Color) -> SvgElement {
    let mut s = SvgElement::new("stop");
    s.assign("offset", offset);
    s.assign("stop-color", color.to_string());
    s
}

/// `M 0 30 Q 30 60 60 30 T 120 30` for a 60 unit tile.
pub(crate) fn wave_path(size: f64) -> String {
    let h = fmt_num(size / 2.0);
    let s = fmt_num(size);
    let s2 = fmt_num(size * 2.0);
    format!("M 0 {h} Q {h} {s} {s} {h} T {s2} {h}")
}

/// Registers a two-stop linear gradient with random colors.
pub fn create_gradient<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R) -> Fill {
    let from = random_color(rng);
    let to = random_color(rng);
    Fill::Def(canvas.register_def(FillDef::LinearGradient { from, to }))
}

/// Dot tile (20 units by default).
pub fn create_pattern<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R, tiles: &TileSizes) -> Fill {
    let background = random_color(rng);
    let motif = Motif::Dot {
        color: random_color(rng),
    };
    register_tile(canvas, tiles.dots, background, motif)
}

/// Stripe tile (40 units by default).
pub fn create_stripe_pattern<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rng: &mut R,
    tiles: &TileSizes,
) -> Fill {
    let background = random_color(rng);
    let motif = Motif::Stripe {
        color: random_color(rng),
        width: 5.0,
    };
    register_tile(canvas, tiles.stripes, background, motif)
}

/// Wave tile (60 units by default).
pub fn create_wave_pattern<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rng: &mut R,
    tiles: &TileSizes,
) -> Fill {
    let background = random_color(rng);
    let motif = Motif::Wave {
        color: random_color(rng),
        width: 4.0,
    };
    register_tile(canvas, tiles.waves, background, motif)
}

fn register_tile(canvas: &mut Canvas, size: f64, background: Color, motif: Motif) -> Fill {
    Fill::Def(canvas.register_def(FillDef::Pattern(PatternTile {
        size,
        background,
        motif,
    })))
}

/// The fill choices shared by every filled shape kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillStrategy {
    Solid,
    Gradient,
    Dots,
    Stripes,
    Waves,
}

impl FillStrategy {
    pub const ALL: [Self; 5] = [
        Self::Solid,
        Self::Gradient,
        Self::Dots,
        Self::Stripes,
        Self::Waves,
    ];

    pub fn apply<R: Rng + ?Sized>(self, canvas: &mut Canvas, rng: &mut R, tiles: &TileSizes) -> Fill {
        match self {
            Self::Solid => Fill::Solid(random_color(rng)),
            Self::Gradient => create_gradient(canvas, rng),
            Self::Dots => create_pattern(canvas, rng, tiles),
            Self::Stripes => create_stripe_pattern(canvas, rng, tiles),
            Self::Waves => create_wave_pattern(canvas, rng, tiles),
        }
    }
}

/// Uniformly picks a [`FillStrategy`] and applies it.
pub fn random_fill<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R, tiles: &TileSizes) -> Fill {
    let strategy = FillStrategy::ALL
        .choose(rng)
        .copied()
        .unwrap_or(FillStrategy::Solid);
    strategy.apply(canvas, rng, tiles)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/fill.rs"]
mod tests;
