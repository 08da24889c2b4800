use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Ease,
    foundation::core::{Size, Span},
    foundation::error::{BurstError, BurstResult},
    optimize::MinifyConfig,
    shapes::element::ShapeKind,
};

/// Top-level configuration file layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Composition policy.
    pub generation: GenerationConfig,
    /// Size-reduction passes.
    pub minify: MinifyConfig,
}

impl Config {
    /// Parse a JSON config; omitted fields keep their defaults.
    pub fn from_json_str(s: &str) -> BurstResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| BurstError::config(format!("parse json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> BurstResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> BurstResult<()> {
        self.generation.validate()?;
        self.minify.validate()
    }
}

/// Every tunable of the composition policy.
///
/// Defaults reproduce the classic generator: an 800x800 stage, 8..16 shapes,
/// 5 second animations, 20/40/60 unit pattern tiles and opacity in `[0.4, 1.0)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Output viewport; shape positions are drawn from `[0, width) x [0, height)`.
    pub canvas: Size,
    /// Number of shapes per document.
    pub shape_count: Span<u32>,
    /// Duration of every animation, in seconds.
    pub animation_secs: f64,
    /// Probability used by the optional animation policies.
    pub animation_chance: f64,
    /// Easing of the smooth-interpolation animations.
    pub smooth_ease: Ease,
    pub opacity: Span<f64>,
    pub tiles: TileSizes,
    pub dims: ShapeDims,
    /// Shape kinds the registry draws from.
    pub shapes: Vec<ShapeKind>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(800.0, 800.0),
            shape_count: Span { min: 8, max: 16 },
            animation_secs: 5.0,
            animation_chance: 0.5,
            smooth_ease: Ease::InOutSine,
            opacity: Span { min: 0.4, max: 1.0 },
            tiles: TileSizes::default(),
            dims: ShapeDims::default(),
            shapes: ShapeKind::ALL.to_vec(),
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> BurstResult<()> {
        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        self.shape_count.validate("shape_count")?;
        positive("animation_secs", self.animation_secs)?;
        if !(0.0..=1.0).contains(&self.animation_chance) {
            return Err(BurstError::config("animation_chance must be within [0, 1]"));
        }
        self.opacity.validate("opacity")?;
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(BurstError::config("opacity must be within [0, 1]"));
        }
        self.tiles.validate()?;
        self.dims.validate()?;
        if self.shapes.is_empty() {
            return Err(BurstError::config("shapes must name at least one kind"));
        }
        Ok(())
    }
}

/// Edge length of each square pattern tile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileSizes {
    pub dots: f64,
    pub stripes: f64,
    pub waves: f64,
}

impl Default for TileSizes {
    fn default() -> Self {
        Self {
            dots: 20.0,
            stripes: 40.0,
            waves: 60.0,
        }
    }
}

impl TileSizes {
    fn validate(&self) -> BurstResult<()> {
        positive("tiles.dots", self.dots)?;
        positive("tiles.stripes", self.stripes)?;
        positive("tiles.waves", self.waves)
    }
}

/// Exclusive upper bounds for randomized shape dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeDims {
    pub circle_radius: f64,
    pub rect: Size,
    /// Bounding box of the ellipse; radii are half of it.
    pub ellipse: Size,
    /// Far end of a line is drawn from `[0, line_extent)` on both axes.
    pub line_extent: f64,
    pub line_stroke_width: f64,
}

impl Default for ShapeDims {
    fn default() -> Self {
        Self {
            circle_radius: 100.0,
            rect: Size::new(150.0, 100.0),
            ellipse: Size::new(150.0, 100.0),
            line_extent: 800.0,
            line_stroke_width: 10.0,
        }
    }
}

impl ShapeDims {
    fn validate(&self) -> BurstResult<()> {
        positive("dims.circle_radius", self.circle_radius)?;
        positive("dims.rect.width", self.rect.width)?;
        positive("dims.rect.height", self.rect.height)?;
        positive("dims.ellipse.width", self.ellipse.width)?;
        positive("dims.ellipse.height", self.ellipse.height)?;
        positive("dims.line_extent", self.line_extent)?;
        positive("dims.line_stroke_width", self.line_stroke_width)
    }
}

fn positive(what: &str, v: f64) -> BurstResult<()> {
    if !(v.is_finite() && v > 0.0) {
        return Err(BurstError::config(format!(
            "{what} must be finite and > 0 (got {v})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
