use rand::Rng;

use crate::foundation::error::{BurstError, BurstResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Half-open interval `[min, max)` sampled uniformly by the generation policy.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span<T> {
    /// Inclusive lower bound.
    pub min: T,
    /// Exclusive upper bound.
    pub max: T,
}

impl<T> Span<T>
where
    T: PartialOrd + Copy + std::fmt::Debug,
{
    /// Create a validated span with `min < max`.
    pub fn new(min: T, max: T) -> BurstResult<Self> {
        let span = Self { min, max };
        span.validate("span")?;
        Ok(span)
    }

    /// Return `true` when no value satisfies `min <= v < max`.
    pub fn is_empty(self) -> bool {
        // NaN bounds compare false both ways and count as empty.
        !(self.min < self.max)
    }

    /// Return `true` when `v` is inside `[min, max)`.
    pub fn contains(self, v: T) -> bool {
        self.min <= v && v < self.max
    }

    pub(crate) fn validate(self, what: &str) -> BurstResult<()> {
        if self.is_empty() {
            return Err(BurstError::config(format!(
                "{what} must satisfy min < max (got {:?}..{:?})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Span<f64> {
    /// Sample uniformly; the upper bound is never returned.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..self.max)
    }
}

impl Span<u32> {
    /// Sample uniformly; the upper bound is never returned.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..self.max)
    }
}

/// Format a coordinate or scalar for markup: three decimals at most, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // Avoids "-0".
        return "0".to_owned();
    }
    format!("{rounded}")
}

/// Format a point list the way SVG `points` attributes expect (`x,y x,y ...`).
pub fn fmt_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
