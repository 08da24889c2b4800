use crate::foundation::core::fmt_num;

/// Easing applied between keyframes of a smooth animation.
///
/// SMIL has no named easings, so each curve is emitted as the cubic bezier
/// `keySplines` control points of its usual CSS approximation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// Half-cosine "swing" curve.
    InOutSine,
}

impl Ease {
    /// Control points `x1 y1 x2 y2`; `None` for linear.
    pub fn key_spline(self) -> Option<[f64; 4]> {
        match self {
            Self::Linear => None,
            Self::InQuad => Some([0.55, 0.085, 0.68, 0.53]),
            Self::OutQuad => Some([0.25, 0.46, 0.45, 0.94]),
            Self::InOutQuad => Some([0.455, 0.03, 0.515, 0.955]),
            Self::InCubic => Some([0.55, 0.055, 0.675, 0.19]),
            Self::OutCubic => Some([0.215, 0.61, 0.355, 1.0]),
            Self::InOutCubic => Some([0.645, 0.045, 0.355, 1.0]),
            Self::InOutSine => Some([0.445, 0.05, 0.55, 0.95]),
        }
    }

    /// `keySplines` value for `segments` intervals.
    pub(crate) fn key_splines(self, segments: usize) -> Option<String> {
        let [x1, y1, x2, y2] = self.key_spline()?;
        let one = format!(
            "{} {} {} {}",
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2)
        );
        Some(vec![one; segments].join(";"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
