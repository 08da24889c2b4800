use std::fmt;

use svg::Node as _;
use svg::node::element::Element as SvgElement;

use crate::{animation::ease::Ease, foundation::core::fmt_num};

/// What an animation mutates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A presentation attribute such as `fill` or `opacity`.
    Attribute(String),
    Transform(TransformKind),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(name) => f.write_str(name),
            Self::Transform(kind) => write!(f, "transform({})", kind.name()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Scale,
    Rotate,
}

impl TransformKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Rotate => "rotate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Indefinite,
    Count(u32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub dur_secs: f64,
    pub repeat: Repeat,
}

impl Timing {
    /// Loops forever with the given period.
    pub fn looping(dur_secs: f64) -> Self {
        Self {
            dur_secs,
            repeat: Repeat::Indefinite,
        }
    }
}

/// How the viewer moves between keyframe values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolation {
    /// Straight interpolation through evenly spaced keyframes.
    Linear,
    /// Same keyframes, each interval shaped by an easing curve.
    Eased(Ease),
}

/// Declarative time-driven mutation attached to an element.
///
/// Serialized as SMIL (`<animate>` / `<animateTransform>`); nothing is
/// evaluated here, the downstream viewer plays it.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub target: Target,
    /// Keyframe values, evenly spaced over the duration.
    pub values: Vec<String>,
    pub timing: Timing,
    pub interpolation: Interpolation,
}

impl Animation {
    pub fn attribute(name: impl Into<String>, values: Vec<String>, timing: Timing) -> Self {
        Self {
            target: Target::Attribute(name.into()),
            values,
            timing,
            interpolation: Interpolation::Linear,
        }
    }

    pub fn transform(kind: TransformKind, values: Vec<String>, timing: Timing) -> Self {
        Self {
            target: Target::Transform(kind),
            values,
            timing,
            interpolation: Interpolation::Linear,
        }
    }

    pub fn eased(mut self, ease: Ease) -> Self {
        self.interpolation = Interpolation::Eased(ease);
        self
    }

    fn key_times(&self) -> String {
        let n = self.values.len();
        if n < 2 {
            return "0".to_owned();
        }
        let last = (n - 1) as f64;
        (0..n)
            .map(|i| fmt_num(i as f64 / last))
            .collect::<Vec<_>>()
            .join(";")
    }

    pub(crate) fn to_node(&self) -> SvgElement {
        let mut node = match &self.target {
            Target::Attribute(name) => {
                let mut n = SvgElement::new("animate");
                n.assign("attributeName", name.as_str());
                n
            }
            Target::Transform(kind) => {
                let mut n = SvgElement::new("animateTransform");
                n.assign("attributeName", "transform");
                n.assign("attributeType", "XML");
                n.assign("type", kind.name());
                n
            }
        };

        node.assign("values", self.values.join(";"));
        node.assign("dur", format!("{}s", fmt_num(self.timing.dur_secs)));
        node.assign(
            "repeatCount",
            match self.timing.repeat {
                Repeat::Indefinite => "indefinite".to_owned(),
                Repeat::Count(n) => n.to_string(),
            },
        );

        if let Interpolation::Eased(ease) = self.interpolation {
            let segments = self.values.len().saturating_sub(1);
            if segments > 0 {
                if let Some(splines) = ease.key_splines(segments) {
                    node.assign("calcMode", "spline");
                    node.assign("keyTimes", self.key_times());
                    node.assign("keySplines", splines);
                }
            }
        }
        node
    }
}

/// Render numeric keyframes.
pub fn num_values(values: &[f64]) -> Vec<String> {
    values.iter().map(|v| fmt_num(*v)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
