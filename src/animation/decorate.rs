//! Decorators that attach one animation each to an existing element.
//!
//! Discrete keyframe decorators use [`Interpolation::Linear`]; [`add_smooth`]
//! emits the same representation with an easing curve.
//!
//! [`Interpolation::Linear`]: crate::animation::anim::Interpolation::Linear

use rand::Rng;

use crate::{
    animation::anim::{Animation, Timing, TransformKind, num_values},
    animation::ease::Ease,
    foundation::error::BurstResult,
    paint::color::{Pivot, random_color, random_pivot},
    shapes::element::Element,
};

/// Scale `1 -> 1.5 -> 1` around a random pivot.
pub fn add_scale<R: Rng + ?Sized>(el: &mut Element, rng: &mut R, dur_secs: f64) -> BurstResult<()> {
    el.pivot = Some(random_pivot(rng));
    el.animate(Animation::transform(
        TransformKind::Scale,
        num_values(&[1.0, 1.5, 1.0]),
        Timing::looping(dur_secs),
    ))
}

/// Full turn around a random pivot.
pub fn add_rotate<R: Rng + ?Sized>(el: &mut Element, rng: &mut R, dur_secs: f64) -> BurstResult<()> {
    el.pivot = Some(random_pivot(rng));
    el.animate(Animation::transform(
        TransformKind::Rotate,
        num_values(&[0.0, 360.0]),
        Timing::looping(dur_secs),
    ))
}

/// Fill cycles through three random colors.
pub fn add_color_cycle<R: Rng + ?Sized>(
    el: &mut Element,
    rng: &mut R,
    dur_secs: f64,
) -> BurstResult<()> {
    let values = (0..3).map(|_| random_color(rng).to_string()).collect();
    el.animate(Animation::attribute("fill", values, Timing::looping(dur_secs)))
}

pub fn add_opacity_pulse(el: &mut Element, dur_secs: f64) -> BurstResult<()> {
    el.animate(Animation::attribute(
        "opacity",
        num_values(&[0.0, 1.0, 0.0]),
        Timing::looping(dur_secs),
    ))
}

pub fn add_stroke_width_pulse(el: &mut Element, dur_secs: f64) -> BurstResult<()> {
    el.animate(Animation::attribute(
        "stroke-width",
        num_values(&[1.0, 10.0, 1.0]),
        Timing::looping(dur_secs),
    ))
}

/// Complementary `rx`/`ry` pulses so the ellipse swaps its aspect ratio.
pub fn add_radius_pulse(el: &mut Element, dur_secs: f64) -> BurstResult<()> {
    el.animate(Animation::attribute(
        "rx",
        num_values(&[10.0, 50.0, 10.0]),
        Timing::looping(dur_secs),
    ))?;
    el.animate(Animation::attribute(
        "ry",
        num_values(&[50.0, 10.0, 50.0]),
        Timing::looping(dur_secs),
    ))
}

/// `x` and `y` each `50 -> 100 -> 50`.
pub fn add_movement(el: &mut Element, dur_secs: f64) -> BurstResult<()> {
    el.animate(Animation::attribute(
        "x",
        num_values(&[50.0, 100.0, 50.0]),
        Timing::looping(dur_secs),
    ))?;
    el.animate(Animation::attribute(
        "y",
        num_values(&[50.0, 100.0, 50.0]),
        Timing::looping(dur_secs),
    ))
}

/// Properties the smooth mechanism can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothKind {
    Scale,
    Rotate,
    ColorChange,
}

/// Eased swing from the current value to a random target and back.
pub fn add_smooth<R: Rng + ?Sized>(
    el: &mut Element,
    kind: SmoothKind,
    rng: &mut R,
    dur_secs: f64,
    ease: Ease,
) -> BurstResult<()> {
    let timing = Timing::looping(dur_secs);
    let anim = match kind {
        SmoothKind::Scale => {
            let to = rng.gen_range(0.5..1.5);
            el.pivot.get_or_insert(CENTER);
            Animation::transform(TransformKind::Scale, num_values(&[1.0, to, 1.0]), timing)
        }
        SmoothKind::Rotate => {
            let to = rng.gen_range(0.0..360.0);
            el.pivot.get_or_insert(CENTER);
            Animation::transform(TransformKind::Rotate, num_values(&[0.0, to, 0.0]), timing)
        }
        SmoothKind::ColorChange => {
            let from = el
                .fill
                .map(|f| f.to_string())
                .unwrap_or_else(|| "#000000".to_owned());
            let to = random_color(rng).to_string();
            Animation::attribute("fill", vec![from.clone(), to, from], timing)
        }
    };
    el.animate(anim.eased(ease))
}

const CENTER: Pivot = Pivot {
    x_pct: 50,
    y_pct: 50,
};

#[cfg(test)]
#[path = "../../tests/unit/animation/decorate.rs"]
mod tests;
