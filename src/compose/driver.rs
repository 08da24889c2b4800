use rand::Rng;

use crate::{
    compose::base::BaseImage,
    compose::canvas::Canvas,
    foundation::config::GenerationConfig,
    foundation::core::Point,
    foundation::error::BurstResult,
    shapes::element::ShapeKind,
    shapes::factory::{BuildCtx, ShapeRegistry},
};

/// One composed document, before size reduction.
#[derive(Clone, Debug)]
pub struct GeneratedSvg {
    pub markup: String,
    /// Kinds of the shapes drawn, in paint order.
    pub shapes: Vec<ShapeKind>,
}

/// Builds documents from the shared base image and generation policy.
#[derive(Debug)]
pub struct Composer<'a> {
    base: &'a BaseImage,
    config: &'a GenerationConfig,
    registry: ShapeRegistry,
}

impl<'a> Composer<'a> {
    pub fn new(base: &'a BaseImage, config: &'a GenerationConfig) -> BurstResult<Self> {
        config.validate()?;
        let registry = ShapeRegistry::with_kinds(&config.shapes)?;
        Ok(Self {
            base,
            config,
            registry,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        self.config
    }

    /// Compose on a fresh canvas and serialize it.
    ///
    /// Steps: embed the base image, draw a shape count from
    /// `config.shape_count`, then for each shape pick a kind, build it and move
    /// its bounding box corner to a random point on the canvas.
    #[tracing::instrument(skip(self, rng))]
    pub fn generate_one<R: Rng>(&self, rng: &mut R) -> BurstResult<GeneratedSvg> {
        let canvas = self.compose(rng)?;
        let shapes = canvas.elements().iter().map(|(_, el)| el.kind).collect();
        Ok(GeneratedSvg {
            markup: canvas.into_markup(),
            shapes,
        })
    }

    /// Same as [`Composer::generate_one`] but returns the canvas unserialized.
    pub fn compose<R: Rng>(&self, rng: &mut R) -> BurstResult<Canvas> {
        let mut canvas = Canvas::with_base(self.config.canvas, self.base);

        let count = self.config.shape_count.sample(rng);
        let bounds = self.config.canvas;
        for _ in 0..count {
            let kind = self.registry.pick(rng)?;
            let mut ctx = BuildCtx {
                canvas: &mut canvas,
                rng: &mut *rng,
                config: self.config,
            };
            let mut element = self.registry.build(kind, &mut ctx)?;
            element.move_to(Point::new(
                rng.gen_range(0.0..bounds.width),
                rng.gen_range(0.0..bounds.height),
            ));
            let id = canvas.push(element)?;
            tracing::trace!(%id, %kind, "placed shape");
        }
        tracing::debug!(shapes = count, defs = canvas.defs().count(), "composed canvas");
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/driver.rs"]
mod tests;
