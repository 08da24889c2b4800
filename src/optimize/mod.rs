//! Size reduction applied to every document before it is written.

pub mod markup;
pub mod minify;

pub use minify::{Minifier, MinifyConfig, Pass};

use crate::foundation::error::BurstResult;

/// Text in, equivalent text out, never larger.
pub trait Optimizer {
    fn optimize(&self, svg: &str) -> BurstResult<String>;
}

/// Pass-through transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Optimizer for Identity {
    fn optimize(&self, svg: &str) -> BurstResult<String> {
        Ok(svg.to_owned())
    }
}

impl<T: Optimizer + ?Sized> Optimizer for &T {
    fn optimize(&self, svg: &str) -> BurstResult<String> {
        (**self).optimize(svg)
    }
}
