#![forbid(unsafe_code)]

pub mod animation;
pub mod batch;
pub mod compose;
pub mod foundation;
pub mod optimize;
pub mod paint;
pub mod shapes;

pub use animation::anim::{Animation, Interpolation, Repeat, Target, Timing, TransformKind};
pub use animation::ease::Ease;
pub use batch::{BatchFailure, BatchOpts, BatchReport, output_file_name, run_batch};
pub use compose::base::BaseImage;
pub use compose::canvas::{Canvas, ElementId, IdScope};
pub use compose::driver::{Composer, GeneratedSvg};
pub use foundation::config::{Config, GenerationConfig};
pub use foundation::core::Span;
pub use foundation::error::{BurstError, BurstResult};
pub use optimize::{Identity, Minifier, MinifyConfig, Optimizer, Pass};
pub use paint::color::{Color, Pivot};
pub use paint::fill::{DefId, Fill, FillDef};
pub use shapes::element::{Element, Geometry, ShapeKind};
pub use shapes::factory::ShapeRegistry;
