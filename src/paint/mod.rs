pub mod color;
pub mod fill;
