pub mod base;
pub mod canvas;
pub mod driver;
