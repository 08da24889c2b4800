pub mod element;
pub mod factory;
