pub mod anim;
pub mod decorate;
pub mod ease;
