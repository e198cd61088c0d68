//! Terminal output helpers

pub mod display;
