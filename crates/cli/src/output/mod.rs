//! Terminal output helpers

pub mod terminal;
