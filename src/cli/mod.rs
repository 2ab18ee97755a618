//! Terminal frontend for playing scripts interactively.

pub mod play;
