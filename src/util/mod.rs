//! Small presentation utilities.

pub mod format;
