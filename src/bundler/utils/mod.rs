//! Path and filesystem helpers.

pub mod fs;
pub mod path;
