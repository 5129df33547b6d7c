//! Utility functions and structures.

pub mod pipeline;
