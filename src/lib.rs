//! A CSS pretty-printer and minifier.
//!
//! Stylefmt can be used as both a CLI and a library.
//!
//! # Example
//!
//! ```
//! assert_eq!(
//!     stylefmt::format("a, b { color: red; }"),
//!     "a,\nb {\n    color: red;\n}"
//! );
//!
//! assert_eq!(
//!     stylefmt::minify(":root { --x: 1px; }\na { width: var(--x); }"),
//!     "a{width:1px}"
//! );
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod css;
mod error;
pub mod util;

pub use config::Config;
pub use css::{format, format_with, minify, minify_with, FormatOptions, MinifyOptions};
