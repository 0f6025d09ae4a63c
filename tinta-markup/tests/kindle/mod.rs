//! Kindle backend tests
//!
//! Inline expansion and code block dispatch with the e-reader rule set.

mod code;
mod parser;
