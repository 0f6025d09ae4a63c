//! LaTeX backend tests

mod document;
mod idempotence;
