//! HTML backend tests

mod document;
mod idempotence;
mod inline;
