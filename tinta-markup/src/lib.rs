//! Tag-dispatch markup engine for the tinta markup language
//!
//!     This crate converts tinta source text into HTML, LaTeX or Kindle fragments. It is a pure
//!     lib: no code here writes to the terminal, reads environment variables or locates files on
//!     its own. Image metadata and syntax highlighting come from collaborators passed in by the
//!     caller (see tinta-cli for the filesystem-backed ones).
//!
//! Architecture
//!
//!     The pipeline is strictly linear:
//!
//!         source text -> chunks -> per-chunk expansion -> renderers -> joined fragments
//!
//!     .
//!     ├── options.rs          # Attribute probes for the text trailing a tag
//!     ├── rules               # Layered TOML rule sources, compiled into the registry
//!     ├── renderers           # One pure function per (element, backend)
//!     ├── chunks.rs           # Block splitter
//!     ├── engine.rs           # Inline expansion over the rule registry
//!     ├── highlight.rs        # Code block highlighting seam
//!     ├── images.rs           # Image metadata seam and page layout
//!     └── assembler.rs        # Chunk dispatch, failure isolation, joining
//!
//! Rules
//!
//!     Inline tags are not hard-coded. Each one is a regex bound to a renderer key in a TOML
//!     rule file (see rules/base.toml). Backends layer their own file over the base one and
//!     users may layer more; an entry replaces any earlier entry with the same key. Patterns
//!     are compiled case-insensitive with `.` matching newlines, and the renderer key is
//!     resolved to a function pointer at load, so a bad rule fails before any text is read.
//!
//! Expansion
//!
//!     Escape rules run first, so literals that collide with markers (`<::`) are neutralized
//!     before any tag can see them. Then the leftmost tag match wins, ties going to the rule
//!     listed first. The match's inner content is expanded before its own renderer runs,
//!     which gives bottom-up nesting without a separate tree.
//!
//! Failure isolation
//!
//!     A chunk that cannot be rendered (missing image metadata, a highlighter failure, an
//!     oversized block) is emitted as escaped source text and logged; the rest of the
//!     document renders normally. Rule loading errors, on the other hand, are fatal.

pub mod assembler;
pub mod backend;
pub mod chunks;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod images;
pub mod options;
pub mod renderers;
pub mod rules;

pub use assembler::Assembler;
pub use backend::Backend;
pub use chunks::{split_chunks, Chunk, ChunkKind, SplitContext};
pub use engine::MarkupEngine;
pub use error::{ConfigError, RenderError};
pub use highlight::{PlainHighlighter, SyntaxHighlighter};
pub use images::{ImageMetadata, ImageResolver, Layout};
pub use options::Options;
pub use rules::{RuleRegistry, RuleSource};

/// Convert a document with the built-in rules and default collaborators
pub fn convert(text: &str, backend: Backend) -> Result<String, ConfigError> {
    let engine = MarkupEngine::for_backend(backend)?;
    Ok(Assembler::new(engine).assemble(text))
}
