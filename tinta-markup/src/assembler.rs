//! Chunk dispatch and document assembly
//!
//! The assembler splits a document into chunks, renders each one
//! independently and joins the fragments in source order. A chunk that fails
//! to render never aborts the document: the failure is logged and the chunk's
//! source is emitted as escaped literal text.

use crate::backend::Backend;
use crate::chunks::{split_chunks, Chunk, ChunkKind, SplitContext};
use crate::engine::MarkupEngine;
use crate::error::RenderError;
use crate::highlight::{render_code, PlainHighlighter, SyntaxHighlighter};
use crate::images::{ImageResolver, Layout, NoImages};
use crate::options::Options;
use crate::renderers::{render_image, Element, ImageRequest};

/// Default bound on the size of a single chunk, in bytes
pub const DEFAULT_MAX_CHUNK_BYTES: usize = 1024 * 1024;

pub struct Assembler {
    engine: MarkupEngine,
    layout: Layout,
    highlighter: Box<dyn SyntaxHighlighter>,
    images: Box<dyn ImageResolver>,
    max_chunk_bytes: usize,
}

impl Assembler {
    /// Assembler with the plain highlighter, no image metadata and the
    /// default layout
    pub fn new(engine: MarkupEngine) -> Self {
        let backend = engine.backend();
        Self {
            engine,
            layout: Layout::default(),
            highlighter: Box::new(PlainHighlighter::new(backend)),
            images: Box::new(NoImages),
            max_chunk_bytes: DEFAULT_MAX_CHUNK_BYTES,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_highlighter(mut self, highlighter: impl SyntaxHighlighter + 'static) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    pub fn with_image_resolver(mut self, images: impl ImageResolver + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    pub fn with_max_chunk_bytes(mut self, max_chunk_bytes: usize) -> Self {
        self.max_chunk_bytes = max_chunk_bytes;
        self
    }

    pub fn backend(&self) -> Backend {
        self.engine.backend()
    }

    pub fn engine(&self) -> &MarkupEngine {
        &self.engine
    }

    /// Render a whole document
    pub fn assemble(&self, text: &str) -> String {
        self.assemble_in(text, SplitContext::Document)
    }

    fn assemble_in(&self, text: &str, context: SplitContext) -> String {
        let fragments: Vec<String> = split_chunks(text, context)
            .map(|chunk| {
                self.inject(&chunk).unwrap_or_else(|err| {
                    tracing::warn!(kind = ?chunk.kind, error = %err, "chunk rendered as literal text");
                    self.backend().escape_literal(chunk.source)
                })
            })
            .collect();
        fragments.join("\n")
    }

    /// Render a single chunk
    pub fn inject(&self, chunk: &Chunk<'_>) -> Result<String, RenderError> {
        if chunk.source.len() > self.max_chunk_bytes {
            return Err(RenderError::ChunkTooLarge {
                size: chunk.source.len(),
                limit: self.max_chunk_bytes,
            });
        }

        let backend = self.backend();
        let block = |element: Element, options: &str| {
            element.renderer(backend)(&self.engine.parse(chunk.content), options)
        };

        match chunk.kind {
            ChunkKind::Paragraph => Ok(block(Element::Paragraph, chunk.options)),
            ChunkKind::CenteredParagraph => Ok(block(Element::Center, chunk.options)),
            ChunkKind::ListItem => Ok(block(Element::ListItem, chunk.options)),
            ChunkKind::Quote | ChunkKind::Heading => Ok(self.engine.parse(chunk.content)),
            ChunkKind::List => {
                let items = self.assemble_in(chunk.content, SplitContext::List);
                Ok(Element::List.renderer(backend)(&items, chunk.options))
            }
            ChunkKind::CodeBlock => render_code(
                self.highlighter.as_ref(),
                chunk.content,
                Options::new(chunk.options),
            ),
            ChunkKind::ImageDirective => {
                let metadata = self
                    .images
                    .metadata(chunk.content)
                    .ok_or_else(|| RenderError::ImageUnavailable(chunk.content.to_string()))?;
                let request = ImageRequest::new(chunk.content, metadata, chunk.options);
                Ok(render_image(backend, &request, &self.layout))
            }
        }
    }
}
