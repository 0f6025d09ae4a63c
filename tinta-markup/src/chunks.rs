//! Chunk splitter
//!
//! Partitions source text into ordered, typed blocks. Blocks are separated by
//! blank lines and classified by their leading marker:
//!
//! | Marker                       | Kind                  |
//! |------------------------------|-----------------------|
//! | `* ` bullet                  | [`ChunkKind::ListItem`] (one per bullet line) |
//! | `[code opts]`…`[/code]`      | [`ChunkKind::CodeBlock`] |
//! | ```` ```opts ```` fence      | [`ChunkKind::CodeBlock`] |
//! | `[img path opts]`            | [`ChunkKind::ImageDirective`] |
//! | `[list opts]`…`[/list]`      | [`ChunkKind::List`]   |
//! | `[center]`…`[/center]`       | [`ChunkKind::CenteredParagraph`] |
//! | `[quote …]` alone            | [`ChunkKind::Quote`]  |
//! | `[title …]` alone            | [`ChunkKind::Heading`] |
//! | anything else                | [`ChunkKind::Paragraph`] |
//!
//! Delimited blocks may contain blank lines; an unterminated block runs to the
//! end of the input. Every chunk borrows from the input, and the iterator can
//! be cloned to restart a pass from the same point.

use std::iter::FusedIterator;

/// Classification of a block of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    Paragraph,
    CenteredParagraph,
    ListItem,
    List,
    CodeBlock,
    ImageDirective,
    Quote,
    Heading,
}

/// Where the text being split lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitContext {
    #[default]
    Document,
    /// The body of a `[list]` block: plain blocks become list items
    List,
}

/// An independently processed block of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub kind: ChunkKind,
    /// Block body with its markers removed. For images, the image path.
    pub content: &'a str,
    /// Attribute string from the opening marker, empty when there is none
    pub options: &'a str,
    /// The full block as written, markers included
    pub source: &'a str,
}

impl<'a> Chunk<'a> {
    fn new(kind: ChunkKind, content: &'a str, options: &'a str, source: &'a str) -> Self {
        Self {
            kind,
            content,
            options,
            source,
        }
    }
}

/// Split `text` into chunks, lazily
pub fn split_chunks(text: &str, context: SplitContext) -> SplitChunks<'_> {
    SplitChunks {
        text,
        pos: 0,
        context,
    }
}

/// Iterator returned by [`split_chunks`]
#[derive(Debug, Clone)]
pub struct SplitChunks<'a> {
    text: &'a str,
    pos: usize,
    context: SplitContext,
}

impl<'a> Iterator for SplitChunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let text = self.text;
        if self.pos >= text.len() {
            return None;
        }
        if self.pos == 0 && text.trim().is_empty() {
            self.pos = text.len();
            return Some(Chunk::new(ChunkKind::Paragraph, text, "", text));
        }

        // skip blank lines
        loop {
            if self.pos >= text.len() {
                return None;
            }
            let (line, next) = line_at(text, self.pos);
            if !line.trim().is_empty() {
                break;
            }
            self.pos = next;
        }

        let (chunk, end) = read_block(text, self.pos);
        self.pos = end;
        Some(self.contextualize(chunk))
    }
}

impl FusedIterator for SplitChunks<'_> {}

impl SplitChunks<'_> {
    fn contextualize<'a>(&self, mut chunk: Chunk<'a>) -> Chunk<'a> {
        if self.context == SplitContext::List
            && matches!(
                chunk.kind,
                ChunkKind::Paragraph | ChunkKind::Quote | ChunkKind::Heading
            )
        {
            chunk.kind = ChunkKind::ListItem;
        }
        chunk
    }
}

/// Read the block whose first line starts at `start`. Returns the chunk and
/// the offset just past it.
fn read_block(text: &str, start: usize) -> (Chunk<'_>, usize) {
    let (line, _) = line_at(text, start);
    let indent = line.len() - line.trim_start().len();
    let head = line.trim_start();
    let head_start = start + indent;

    if head.starts_with("```") {
        return read_fence(text, start, head_start);
    }
    if let Some(open) = open_tag(head, "code") {
        return read_delimited(text, start, head_start, open, "[/code]", ChunkKind::CodeBlock);
    }
    if let Some(open) = open_tag(head, "list") {
        return read_delimited(text, start, head_start, open, "[/list]", ChunkKind::List);
    }
    if let Some(open) = open_tag(head, "center") {
        return read_delimited(
            text,
            start,
            head_start,
            open,
            "[/center]",
            ChunkKind::CenteredParagraph,
        );
    }
    if let Some(image) = read_image(text, start, head_start, head) {
        return image;
    }
    if is_bullet(head) {
        return read_bullet(text, start, head_start);
    }

    read_paragraph(text, start)
}

/// An opening `[tag options]` marker: the options and the marker length
struct OpenTag<'a> {
    options: &'a str,
    len: usize,
}

fn open_tag<'a>(head: &'a str, tag: &str) -> Option<OpenTag<'a>> {
    if !starts_with_ci(head, "[") || !starts_with_ci(&head[1..], tag) {
        return None;
    }
    let after = &head[1 + tag.len()..];
    if !(after.starts_with(']') || after.starts_with(char::is_whitespace)) {
        return None;
    }
    let close = after.find(']')?;
    Some(OpenTag {
        options: after[..close].trim(),
        len: 1 + tag.len() + close + 1,
    })
}

fn read_delimited<'a>(
    text: &'a str,
    start: usize,
    head_start: usize,
    open: OpenTag<'a>,
    marker: &str,
    kind: ChunkKind,
) -> (Chunk<'a>, usize) {
    let body_start = head_start + open.len;
    let (body_end, end) = match find_ci(text, body_start, marker) {
        Some(close) => (close, close + marker.len()),
        None => (text.len(), text.len()),
    };
    let body = &text[body_start..body_end];
    let content = match kind {
        ChunkKind::CenteredParagraph => body.trim(),
        _ => trim_block(body),
    };
    let chunk = Chunk::new(kind, content, open.options, text[start..end].trim_end());
    (chunk, end)
}

fn read_fence(text: &str, start: usize, head_start: usize) -> (Chunk<'_>, usize) {
    let (line, body_start) = line_at(text, head_start);
    let options = line[3..].trim();

    let mut pos = body_start;
    let (body_end, end) = loop {
        if pos >= text.len() {
            break (text.len(), text.len());
        }
        let (line, next) = line_at(text, pos);
        if line.trim_start().starts_with("```") {
            break (pos, pos + line.len());
        }
        pos = next;
    };
    let content = trim_block(&text[body_start.min(body_end)..body_end]);
    let chunk = Chunk::new(ChunkKind::CodeBlock, content, options, &text[start..end]);
    (chunk, end)
}

fn read_image<'a>(
    text: &'a str,
    start: usize,
    head_start: usize,
    head: &'a str,
) -> Option<(Chunk<'a>, usize)> {
    if !starts_with_ci(head, "[img") || !head[4..].starts_with(char::is_whitespace) {
        return None;
    }
    let close = head.rfind(']').unwrap_or(head.len());
    let inner = head[4..close].trim();
    let (path, options) = match inner.split_once(char::is_whitespace) {
        Some((path, options)) => (path, options.trim()),
        None => (inner, ""),
    };
    if path.is_empty() {
        return None;
    }
    let end = head_start + (close + 1).min(head.len());
    let chunk = Chunk::new(ChunkKind::ImageDirective, path, options, &text[start..end]);
    Some((chunk, end))
}

fn read_bullet(text: &str, start: usize, head_start: usize) -> (Chunk<'_>, usize) {
    let (first, mut pos) = line_at(text, head_start);
    let content_start = head_start + first.len().min(2);
    let mut end = head_start + first.len();

    while pos < text.len() {
        let (line, next) = line_at(text, pos);
        if line.trim().is_empty() || is_block_start(line.trim_start()) {
            break;
        }
        end = pos + line.len();
        pos = next;
    }

    let content = text[content_start..end].trim();
    let chunk = Chunk::new(ChunkKind::ListItem, content, "", &text[start..end]);
    (chunk, end)
}

fn read_paragraph(text: &str, start: usize) -> (Chunk<'_>, usize) {
    let (first, mut pos) = line_at(text, start);
    let mut end = start + first.len();

    while pos < text.len() {
        let (line, next) = line_at(text, pos);
        if line.trim().is_empty() || is_block_start(line.trim_start()) {
            break;
        }
        end = pos + line.len();
        pos = next;
    }

    let block = text[start..end].trim_end();
    let kind = if is_whole_marker(block.trim_start(), "quote") {
        ChunkKind::Quote
    } else if is_whole_marker(block.trim_start(), "title") {
        ChunkKind::Heading
    } else {
        ChunkKind::Paragraph
    };
    (Chunk::new(kind, block, "", block), end)
}

/// Whether `block` is exactly one `[tag text]` marker, closed by the first
/// `]` after its text
fn is_whole_marker(block: &str, tag: &str) -> bool {
    if !starts_with_ci(block, "[") || !starts_with_ci(&block[1..], tag) {
        return false;
    }
    let after = &block[1 + tag.len()..];
    if !after.starts_with(char::is_whitespace) {
        return false;
    }
    let body = after.trim_start();
    let Some(first) = body.chars().next().filter(|&c| c != ']') else {
        return false;
    };
    let rest = &body[first.len_utf8()..];
    rest.find(']').is_some_and(|close| close + 1 == rest.len())
}

/// Whether a line opens a block that interrupts a running paragraph
fn is_block_start(head: &str) -> bool {
    head.starts_with("```")
        || is_bullet(head)
        || open_tag(head, "code").is_some()
        || open_tag(head, "list").is_some()
        || open_tag(head, "center").is_some()
        || (starts_with_ci(head, "[img") && head[4..].starts_with(char::is_whitespace))
}

fn is_bullet(head: &str) -> bool {
    head == "*" || head.starts_with("* ") || head.starts_with("*\t")
}

/// The line starting at `pos` without its terminator, and the offset of the
/// following line
fn line_at(text: &str, pos: usize) -> (&str, usize) {
    match text[pos..].find('\n') {
        Some(offset) => {
            let line = &text[pos..pos + offset];
            (line.strip_suffix('\r').unwrap_or(line), pos + offset + 1)
        }
        None => (&text[pos..], text.len()),
    }
}

/// Strip the line breaks separating a block body from its markers
fn trim_block(body: &str) -> &str {
    body.trim_start_matches(['\r', '\n']).trim_end()
}

fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn find_ci(text: &str, from: usize, marker: &str) -> Option<usize> {
    text[from..]
        .to_ascii_lowercase()
        .find(marker)
        .map(|offset| from + offset)
}
