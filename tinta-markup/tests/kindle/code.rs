//! Code block dispatch: the arguments handed to the highlighter

use crate::common::{engine, HighlightCall, RecordingHighlighter};
use tinta_markup::chunks::{Chunk, ChunkKind};
use tinta_markup::{split_chunks, Assembler, Backend, SplitContext};

const JAVA: &str = "public static void main(String[] args) {\n    String name = \"Gabriel\";\n    System.out.println(\"Hello, \" + name);\n}";

/// Render `[code options]` around `code` and return the recorded call
fn highlight_call(code: &str, options: &str) -> HighlightCall {
    let (highlighter, calls) = RecordingHighlighter::new();
    let assembler = Assembler::new(engine(Backend::Kindle)).with_highlighter(highlighter);

    let source = format!("[code {options}]\n{code}\n[/code]");
    let chunks: Vec<Chunk<'_>> = split_chunks(&source, SplitContext::Document).collect();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].kind, ChunkKind::CodeBlock);
    assert_eq!(assembler.inject(&chunks[0]).unwrap(), "<pre/>");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    calls[0].clone()
}

fn expected(code: &str, language: &str, numbered: bool, lines: &[u32], extra: &str) -> HighlightCall {
    HighlightCall {
        code: code.to_string(),
        language: language.to_string(),
        numbered,
        highlighted_lines: lines.to_vec(),
        extra_options: extra.to_string(),
    }
}

#[test]
fn test_plain_java_code() {
    assert_eq!(
        highlight_call(JAVA, "java"),
        expected(JAVA, "java", false, &[], "")
    );
}

#[test]
fn test_java_code_with_numbered_lines() {
    assert_eq!(
        highlight_call(JAVA, "java #"),
        expected(JAVA, "java", true, &[], "")
    );
}

#[test]
fn test_plain_ruby_code() {
    let ruby = "@name = \"Gabriel\"\nputs \"Hello, \" + name";
    assert_eq!(
        highlight_call(ruby, "ruby"),
        expected(ruby, "ruby", false, &[], "")
    );
}

#[test]
fn test_no_language_is_text() {
    let code = "Some text explaining some new bizarre\nsyntax in a very code alike way";
    assert_eq!(highlight_call(code, ""), expected(code, "text", false, &[], ""));
    assert_eq!(highlight_call(code, "#"), expected(code, "text", true, &[], ""));
}

#[test]
fn test_label_is_not_a_language() {
    assert_eq!(
        highlight_call("Some code", "label=world"),
        expected("Some code", "text", false, &[], "")
    );
}

#[test]
fn test_highlighted_lines() {
    assert_eq!(
        highlight_call("Some code", "h=1,2"),
        expected("Some code", "text", false, &[1, 2], "")
    );
}

#[test]
fn test_highlighter_passthrough_options() {
    assert_eq!(
        highlight_call("Some code", "label=somelabel options='startinline=true'"),
        expected("Some code", "text", false, &[], "startinline=true")
    );
}

#[test]
fn test_fenced_code_uses_the_same_options() {
    let (highlighter, calls) = RecordingHighlighter::new();
    let assembler = Assembler::new(engine(Backend::Html)).with_highlighter(highlighter);
    assembler.assemble("```ruby #\nputs 1\n```");
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[expected("puts 1", "ruby", true, &[], "")]
    );
}
