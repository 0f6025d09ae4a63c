//! Whole-document assembly with the HTML backend

use crate::common::{assembler, FailingHighlighter};
use insta::assert_snapshot;
use tinta_markup::images::StaticImageResolver;
use tinta_markup::{Backend, ImageMetadata};

#[test]
fn test_empty_document() {
    assert_eq!(assembler(Backend::Html).assemble(""), "");
}

#[test]
fn test_whitespace_only_document_is_one_paragraph() {
    assert_eq!(assembler(Backend::Html).assemble("  "), "<p>  </p>");
}

#[test]
fn test_document() {
    let source = "[title Introducao]\n\n\
                  Um paragrafo com **negrito**\ne ::italico::.\n\n\
                  * primeiro\n\
                  * segundo\n\n\
                  [center]fim[/center]";
    assert_snapshot!(
        assembler(Backend::Html).assemble(source),
        @"<h4>Introducao</h4>\n<p>Um paragrafo com <strong>negrito</strong>\ne <em>italico</em>.</p>\n<li>primeiro</li>\n<li>segundo</li>\n<p class=\"center\">fim</p>"
    );
}

#[test]
fn test_list_block() {
    assert_eq!(
        assembler(Backend::Html).assemble("[list]\n* a\n\n* b\n\nc\n[/list]"),
        "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
    );
}

#[test]
fn test_three_bullets_render_three_items() {
    let out = assembler(Backend::Html).assemble("* um\n\n* dois\n\n* tres");
    assert_eq!(out, "<li>um</li>\n<li>dois</li>\n<li>tres</li>");
}

#[test]
fn test_overflowing_image_is_full_width() {
    let images =
        StaticImageResolver::new().with_image("img/big.png", ImageMetadata::new(3000, 150.0));
    let out = assembler(Backend::Html)
        .with_image_resolver(images)
        .assemble("[img img/big.png]");
    assert_eq!(
        out,
        "<div class=\"figure\" id=\"big\">\n<img src=\"img/big.png\" alt=\"big\" style=\"width: 100%;\"/>\n</div>"
    );
}

#[test]
fn test_explicit_width_wins() {
    let images =
        StaticImageResolver::new().with_image("img/big.png", ImageMetadata::new(3000, 150.0));
    let out = assembler(Backend::Html)
        .with_image_resolver(images)
        .assemble("[img img/big.png w=30% label=fig1 \"Grande\"]");
    assert_snapshot!(out, @"<div class=\"figure\" id=\"fig1\">\n<img src=\"img/big.png\" alt=\"Grande\" style=\"width: 30%;\"/>\n<p class=\"caption\">Grande</p>\n</div>");
}

#[test]
fn test_failing_chunks_do_not_affect_neighbours() {
    let out = assembler(Backend::Html)
        .with_highlighter(FailingHighlighter)
        .assemble("**antes**\n\n[code x]\na < b\n[/code]\n\n[img falta.png]\n\n**depois**");
    assert_eq!(
        out,
        "<p><strong>antes</strong></p>\n\
         [code x]\na &lt; b\n[/code]\n\
         [img falta.png]\n\
         <p><strong>depois</strong></p>"
    );
}
