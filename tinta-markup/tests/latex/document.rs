//! Conversion to LaTeX source

use crate::common::{assembler, engine};
use insta::assert_snapshot;
use tinta_markup::images::StaticImageResolver;
use tinta_markup::{Backend, ImageMetadata, Layout};

#[test]
fn test_inline_tags() {
    let latex = engine(Backend::Latex);
    assert_eq!(
        latex.parse("ola **mu__n__do**"),
        "ola \\textbf{mu\\underline{n}do}"
    );
    assert_eq!(latex.parse("[title Capitulo]"), "\\subsection*{Capitulo}");
    assert_eq!(
        latex.parse("[mail]a@b.c[/mail]"),
        "\\href{mailto:a@b.c}{a@b.c}"
    );
}

#[test]
fn test_double_colon_escape() {
    assert_eq!(
        engine(Backend::Latex).parse("%%Foo <:: Bar%%"),
        "\\texttt{Foo {:}{:} Bar}"
    );
}

#[test]
fn test_special_characters_are_escaped_once() {
    let latex = engine(Backend::Latex);
    let once = latex.parse("R$ 10 & 20 #1");
    assert_eq!(once, "R\\$ 10 \\& 20 \\#1");
    assert_eq!(latex.parse(&once), once);
}

#[test]
fn test_html_anchors_are_not_passed_through() {
    assert_eq!(
        engine(Backend::Latex).parse("<a href=\"x\">y</a> http://a.com"),
        "<a href=\"x\">y</a> \\url{http://a.com}"
    );
}

#[test]
fn test_document() {
    let source = "[title Um]\n\nTexto **forte**.\n\n[list]\n* a\n* b\n[/list]\n\n[code ruby #]\nputs 1\n[/code]";
    assert_snapshot!(
        assembler(Backend::Latex).assemble(source),
        @"\\subsection*{Um}\nTexto \\textbf{forte}.\n\n\\begin{itemize}\n\\item a\n\\item b\n\\end{itemize}\n\\begin{minted}[linenos]{ruby}\nputs 1\n\\end{minted}"
    );
}

#[test]
fn test_image_sizing() {
    let images = StaticImageResolver::new()
        .with_image("fig/big.png", ImageMetadata::new(3000, 150.0))
        .with_image("fig/small.png", ImageMetadata::new(100, 300.0));
    let assembler = assembler(Backend::Latex)
        .with_layout(Layout { max_width_mm: 150.0 })
        .with_image_resolver(images);

    let big = assembler.assemble("[img fig/big.png]");
    assert!(big.contains("\\includegraphics[width=\\textwidth]{big.png}"), "{big}");
    assert!(big.contains("\\label{big}"));
    assert!(!big.contains("\\caption"));

    let explicit = assembler.assemble("[img fig/big.png w=50% \"Grande\"]");
    assert!(explicit.contains("\\includegraphics[width=75mm]{big.png}"), "{explicit}");
    assert!(explicit.contains("\\caption{Grande}"));

    let small = assembler.assemble("[img fig/small.png label=pequena]");
    assert!(small.contains("\\includegraphics[scale=1]{small.png}"));
    assert!(small.contains("\\label{pequena}"));
}

#[test]
fn test_failed_chunk_is_escaped_for_latex() {
    assert_eq!(
        assembler(Backend::Latex).assemble("[img falta_1.png]"),
        "[img falta\\_1.png]"
    );
}
