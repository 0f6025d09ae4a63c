//! Inline expansion with the Kindle rules

use crate::common::{assembler, engine};
use tinta_markup::{split_chunks, Backend, MarkupEngine, SplitContext};

fn kindle() -> MarkupEngine {
    engine(Backend::Kindle)
}

#[test]
fn test_bold() {
    assert_eq!(kindle().parse("ola **mundo**"), "ola <strong>mundo</strong>");
    assert_eq!(
        kindle().parse("ola **mu\nndo**"),
        "ola <strong>mu\nndo</strong>"
    );
}

#[test]
fn test_italic() {
    assert_eq!(kindle().parse("ola ::mundo::"), "ola <em>mundo</em>");
    assert_eq!(kindle().parse("ola ::mu\nndo::"), "ola <em>mu\nndo</em>");
}

#[test]
fn test_underline() {
    assert_eq!(kindle().parse("ola __mundo__"), "ola <u>mundo</u>");
    assert_eq!(kindle().parse("ola __mu\nndo__"), "ola <u>mu\nndo</u>");
}

#[test]
fn test_inline_code() {
    assert_eq!(kindle().parse("ola %%mundo%%"), "ola <code>mundo</code>");
    assert_eq!(kindle().parse("ola %%mu\nndo%%"), "ola <code>mu\nndo</code>");
}

#[test]
fn test_two_inline_code_spans_with_double_colons() {
    assert_eq!(
        kindle().parse("ola %%mundo <:: superclasse%% texto %%mais codigo <:: superclasse%%"),
        "ola <code>mundo &#58;&#58; superclasse</code> texto \
         <code>mais codigo &#58;&#58; superclasse</code>"
    );
}

#[test]
fn test_quote() {
    assert_eq!(
        kindle().parse("[quote ola mundo --Anonimo]"),
        "<p class=\"quote\">ola mundo <br/> --Anonimo</p>"
    );
    assert_eq!(
        kindle().parse("[quote ola mu\nndo-- Anonimo]"),
        "<p class=\"quote\">ola mu\nndo <br/> --Anonimo</p>"
    );
}

#[test]
fn test_footnote() {
    assert_eq!(
        kindle().parse("[footnote ola mundo]HelloWorld[/footnote]"),
        "<label title=\"ola mundo\">HelloWorld<span>?</span></label>"
    );
    assert_eq!(
        kindle().parse("[footnote ola \nmundo]Hello\nWorld[/footnote]"),
        "<label title=\"ola \nmundo\">Hello\nWorld<span>?</span></label>"
    );
}

#[test]
fn test_links() {
    assert_eq!(
        kindle().parse("http://www.caelum.com.br"),
        "<a href=\"http://www.caelum.com.br\">http://www.caelum.com.br</a>"
    );
    assert_eq!(
        kindle().parse("https://www.caelum.com.br"),
        "<a href=\"https://www.caelum.com.br\">https://www.caelum.com.br</a>"
    );
    assert_eq!(
        kindle().parse("(http://www.caelum.com.br)"),
        "(<a href=\"http://www.caelum.com.br\">http://www.caelum.com.br</a>)"
    );
}

#[test]
fn test_mail_is_plain_text() {
    assert_eq!(
        kindle().parse("[mail]olamundo@caelum.com.br[/mail]"),
        "olamundo@caelum.com.br"
    );
    assert_eq!(
        kindle().parse("[mail]ola\\_mundo@caelum.com.br[/mail]"),
        "ola\\_mundo@caelum.com.br"
    );
}

#[test]
fn test_title() {
    assert_eq!(kindle().parse("[title ola mundo]"), "<h4>ola mundo</h4>");
    assert_eq!(
        kindle().parse("[title ola **mu__n__do**]"),
        "<h4>ola <strong>mu<u>n</u>do</strong></h4>"
    );
}

#[test]
fn test_double_quotes_are_plain_text() {
    assert_eq!(kindle().parse("\"\""), "\"\"");
    assert_eq!(
        kindle().parse("\"qualquer coisa escrito aqui\""),
        "\"qualquer coisa escrito aqui\""
    );
}

#[test]
fn test_list_items_split_on_blank_lines() {
    let input = "* Refactoring, Martin Fowler\n\n\
                 * Effective Java, Joshua Bloch\n\n\
                 * Design Patterns, Erich Gamma et al";
    let assembler = assembler(Backend::Kindle);
    let rendered: Vec<String> = split_chunks(input, SplitContext::List)
        .map(|chunk| assembler.inject(&chunk).unwrap())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "<li>Refactoring, Martin Fowler</li>",
            "<li>Effective Java, Joshua Bloch</li>",
            "<li>Design Patterns, Erich Gamma et al</li>",
        ]
    );
}
