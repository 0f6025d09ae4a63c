//! Inline expansion with the HTML rules

use crate::common::engine;
use tinta_markup::{Backend, MarkupEngine, RuleRegistry, RuleSource};

fn html() -> MarkupEngine {
    engine(Backend::Html)
}

#[test]
fn test_nested_tags_expand_bottom_up() {
    assert_eq!(
        html().parse("ola **mu__n__do**"),
        "ola <strong>mu<u>n</u>do</strong>"
    );
    assert_eq!(
        html().parse("::a %%b%% **c**::"),
        "<em>a <code>b</code> <strong>c</strong></em>"
    );
}

#[test]
fn test_multiline_bold() {
    assert_eq!(
        html().parse("ola **mu\nndo**"),
        "ola <strong>mu\nndo</strong>"
    );
}

#[test]
fn test_double_colon_escape_inside_code() {
    assert_eq!(
        html().parse("%%mundo <:: superclasse%%"),
        "<code>mundo &#58;&#58; superclasse</code>"
    );
}

#[test]
fn test_escaped_double_colon_does_not_open_italic() {
    assert_eq!(html().parse("a <:: b :: c"), "a &#58;&#58; b :: c");
}

#[test]
fn test_mail_is_obfuscated() {
    let out = html().parse("[mail]a@b.c[/mail]");
    assert!(out.starts_with("<a href=\"&#109;&#97;&#105;&#108;&#116;&#111;&#58;"));
    assert!(!out.contains("a@b.c"));
}

#[test]
fn test_inline_center() {
    assert_eq!(
        html().parse("[center]**meio**[/center]"),
        "<p class=\"center\"><strong>meio</strong></p>"
    );
}

#[test]
fn test_footnote_without_note() {
    assert_eq!(
        html().parse("[footnote]texto[/footnote]"),
        "<label>texto<span>?</span></label>"
    );
}

#[test]
fn test_link_excludes_trailing_punctuation() {
    for (input, tail) in [
        ("see http://a.com/x.", "."),
        ("see http://a.com/x,", ","),
        ("see http://a.com/x;", ";"),
        ("see http://a.com/x!", "!"),
        ("see http://a.com/x?", "?"),
        ("see (http://a.com/x)", ")"),
    ] {
        let out = html().parse(input);
        assert!(
            out.contains("<a href=\"http://a.com/x\">http://a.com/x</a>"),
            "{input} -> {out}"
        );
        assert!(out.ends_with(&format!("</a>{tail}")), "{input} -> {out}");
    }
}

#[test]
fn test_user_rule_layer() {
    let extra = RuleSource::text(
        "user",
        "[tags.strike]\npattern = '~~(?P<content>.+?)~~'\nrenderer = 'raw'\nprecedence = 55\n\
         [tags.italic]\nenabled = false\n",
    );
    let engine = MarkupEngine::new(RuleRegistry::with_extra(Backend::Html, &[extra]).unwrap());
    assert_eq!(engine.parse("~~**a**~~ ::b::"), "<strong>a</strong> ::b::");
}
