//! Re-running the engine over its own output changes nothing

use crate::common::engine;
use proptest::prelude::*;
use tinta_markup::Backend;

proptest! {
    #[test]
    fn links_are_never_wrapped_twice(
        before in "[a-z ]{0,12}",
        host in "[a-z]{1,10}",
        path in "(/[a-z0-9]{1,6}){0,3}",
        tail in "[.,;:!?)]?",
        after in "[a-z ]{0,12}",
    ) {
        let html = engine(Backend::Html);
        let input = format!("{before} https://{host}.com{path}{tail} {after}");
        let once = html.parse(&input);
        let twice = html.parse(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.matches("<a href=").count(), 1);
        let url = format!("https://{host}.com{path}");
        let anchor = format!("<a href=\"{url}\">{url}</a>");
        prop_assert!(once.contains(&anchor), "{}", once);
    }

    #[test]
    fn escaped_entities_are_not_escaped_again(
        words in proptest::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let html = engine(Backend::Html);
        let input = format!("%%{} <:: base%%", words.join(" "));
        let once = html.parse(&input);
        prop_assert_eq!(html.parse(&once), once.clone());
        prop_assert_eq!(once.matches("&#58;&#58;").count(), 1);
    }

    #[test]
    fn note_and_author_links_are_stable(
        note in "[a-z]{1,8}",
        host in "[a-z]{1,10}",
        word in "[a-z]{1,8}",
    ) {
        let html = engine(Backend::Html);
        let url = format!("https://{host}.com");

        let footnote = html.parse(&format!("[footnote {note} {url}]{word}[/footnote]"));
        prop_assert_eq!(html.parse(&footnote), footnote.clone());
        prop_assert!(!footnote.contains("<a "), "{}", footnote);

        let quote = html.parse(&format!("[quote {word} -- {url}]"));
        prop_assert_eq!(html.parse(&quote), quote.clone());
        prop_assert_eq!(quote.matches("<a href=").count(), 1);
    }
}
