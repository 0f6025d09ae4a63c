//! LaTeX output fed back through the engine is unchanged

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
        let latex = engine(Backend::Latex);
        let input = format!("{before} https://{host}.com{path}{tail} {after}");
        let once = latex.parse(&input);
        let twice = latex.parse(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.matches("\\url{").count(), 1);
        let expected = format!("\\url{{https://{host}.com{path}}}");
        prop_assert!(once.contains(&expected), "{}", once);
    }

    #[test]
    fn special_characters_are_escaped_once(
        words in proptest::collection::vec("[a-z]{1,6}", 1..5),
        special in "[_%~^#$&]",
    ) {
        let latex = engine(Backend::Latex);
        let input = words.join(&format!(" {special} "));
        let once = latex.parse(&input);
        prop_assert_eq!(latex.parse(&once), once.clone());
        if words.len() > 1 {
            prop_assert_ne!(&once, &input);
        }
    }
}
