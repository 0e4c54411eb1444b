use super::*;

// === Reserved words ===

#[test]
fn all_seven_keywords() {
    assert_eq!(lookup("fn"), TokenKind::Function);
    assert_eq!(lookup("let"), TokenKind::Let);
    assert_eq!(lookup("true"), TokenKind::True);
    assert_eq!(lookup("false"), TokenKind::False);
    assert_eq!(lookup("return"), TokenKind::Return);
    assert_eq!(lookup("if"), TokenKind::If);
    assert_eq!(lookup("else"), TokenKind::Else);
}

#[test]
fn lookup_agrees_with_fixed_lexeme() {
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_keyword()) {
        let Some(spelling) = kind.fixed_lexeme() else {
            panic!("keyword {kind:?} has no spelling");
        };
        assert_eq!(lookup(spelling), kind);
    }
}

// === Non-keywords ===

#[test]
fn case_variants_are_identifiers() {
    for text in ["Let", "LET", "Fn", "FN", "True", "FALSE", "Return", "IF", "Else"] {
        assert_eq!(lookup(text), TokenKind::Identifier, "{text:?}");
    }
}

#[test]
fn near_misses_are_identifiers() {
    for text in ["lets", "le", "fun", "func", "iff", "elsif", "returns", "tru", "falsey"] {
        assert_eq!(lookup(text), TokenKind::Identifier, "{text:?}");
    }
}

#[test]
fn ordinary_identifiers() {
    for text in ["x", "five", "add", "foo_bar", "_", "_private", "result"] {
        assert_eq!(lookup(text), TokenKind::Identifier, "{text:?}");
    }
}

#[test]
fn empty_and_long_inputs_are_identifiers() {
    assert_eq!(lookup(""), TokenKind::Identifier);
    assert_eq!(lookup("returnreturn"), TokenKind::Identifier);
}

mod proptest_lookup {
    use super::*;
    use proptest::prelude::*;

    const KEYWORDS: [&str; 7] = ["fn", "let", "true", "false", "return", "if", "else"];

    proptest! {
        #[test]
        fn only_reserved_spellings_are_keywords(text in "[A-Za-z_]{0,8}") {
            let kind = lookup(&text);
            if KEYWORDS.contains(&text.as_str()) {
                prop_assert!(kind.is_keyword());
                prop_assert_eq!(kind.fixed_lexeme(), Some(text.as_str()));
            } else {
                prop_assert_eq!(kind, TokenKind::Identifier);
            }
        }
    }
}
