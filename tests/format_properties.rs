//! End-to-end checks of the formatter chain through the public API

use dictfmt::dictation::{self, CommandParser};
use dictfmt::{FormatError, Formatter, format, format_single, list_formatter_names};
use pretty_assertions::assert_eq;

const NO_CHAIN: [&str; 0] = [];

#[test]
fn empty_input_formats_to_empty_string() {
    let words: [&str; 0] = [];
    for f in Formatter::ALL {
        assert_eq!(format(&words, &[f.name()]).unwrap(), "");
    }
}

#[test]
fn empty_chain_is_identity_with_spaces() {
    assert_eq!(format(&["a", "b"], &NO_CHAIN).unwrap(), "a b");
    assert_eq!(format(&["Mixed", "CASE"], &NO_CHAIN).unwrap(), "Mixed CASE");
}

#[test]
fn identifier_styles() {
    let words = ["hello", "world", "test"];
    assert_eq!(format(&words, &["SNAKE_CASE"]).unwrap(), "hello_world_test");
    assert_eq!(format(&words, &["PRIVATE_CAMEL_CASE"]).unwrap(), "helloWorldTest");
    assert_eq!(format(&words, &["PUBLIC_CAMEL_CASE"]).unwrap(), "HelloWorldTest");
    assert_eq!(format(&words, &["NO_SPACES"]).unwrap(), "helloworldtest");
    assert_eq!(format(&words, &["DOUBLE_UNDERSCORE"]).unwrap(), "__helloworldtest__");
    assert_eq!(
        format(&["get", "user", "name"], &["PRIVATE_CAMEL_CASE"]).unwrap(),
        "getUserName"
    );
    assert_eq!(format(&["init"], &["DOUBLE_UNDERSCORE"]).unwrap(), "__init__");
    assert_eq!(
        format(&["Get", "user", "name"], &["PRIVATE_CAMEL_CASE"]).unwrap(),
        "getUserName"
    );
    assert_eq!(
        format(&["get", "HTTP", "response"], &["SNAKE_CASE"]).unwrap(),
        "get_HTTP_response"
    );
}

#[test]
fn joiners() {
    let words = ["std", "io", "read"];
    assert_eq!(format(&words, &["DASH_SEPARATED"]).unwrap(), "std-io-read");
    assert_eq!(format(&words, &["DOT_SEPARATED"]).unwrap(), "std.io.read");
    assert_eq!(format(&words, &["DOUBLE_COLON_SEPARATED"]).unwrap(), "std::io::read");
    assert_eq!(format(&words, &["SLASH_SEPARATED"]).unwrap(), "/std/io/read");
}

#[test]
fn case_transforms_keep_spaces() {
    let words = ["the", "quick", "fox"];
    assert_eq!(format(&words, &["ALL_CAPS"]).unwrap(), "THE QUICK FOX");
    assert_eq!(format(&["LOUD", "Noise"], &["ALL_LOWERCASE"]).unwrap(), "loud noise");
    assert_eq!(format(&words, &["CAPITALIZE_FIRST_WORD"]).unwrap(), "The quick fox");
    assert_eq!(
        format(&["a", "cat", "on", "a", "mat"], &["CAPITALIZE_ALL_WORDS"]).unwrap(),
        "A Cat on a Mat"
    );
}

#[test]
fn quoting() {
    assert_eq!(format(&["x"], &["SINGLE_QUOTED_STRING"]).unwrap(), "'x'");
    assert_eq!(format(&["x"], &["DOUBLE_QUOTED_STRING"]).unwrap(), "\"x\"");
    assert_eq!(
        format(&["hello", "there"], &["DOUBLE_QUOTED_STRING"]).unwrap(),
        "\"hello there\""
    );
    assert_eq!(format(&["a", "b"], &["SPACE_SURROUNDED_STRING"]).unwrap(), " a b ");
}

#[test]
fn truncation() {
    assert_eq!(format(&["elephant"], &["FIRST_FOUR"]).unwrap(), "elep");
    assert_eq!(format(&["elephant", "seal"], &["FIRST_THREE"]).unwrap(), "elesea");
    assert_eq!(format(&["elephant"], &["FIRST_FIVE"]).unwrap(), "eleph");
}

#[test]
fn spacing_is_sticky_across_chain() {
    assert_eq!(
        format(&["hello", "world"], &["DOT_SEPARATED", "ALL_CAPS"]).unwrap(),
        "HELLO.WORLD"
    );
    assert_eq!(
        format(&["hello", "world"], &["ALL_CAPS", "NO_SPACES"]).unwrap(),
        "HELLOWORLD"
    );
}

#[test]
fn reverse_application_order() {
    assert_eq!(
        format(&["hello", "world"], &["SNAKE_CASE", "ALL_CAPS"]).unwrap(),
        "HELLO_WORLD"
    );
}

#[test]
fn unknown_formatter() {
    assert_eq!(
        format(&["x"], &["NOT_A_REAL_FORMATTER"]),
        Err(FormatError::UnknownFormatter("NOT_A_REAL_FORMATTER".to_string()))
    );
    assert!(format_single("x", "NOT_A_REAL_FORMATTER").is_err());
}

#[test]
fn spoken_and_canonical_names_agree() {
    let words = ["make", "it", "so"];
    for f in Formatter::ALL {
        assert_eq!(
            format(&words, &[f.spoken()]).unwrap(),
            format(&words, &[f.name()]).unwrap(),
            "{} vs {}",
            f.spoken(),
            f.name()
        );
    }
    assert!(list_formatter_names().contains("hammer"));
}

#[test]
fn format_single_matches_one_word_format() {
    for f in Formatter::ALL {
        assert_eq!(
            format_single("word", f.name()).unwrap(),
            format(&["word"], &[f.name()]).unwrap()
        );
    }
}

#[test]
fn dictation_round_trip() {
    assert_eq!(
        dictation::format_dictation(&["max", "retries", "over"], &["snake", "allcaps"]).unwrap(),
        "MAX_RETRIES"
    );

    let parser = CommandParser::default();
    let cmd = parser.parse("dubstring hello world over").unwrap();
    assert_eq!(cmd.render(), "\"hello world\"");

    let cmd = parser.parse("packed").unwrap();
    let clipboard = dictation::split_blob("std io");
    assert_eq!(cmd.render_words(&clipboard), "std::io");
    assert_eq!(cmd.render_words(&dictation::split_blob("")), "");
}
