//! End-to-end scenarios: parse, validate and serialize together.

use pretty_assertions::assert_eq;
use word_marking_core::{
    parse, serialize, tokenize, validate, CleanOffset, MarkerSyntax, Metadata, ParseOptions,
    SkipReason, ValidationIssue, Word,
};

fn options(marker: MarkerSyntax) -> ParseOptions {
    ParseOptions::new(marker)
}

#[test]
fn asterisk_marked_verb() {
    let result = parse("María *estudia* español.", &options(MarkerSyntax::Asterisk)).unwrap();

    assert_eq!(result.clean_text, "María estudia español.");
    assert_eq!(result.marked_words.len(), 1);
    assert_eq!(result.marked_words[0].text, "estudia");
    assert_eq!(result.marked_words[0].start, CleanOffset::new(6));
    assert_eq!(result.marked_words[0].end, CleanOffset::new(13));
}

#[test]
fn bracket_marked_noun() {
    let result = parse("El [perro] corre.", &options(MarkerSyntax::Bracket)).unwrap();

    assert_eq!(result.clean_text, "El perro corre.");
    assert_eq!(result.marked_words.len(), 1);
    assert_eq!(result.marked_words[0].text, "perro");
    assert_eq!(result.marked_words[0].start, CleanOffset::new(3));
    assert_eq!(result.marked_words[0].end, CleanOffset::new(8));
}

#[test]
fn validator_flags_unclosed_marker() {
    let result = validate("Hola *mundo", MarkerSyntax::Asterisk);

    assert!(!result.valid);
    assert_eq!(result.marked_span_count, 0);
    assert!(result
        .errors
        .contains(&ValidationIssue::UnbalancedDelimiters { starts: 1, ends: 0 }));
    assert!(result.messages().iter().any(|m| m.contains("1 starts, 0 ends")));
}

#[test]
fn validator_flags_text_without_marks() {
    let result = validate("Texto sin marcas.", MarkerSyntax::Asterisk);

    assert!(!result.valid);
    assert_eq!(result.marked_span_count, 0);
    assert!(result.messages()[0].starts_with("no marked words found"));
}

#[test]
fn serializer_reports_mismatch() {
    let words: Vec<Word> = vec![Word::marked(
        "gato",
        CleanOffset::new(3),
        CleanOffset::new(8),
        "noun",
        Metadata::new(),
    )];
    let outcome = serialize("El perro corre", &words, MarkerSyntax::Asterisk);

    assert_eq!(outcome.text, "El perro corre");
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(
        outcome.skipped[0].reason,
        SkipReason::Mismatch {
            found: "perro".to_string()
        }
    );
}

#[test]
fn round_trip_through_all_words() {
    let raw = "Ayer *comí* paella y hoy *como* tortilla.";
    let result = parse(raw, &options(MarkerSyntax::Asterisk).word_type("verb")).unwrap();

    let from_marked = serialize(&result.clean_text, &result.marked_words, MarkerSyntax::Asterisk);
    let from_all = serialize(&result.clean_text, &result.all_words, MarkerSyntax::Asterisk);

    assert_eq!(from_marked.text, raw);
    assert_eq!(from_all.text, raw);
    assert!(from_marked.is_complete());
}

#[test]
fn convert_between_syntaxes() {
    let result = parse("El {perro} y el {gato}", &options(MarkerSyntax::Brace)).unwrap();
    let outcome = serialize(&result.clean_text, &result.marked_words, MarkerSyntax::DoubleAsterisk);

    assert_eq!(outcome.text, "El **perro** y el **gato**");

    let reparsed = parse(&outcome.text, &options(MarkerSyntax::DoubleAsterisk)).unwrap();
    assert_eq!(reparsed.marked_words, result.marked_words);
}

#[test]
fn edited_clean_text_skips_stale_words() {
    let result = parse("El [perro] corre [rápido].", &options(MarkerSyntax::Bracket)).unwrap();
    let edited = result.clean_text.replace("perro", "gato");

    let outcome = serialize(&edited, &result.marked_words, MarkerSyntax::Bracket);

    // "rápido" shifted one char left, "perro" is gone: neither lines up.
    assert_eq!(outcome.text, edited);
    assert_eq!(outcome.skipped.len(), 2);
}

#[test]
fn marked_phrase_is_visible_only_in_marked_words() {
    let result = parse("Me gusta [el perro] grande.", &options(MarkerSyntax::Bracket)).unwrap();

    assert_eq!(result.marked_words.len(), 1);
    assert_eq!(result.marked_words[0].text, "el perro");
    assert_eq!(result.all_words.iter().filter(|w| w.marked).count(), 0);
    assert_eq!(result.unaligned_marks().len(), 1);

    // Still round-trips, since the serializer works from marked_words.
    let outcome = serialize(&result.clean_text, &result.marked_words, MarkerSyntax::Bracket);
    assert_eq!(outcome.text, "Me gusta [el perro] grande.");
}

#[test]
fn digit_and_hyphen_marks_only_survive_through_marked_words() {
    let raw = "Tengo *3* gatos y *mi-casa*.";
    let result = parse(raw, &options(MarkerSyntax::Asterisk)).unwrap();

    assert_eq!(result.clean_text, "Tengo 3 gatos y mi-casa.");
    assert_eq!(result.marked_words.len(), 2);
    assert_eq!(result.all_words.iter().filter(|w| w.marked).count(), 0);
    let unaligned: Vec<&str> = result
        .unaligned_marks()
        .iter()
        .map(|w| w.text.as_str())
        .collect();
    assert_eq!(unaligned, vec!["3", "mi-casa"]);

    // Going through the tokenizer's word list loses both marks.
    let retokenized = tokenize(&result.clean_text, &result.marked_words);
    let lossy = serialize(&result.clean_text, &retokenized, MarkerSyntax::Asterisk);
    assert_eq!(lossy.text, "Tengo 3 gatos y mi-casa.");

    let exact = serialize(&result.clean_text, &result.marked_words, MarkerSyntax::Asterisk);
    assert_eq!(exact.text, raw);
}

#[test]
fn parse_result_serializes_for_storage() {
    let result = parse("Yo *hablo*.", &options(MarkerSyntax::Asterisk).word_type("verb")).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["cleanText"], "Yo hablo.");
    assert_eq!(json["marker"], "*");
    assert_eq!(json["markedWords"][0]["start"], 3);
    assert_eq!(json["allWords"][1]["wordType"], "verb");
    assert_eq!(json["instruction"], "Select all the verbs");

    let back: word_marking_core::ParseResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
