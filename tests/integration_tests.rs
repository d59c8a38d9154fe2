//! Integration tests - Avro Phonetic conversion through the public API

use avro_phonetic::{parse, Condition, Pattern, PatternTable, PhoneticParser, Rule, Scope};

#[test]
fn test_patterns_without_rules_from_table() {
    for pattern in PatternTable::avro().patterns() {
        if !pattern.has_rules() {
            assert_eq!(parse(&pattern.find), pattern.replace, "find={}", pattern.find);
        }
    }
}

#[test]
fn test_conjuncts() {
    assert_eq!(parse("bhl"), "ভ্ল");
    assert_eq!(parse("bdh"), "ব্ধ");
    assert_eq!(parse("DD"), "ড্ড");
    assert_eq!(parse("kkhm"), "ক্ষ্ম");
    assert_eq!(parse("kri"), "ক্রি"); // r after a consonant joins as a phola
    assert_eq!(parse("stbdh bk"), "স্তব্ধ বক");
}

#[test]
fn test_numbers() {
    assert_eq!(parse("0"), "০");
    assert_eq!(parse("1"), "১");
    assert_eq!(parse("2"), "২");
    assert_eq!(parse("3"), "৩");
    assert_eq!(parse("4"), "৪");
    assert_eq!(parse("5"), "৫");
    assert_eq!(parse("6"), "৬");
    assert_eq!(parse("7"), "৭");
    assert_eq!(parse("8"), "৮");
    assert_eq!(parse("9"), "৯");
    assert_eq!(parse("112"), "১১২");
}

#[test]
fn test_punctuation() {
    assert_eq!(parse("."), "।");
    assert_eq!(parse(".."), "।।");
    // explicit entry beats the single-dot rule
    assert_eq!(parse("..."), "...");
}

#[test]
fn test_independent_vowels() {
    assert_eq!(parse("o"), "অ");
    assert_eq!(parse("a"), "আ");
    assert_eq!(parse("i"), "ই");
    assert_eq!(parse("I"), "ঈ");
    assert_eq!(parse("u"), "উ");
    assert_eq!(parse("oo"), "উ");
    assert_eq!(parse("U"), "ঊ");
    assert_eq!(parse("e"), "এ");
    assert_eq!(parse("OI"), "ঐ");
    assert_eq!(parse("O"), "ও");
    assert_eq!(parse("OU"), "ঔ");
    assert_eq!(parse("rri"), "ঋ");
}

#[test]
fn test_vowel_after_consonant() {
    // inherent vowel
    assert_eq!(parse("ko"), "ক");
    assert_eq!(parse("kO"), "কো");
    assert_eq!(parse("ki"), "কি");
    assert_eq!(parse("kOI"), "কৈ");
}

#[test]
fn test_non_ascii_passthrough() {
    assert_eq!(parse("ব"), "ব");
    assert_eq!(parse("অভ্র"), "অভ্র");
    assert_eq!(parse("বaba gO"), "বআবা গো");
    assert_eq!(parse("aমি বাংলায় gaন গাi"), "আমি বাংলায় গান গাই");
}

#[test]
fn test_words_with_punctuation() {
    assert_eq!(parse("ayre,"), "আয়রে,");
    assert_eq!(parse("bhOla"), "ভোলা");
    assert_eq!(parse("kheyal"), "খেয়াল");
    assert_eq!(parse("khOla"), "খোলা");
}

#[test]
fn test_sentences() {
    assert_eq!(parse("ami banglay gan gai"), "আমি বাংলায় গান গাই");
    assert_eq!(parse("kemon acho"), "কেমন আছ");
    assert_eq!(parse("dhonyobad"), "ধন্যবাদ");
    assert_eq!(parse("ami  bhalobasi\n"), "আমি  ভালবাসি\n");
}

#[test]
fn test_case_folding() {
    // B, H and A are not case-sensitive keys
    assert_eq!(parse("BHAI"), "ভাঈ");
    assert_eq!(parse("Ami"), "আমি");
}

#[test]
fn test_empty_string() {
    assert_eq!(parse(""), "");
}

#[test]
fn test_idempotent_on_output() {
    for input in ["ami banglay gan gai", "stbdh bk", "..", "kheyal"] {
        let once = parse(input);
        assert_eq!(parse(&once), once, "input={}", input);
    }
}

#[test]
fn test_deterministic() {
    let first = parse("ami tomake bhalobasi");
    for _ in 0..10 {
        assert_eq!(parse("ami tomake bhalobasi"), first);
    }
}

#[test]
fn test_custom_table_from_json() {
    let table = PatternTable::from_json(
        r#"{
            "patterns": [
                { "find": "kh", "replace": "খ" },
                { "find": "a", "replace": "া",
                  "rules": [
                    { "matches": [ { "type": "prefix", "scope": "punctuation" } ],
                      "replace": "আ" }
                  ] }
            ]
        }"#,
    )
    .unwrap();
    let parser = PhoneticParser::new(&table);
    assert_eq!(parser.parse("a kha"), "আ খা");
}

#[test]
fn test_rule_order_short_circuits() {
    // both rules hold at the start of the string; the first one wins
    let table = PatternTable::new(vec![Pattern::new("a", "া")
        .with_rule(Rule::new(vec![Condition::prefix(Scope::Boundary)], "first"))
        .with_rule(Rule::new(vec![Condition::prefix(Scope::Punctuation)], "second"))])
    .unwrap();
    let parser = PhoneticParser::new(&table);
    assert_eq!(parser.parse("a"), "first");
    assert_eq!(parser.parse(" a"), " second");
}
