use banglanorm::{unicode_info, BanglaNormalizer, NormalizeOptions};

#[test]
fn test_info_shows_hidden_joiner() {
    let text = "আমার\u{200D}নাম";
    let info = unicode_info(text);
    assert_eq!(info.len(), text.chars().count());

    let joiner = info
        .iter()
        .find(|i| i.ch == '\u{200D}')
        .expect("joiner must be listed");
    assert_eq!(joiner.codepoint, "U+200D");
    assert_eq!(joiner.name, "ZERO WIDTH JOINER");
    assert_eq!(joiner.category, "Cf");

    for i in &info {
        println!("{} {} {} {}", i.codepoint, i.category, i.combining_class, i.name);
    }
}

#[test]
fn test_info_before_and_after_normalization() {
    let n = BanglaNormalizer::new().unwrap();
    let text = "ক\u{09C7}\u{09BE}\u{09CD}";
    let normalized = n.normalize(text, &NormalizeOptions::default());

    let before: Vec<String> = n.unicode_info(text).into_iter().map(|i| i.codepoint).collect();
    let after: Vec<String> = n
        .unicode_info(&normalized)
        .into_iter()
        .map(|i| i.codepoint)
        .collect();

    assert_eq!(before, vec!["U+0995", "U+09C7", "U+09BE", "U+09CD"]);
    assert_eq!(after, vec!["U+0995", "U+09CB"]);
}

#[test]
fn test_info_does_not_normalize() {
    // decomposed input is reported as given
    let info = unicode_info("\u{09DF}");
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].name, "BENGALI LETTER YYA");
    assert_eq!(info[0].category, "Lo");
}

#[test]
fn test_info_serializes_to_json_array() {
    let json = serde_json::to_string(&unicode_info("১")).unwrap();
    assert_eq!(
        json,
        r#"[{"char":"১","codepointHex":"U+09E7","name":"BENGALI DIGIT ONE","category":"Nd","combiningClass":0}]"#
    );
}
