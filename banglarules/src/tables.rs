//! Static character tables for Bangla normalization
//!
//! Tables are ordered slices rather than maps: [`crate::subst::SubstitutionTable`]
//! compiles them in slice order, and that order decides which key wins when
//! two keys could match at the same position.

/// Bengali sign virama (hasanta).
pub const VIRAMA: char = '\u{09CD}';

/// Invisible characters and their replacements.
pub static INVISIBLE_CHARS: &[(&str, &str)] = &[
    ("\u{200D}", ""),  // ZERO WIDTH JOINER
    ("\u{200C}", ""),  // ZERO WIDTH NON-JOINER
    ("\u{00A0}", " "), // NO-BREAK SPACE
    ("\u{FEFF}", ""),  // BYTE ORDER MARK
    ("\u{2060}", ""),  // WORD JOINER
    ("\u{061C}", ""),  // ARABIC LETTER MARK
];

/// Bangla digit glyphs and their ASCII counterparts.
pub static BANGLA_DIGITS: &[(&str, &str)] = &[
    ("০", "0"),
    ("১", "1"),
    ("২", "2"),
    ("৩", "3"),
    ("৪", "4"),
    ("৫", "5"),
    ("৬", "6"),
    ("৭", "7"),
    ("৮", "8"),
    ("৯", "9"),
];

/// Literal punctuation replacements, applied before repeated marks collapse.
pub static PUNCTUATION: &[(&str, &str)] = &[
    ("\u{0965}", "\u{0964}"),         // double danda -> danda
    ("\u{200D}", ""),                 // stray ZWJ
    ("\u{200C}", ""),                 // stray ZWNJ
    ("\u{0964}\u{0964}", "\u{0964}"), // danda danda -> danda
];

/// Punctuation marks whose repeated runs collapse to one occurrence.
pub static REPEATABLE_PUNCTUATION: &[char] = &['\u{0964}', ',', ';', ':', '!', '?'];

/// Two-mark vowel sign sequences and their precomposed equivalents.
pub static VOWEL_COMPOSITIONS: &[(&str, &str)] = &[
    ("\u{09C7}\u{09BE}", "\u{09CB}"), // e + aa -> o
    ("\u{09C7}\u{09D7}", "\u{09CC}"), // e + au length mark -> au
];

/// Dependent vowel signs plus candrabindu, anusvara and visarga. Repeated
/// runs of any one of these collapse to a single mark.
pub static DIACRITIC_MARKS: &[char] = &[
    '\u{09BE}', // aa
    '\u{09BF}', // i
    '\u{09C0}', // ii
    '\u{09C1}', // u
    '\u{09C2}', // uu
    '\u{09C3}', // vocalic r
    '\u{09C7}', // e
    '\u{09C8}', // ai
    '\u{09CB}', // o
    '\u{09CC}', // au
    '\u{0981}', // candrabindu
    '\u{0982}', // anusvara
    '\u{0983}', // visarga
];

/// Equivalent spellings of the same grapheme.
///
/// The KSSA entry maps to itself. It anchors the table; additional rules are
/// appended after it by `BanglaNormalizer::with_variant_rules`.
pub static CHARACTER_VARIANTS: &[(&str, &str)] = &[
    ("\u{0995}\u{09CD}\u{09B7}", "\u{0995}\u{09CD}\u{09B7}"), // KA + virama + SSA
];

/// Well-attested scanning and typing errors. Opt-in only.
pub static OCR_CORRECTIONS: &[(&str, &str)] = &[
    ("\u{09AC}\u{09BC}", "\u{09AC}"), // BA + nukta -> BA
    ("\u{099C}\u{09BC}", "\u{099C}"), // JA + nukta -> JA
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::nfc_normalize;

    #[test]
    fn test_digit_table_covers_every_bangla_digit() {
        assert_eq!(BANGLA_DIGITS.len(), 10);
        for (i, (bangla, ascii)) in BANGLA_DIGITS.iter().enumerate() {
            let c = bangla.chars().next().unwrap();
            assert_eq!(c as u32 - 0x09E6, i as u32);
            assert_eq!(*ascii, i.to_string());
        }
    }

    #[test]
    fn test_table_keys_are_nfc() {
        let tables = [
            INVISIBLE_CHARS,
            PUNCTUATION,
            CHARACTER_VARIANTS,
            OCR_CORRECTIONS,
        ];
        for table in tables {
            for (key, _) in table {
                assert_eq!(nfc_normalize(key), *key, "key {key:?} is not NFC");
            }
        }
    }

    #[test]
    fn test_vowel_compositions_are_canonical_equivalents() {
        for (pair, composed) in VOWEL_COMPOSITIONS {
            assert_eq!(nfc_normalize(pair), *composed);
        }
    }

    #[test]
    fn test_virama_and_nukta_are_not_collapsible_marks() {
        assert!(!DIACRITIC_MARKS.contains(&VIRAMA));
        assert!(!DIACRITIC_MARKS.contains(&'\u{09BC}'));
    }
}
