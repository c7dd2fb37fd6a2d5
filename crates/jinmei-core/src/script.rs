// Character-level Japanese script classification and kana conversion.
//
// Classification is by Unicode block, with the prolonged sound mark
// treated as its own class because it belongs to neither kana script
// but appears inside both.

/// Hiragana letters plus the hiragana iteration marks.
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}')
}

/// Katakana letters plus the katakana iteration marks. The prolonged
/// sound mark is excluded; see [`is_long_vowel_mark`].
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30FA}' | '\u{30FD}' | '\u{30FE}')
}

/// Either kana script.
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// The prolonged sound mark, full-width or half-width.
pub fn is_long_vowel_mark(c: char) -> bool {
    matches!(c, '\u{30FC}' | '\u{FF70}')
}

/// CJK ideographs, including extension A and the compatibility block.
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}')
}

/// Converts one katakana letter to its hiragana counterpart. Letters
/// without a counterpart (ヷ through ヺ) and non-katakana input pass
/// through unchanged.
pub fn katakana_to_hiragana_char(c: char) -> char {
    match c {
        '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Converts one hiragana letter to its katakana counterpart.
pub fn hiragana_to_katakana_char(c: char) -> char {
    match c {
        '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
        _ => c,
    }
}
