// Input normalization: katakana and half-width kana to hiragana.
//
// Normalization changes character counts (a half-width base plus voicing
// mark becomes a single hiragana letter), so every operation here that
// feeds the search loop also produces a source length table mapping
// normalized prefix lengths back to source character counts.

use jinmei_core::script;

// ---------------------------------------------------------------------------
// Half-width kana (JIS X 0201 block, U+FF66..=U+FF9F)
// ---------------------------------------------------------------------------

/// Hiragana equivalents of the half-width kana block, indexed by
/// `codepoint - 0xFF66`. The prolonged sound mark and the voicing marks
/// map to their full-width forms.
const HALF_WIDTH_KANA: &[char] = &[
    'を', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', 'っ', 'ー', 'あ', 'い', 'う', 'え',
    'お', 'か', 'き', 'く', 'け', 'こ', 'さ', 'し', 'す', 'せ', 'そ', 'た', 'ち', 'つ', 'て',
    'と', 'な', 'に', 'ぬ', 'ね', 'の', 'は', 'ひ', 'ふ', 'へ', 'ほ', 'ま', 'み', 'む', 'め',
    'も', 'や', 'ゆ', 'よ', 'ら', 'り', 'る', 'れ', 'ろ', 'わ', 'ん', '゛', '゜',
];

fn half_width_to_hiragana(c: char) -> Option<char> {
    let cp = c as u32;
    if (0xFF66..=0xFF9F).contains(&cp) {
        Some(HALF_WIDTH_KANA[(cp - 0xFF66) as usize])
    } else {
        None
    }
}

/// The voiced (dakuten) form of a hiragana letter, if one exists.
fn voiced(c: char) -> Option<char> {
    match c {
        'か' | 'き' | 'く' | 'け' | 'こ' | 'さ' | 'し' | 'す' | 'せ' | 'そ' | 'た' | 'ち'
        | 'つ' | 'て' | 'と' | 'は' | 'ひ' | 'ふ' | 'へ' | 'ほ' => {
            char::from_u32(c as u32 + 1)
        }
        'う' => Some('ゔ'),
        _ => None,
    }
}

/// The semi-voiced (handakuten) form of a hiragana letter, if one exists.
fn semi_voiced(c: char) -> Option<char> {
    match c {
        'は' | 'ひ' | 'ふ' | 'へ' | 'ほ' => char::from_u32(c as u32 + 2),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Converts katakana (full-width and half-width) to hiragana and returns
/// the normalized text together with its source length table.
///
/// `lengths[i]` is the number of source characters consumed to produce
/// the first `i` normalized characters, so `lengths[0] == 0` and the
/// table has one more entry than the normalized text has characters. The
/// entries differ from `i` exactly where a half-width base and a voicing
/// mark (two source characters) collapsed into one letter.
///
/// The prolonged sound mark is kept as full-width ー. Characters outside
/// the kana scripts pass through unchanged.
pub fn normalize_input(input: &str) -> (String, Vec<usize>) {
    let source: Vec<char> = input.chars().collect();
    let mut normalized = String::with_capacity(input.len());
    let mut lengths = Vec::with_capacity(source.len() + 1);
    lengths.push(0);

    let mut i = 0;
    while i < source.len() {
        let (out, consumed) = match half_width_to_hiragana(source[i]) {
            Some(base) => match source.get(i + 1).copied() {
                Some('\u{FF9E}') => match voiced(base) {
                    Some(v) => (v, 2),
                    None => (base, 1),
                },
                Some('\u{FF9F}') => match semi_voiced(base) {
                    Some(v) => (v, 2),
                    None => (base, 1),
                },
                _ => (base, 1),
            },
            None => (script::katakana_to_hiragana_char(source[i]), 1),
        };
        normalized.push(out);
        i += consumed;
        lengths.push(i);
    }

    (normalized, lengths)
}

/// Converts full-width katakana to hiragana, leaving everything else
/// (including ー) unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(script::katakana_to_hiragana_char).collect()
}
