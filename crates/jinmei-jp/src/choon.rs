// Prolonged sound mark (chōon) expansion.
//
// A ー inherits its vowel from the preceding kana, so オーサカ can stand
// for either おうさか or おおさか. Lookup keys need the explicit vowel
// spellings the dictionary actually indexes.

use jinmei_core::script;

/// Upper bound on generated variants. Inputs with many expandable marks
/// would otherwise grow as a product of the per-mark alternatives.
const MAX_VARIANTS: usize = 64;

#[derive(Clone, Copy)]
enum VowelRow {
    A,
    I,
    U,
    E,
    O,
}

/// Hiragana spellings a ー can stand for, per preceding vowel row. The
/// e and o rows each have two conventional spellings (けーき -> けいき /
/// けえき, おーさか -> おうさか / おおさか).
const SUBS_A: &[char] = &['あ'];
const SUBS_I: &[char] = &['い'];
const SUBS_U: &[char] = &['う'];
const SUBS_E: &[char] = &['い', 'え'];
const SUBS_O: &[char] = &['う', 'お'];

const SUBS_A_KATA: &[char] = &['ア'];
const SUBS_I_KATA: &[char] = &['イ'];
const SUBS_U_KATA: &[char] = &['ウ'];
const SUBS_E_KATA: &[char] = &['イ', 'エ'];
const SUBS_O_KATA: &[char] = &['ウ', 'オ'];

/// Vowel row of a hiragana letter. ん and っ carry no usable vowel and
/// stay unexpandable, as do the iteration marks.
fn vowel_row(c: char) -> Option<VowelRow> {
    match c {
        'ぁ' | 'あ' | 'か' | 'が' | 'さ' | 'ざ' | 'た' | 'だ' | 'な' | 'は' | 'ば' | 'ぱ'
        | 'ま' | 'ゃ' | 'や' | 'ら' | 'ゎ' | 'わ' => Some(VowelRow::A),
        'ぃ' | 'い' | 'き' | 'ぎ' | 'し' | 'じ' | 'ち' | 'ぢ' | 'に' | 'ひ' | 'び' | 'ぴ'
        | 'み' | 'り' => Some(VowelRow::I),
        'ぅ' | 'う' | 'ゔ' | 'く' | 'ぐ' | 'す' | 'ず' | 'つ' | 'づ' | 'ぬ' | 'ふ' | 'ぶ'
        | 'ぷ' | 'む' | 'ゅ' | 'ゆ' | 'る' => Some(VowelRow::U),
        'ぇ' | 'え' | 'け' | 'げ' | 'せ' | 'ぜ' | 'て' | 'で' | 'ね' | 'へ' | 'べ' | 'ぺ'
        | 'め' | 'れ' => Some(VowelRow::E),
        'ぉ' | 'お' | 'こ' | 'ご' | 'そ' | 'ぞ' | 'と' | 'ど' | 'の' | 'ほ' | 'ぼ' | 'ぽ'
        | 'も' | 'ょ' | 'よ' | 'ろ' | 'を' => Some(VowelRow::O),
        _ => None,
    }
}

/// Replacement spellings for a ー preceded by `c`, in the script of `c`.
fn substitutes(c: char) -> Option<&'static [char]> {
    let row = vowel_row(script::katakana_to_hiragana_char(c))?;
    let subs = if script::is_katakana(c) {
        match row {
            VowelRow::A => SUBS_A_KATA,
            VowelRow::I => SUBS_I_KATA,
            VowelRow::U => SUBS_U_KATA,
            VowelRow::E => SUBS_E_KATA,
            VowelRow::O => SUBS_O_KATA,
        }
    } else {
        match row {
            VowelRow::A => SUBS_A,
            VowelRow::I => SUBS_I,
            VowelRow::U => SUBS_U,
            VowelRow::E => SUBS_E,
            VowelRow::O => SUBS_O,
        }
    };
    Some(subs)
}

/// Expands every prolonged sound mark in `s` into its possible vowel
/// spellings and returns the resulting variants.
///
/// Each variant has the same character count as the input and differs
/// from it in at least one position, so the input itself is never among
/// the results. Marks without a usable preceding vowel (start of string,
/// after ん or っ, after a non-kana character) are left as ー in every
/// variant; if no mark is expandable the result is empty. Variants are
/// produced in a deterministic order, shorter vowel first for the
/// two-way rows, and their count is capped at [`MAX_VARIANTS`].
pub fn expand_choon(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut variants: Vec<Vec<char>> = Vec::new();

    for i in 1..chars.len() {
        if !script::is_long_vowel_mark(chars[i]) {
            continue;
        }
        let Some(subs) = substitutes(chars[i - 1]) else {
            continue;
        };
        if variants.is_empty() {
            variants.push(chars.clone());
        }
        let mut grown = Vec::with_capacity(variants.len() * subs.len());
        'cap: for variant in &variants {
            for &sub in subs {
                let mut next = variant.clone();
                next[i] = sub;
                grown.push(next);
                if grown.len() == MAX_VARIANTS {
                    break 'cap;
                }
            }
        }
        variants = grown;
    }

    variants.into_iter().map(String::from_iter).collect()
}
