// Contracted sound (yōon) detection.

use jinmei_core::script;

/// Small kana that combine with the preceding letter into one sound unit.
/// The small っ is a separate phenomenon and can be split freely.
fn is_small_combining_kana(c: char) -> bool {
    matches!(
        c,
        'ゃ' | 'ゅ' | 'ょ' | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゎ'
            | 'ャ' | 'ュ' | 'ョ' | 'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ヮ'
    )
}

/// True when `s` ends in a two-character contracted sound unit such as
/// きょ or シャ. Shortening such a string by one character would leave a
/// dangling small kana that no dictionary key starts or ends with.
pub fn ends_in_yoon(s: &str) -> bool {
    let mut rev = s.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(last), Some(prev)) => is_small_combining_kana(last) && script::is_kana(prev),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_contracted_endings() {
        assert!(ends_in_yoon("きょ"));
        assert!(ends_in_yoon("とうきょ"));
        assert!(ends_in_yoon("シャ"));
        assert!(ends_in_yoon("ふぁ"));
        assert!(ends_in_yoon("くゎ"));
    }

    #[test]
    fn plain_endings_are_not_contracted() {
        assert!(!ends_in_yoon("きよ"));
        assert!(!ends_in_yoon("やまだ"));
        assert!(!ends_in_yoon("まっ"));
    }

    #[test]
    fn lone_small_kana_is_not_a_unit() {
        assert!(!ends_in_yoon("ゃ"));
        assert!(!ends_in_yoon(""));
        // A small kana after a non-kana character has nothing to combine with.
        assert!(!ends_in_yoon("田ゃ"));
    }
}
