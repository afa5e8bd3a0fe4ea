/// Letter-wise Latin→katakana substitution for words outside every table.
///
/// Deliberately naive: each mapped letter becomes exactly one katakana
/// character and anything unmapped passes through unchanged. Multi-letter
/// English sounds are not handled as units, so the output is a rough
/// loanword approximation, not a phonetic transliteration. Matches the
/// historical fallback behavior; changing it would alter output for every
/// unknown word.
pub fn to_katakana(word: &str) -> String {
    word.chars()
        .map(|c| katakana_for(c).unwrap_or(c))
        .collect()
}

fn katakana_for(letter: char) -> Option<char> {
    let kana = match letter {
        'a' => 'ア',
        'i' => 'イ',
        'u' => 'ウ',
        'e' => 'エ',
        'o' => 'オ',
        'k' => 'カ',
        's' => 'サ',
        't' => 'タ',
        'n' => 'ナ',
        'h' => 'ハ',
        'm' => 'マ',
        'y' => 'ヤ',
        'r' => 'ラ',
        'w' => 'ワ',
        'g' => 'ガ',
        'z' => 'ザ',
        'd' => 'ダ',
        'b' => 'バ',
        'p' => 'パ',
        _ => return None,
    };
    Some(kana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_letters_one_to_one() {
        assert_eq!(to_katakana("sakana"), "サアカアナア");
        assert_eq!(to_katakana("zzqx"), "ザザqx");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(to_katakana("c3-f"), "c3-f");
        assert_eq!(to_katakana(""), "");
    }
}
