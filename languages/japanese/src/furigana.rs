use kotoba_core::language::FuriganaToken;

use crate::readings::ReadingBook;

/// Annotate Japanese text with readings by greedy longest-match scan.
///
/// At each position the longest matching compound wins; failing that, a
/// single-character reading; failing that, the character passes through
/// plain. Total over any input: unknown characters never fail, and the
/// token bases concatenate back to the input exactly.
pub fn segment(text: &str, readings: &ReadingBook) -> Vec<FuriganaToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        // Compounds first, longest first
        if let Some((base, reading)) = compound_at(&chars, i, readings) {
            let len = base.chars().count();
            tokens.push(FuriganaToken::annotated(base, reading));
            i += len;
            continue;
        }

        let ch = chars[i].to_string();
        match readings.lookup(&ch) {
            Some(reading) => tokens.push(FuriganaToken::annotated(ch, reading)),
            None => tokens.push(FuriganaToken::plain(ch)),
        }
        i += 1;
    }

    tokens
}

fn compound_at<'a>(
    chars: &[char],
    at: usize,
    readings: &'a ReadingBook,
) -> Option<(&'a str, &'a str)> {
    for (base, reading) in readings.compounds() {
        let len = base.chars().count();
        if at + len <= chars.len() && base.chars().eq(chars[at..at + len].iter().copied()) {
            return Some((base.as_str(), reading.as_str()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> ReadingBook {
        ReadingBook::from_tsv(
            "電\tでん\n車\tしゃ\n電車\tでんしゃ\n日\tに\n本\tほん\n名\tな\n前\tまえ\n何\tなに\n水\tみず\n",
        )
        .unwrap()
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(segment("", &readings()).is_empty());
    }

    #[test]
    fn compound_beats_single_character_entries() {
        let tokens = segment("電車", &readings());
        assert_eq!(tokens, vec![FuriganaToken::annotated("電車", "でんしゃ")]);
    }

    #[test]
    fn singles_apply_when_no_compound_exists() {
        let tokens = segment("日本", &readings());
        assert_eq!(
            tokens,
            vec![
                FuriganaToken::annotated("日", "に"),
                FuriganaToken::annotated("本", "ほん"),
            ]
        );
    }

    #[test]
    fn unknown_characters_pass_through_plain() {
        let tokens = segment("お名前は何ですか", &readings());
        assert_eq!(
            tokens,
            vec![
                FuriganaToken::plain("お"),
                FuriganaToken::annotated("名", "な"),
                FuriganaToken::annotated("前", "まえ"),
                FuriganaToken::plain("は"),
                FuriganaToken::annotated("何", "なに"),
                FuriganaToken::plain("で"),
                FuriganaToken::plain("す"),
                FuriganaToken::plain("か"),
            ]
        );
    }

    #[test]
    fn reconstruction_invariant_holds() {
        let inputs = [
            "電車で行く",
            "お名前は何ですか",
            "まったく知らない文字列XYZ",
            "水",
            "",
        ];

        for input in inputs {
            let surface: String = segment(input, &readings())
                .iter()
                .map(FuriganaToken::base)
                .collect();
            assert_eq!(surface, input);
        }
    }

    #[test]
    fn segmentation_is_deterministic() {
        let first = segment("電車日本水", &readings());
        let second = segment("電車日本水", &readings());
        assert_eq!(first, second);
    }
}
