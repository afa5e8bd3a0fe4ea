use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default source-phrase preprocessor: the processed form is the
    // dictionary lookup key, the caller keeps the original for display
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Lookup keys are case-insensitive, single-line
        text = text.replace(['\n', '\r'], " ").trim().to_lowercase();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        let pre = DefaultPreprocessor;
        assert_eq!(pre.process("  Thank You "), "thank you");
    }

    #[test]
    fn empty_stays_empty() {
        let pre = DefaultPreprocessor;
        assert_eq!(pre.process("   "), "");
    }

    #[test]
    fn newlines_become_spaces() {
        let pre = DefaultPreprocessor;
        assert_eq!(pre.process("good\nmorning"), "good morning");
    }
}
