/// Canonicalizes raw text before any n-gram counting.
///
/// Normalization happens in three steps, in order: the text is lower-cased,
/// every ASCII digit is replaced by the placeholder character, and every
/// placeholder character is removed, including placeholders that were
/// already present in the input. With the default placeholder (a space)
/// the output therefore contains no digit and no space.
///
/// The placeholder is injected at construction rather than read from a
/// process-wide constant, so two normalizers with different placeholders
/// can coexist.
///
/// # Example
/// ```
/// use wernicke::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("Agent 007!"), "agent!");
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    placeholder: char,
}

impl TextNormalizer {
    /// Creates a normalizer with the default placeholder (a space).
    pub fn new() -> Self {
        Self { placeholder: ' ' }
    }

    /// Creates a normalizer with a custom placeholder character.
    pub fn with_placeholder(placeholder: char) -> Self {
        Self { placeholder }
    }

    /// Normalizes `raw` into counting-ready text. Relative character order
    /// is preserved; empty input yields empty output. Idempotent.
    pub fn normalize(&self, raw: &str) -> String {
        raw.to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_digit() { self.placeholder } else { c })
            .filter(|&c| c != self.placeholder)
            .collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_digits_and_spaces() {
        let normalizer = TextNormalizer::new();
        let normalized = normalizer.normalize("Call me at 555 1234, ok?");
        assert!(!normalized.chars().any(|c| c.is_ascii_digit()));
        assert!(!normalized.contains(' '));
        assert_eq!(normalized, "callmeat,ok?");
    }

    #[test]
    fn test_lower_cases() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("HeLLo WOrLD"), "helloworld");
        assert_eq!(normalizer.normalize("ÀÉÎ"), "àéî");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::new();
        let once = normalizer.normalize("The 3 Musketeers ride again");
        assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("42 17 99"), "");
    }

    #[test]
    fn test_custom_placeholder() {
        let normalizer = TextNormalizer::with_placeholder('_');
        // Spaces survive, underscores and digits do not.
        assert_eq!(normalizer.normalize("a_b 1c"), "ab c");
    }
}
