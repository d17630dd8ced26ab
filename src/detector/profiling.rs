use crate::ngram::NgramOrder;
use crate::normalizer::TextNormalizer;
use crate::profile::{FrequencyProfile, ProfileError};

/// The raw-text-to-profile pipeline shared by the detector and its builder.
///
/// Both sides funnel text through the same normalizer before counting:
/// the builder when it profiles a language's sample text, the detector
/// when it profiles a query line against a reference vocabulary. The two
/// default methods differ only in which denominator the resulting profile
/// uses (see [`FrequencyProfile`]).
pub(crate) trait TextProfiling {
    /// Returns the normalizer text is canonicalized with.
    fn normalizer(&self) -> &TextNormalizer;

    /// Normalizes `raw` and builds a full-text profile of the given order.
    ///
    /// # Errors
    /// [`ProfileError::NoWindows`] if the normalized text is shorter than
    /// the window width.
    fn profile_text(&self, raw: &str, order: NgramOrder) -> Result<FrequencyProfile, ProfileError> {
        let normalized = self.normalizer().normalize(raw);
        FrequencyProfile::from_text(&normalized, order)
    }

    /// Normalizes `raw` and builds a query-side profile over the reference
    /// vocabulary. Never fails; degenerate input yields an all-zero
    /// profile.
    fn profile_with_vocabulary(
        &self,
        raw: &str,
        vocabulary: &FrequencyProfile,
    ) -> FrequencyProfile {
        let normalized = self.normalizer().normalize(raw);
        FrequencyProfile::with_vocabulary(&normalized, vocabulary)
    }
}
