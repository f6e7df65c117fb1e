//! Laws of normalization and bigram similarity.

use super::strategies::*;
use bigrep::{
    bigrams, normalize, packed_similarity, similarity, try_similarity, PackedBigrams,
    SimilarityError, Threshold,
};
use proptest::prelude::*;

proptest! {
    /// Normalizing twice changes nothing.
    #[test]
    fn prop_normalize_idempotent(text in raw_text_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// One output char per input char, all lowercase alphanumeric or space.
    #[test]
    fn prop_normalize_preserves_length(text in raw_text_strategy()) {
        let normalized = normalize(&text);
        prop_assert_eq!(normalized.chars().count(), text.chars().count());
        prop_assert!(normalized
            .chars()
            .all(|c| c == ' ' || c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    /// sim(a, b) == sim(b, a), exactly.
    #[test]
    fn prop_similarity_commutative(a in raw_text_strategy(), b in raw_text_strategy()) {
        let (a, b) = (normalize(&a), normalize(&b));
        let ab = similarity(&a, &b);
        let ba = similarity(&b, &a);
        prop_assert_eq!((ab.shared(), ab.total()), (ba.shared(), ba.total()));
    }

    /// sim(a, a) == 1 whenever `a` has a bigram.
    #[test]
    fn prop_similarity_reflexive(a in query_strategy()) {
        let score = similarity(&a, &a);
        if bigrams(&a).is_empty() {
            prop_assert!(score.is_degenerate());
        } else {
            prop_assert!(score.is_exact());
        }
    }

    /// 0 <= shared <= total, and every score meets threshold 0.
    #[test]
    fn prop_similarity_bounded(a in raw_text_strategy(), b in raw_text_strategy()) {
        let score = similarity(&normalize(&a), &normalize(&b));
        prop_assert!(score.shared() <= score.total());
        prop_assert!(score.meets(&Threshold::ZERO));
        prop_assert_eq!(score.meets(&Threshold::ONE), score.is_exact());
    }

    /// The bitset agrees with the hash set on normalized text.
    #[test]
    fn prop_packed_matches_generic(a in raw_text_strategy(), b in raw_text_strategy()) {
        let (a, b) = (normalize(&a), normalize(&b));
        let packed = packed_similarity(
            &PackedBigrams::from_normalized(&a),
            &PackedBigrams::from_normalized(&b),
        );
        let generic = similarity(&a, &b);
        prop_assert_eq!(
            (packed.shared(), packed.total()),
            (generic.shared(), generic.total())
        );
        prop_assert_eq!(PackedBigrams::from_normalized(&a).len(), bigrams(&a).len());
    }

    /// `try_similarity` fails exactly on degenerate comparisons.
    #[test]
    fn prop_try_similarity_flags_degenerate(a in raw_text_strategy(), b in raw_text_strategy()) {
        let score = similarity(&a, &b);
        match try_similarity(&a, &b) {
            Ok(ok) => prop_assert_eq!(ok, score),
            Err(SimilarityError::Degenerate) => prop_assert!(score.is_degenerate()),
        }
    }

    /// A threshold printed and parsed back is the same fraction.
    #[test]
    fn prop_threshold_display_parses_back(t in threshold_strategy()) {
        let parsed: Threshold = t.to_string().parse().unwrap();
        prop_assert_eq!(parsed, t);
    }
}
