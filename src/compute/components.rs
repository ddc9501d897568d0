//! Regex building blocks for the component-selection encoding.
//!
//! Fragments that already match a forbidden word can never be part of a
//! winning alternation, so they are disabled once when the set is built.

use regex::Regex;

/// Ordered regex fragments, each either active or permanently disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSet {
    fragments: Vec<Option<String>>,
}

impl ComponentSet {
    /// Build a component set, disabling every fragment that matches any negative word.
    ///
    /// Matching is an unanchored search. A fragment that does not compile is
    /// rejected outright.
    pub fn filtered<S, N>(components: &[S], negative: &[N]) -> Result<Self, ComponentError>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        let mut fragments = Vec::with_capacity(components.len());

        for (index, component) in components.iter().enumerate() {
            let fragment = component.as_ref();
            let regex = Regex::new(fragment).map_err(|source| ComponentError::InvalidFragment {
                index,
                fragment: fragment.to_string(),
                source,
            })?;

            match negative.iter().map(|w| w.as_ref()).find(|w| regex.is_match(w)) {
                Some(word) => {
                    log::debug!("Disabling component {index} {fragment:?}: matches {word:?}");
                    fragments.push(None);
                }
                None => fragments.push(Some(fragment.to_string())),
            }
        }

        let set = Self { fragments };
        log::debug!(
            "Component set ready: {}/{} active",
            set.active_count(),
            set.len()
        );
        Ok(set)
    }

    /// Number of slots, disabled ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragment at `index`, or `None` if disabled or out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fragments.get(index).and_then(|f| f.as_deref())
    }

    /// Number of fragments still available for selection.
    pub fn active_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_some()).count()
    }

    /// Iterate over all slots in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.fragments.iter().map(|f| f.as_deref())
    }
}

/// Errors raised while building a [`ComponentSet`].
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("Component {index} ({fragment:?}) is not a valid regex")]
    InvalidFragment {
        index: usize,
        fragment: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_disables_fragment_matching_negative() {
        let set = ComponentSet::filtered(&["ca", "dog", "t", "r"], &["dog"]).unwrap();

        assert_eq!(set.len(), 4);
        assert_eq!(set.active_count(), 3);
        assert_eq!(set.get(0), Some("ca"));
        assert_eq!(set.get(1), None);
        assert_eq!(set.get(2), Some("t"));
        assert_eq!(set.get(3), Some("r"));
    }

    #[test]
    fn test_search_not_full_match() {
        // "o" matches inside "dog" even though it is not the whole word
        let set = ComponentSet::filtered(&["o", "^o$", "x"], &["dog"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![None, Some("^o$"), Some("x")]);
    }

    #[test]
    fn test_no_negatives_keeps_everything() {
        let negative: [&str; 0] = [];
        let set = ComponentSet::filtered(&["a", "b.", ".*"], &negative).unwrap();
        assert_eq!(set.active_count(), 3);
    }

    #[test]
    fn test_empty_fragment_matches_every_negative() {
        let set = ComponentSet::filtered(&[""], &["anything"]).unwrap();
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn test_invalid_fragment_is_rejected() {
        let err = ComponentSet::filtered(&["ok", "(unclosed"], &["dog"]).unwrap_err();
        match err {
            ComponentError::InvalidFragment { index, fragment, .. } => {
                assert_eq!(index, 1);
                assert_eq!(fragment, "(unclosed");
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let set = ComponentSet::filtered(&["a"], &["b"]).unwrap();
        assert_eq!(set.get(5), None);
    }

    proptest! {
        #[test]
        fn filtered_never_keeps_matching_fragment(
            components in prop::collection::vec("[a-d]{1,3}", 1..8),
            mut negative in prop::collection::vec("[a-d]{0,5}", 0..6),
            rotate in 0usize..6,
        ) {
            if !negative.is_empty() {
                let k = rotate % negative.len();
                negative.rotate_left(k);
            }
            let set = ComponentSet::filtered(&components, &negative).unwrap();

            for fragment in set.iter().flatten() {
                let regex = Regex::new(fragment).unwrap();
                prop_assert!(negative.iter().all(|w| !regex.is_match(w)));
            }
        }

        #[test]
        fn filtering_is_order_independent(
            components in prop::collection::vec("[a-c]{1,2}", 1..6),
            negative in prop::collection::vec("[a-c]{1,4}", 1..5),
        ) {
            let mut reversed = negative.clone();
            reversed.reverse();
            let a = ComponentSet::filtered(&components, &negative).unwrap();
            let b = ComponentSet::filtered(&components, &reversed).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
