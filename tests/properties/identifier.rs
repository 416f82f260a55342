//! Property tests for resource identifier sanitization.

use proptest::prelude::*;

use domain_companion::ResourceIdentifier;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identifiers only ever contain ASCII alphanumerics.
    #[test]
    fn property_identifier_is_alphanumeric(zone in "\\PC{0,40}") {
        let id = ResourceIdentifier::from_zone(&zone);
        prop_assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()), "{id}");
    }

    /// PROPERTY: sanitizing keeps alphanumerics in order and is idempotent.
    #[test]
    fn property_identifier_keeps_alphanumerics_in_order(
        labels in proptest::collection::vec("[a-z0-9-]{1,12}", 1..4)
    ) {
        let zone = labels.join(".");
        let expected: String = zone.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        let id = ResourceIdentifier::from_zone(&zone);
        prop_assert_eq!(id.as_str(), expected.as_str());
        prop_assert_eq!(ResourceIdentifier::from_zone(id.as_str()), id.clone());
    }
}
