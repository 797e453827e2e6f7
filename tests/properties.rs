//! Property tests for asmedit.
//!
//! Properties use randomized input generation to protect the round-trip
//! contract, the never-panics guarantee on untrusted text, and the
//! reference-list addressing-mode invariant.
//!
//! Run with: `cargo test --test properties`

use proptest::prelude::*;

use asmedit::{guid, AssemblyDocument, EditableAssembly, Platforms};

fn small_text() -> impl Strategy<Value = String> {
    // Small printable strings; field content is opaque to the model.
    proptest::string::string_regex("[A-Za-z0-9 ._:#\\-]{0,24}").unwrap()
}

fn small_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(small_text(), 0..=max)
}

prop_compose! {
    fn arb_document()(
        strings in (small_text(), small_text()),
        lists in (
            small_list(4),
            small_list(3),
            small_list(3),
            small_list(3),
            small_list(3),
        ),
        flags in (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
    ) -> AssemblyDocument {
        let (name, root_namespace) = strings;
        let (references, include_platforms, exclude_platforms, precompiled_references, version_defines) = lists;
        let (allow_unsafe_code, override_references, auto_referenced, no_engine_references) = flags;
        AssemblyDocument {
            name,
            root_namespace,
            references,
            include_platforms,
            exclude_platforms,
            allow_unsafe_code,
            override_references,
            precompiled_references,
            auto_referenced,
            define_constraints: Vec::new(),
            version_defines,
            no_engine_references,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every reachable document value round-trips field-for-field.
    #[test]
    fn property_document_round_trip(doc in arb_document()) {
        let text = doc.to_text().expect("serialization of a typed document succeeds");
        let reparsed = AssemblyDocument::from_text(&text)
            .expect("serialized form parses back");

        prop_assert_eq!(reparsed, doc);
    }

    /// PROPERTY: `from_text` never panics on arbitrary small input.
    #[test]
    fn property_from_text_never_panics(text in "(?s).{0,256}") {
        let _ = AssemblyDocument::from_text(&text);
        let _ = EditableAssembly::from_text(&text, "");
    }

    /// PROPERTY: Any interleaving of add operations leaves the reference
    /// list homogeneous (one addressing mode) and free of duplicates.
    #[test]
    fn property_reference_list_stays_homogeneous(
        ops in proptest::collection::vec(
            (any::<bool>(), prop_oneof![
                small_text(),
                Just("27619889b8ba8c24980f49ee34dbb44a".to_string()),
                Just("GUID:aaaaaaaabbbbccccdddd000000000001".to_string()),
            ]),
            0..12,
        )
    ) {
        let mut edit = EditableAssembly::from_text("{}", "").unwrap();
        for (by_guid, value) in &ops {
            if *by_guid {
                edit.add_reference_by_guid(value);
            } else {
                edit.add_reference_by_name(value);
            }
        }

        let tagged = edit
            .references()
            .iter()
            .filter(|r| guid::is_guid_reference(r))
            .count();
        prop_assert!(tagged == 0 || tagged == edit.references().len());

        let mut seen = std::collections::HashSet::new();
        for reference in edit.references() {
            prop_assert!(seen.insert(reference.clone()), "duplicate {reference}");
        }
    }

    /// PROPERTY: Platform evaluation never panics, whatever strings the
    /// document carries and whatever bits the caller passes.
    #[test]
    fn property_platform_evaluation_never_panics(
        include in small_list(3),
        exclude in small_list(3),
        bits in any::<u32>(),
    ) {
        let edit = EditableAssembly::from_document(
            AssemblyDocument {
                include_platforms: include,
                exclude_platforms: exclude,
                ..AssemblyDocument::default()
            },
            "",
        );

        let _ = edit.are_platforms_included(Platforms::from_bits_truncate(bits));
    }
}
