use esptag_resolver::{
    resolve, ChainEnd, InMemoryRegistry, MatchConfidence, ParentLink, ResolveError,
    ResolveRequest, ResolverConfig, StoreError, TagOccurrence, TagRegistry, MAX_ANCESTOR_HOPS,
};
use pretty_assertions::assert_eq;

fn row(
    message_type: &str,
    tag: &str,
    parent: &str,
    tag_seq: i64,
    message_tag_seq: i64,
) -> TagOccurrence {
    TagOccurrence {
        message_type: message_type.into(),
        message_subtype: "1".into(),
        tag: tag.into(),
        parent_tag: parent.into(),
        tag_seq,
        message_tag_seq,
    }
}

fn request(xml: &str, tag: &str, message_type: &str) -> ResolveRequest {
    ResolveRequest {
        xml_fragment: xml.into(),
        tag: tag.into(),
        message_type: message_type.into(),
    }
}

fn two_position_registry() -> InMemoryRegistry {
    InMemoryRegistry::with_rows([
        row("msg.001", "root", "", 1, 0),
        row("msg.001", "parent", "root", 2, 1),
        row("msg.001", "x", "", 5, 0),
        row("msg.001", "other", "x", 6, 5),
        // Store order puts the weaker candidate first.
        row("msg.001", "target", "other", 7, 6),
        row("msg.001", "target", "parent", 3, 2),
    ])
}

#[test]
fn structurally_matching_candidate_wins_with_high_confidence() {
    let registry = two_position_registry();
    let resolution = resolve(
        &registry,
        &request("<root><parent><target/></parent></root>", "target", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap();

    assert_eq!(resolution.observed.parent, "parent");
    assert_eq!(resolution.ranking.confidence, MatchConfidence::BestMatch);

    let ranked = &resolution.ranking.candidates;
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].chain.tags, vec!["root", "parent", "target"]);
    assert_eq!(ranked[1].chain.tags, vec!["x", "other", "target"]);
    assert!(ranked[0].score > ranked[1].score);
    assert_eq!(ranked[0].score, 10 + 15 + 12);
    assert_eq!(ranked[1].score, 10 + 6);
    assert!(ranked.iter().all(|c| c.chain.end == ChainEnd::Root));
}

#[test]
fn unknown_tag_for_message_type_is_a_distinct_empty_outcome() {
    let registry = two_position_registry();
    let resolution = resolve(
        &registry,
        &request("<root><parent><target/></parent></root>", "target", "msg.999"),
        ResolverConfig::default(),
    )
    .unwrap();

    assert!(resolution.ranking.candidates.is_empty());
    assert_eq!(resolution.ranking.confidence, MatchConfidence::NoOccurrences);
}

#[test]
fn prefixed_tag_names_resolve_like_local_names() {
    let registry = two_position_registry();
    let xml = r#"<p:root xmlns:p="urn:x"><p:parent><p:target>1</p:target></p:parent></p:root>"#;
    let resolution = resolve(
        &registry,
        &request(xml, "p:target", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap();

    assert_eq!(resolution.tag, "target");
    assert_eq!(resolution.ranking.candidates[0].occurrence.parent_tag, "parent");
}

#[test]
fn empty_fields_are_invalid_input() {
    let registry = InMemoryRegistry::new();
    for req in [
        request("", "target", "msg.001"),
        request("<a/>", " ", "msg.001"),
        request("<a/>", "a", ""),
    ] {
        let err = resolve(&registry, &req, ResolverConfig::default()).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidInput(_)), "{err}");
    }
}

#[test]
fn prefix_without_local_name_is_invalid_input() {
    let registry = InMemoryRegistry::new();
    let err = resolve(
        &registry,
        &request("<ns:a xmlns:ns=\"urn:x\"/>", "ns:", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::InvalidInput(_)), "{err}");
}

#[test]
fn fragment_failures_are_reported_before_the_registry_is_queried() {
    struct Unreachable;

    impl TagRegistry for Unreachable {
        fn find_occurrences(&self, _: &str, _: &str) -> Result<Vec<TagOccurrence>, StoreError> {
            panic!("registry must not be queried");
        }

        fn find_parent(&self, _: &str, _: &str, _: i64) -> Result<Option<ParentLink>, StoreError> {
            panic!("registry must not be queried");
        }
    }

    let not_found = resolve(
        &Unreachable,
        &request("<root><other/></root>", "target", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(not_found, ResolveError::NotFound(_)));

    let malformed = resolve(
        &Unreachable,
        &request("<root><target", "target", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(malformed, ResolveError::MalformedInput { .. }));
}

#[test]
fn initial_lookup_failure_aborts_the_resolution() {
    struct Broken;

    impl TagRegistry for Broken {
        fn find_occurrences(&self, _: &str, _: &str) -> Result<Vec<TagOccurrence>, StoreError> {
            Err(StoreError::new("connection reset"))
        }

        fn find_parent(&self, _: &str, _: &str, _: i64) -> Result<Option<ParentLink>, StoreError> {
            Ok(None)
        }
    }

    let err = resolve(
        &Broken,
        &request("<root><target/></root>", "target", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::StoreFailure(ref e) if e.0 == "connection reset"));
}

#[test]
fn chain_failure_only_degrades_that_candidate() {
    let mut registry = two_position_registry();
    registry.fail_parent_lookup("other", 6);

    let resolution = resolve(
        &registry,
        &request("<root><parent><target/></parent></root>", "target", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap();

    let ranked = &resolution.ranking.candidates;
    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].chain.is_complete());
    assert_eq!(ranked[1].chain.tags, vec!["other", "target"]);
    assert!(matches!(ranked[1].chain.end, ChainEnd::StoreError(_)));
}

#[test]
fn cyclic_registry_data_is_bounded() {
    let registry = InMemoryRegistry::with_rows([
        row("msg.001", "A", "B", 1, 2),
        row("msg.001", "B", "A", 2, 1),
        row("msg.001", "leaf", "A", 9, 1),
    ]);

    let resolution = resolve(
        &registry,
        &request("<A><leaf/></A>", "leaf", "msg.001"),
        ResolverConfig::default(),
    )
    .unwrap();

    let chain = &resolution.ranking.candidates[0].chain;
    assert_eq!(chain.end, ChainEnd::HopLimit);
    assert_eq!(chain.tags.len(), 2 + MAX_ANCESTOR_HOPS);
}

#[test]
fn equal_candidates_are_ambiguous_and_keep_store_order() {
    let registry = InMemoryRegistry::with_rows([
        row("msg.001", "Amt", "Left", 4, 3),
        row("msg.001", "Amt", "Right", 8, 7),
    ]);

    let resolution = resolve(
        &registry,
        &request("<Doc><Middle><Amt>1</Amt></Middle></Doc>", "Amt", "msg.001"),
        ResolverConfig { confidence_gap: 10 },
    )
    .unwrap();

    assert_eq!(resolution.ranking.confidence, MatchConfidence::Ambiguous);
    let parents: Vec<&str> = resolution
        .ranking
        .candidates
        .iter()
        .map(|c| c.occurrence.parent_tag.as_str())
        .collect();
    assert_eq!(parents, vec!["Left", "Right"]);
}
