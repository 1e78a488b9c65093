use super::report::ReportBuilder;
use esptag_protocol::ToolNextAction;
use esptag_registry::Specialization;
use esptag_resolver::{ChainEnd, MatchConfidence, Resolution, ScoredCandidate, MAX_ANCESTOR_HOPS};
use serde_json::json;

pub(crate) fn render_resolution(resolution: &Resolution, confidence_gap: u32) -> String {
    let ranking = &resolution.ranking;
    let count = ranking.candidates.len();

    let mut doc = ReportBuilder::new();
    doc.push_answer(&format!(
        "resolve_tag {} in {}: {} ({count} candidate{})",
        resolution.tag,
        resolution.message_type,
        ranking.confidence.as_str(),
        if count == 1 { "" } else { "s" }
    ));
    doc.push_note(&format!(
        "observed path: {}",
        resolution.observed.path.join(" > ")
    ));
    if resolution.observed.parent.is_empty() {
        doc.push_note("observed parent: (root element)");
    } else {
        doc.push_note(&format!("observed parent: {}", resolution.observed.parent));
    }

    match ranking.confidence {
        MatchConfidence::NoOccurrences => {
            doc.push_note(&format!(
                "no occurrences of tag '{}' are registered for message type '{}'",
                resolution.tag, resolution.message_type
            ));
            return doc.finish();
        }
        MatchConfidence::BestMatch => match ranking.candidates.as_slice() {
            [first, second, ..] => doc.push_note(&format!(
                "best match: #1 leads #2 by {} points (needs more than {confidence_gap})",
                first.score.saturating_sub(second.score)
            )),
            _ => doc.push_note("best match: single registry occurrence"),
        },
        MatchConfidence::Ambiguous => doc.push_note(&format!(
            "ambiguous: the top candidates are within {confidence_gap} points; compare their paths before linking"
        )),
    }

    for (idx, candidate) in ranking.candidates.iter().enumerate() {
        doc.push_blank();
        push_candidate(&mut doc, idx + 1, candidate);
    }

    doc.finish()
}

fn push_candidate(doc: &mut ReportBuilder, rank: usize, candidate: &ScoredCandidate) {
    let occurrence = &candidate.occurrence;
    let parent = if occurrence.has_parent() {
        occurrence.parent_tag.as_str()
    } else {
        "-"
    };
    doc.push_candidate_header(
        rank,
        candidate.score,
        &format!("{} (parent={parent})", occurrence.tag),
    );
    doc.push_note(&format!(
        "score: base={} parent={} path={}",
        candidate.breakdown.base, candidate.breakdown.parent_bonus, candidate.breakdown.path_bonus
    ));
    doc.push_note(&format!("path: {}", candidate.chain.display_path()));
    if let Some(note) = chain_end_note(&candidate.chain.end) {
        doc.push_note(&note);
    }
    doc.push_note(&format!(
        "occurrence: message_type={} subtype={} tag={} parent_tag={parent} tag_seq={} message_tag_seq={}",
        occurrence.message_type,
        occurrence.message_subtype,
        occurrence.tag,
        occurrence.tag_seq,
        occurrence.message_tag_seq
    ));

    let action = link_action(candidate);
    doc.push_note(&format!(
        "next: {} {} ({})",
        action.tool, action.args, action.reason
    ));
}

/// `link_script` arguments for one candidate, minus the specialization id.
pub(crate) fn link_action(candidate: &ScoredCandidate) -> ToolNextAction {
    let occurrence = &candidate.occurrence;
    let mut args = json!({
        "message_type": occurrence.message_type,
        "tag": occurrence.tag,
        "tag_seq": occurrence.tag_seq,
        "message_tag_seq": occurrence.message_tag_seq,
    });
    if occurrence.has_parent() {
        if let Some(obj) = args.as_object_mut() {
            obj.insert("parent_tag".to_string(), json!(occurrence.parent_tag));
        }
    }
    ToolNextAction {
        tool: "link_script".to_string(),
        args,
        reason: "add specialization_id to link this occurrence".to_string(),
    }
}

fn chain_end_note(end: &ChainEnd) -> Option<String> {
    match end {
        ChainEnd::Root => None,
        ChainEnd::ParentNotFound => {
            Some("incomplete: parent occurrence missing from the registry".to_string())
        }
        // The last hop may have landed on the root; only the walk is known to be cut.
        ChainEnd::HopLimit => Some(format!(
            "chain: walk stopped at the {MAX_ANCESTOR_HOPS}-hop limit; root not confirmed"
        )),
        ChainEnd::StoreError(message) => {
            Some(format!("incomplete: registry error while walking: {message}"))
        }
    }
}

pub(crate) fn render_specializations(term: &str, found: &[Specialization]) -> String {
    let mut doc = ReportBuilder::new();
    if found.is_empty() {
        doc.push_answer(&format!("search_specializations '{term}': no matches"));
        doc.push_note("next: new_specialization_script to register one");
        return doc.finish();
    }
    doc.push_answer(&format!(
        "search_specializations '{term}': {} match{}",
        found.len(),
        if found.len() == 1 { "" } else { "es" }
    ));
    for specialization in found {
        doc.push_note(&format!(
            "{}: {}",
            specialization.id, specialization.description
        ));
    }
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use esptag_resolver::{AncestorChain, ObservedPath, Ranking, ScoreBreakdown, TagOccurrence};

    fn candidate(parent: &str, tags: &[&str], end: ChainEnd, path_bonus: u32) -> ScoredCandidate {
        let parent_bonus = if parent == "TxInfAndSts" { 15 } else { 0 };
        ScoredCandidate {
            occurrence: TagOccurrence {
                message_type: "pacs.002".into(),
                message_subtype: "spi".into(),
                tag: "TxSts".into(),
                parent_tag: parent.into(),
                tag_seq: 8,
                message_tag_seq: 5,
            },
            chain: AncestorChain {
                tags: tags.iter().map(|t| t.to_string()).collect(),
                end,
            },
            breakdown: ScoreBreakdown {
                base: 10,
                parent_bonus,
                path_bonus,
            },
            score: 10 + parent_bonus + path_bonus,
        }
    }

    fn resolution(candidates: Vec<ScoredCandidate>, confidence: MatchConfidence) -> Resolution {
        Resolution {
            tag: "TxSts".into(),
            message_type: "pacs.002".into(),
            observed: ObservedPath {
                parent: "TxInfAndSts".into(),
                path: vec!["Document".into(), "TxInfAndSts".into(), "TxSts".into()],
            },
            ranking: Ranking {
                candidates,
                confidence,
            },
        }
    }

    #[test]
    fn best_match_report_lists_breakdown_and_link_arguments() {
        let text = render_resolution(
            &resolution(
                vec![
                    candidate(
                        "TxInfAndSts",
                        &["Document", "TxInfAndSts", "TxSts"],
                        ChainEnd::Root,
                        12,
                    ),
                    candidate("GrpSts", &["GrpSts", "TxSts"], ChainEnd::ParentNotFound, 2),
                ],
                MatchConfidence::BestMatch,
            ),
            10,
        );

        let answer = "A: resolve_tag TxSts in pacs.002: best_match (2 candidates)\n";
        assert!(text.starts_with(&format!("[REPORT]\n{answer}")));
        assert!(text.contains("N: observed path: Document > TxInfAndSts > TxSts\n"));
        assert!(text.contains("N: best match: #1 leads #2 by 25 points (needs more than 10)\n"));
        assert!(text.contains("R: #1 score=37 TxSts (parent=TxInfAndSts)\n"));
        assert!(text.contains("N: score: base=10 parent=15 path=12\n"));
        assert!(text.contains("R: #2 score=12 TxSts (parent=GrpSts)\n"));
        assert!(text.contains("N: incomplete: parent occurrence missing from the registry\n"));
        assert!(text.contains("\"parent_tag\":\"TxInfAndSts\""));
        assert_eq!(text.matches("N: next: link_script ").count(), 2);
    }

    #[test]
    fn no_occurrences_is_reported_without_candidates() {
        let text = render_resolution(&resolution(Vec::new(), MatchConfidence::NoOccurrences), 10);
        assert!(text.contains("no_occurrences (0 candidates)"));
        let note = "no occurrences of tag 'TxSts' are registered for message type 'pacs.002'";
        assert!(text.contains(note));
        assert!(!text.contains("R: #"));
    }

    #[test]
    fn ambiguous_banner_names_the_gap() {
        let text = render_resolution(
            &resolution(
                vec![
                    candidate("A", &["A", "TxSts"], ChainEnd::HopLimit, 2),
                    candidate("B", &["B", "TxSts"], ChainEnd::Root, 2),
                ],
                MatchConfidence::Ambiguous,
            ),
            7,
        );
        assert!(text.contains("ambiguous: the top candidates are within 7 points"));
        assert!(text.contains("N: chain: walk stopped at the 5-hop limit; root not confirmed\n"));
        assert!(!text.contains("N: incomplete:"));
    }

    #[test]
    fn root_level_link_action_omits_parent() {
        let root = candidate("", &["TxSts"], ChainEnd::Root, 2);
        let action = link_action(&root);
        assert_eq!(action.tool, "link_script");
        assert!(action.args.get("parent_tag").is_none());
        assert_eq!(action.args["tag_seq"], 8);
    }

    #[test]
    fn specialization_listing() {
        let text = render_specializations(
            "Status",
            &[Specialization {
                id: 3,
                description: "Status da transacao".into(),
            }],
        );
        assert!(text.contains("A: search_specializations 'Status': 1 match\n"));
        assert!(text.contains("N: 3: Status da transacao\n"));

        let empty = render_specializations("zzz", &[]);
        assert!(empty.contains("no matches"));
    }
}
