//! Integration tests for fishbone-correlation
//!
//! End-to-end scenarios over a small multi-category catalog, plus property
//! tests for the invariants every operation must hold.

use fishbone_correlation::{
    calculate_priority_by_category, get_common_case_patterns, get_solution_relationships,
    get_top_solutions, CorrelationEngine,
};
use fishbone_domain::{Catalog, Category, Cause, Priority, Selection};
use proptest::prelude::*;

fn scenario_catalog() -> Catalog {
    Catalog::from_causes([
        Cause::new("man-001", "Kurangnya kesadaran bahaya", Category::Man)
            .with_priority("Critical")
            .with_solutions(["Training X", "Audit"]),
        Cause::new("man-002", "Gerakan ceroboh", Category::Man)
            .with_priority("High")
            .with_solutions(["Safety reminder"]),
        Cause::new("man-003", "Pelanggaran prosedur LOTO", Category::Man)
            .with_priority("Critical")
            .with_solutions(["Audit", "Leadership"]),
        Cause::new("machine-001", "Kerusakan komponen kritis", Category::Machine)
            .with_priority("critical")
            .with_solutions(["Preventive maintenance", "audit "])
            .with_case_example("Rem crane gagal saat mengangkat beban"),
        Cause::new("material-001", "Material tidak standar", Category::Material)
            .with_priority("Medium")
            .with_case_example("Runtuhnya rak karena beban material berlebih"),
        Cause::new("material-002", "Penumpukan tidak stabil", Category::Material)
            .with_case_example("Material jatuh karena beban pallet tidak stabil"),
    ])
    .unwrap()
}

#[test]
fn test_shared_audit_scenario() {
    let catalog = scenario_catalog();
    let mut selection = Selection::new();
    selection.extend("man", ["man-001", "man-003"]);

    let priorities = serde_json::to_value(calculate_priority_by_category(&selection, &catalog)).unwrap();
    assert_eq!(
        priorities,
        serde_json::json!({"man": {"Critical": 2, "High": 0, "Medium": 0, "Low": 0}})
    );

    let relationships = serde_json::to_value(get_solution_relationships(&selection, &catalog)).unwrap();
    assert_eq!(
        relationships,
        serde_json::json!({"man-001": ["man-003"], "man-003": ["man-001"]})
    );
}

#[test]
fn test_dangling_id_is_omitted() {
    let catalog = scenario_catalog();
    let mut selection = Selection::new();
    selection.extend("man", ["man-001", "man-999"]);

    let priorities = calculate_priority_by_category(&selection, &catalog);
    assert_eq!(priorities.get(Category::Man).unwrap().total(), 1);
    assert_eq!(get_top_solutions(&selection, &catalog, 5), vec!["Training X", "Audit"]);
}

#[test]
fn test_negative_limit_still_returns_a_solution() {
    let catalog = scenario_catalog();
    let mut selection = Selection::new();
    selection.add("man", "man-002");

    assert_eq!(get_top_solutions(&selection, &catalog, -5), vec!["Safety reminder"]);
}

#[test]
fn test_cross_category_relationships_and_patterns() {
    let catalog = scenario_catalog();
    let mut selection = Selection::new();
    selection.extend("man", ["man-001", "man-003"]);
    selection.add("machine", "machine-001");
    selection.extend("material", ["material-001", "material-002"]);

    let relationships = get_solution_relationships(&selection, &catalog);
    assert_eq!(relationships["machine-001"].len(), 2);
    assert!(relationships["man-001"].contains("machine-001"));
    assert!(!relationships.contains_key("material-001"));

    let top = get_top_solutions(&selection, &catalog, 1);
    assert_eq!(top, vec!["Audit"]);

    let patterns = get_common_case_patterns(&selection, &catalog, 0);
    let keywords: Vec<(&str, usize)> =
        patterns.iter().map(|p| (p.keyword.as_str(), p.count)).collect();
    assert_eq!(
        keywords,
        vec![("beban", 3), ("karena", 2), ("material", 2)]
    );
}

#[test]
fn test_unknown_and_missing_categories_are_skipped() {
    let catalog = scenario_catalog();
    let mut selection = Selection::new();
    selection.add("people", "man-001");
    selection.add("method", "method-001");
    selection.add("material", "material-001");

    let report = CorrelationEngine::default_config().analyze(&selection, &catalog);
    let categories: Vec<Category> = report.priority_by_category.iter().map(|(c, _)| c).collect();
    assert_eq!(categories, vec![Category::Material]);
    assert_eq!(
        report.priority_by_category.get(Category::Material).unwrap().get(Priority::Medium),
        1
    );
}

// --- property tests ---

const SOLUTIONS: [&str; 5] = ["Audit", "audit ", "Training", "Leadership", "  "];
const WORDS: [&str; 6] = ["beban", "jatuh", "pekerja", "rak", "dengan", "material"];
const PRIORITIES: [Option<&str>; 5] = [Some("Critical"), Some("high"), Some("Medium"), Some("minor"), None];

fn arb_catalog_and_selection() -> impl Strategy<Value = (Catalog, Selection)> {
    let cause = (
        0usize..3,
        0usize..PRIORITIES.len(),
        prop::collection::vec(0usize..SOLUTIONS.len(), 0..4),
        prop::collection::vec(0usize..WORDS.len(), 0..6),
    );
    (
        prop::collection::vec(cause, 1..12),
        prop::collection::vec((0usize..3, 0usize..14), 0..20),
    )
        .prop_map(|(causes, picks)| {
            let categories = [Category::Man, Category::Method, Category::Machine];
            let mut builder = Catalog::builder();
            for (n, (cat, prio, sols, words)) in causes.into_iter().enumerate() {
                let category = categories[cat];
                let mut cause = Cause::new(format!("{}-{:03}", category, n), "cause", category)
                    .with_solutions(sols.into_iter().map(|s| SOLUTIONS[s]))
                    .with_case_example(
                        words.into_iter().map(|w| WORDS[w]).collect::<Vec<_>>().join(", "),
                    );
                if let Some(label) = PRIORITIES[prio] {
                    cause = cause.with_priority(label);
                }
                builder.push(cause).unwrap();
            }
            let mut selection = Selection::new();
            for (cat, n) in picks {
                let category = categories[cat];
                selection.add(category.as_str(), format!("{}-{:03}", category, n));
            }
            (builder.build(), selection)
        })
}

proptest! {
    /// Property: identical inputs give identical serialized outputs
    #[test]
    fn test_determinism((catalog, selection) in arb_catalog_and_selection()) {
        let engine = CorrelationEngine::default_config();
        let first = serde_json::to_string(&engine.analyze(&selection, &catalog)).unwrap();
        let second = serde_json::to_string(&engine.analyze(&selection, &catalog)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: each category's counts sum to its resolvable IDs
    #[test]
    fn test_priority_completeness((catalog, selection) in arb_catalog_and_selection()) {
        let distribution = calculate_priority_by_category(&selection, &catalog);
        for (key, ids) in selection.iter() {
            let category = Category::parse(key).unwrap();
            if !catalog.has_category(category) {
                prop_assert!(distribution.get(category).is_none());
                continue;
            }
            let resolvable = ids.iter().filter(|id| catalog.find(category, id).is_some()).count();
            prop_assert_eq!(distribution.get(category).unwrap().total(), resolvable);
        }
    }

    /// Property: top solutions never exceed max(1, limit)
    #[test]
    fn test_top_solutions_bound(
        (catalog, selection) in arb_catalog_and_selection(),
        limit in -10i64..10,
    ) {
        let top = get_top_solutions(&selection, &catalog, limit);
        prop_assert!(top.len() <= limit.max(1) as usize);
    }

    /// Property: relationships are symmetric and never reflexive
    #[test]
    fn test_relationship_symmetry((catalog, selection) in arb_catalog_and_selection()) {
        let relationships = get_solution_relationships(&selection, &catalog);
        for (a, related) in &relationships {
            prop_assert!(!related.is_empty());
            prop_assert!(!related.contains(a));
            for b in related {
                prop_assert!(relationships.get(b).is_some_and(|back| back.contains(a)));
            }
        }
    }

    /// Property: every pattern occurs at least twice, whatever the threshold
    #[test]
    fn test_keyword_floor(
        (catalog, selection) in arb_catalog_and_selection(),
        threshold in -5i64..4,
    ) {
        for pattern in get_common_case_patterns(&selection, &catalog, threshold) {
            prop_assert!(pattern.count >= 2);
            prop_assert!(pattern.keyword.chars().count() > 3);
            prop_assert_ne!(pattern.keyword.as_str(), "dengan");
        }
    }
}
