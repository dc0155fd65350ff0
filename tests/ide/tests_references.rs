//! Find-references tests.

use pkgnav::hir::{ImportPath, Symbol, SymbolKind};
use pkgnav::ide::AnalysisHost;
use pkgnav::syntax::FileSet;

use crate::helpers::fixtures::{main_and_util, shapes};

#[test]
fn test_references_span_packages() {
    let files = FileSet::new();
    let fixture = main_and_util(&files);
    let host = AnalysisHost::new();
    host.add_package(&fixture.main);

    let refs = host.analysis().find_references(&fixture.helper);

    let summary: Vec<_> = refs
        .iter()
        .map(|r| (r.package.clone(), r.start_line, r.start_col, r.is_definition))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ImportPath::new("util"), 2, 5, true),
            (ImportPath::new("main"), 4, 19, false),
        ]
    );
}

#[test]
fn test_references_within_one_package() {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let host = AnalysisHost::new();
    host.add_package(&shapes.desc);

    let refs = host.analysis().find_references(&shapes.point);

    let lines: Vec<_> = refs.iter().map(|r| (r.start_line, r.start_col)).collect();
    // `type Point`, `Point{X: 0}`, `*Point`.
    assert_eq!(lines, vec![(3, 5), (8, 13), (15, 13)]);
    assert_eq!(refs.iter().filter(|r| r.is_definition).count(), 1);
    assert!(refs[0].is_definition);
}

#[test]
fn test_symbol_at_then_references() {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let host = AnalysisHost::new();
    host.add_package(&shapes.desc);
    let analysis = host.analysis();

    let symbol = analysis
        .symbol_at("shapes", shapes.src.at("n :=", 0))
        .unwrap()
        .expect("n is defined");
    assert_eq!(symbol.kind, SymbolKind::Var);

    let refs = analysis.find_references(&symbol);
    assert_eq!(refs.len(), 2);
    assert!(refs[0].is_definition);
    assert!(!refs[1].is_definition);
}

#[test]
fn test_references_to_unknown_symbol() {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let host = AnalysisHost::new();
    host.add_package(&shapes.desc);

    let ghost = Symbol::new("Ghost", SymbolKind::TypeName, "shapes", 0.into());
    assert!(host.analysis().find_references(&ghost).is_empty());
}
