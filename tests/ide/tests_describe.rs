//! Describe tests: what the cursor or selection is on.

use pkgnav::base::TextSize;
use pkgnav::hir::{NavError, NodeCategory};
use pkgnav::ide::AnalysisHost;
use pkgnav::syntax::FileSet;

use crate::helpers::fixtures::{MAIN_SRC, MainAndUtil, main_and_util};

fn host_with_main(files: &FileSet) -> (AnalysisHost, MainAndUtil) {
    let fixture = main_and_util(files);
    let host = AnalysisHost::new();
    host.add_package(&fixture.main);
    (host, fixture)
}

#[test]
fn test_describe_import_keyword() {
    let files = FileSet::new();
    let (host, fixture) = host_with_main(&files);

    let offset = fixture.main_src.at("import", 0);
    let desc = host.analysis().describe("main", offset, offset).unwrap();

    assert_eq!(desc.kind, "ImportSpec");
    assert_eq!(desc.category, NodeCategory::Package);
    assert_eq!(fixture.main_src.slice(desc.range), "\"util\"");
}

#[test]
fn test_describe_import_path_literal() {
    let files = FileSet::new();
    let (host, fixture) = host_with_main(&files);

    let offset = fixture.main_src.at("\"util\"", 0);
    let desc = host.analysis().describe("main", offset, offset).unwrap();

    assert_eq!(desc.kind, "ImportSpec");
    assert_eq!(desc.category, NodeCategory::Package);
}

#[test]
fn test_describe_package_qualifier() {
    let files = FileSet::new();
    let (host, fixture) = host_with_main(&files);

    let offset = fixture.main_src.at("util.", 0);
    let desc = host.analysis().describe("main", offset, offset).unwrap();

    assert_eq!(desc.kind, "Ident");
    assert_eq!(desc.category, NodeCategory::Package);
}

#[test]
fn test_describe_exact_selector_selection() {
    let files = FileSet::new();
    let (host, fixture) = host_with_main(&files);

    let start = fixture.main_src.at("util.Helper", 0);
    let end = start + TextSize::of("util.Helper");
    let desc = host.analysis().describe("main", start, end).unwrap();

    assert!(desc.exact);
    // The selector itself is passed over for the selected member.
    assert_eq!(desc.kind, "Ident");
    assert_eq!(fixture.main_src.slice(desc.range), "Helper");
    assert_eq!(desc.category, NodeCategory::Expr);
}

#[test]
fn test_describe_package_clause() {
    let files = FileSet::new();
    let (host, fixture) = host_with_main(&files);

    let offset = fixture.main_src.at("main", 0);
    let desc = host.analysis().describe("main", offset, offset).unwrap();

    assert_eq!(desc.category, NodeCategory::Package);
    assert_eq!(fixture.main_src.slice(desc.range), "main");
}

#[test]
fn test_describe_in_dependency() {
    let files = FileSet::new();
    let (host, fixture) = host_with_main(&files);

    let offset = fixture.util_src.at("return", 0);
    let desc = host.analysis().describe("util", offset, offset).unwrap();

    assert_eq!(desc.kind, "ReturnStmt");
    assert_eq!(desc.category, NodeCategory::Stmt);
}

#[test]
fn test_describe_outside_package_files() {
    let files = FileSet::new();
    let (host, fixture) = host_with_main(&files);

    let past_main = fixture.main_src.base + TextSize::of(MAIN_SRC) + TextSize::from(10);
    let err = host
        .analysis()
        .describe("main", past_main, past_main)
        .unwrap_err();

    assert_eq!(err, NavError::NotFound { offset: past_main });
}
