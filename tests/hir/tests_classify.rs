//! Node classification over the `shapes` fixture.
//!
//! Each case puts the cursor on the first byte of a snippet and checks which
//! node the classifier settles on and what it is.

use pkgnav::hir::{GlobalCache, NodeCategory, Package, classify, enclosing_path};
use pkgnav::syntax::{FileSet, SyntaxPath};
use rstest::rstest;

use crate::helpers::fixtures::{Located, shapes};

/// Classify at the first byte of `snippet` and check the settled node.
fn assert_classified(
    pkg: &Package,
    src: Located,
    snippet: &str,
    kind: &str,
    text: &str,
    category: NodeCategory,
) {
    let offset = src.at(snippet, 0);
    let (path, _) = enclosing_path(pkg, offset, offset).unwrap();
    let (path, actual) = classify(path, pkg.type_info()).unwrap();

    let node = path.innermost().unwrap();
    assert_eq!(path.tree().kind(node).name(), kind, "kind at {snippet:?}");
    let found = src.slice(path.tree().range(node));
    assert!(
        found.starts_with(text),
        "expected node text starting with {text:?} at {snippet:?}, got {found:?}"
    );
    assert_eq!(actual, category, "category at {snippet:?}");
}

// =============================================================================
// CLASSIFICATION TABLE
// =============================================================================

#[rstest]
#[case::package_clause("shapes", "Ident", "shapes", NodeCategory::Package)]
#[case::between_declarations("\n\n//", "File", "package shapes", NodeCategory::Unknown)]
#[case::comment("// Point", "Comment", "// Point is", NodeCategory::Unknown)]
#[case::type_keyword("type", "Ident", "Point", NodeCategory::Type)]
#[case::type_name("Point struct", "Ident", "Point", NodeCategory::Type)]
#[case::field_name("Label string", "StructType", "struct {", NodeCategory::Type)]
#[case::field_with_two_names("X, Y", "StructType", "struct {", NodeCategory::Type)]
#[case::inside_multi_name_field("  int", "StructType", "struct {", NodeCategory::Type)]
#[case::inside_single_name_field(" string", "StructType", "struct {", NodeCategory::Type)]
#[case::predeclared_type("int\n", "Ident", "int", NodeCategory::Type)]
#[case::var_keyword("var", "Ident", "origin", NodeCategory::Expr)]
#[case::composite_type("Point{", "Ident", "Point", NodeCategory::Type)]
#[case::composite_lit("{X", "CompositeLit", "Point{X: 0}", NodeCategory::Expr)]
#[case::field_key("X: 0", "Ident", "X", NodeCategory::Expr)]
#[case::key_value(": 0", "KeyValueExpr", "X: 0", NodeCategory::Unknown)]
#[case::int_literal("0}", "BasicLit", "0", NodeCategory::Expr)]
#[case::const_group("const", "DeclGroup", "const (", NodeCategory::Unknown)]
#[case::const_name("A = 1", "Ident", "A", NodeCategory::Expr)]
#[case::func_keyword("func", "Ident", "area", NodeCategory::Expr)]
#[case::param_list("(p", "FuncType", "(p *Point) int", NodeCategory::Type)]
#[case::param_name("p *Point", "Ident", "p", NodeCategory::Expr)]
#[case::pointer_type("*Point", "StarExpr", "*Point", NodeCategory::Type)]
#[case::builtin_call("len", "CallExpr", "len(p.Label)", NodeCategory::Expr)]
#[case::selector_dot(".Label", "Ident", "Label", NodeCategory::Expr)]
#[case::define(":=", "AssignStmt", "n := len", NodeCategory::Stmt)]
#[case::label_def("loop:", "Ident", "loop", NodeCategory::Stmt)]
#[case::label_use("loop\n    }", "Ident", "loop", NodeCategory::Stmt)]
#[case::break_keyword("break", "BranchStmt", "break loop", NodeCategory::Stmt)]
#[case::for_keyword("for", "ForStmt", "for {", NodeCategory::Stmt)]
#[case::blank_ident("_ =", "Ident", "_", NodeCategory::Unknown)]
#[case::nil("nil", "Ident", "nil", NodeCategory::Expr)]
#[case::return_keyword("return", "ReturnStmt", "return n", NodeCategory::Stmt)]
#[case::returned_var("n\n}", "Ident", "n", NodeCategory::Expr)]
fn test_classify_shapes(
    #[case] snippet: &str,
    #[case] kind: &str,
    #[case] text: &str,
    #[case] category: NodeCategory,
) {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let cache = GlobalCache::new();
    let pkg = cache.add(&shapes.desc);

    assert_classified(&pkg, shapes.src, snippet, kind, text, category);
}

#[rstest]
#[case::dot_import(". \"fmt\"", "ImportSpec", ". \"fmt\"", NodeCategory::Package)]
#[case::import_path_literal("\"fmt\"", "ImportSpec", ". \"fmt\"", NodeCategory::Package)]
#[case::named_import("u \"util\"", "Ident", "u", NodeCategory::Package)]
#[case::variadic_param("...int", "Ident", "xs", NodeCategory::Expr)]
#[case::chan_type("chan", "ChanType", "chan int", NodeCategory::Type)]
#[case::multi_name_var("var a", "ValueSpec", "a, b = 1, 2", NodeCategory::Unknown)]
#[case::undeclared_func("sum", "Ident", "sum", NodeCategory::Unknown)]
#[case::spread_args("...)", "CallExpr", "sum(xs...)", NodeCategory::Expr)]
#[case::bad_expr("#", "CallExpr", "print(#)", NodeCategory::Expr)]
#[case::package_qualifier("u.Missing", "Ident", "u", NodeCategory::Package)]
#[case::unresolved_member(".Missing", "SelectorExpr", "u.Missing", NodeCategory::Unknown)]
#[case::comm_clause("case", "CommClause", "case <-ch:", NodeCategory::Unknown)]
#[case::receive("<-ch", "UnaryExpr", "<-ch", NodeCategory::Expr)]
#[case::select_keyword("select", "SelectStmt", "select {", NodeCategory::Stmt)]
fn test_classify_shapes_extra(
    #[case] snippet: &str,
    #[case] kind: &str,
    #[case] text: &str,
    #[case] category: NodeCategory,
) {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let cache = GlobalCache::new();
    let pkg = cache.add(&shapes.desc);

    assert_classified(&pkg, shapes.extra_src, snippet, kind, text, category);
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_classify_is_deterministic() {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let cache = GlobalCache::new();
    let pkg = cache.add(&shapes.desc);

    for snippet in ["type", "Label string", "len", ".Label", "const", "_ ="] {
        let offset = shapes.src.at(snippet, 0);
        let (first, _) = enclosing_path(&pkg, offset, offset).unwrap();
        let (second, _) = enclosing_path(&pkg, offset, offset).unwrap();

        let first = classify(first, pkg.type_info()).unwrap();
        let second = classify(second, pkg.type_info()).unwrap();
        assert_eq!(first, second, "classification of {snippet:?} changed");
    }
}

#[test]
fn test_single_spec_group_classifies_like_its_spec() {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let cache = GlobalCache::new();
    let pkg = cache.add(&shapes.desc);

    let offset = shapes.src.at("type", 0);
    let (group_path, _) = enclosing_path(&pkg, offset, offset).unwrap();
    let group = group_path.innermost().unwrap();
    assert_eq!(group_path.tree().kind(group).name(), "DeclGroup");

    let spec = group_path.tree().children(group)[0];
    let spec_path = SyntaxPath::from_node(group_path.file(), spec);

    let via_group = classify(group_path.clone(), pkg.type_info()).unwrap();
    let via_spec = classify(spec_path, pkg.type_info()).unwrap();
    assert_eq!(via_group, via_spec);
}

#[test]
fn test_multi_spec_group_is_unknown_at_the_group() {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let cache = GlobalCache::new();
    let pkg = cache.add(&shapes.desc);

    let offset = shapes.src.at("const", 0);
    let (path, _) = enclosing_path(&pkg, offset, offset).unwrap();
    let group = path.innermost();

    let (path, category) = classify(path, pkg.type_info()).unwrap();
    assert_eq!(category, NodeCategory::Unknown);
    assert_eq!(path.innermost(), group);
}

#[test]
fn test_struct_field_resolves_to_struct_not_field() {
    let files = FileSet::new();
    let shapes = shapes(&files);
    let cache = GlobalCache::new();
    let pkg = cache.add(&shapes.desc);

    let offset = shapes.src.at("Label string", 0);
    let (path, _) = enclosing_path(&pkg, offset, offset).unwrap();
    let depth = path.len();

    let (path, _) = classify(path, pkg.type_info()).unwrap();
    // Field name, Field, FieldList, then the struct type.
    assert_eq!(path.len(), depth - 3);
    assert_eq!(path.tree().kind(path.innermost().unwrap()).name(), "StructType");
}
