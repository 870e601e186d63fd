#![cfg(unix)]
//! Lexical normalize / relative / join behavior on unix-style paths.

use git_path::paths::{join, normalize, relative_to};
use git_path::AppError;

#[test]
fn normalize_collapses_dots_and_separators() {
    assert_eq!(normalize("a/./b//c/"), "a/b/c");
    assert_eq!(normalize("./a"), "a");
    assert_eq!(normalize("/a/b/../c"), "/a/c");
}

#[test]
fn normalize_keeps_leading_parent_on_relative_paths() {
    assert_eq!(normalize("a/../.."), "..");
    assert_eq!(normalize("../../x"), "../../x");
}

#[test]
fn normalize_parent_of_root_is_root() {
    assert_eq!(normalize("/.."), "/");
    assert_eq!(normalize("/../a"), "/a");
}

#[test]
fn normalize_empty_and_current_dir() {
    assert_eq!(normalize(""), ".");
    assert_eq!(normalize("./."), ".");
}

#[test]
fn relative_to_descendant() {
    assert_eq!(relative_to("/a/b/c", "/a", "/").expect("relpath"), "b/c");
}

#[test]
fn relative_to_ancestor() {
    assert_eq!(relative_to("/a", "/a/b/c", "/").expect("relpath"), "../..");
}

#[test]
fn relative_to_sibling() {
    assert_eq!(relative_to("/a/x/y", "/a/b", "/").expect("relpath"), "../x/y");
}

#[test]
fn identical_locations_give_current_dir() {
    assert_eq!(relative_to("/a/b", "/a/b/", "/").expect("relpath"), ".");
    assert_eq!(relative_to("sub", "sub/.", "/repo").expect("relpath"), ".");
}

#[test]
fn empty_start_means_anchor() {
    assert_eq!(relative_to("/repo/sub", "", "/repo/sub").expect("relpath"), ".");
    assert_eq!(relative_to("x/y", "", "/w").expect("relpath"), "x/y");
}

#[test]
fn relative_inputs_are_anchored() {
    // Both sides sit under /repo/sub, so `file.py` is a sibling of `sub/`.
    assert_eq!(
        relative_to("file.py", "sub", "/repo/sub").expect("relpath"),
        "../file.py"
    );
}

#[test]
fn leading_parent_segments_resolve_against_anchor() {
    assert_eq!(
        relative_to("a.py", "../elsewhere", "/elsewhere").expect("relpath"),
        "a.py"
    );
    assert_eq!(
        relative_to("a.py", "../other", "/x/y").expect("relpath"),
        "../y/a.py"
    );
}

#[test]
fn mixed_absolute_and_relative() {
    assert_eq!(relative_to("/repo/sub", "/repo", "/repo/sub").expect("relpath"), "sub");
    assert_eq!(relative_to("/elsewhere", "/repo", "/elsewhere").expect("relpath"), "../elsewhere");
}

#[test]
fn empty_path_is_rejected() {
    let result = relative_to("", "/repo", "/repo");

    let err = result.expect_err("empty path must fail");
    assert!(matches!(err, AppError::InvalidPath(_)));
    assert!(err.to_string().contains("no path specified"));
}

#[test]
fn join_appends_relative_tail() {
    assert_eq!(join("/repo", "pkg/mod.py"), "/repo/pkg/mod.py");
    assert_eq!(join("/repo/", "pkg/mod.py"), "/repo/pkg/mod.py");
}

#[test]
fn join_absolute_tail_wins() {
    assert_eq!(join("/repo", "/etc/hosts"), "/etc/hosts");
}

#[test]
fn join_with_empty_sides() {
    assert_eq!(join("/repo", ""), "/repo");
    assert_eq!(join("", "x"), "x");
    assert_eq!(join("", ""), "");
}

#[test]
fn join_does_not_normalize() {
    assert_eq!(join("/repo", "a/../b"), "/repo/a/../b");
}
