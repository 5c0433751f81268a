// Tests for the exclusion filter
// Prefix semantics, normalization, component boundaries

use std::env;
use std::path::{Path, PathBuf};

use treesum::ExclusionSet;

#[test]
fn test_empty_set_excludes_nothing() {
    let set = ExclusionSet::new(Vec::<PathBuf>::new()).unwrap();
    assert!(set.is_empty());
    assert!(!set.is_excluded(Path::new("/anything/at/all")));
}

#[test]
fn test_prefix_excludes_children() {
    let set = ExclusionSet::new(["/tmp/skip"]).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.is_excluded(Path::new("/tmp/skip/file.txt")));
    assert!(set.is_excluded(Path::new("/tmp/skip/nested/deeper/file.txt")));
    assert!(!set.is_excluded(Path::new("/tmp/keep/file.txt")));
}

#[test]
fn test_entry_matches_itself() {
    let set = ExclusionSet::new(["/tmp/skip"]).unwrap();
    assert!(set.is_excluded(Path::new("/tmp/skip")));
}

#[test]
fn test_match_respects_component_boundaries() {
    // /home/user must not swallow /home/username
    let set = ExclusionSet::new(["/home/user"]).unwrap();
    assert!(set.is_excluded(Path::new("/home/user/notes.txt")));
    assert!(!set.is_excluded(Path::new("/home/username/notes.txt")));
    assert!(!set.is_excluded(Path::new("/home/username")));
}

#[test]
fn test_relative_entries_resolve_against_cwd() {
    let cwd = env::current_dir().unwrap();
    let set = ExclusionSet::new(["some/dir"]).unwrap();

    assert!(set.is_excluded(&cwd.join("some/dir/file.txt")));
    // Relative candidates are absolutized the same way
    assert!(set.is_excluded(Path::new("some/dir/file.txt")));
    assert!(!set.is_excluded(&cwd.join("some/other/file.txt")));
}

#[test]
fn test_dot_components_are_normalized() {
    let set = ExclusionSet::new(["/tmp/./skip"]).unwrap();
    assert!(set.is_excluded(Path::new("/tmp/skip/file.txt")));

    let set = ExclusionSet::new(["/tmp/a/../skip"]).unwrap();
    assert!(set.is_excluded(Path::new("/tmp/skip/file.txt")));
}

#[test]
fn test_multiple_entries_any_match() {
    let set = ExclusionSet::new(["/tmp/one", "/tmp/two"]).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.is_excluded(Path::new("/tmp/one/f")));
    assert!(set.is_excluded(Path::new("/tmp/two/f")));
    assert!(!set.is_excluded(Path::new("/tmp/three/f")));
}
