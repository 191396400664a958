use super::*;

fn entry(path: &str, is_dir: bool) -> DirEntry {
    DirEntry::new(PathBuf::from(path), is_dir)
}

fn explorer_with_root() -> Explorer {
    let mut explorer = Explorer::new();
    explorer.set_root(PathBuf::from("/p"));
    explorer.apply_listing(
        Path::new("/p"),
        vec![
            entry("/p/b.txt", false),
            entry("/p/src", true),
            entry("/p/A.txt", false),
            entry("/p/docs", true),
        ],
    );
    explorer
}

fn names(explorer: &Explorer, path: &str) -> Vec<String> {
    explorer
        .children(Path::new(path))
        .unwrap()
        .iter()
        .map(|n| n.name.clone())
        .collect()
}

#[test]
fn sort_puts_directories_first_then_names() {
    let explorer = explorer_with_root();
    assert_eq!(names(&explorer, "/p"), vec!["docs", "src", "A.txt", "b.txt"]);
}

#[test]
fn compare_names_orders_lowercase_before_uppercase_on_ties() {
    assert_eq!(compare_names("a", "B"), Ordering::Less);
    assert_eq!(compare_names("B", "a"), Ordering::Greater);
    assert_eq!(compare_names("readme", "README"), Ordering::Less);
    assert_eq!(compare_names("same", "same"), Ordering::Equal);
}

#[test]
fn compare_names_falls_back_to_code_points_outside_ascii_letters() {
    assert_eq!(compare_names("zeta", "\u{e9}clair"), Ordering::Less);
    assert_eq!(compare_names("zz", "{x}"), Ordering::Less);
    assert_eq!(compare_names("10", "a"), Ordering::Less);
}

#[test]
fn expand_requests_listing_once() {
    let mut explorer = explorer_with_root();

    assert_eq!(explorer.toggle(Path::new("/p/src")), Some(PathBuf::from("/p/src")));
    assert!(explorer.apply_listing(Path::new("/p/src"), vec![entry("/p/src/main.rs", false)]));

    // collapse, then expand again: cached children, no fetch
    assert_eq!(explorer.toggle(Path::new("/p/src")), None);
    assert!(!explorer.node(Path::new("/p/src")).unwrap().expanded);
    assert_eq!(explorer.toggle(Path::new("/p/src")), None);
    assert!(explorer.node(Path::new("/p/src")).unwrap().expanded);
    assert_eq!(names(&explorer, "/p/src"), vec!["main.rs"]);
}

#[test]
fn toggle_file_is_noop() {
    let mut explorer = explorer_with_root();
    assert_eq!(explorer.toggle(Path::new("/p/b.txt")), None);
    assert_eq!(explorer.toggle(Path::new("/p/missing")), None);
}

#[test]
fn list_error_shows_inline_row_and_retries_on_next_expand() {
    let mut explorer = explorer_with_root();
    explorer.toggle(Path::new("/p/docs"));
    assert!(explorer.apply_list_error(Path::new("/p/docs"), "permission denied".to_string()));

    let rows = explorer.rows();
    let error_row = rows
        .iter()
        .find(|r| matches!(r.kind, RowKind::Error(_)))
        .unwrap();
    assert_eq!(error_row.path, PathBuf::from("/p/docs"));
    assert_eq!(error_row.depth, 2);

    explorer.toggle(Path::new("/p/docs"));
    assert_eq!(
        explorer.toggle(Path::new("/p/docs")),
        Some(PathBuf::from("/p/docs"))
    );
}

#[test]
fn refresh_keeps_surviving_children_and_their_cache() {
    let mut explorer = explorer_with_root();
    explorer.toggle(Path::new("/p/src"));
    explorer.apply_listing(Path::new("/p/src"), vec![entry("/p/src/main.rs", false)]);

    assert_eq!(explorer.refresh(Path::new("/p")), Some(PathBuf::from("/p")));
    explorer.apply_listing(
        Path::new("/p"),
        vec![entry("/p/src", true), entry("/p/new.txt", false)],
    );

    assert_eq!(names(&explorer, "/p"), vec!["src", "new.txt"]);
    assert!(explorer.node(Path::new("/p/src")).unwrap().expanded);
    assert_eq!(names(&explorer, "/p/src"), vec!["main.rs"]);
    assert!(explorer.node(Path::new("/p/docs")).is_none());
    assert!(explorer.node(Path::new("/p/b.txt")).is_none());
}

#[test]
fn children_stay_visible_while_a_refresh_is_pending() {
    let mut explorer = explorer_with_root();
    explorer.toggle(Path::new("/p/src"));
    explorer.apply_listing(Path::new("/p/src"), vec![entry("/p/src/main.rs", false)]);
    let before = explorer.rows();

    assert_eq!(explorer.refresh(Path::new("/p")), Some(PathBuf::from("/p")));
    assert_eq!(explorer.rows(), before);
    assert!(!explorer.rows().iter().any(|r| r.kind == RowKind::Loading));
    // A listing is already queued.
    assert_eq!(explorer.refresh(Path::new("/p")), None);
}

#[test]
fn refresh_drops_vanished_entries_from_the_index() {
    let mut explorer = explorer_with_root();
    explorer.toggle(Path::new("/p/src"));
    explorer.apply_listing(Path::new("/p/src"), vec![entry("/p/src/main.rs", false)]);

    explorer.refresh(Path::new("/p"));
    explorer.apply_listing(Path::new("/p"), vec![entry("/p/src", true)]);

    assert!(explorer.node(Path::new("/p/b.txt")).is_none());
    assert!(explorer.node(Path::new("/p/A.txt")).is_none());
    assert!(explorer.node(Path::new("/p/src/main.rs")).is_some());
    assert_eq!(explorer.rows().len(), 3);
}

#[test]
fn failed_refresh_releases_the_old_children() {
    let mut explorer = explorer_with_root();
    explorer.toggle(Path::new("/p/src"));
    explorer.apply_listing(Path::new("/p/src"), vec![entry("/p/src/main.rs", false)]);

    explorer.refresh(Path::new("/p"));
    assert!(explorer.apply_list_error(Path::new("/p"), "gone".to_string()));

    assert!(explorer.node(Path::new("/p/src")).is_none());
    assert!(explorer.node(Path::new("/p/src/main.rs")).is_none());
    assert_eq!(
        explorer.node(Path::new("/p")).unwrap().children,
        Children::Failed("gone".to_string())
    );
}

#[test]
fn refresh_of_unloaded_directory_is_skipped() {
    let mut explorer = explorer_with_root();
    assert_eq!(explorer.refresh(Path::new("/p/src")), None);
    assert_eq!(explorer.refresh(Path::new("/p/b.txt")), None);
}

#[test]
fn rows_follow_expansion() {
    let mut explorer = explorer_with_root();
    explorer.toggle(Path::new("/p/src"));

    let rows = explorer.rows();
    assert_eq!(rows[0].path, PathBuf::from("/p"));
    assert_eq!(rows[0].depth, 0);
    assert!(rows.iter().any(|r| r.kind == RowKind::Loading));

    explorer.apply_listing(Path::new("/p/src"), vec![entry("/p/src/lib.rs", false)]);
    let rows = explorer.rows();
    let lib = rows
        .iter()
        .find(|r| r.path == PathBuf::from("/p/src/lib.rs"))
        .unwrap();
    assert_eq!(lib.depth, 2);
    assert_eq!(rows.len(), 6);
}

#[test]
fn set_root_discards_previous_tree() {
    let mut explorer = explorer_with_root();
    explorer.set_root(PathBuf::from("/q"));
    assert_eq!(explorer.root_path(), Some(Path::new("/q")));
    assert!(explorer.node(Path::new("/p/src")).is_none());
    assert_eq!(explorer.node(Path::new("/q")).unwrap().children, Children::Loading);
}
