use super::*;

fn session_with(paths: &[&str]) -> Session {
    let mut session = Session::default();
    for path in paths {
        assert!(session.insert(Document::new(PathBuf::from(path), format!("{path} content"))));
    }
    session
}

#[test]
fn insert_keeps_tab_order_and_rejects_duplicates() {
    let mut session = session_with(&["/p/a.js", "/p/b.js"]);
    assert!(!session.insert(Document::new(PathBuf::from("/p/a.js"), String::new())));
    assert_eq!(
        session.tab_paths(),
        vec![PathBuf::from("/p/a.js"), PathBuf::from("/p/b.js")]
    );
}

#[test]
fn edit_active_marks_dirty_and_arms_slot() {
    let mut session = session_with(&["/p/a.js"]);
    session.set_active(Some(PathBuf::from("/p/a.js")));
    let now = Instant::now();

    let edited = session.edit_active("x=2".to_string(), now);

    assert_eq!(edited, Some(PathBuf::from("/p/a.js")));
    let doc = session.document(Path::new("/p/a.js")).unwrap();
    assert!(doc.is_dirty());
    assert_eq!(doc.buffer(), "x=2");
    assert_eq!(doc.version(), 1);
    assert_eq!(doc.tab_label(), "\u{25cf} a.js");
    let slot = session.pending_auto_save().unwrap();
    assert_eq!(slot.path, PathBuf::from("/p/a.js"));
    assert_eq!(slot.deadline, now + Duration::from_millis(1500));
}

#[test]
fn edit_without_active_document_is_ignored() {
    let mut session = session_with(&["/p/a.js"]);
    assert_eq!(session.edit_active("x".to_string(), Instant::now()), None);
    assert!(session.pending_auto_save().is_none());
}

#[test]
fn auto_save_disabled_never_arms_slot() {
    let mut session = Session::new(false, Duration::from_millis(10));
    session.insert(Document::new(PathBuf::from("/p/a.js"), String::new()));
    session.set_active(Some(PathBuf::from("/p/a.js")));
    session.edit_active("x".to_string(), Instant::now());
    assert!(session.pending_auto_save().is_none());
    assert!(session.active_document().unwrap().is_dirty());
}

#[test]
fn take_due_auto_save_respects_deadline() {
    let mut session = session_with(&["/p/a.js"]);
    session.set_active(Some(PathBuf::from("/p/a.js")));
    let t0 = Instant::now();
    session.edit_active("x".to_string(), t0);

    assert!(session
        .take_due_auto_save(t0 + Duration::from_millis(1000))
        .is_none());
    let slot = session
        .take_due_auto_save(t0 + Duration::from_millis(1500))
        .unwrap();
    assert_eq!(slot.path, PathBuf::from("/p/a.js"));
    assert!(session.pending_auto_save().is_none());
}

#[test]
fn mark_saved_ignores_stale_version() {
    let mut session = session_with(&["/p/a.js"]);
    session.set_active(Some(PathBuf::from("/p/a.js")));
    session.edit_active("one".to_string(), Instant::now());
    session.edit_active("two".to_string(), Instant::now());

    assert!(!session.mark_saved(Path::new("/p/a.js"), 1));
    assert!(session.active_document().unwrap().is_dirty());
    assert!(session.mark_saved(Path::new("/p/a.js"), 2));
    assert!(!session.active_document().unwrap().is_dirty());
}

#[test]
fn capture_active_does_not_touch_dirty_flag() {
    let mut session = session_with(&["/p/a.js"]);
    session.set_active(Some(PathBuf::from("/p/a.js")));
    session.capture_active("captured".to_string());
    let doc = session.active_document().unwrap();
    assert_eq!(doc.buffer(), "captured");
    assert!(!doc.is_dirty());
    assert_eq!(doc.version(), 0);
}

#[test]
fn remove_cancels_matching_slot_only() {
    let mut session = session_with(&["/p/a.js", "/p/b.js"]);
    session.set_active(Some(PathBuf::from("/p/a.js")));
    session.edit_active("x".to_string(), Instant::now());

    assert!(session.remove(Path::new("/p/b.js")).is_some());
    assert!(session.has_pending_auto_save(Path::new("/p/a.js")));

    assert!(session.remove(Path::new("/p/a.js")).is_some());
    assert!(session.pending_auto_save().is_none());
    assert!(session.remove(Path::new("/p/a.js")).is_none());
}

#[test]
fn rekey_preserves_position_state_and_slot() {
    let mut session = session_with(&["/a/f.txt", "/a/z.txt"]);
    session.set_active(Some(PathBuf::from("/a/f.txt")));
    session.edit_active("edited".to_string(), Instant::now());

    assert!(session.rekey(Path::new("/a/f.txt"), PathBuf::from("/a/g.txt")));

    assert!(!session.is_open(Path::new("/a/f.txt")));
    assert_eq!(
        session.tab_paths(),
        vec![PathBuf::from("/a/g.txt"), PathBuf::from("/a/z.txt")]
    );
    assert_eq!(session.active_path(), Some(Path::new("/a/g.txt")));
    let doc = session.active_document().unwrap();
    assert!(doc.is_dirty());
    assert_eq!(doc.buffer(), "edited");
    assert!(session.has_pending_auto_save(Path::new("/a/g.txt")));
}

#[test]
fn rekey_refuses_existing_target() {
    let mut session = session_with(&["/a/f.txt", "/a/g.txt"]);
    assert!(!session.rekey(Path::new("/a/f.txt"), PathBuf::from("/a/g.txt")));
    assert!(session.is_open(Path::new("/a/f.txt")));
}

#[test]
fn loading_set_is_idempotent() {
    let mut session = Session::default();
    assert!(session.begin_loading(PathBuf::from("/p/a.js")));
    assert!(!session.begin_loading(PathBuf::from("/p/a.js")));
    assert!(session.is_loading(Path::new("/p/a.js")));
    session.finish_loading(Path::new("/p/a.js"));
    assert!(!session.is_loading(Path::new("/p/a.js")));
}
