use super::*;

#[test]
fn external_content_is_not_reported_as_a_change() {
    let mut surface = RopeSurface::new();
    surface.apply_external_content("fn main() {}\n", SyntaxMode::Rust);

    assert_eq!(surface.take_changes(), None);
    assert_eq!(surface.text(), "fn main() {}\n");
    assert_eq!(surface.mode(), Some(SyntaxMode::Rust));
}

#[test]
fn user_edits_are_reported_once() {
    let mut surface = RopeSurface::new();
    surface.apply_external_content("hello", SyntaxMode::PlainText);

    surface.append(" world");
    surface.insert(0, ">");

    assert_eq!(surface.take_changes().as_deref(), Some(">hello world"));
    assert_eq!(surface.take_changes(), None);
}

#[test]
fn external_content_drops_pending_user_changes() {
    let mut surface = RopeSurface::new();
    surface.append("typed");
    surface.apply_external_content("loaded", SyntaxMode::Markdown);
    assert_eq!(surface.take_changes(), None);
}

#[test]
fn delete_clamps_to_the_buffer() {
    let mut surface = RopeSurface::new();
    surface.apply_external_content("abcdef", SyntaxMode::PlainText);

    surface.delete(4..100);
    assert_eq!(surface.text(), "abcd");
    surface.delete(10..12);
    assert_eq!(surface.take_changes().as_deref(), Some("abcd"));
}

#[test]
fn replace_all_with_same_text_is_not_a_change() {
    let mut surface = RopeSurface::new();
    surface.apply_external_content("same", SyntaxMode::PlainText);
    surface.replace_all("same");
    assert_eq!(surface.take_changes(), None);
    surface.replace_all("other");
    assert_eq!(surface.take_changes().as_deref(), Some("other"));
}

#[test]
fn clear_detaches() {
    let mut surface = RopeSurface::new();
    surface.apply_external_content("x", SyntaxMode::Json);
    surface.clear();
    assert_eq!(surface.text(), "");
    assert_eq!(surface.mode(), None);
    assert_eq!(surface.len_chars(), 0);
}

#[test]
fn run_action_is_recorded() {
    let mut surface = RopeSurface::new();
    surface.run_action(SurfaceAction::GotoLine);
    assert_eq!(surface.last_action(), Some(SurfaceAction::GotoLine));
}

#[test]
fn shared_handle_sees_edits_from_any_clone() {
    let typing = SharedRopeSurface::new();
    let mut owned: Box<dyn EditorSurface> = Box::new(typing.clone());

    owned.apply_external_content("a", SyntaxMode::PlainText);
    typing.with(|s| s.append("b"));

    assert_eq!(owned.take_changes().as_deref(), Some("ab"));
    assert_eq!(typing.with(|s| s.text()), "ab");
}
