use super::*;

#[test]
fn test_empty_json_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert!(settings.keybindings.is_empty());
    assert!(settings.session.auto_save);
    assert_eq!(settings.session.auto_save_delay_ms, 1500);
    assert!(settings.explorer.show_hidden);
}

#[test]
fn test_partial_session_section() {
    let settings: Settings =
        serde_json::from_str(r#"{"session":{"auto_save_delay_ms":250}}"#).unwrap();
    assert!(settings.session.auto_save);
    let config = settings.session_config();
    assert_eq!(config.auto_save_delay, Duration::from_millis(250));
}

#[test]
fn test_keybinding_rules_parse() {
    let settings: Settings = serde_json::from_str(
        r#"{"keybindings":[{"key":"ctrl+shift+s","command":"save"}],"explorer":{"show_hidden":false}}"#,
    )
    .unwrap();
    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.keybindings[0].command, "save");
    assert!(!settings.session_config().show_hidden);
}
