use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Save.name(), "save");
    assert_eq!(Command::ToggleComment.name(), "toggleComment");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn test_from_name_round_trips_known_commands() {
    for cmd in [
        Command::Save,
        Command::CloseTab,
        Command::OpenFolder,
        Command::NewFile,
        Command::NewFolder,
        Command::CopyPath,
        Command::Find,
        Command::Replace,
        Command::GotoLine,
        Command::ToggleComment,
        Command::Quit,
    ] {
        assert_eq!(Command::from_name(cmd.name()), cmd);
    }
}

#[test]
fn test_unknown_name_is_custom() {
    assert_eq!(
        Command::from_name("formatDocument"),
        Command::Custom("formatDocument".to_string())
    );
}
