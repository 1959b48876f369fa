use super::*;

#[test]
fn plain_text_is_submitted_verbatim() {
    assert_eq!(parse_line("  Hello there "), ReplInput::Submit("  Hello there ".into()));
}

#[test]
fn blank_line_is_an_empty_submission() {
    assert_eq!(parse_line(""), ReplInput::Submit(String::new()));
}

#[test]
fn attach_takes_the_rest_of_the_line_as_path() {
    assert_eq!(
        parse_line("/attach  ./scans/my photo.png "),
        ReplInput::Attach(PathBuf::from("./scans/my photo.png"))
    );
}

#[test]
fn attach_without_path_is_unknown() {
    assert_eq!(parse_line("/attach"), ReplInput::Unknown("/attach".into()));
}

#[test]
fn bare_commands_parse() {
    assert_eq!(parse_line("/toggle"), ReplInput::Toggle);
    assert_eq!(parse_line("/help"), ReplInput::Help);
    assert_eq!(parse_line("/quit"), ReplInput::Quit);
    assert_eq!(parse_line("/exit"), ReplInput::Quit);
}

#[test]
fn unknown_command_is_reported() {
    assert_eq!(parse_line("/shout hi"), ReplInput::Unknown("/shout hi".into()));
}
