use super::*;

#[test]
fn user_turn_renders_with_you_prefix() {
    assert_eq!(render_line(&ChatTurn::user("Hello")), "you> Hello");
}

#[test]
fn bot_turn_renders_with_bot_prefix() {
    assert_eq!(render_line(&ChatTurn::bot("Hi there")), "bot> Hi there");
}

#[test]
fn banner_reflects_panel_state() {
    assert_eq!(panel_banner(true, Chevron::Down), "[chat open ▼]");
    assert_eq!(panel_banner(false, Chevron::Up), "[chat closed ▲]");
}
