//! `WidgetView` that prints the panel to stdout.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use chat_widget::{ChatTurn, Chevron, Role, WidgetView};

#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

pub fn render_line(turn: &ChatTurn) -> String {
    let speaker = match turn.role() {
        Role::User => "you",
        Role::Bot => "bot",
    };
    format!("{speaker}> {}", turn.text())
}

pub fn panel_banner(expanded: bool, chevron: Chevron) -> String {
    let arrow = match chevron {
        Chevron::Up => '▲',
        Chevron::Down => '▼',
    };
    let state = if expanded { "open" } else { "closed" };
    format!("[chat {state} {arrow}]")
}

impl WidgetView for TerminalView {
    fn render_turn(&mut self, turn: &ChatTurn) {
        println!("{}", render_line(turn));
    }

    // The terminal scrolls on its own.
    fn scroll_to_latest(&mut self) {}

    fn set_loading(&mut self, visible: bool) {
        if visible {
            println!("...");
        }
    }

    // Lines are consumed as they are read; there is no field to reset.
    fn clear_message_input(&mut self) {}

    fn clear_file_input(&mut self) {}

    fn set_expanded(&mut self, expanded: bool, chevron: Chevron) {
        println!("{}", panel_banner(expanded, chevron));
    }
}
