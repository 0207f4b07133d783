//! Leaf screens that other pages push.

use super::{render_panel, ACCENT};
use crate::component::{Component, Context};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Shows the value a link carried, e.g. "You navigated to: SomeValue".
pub struct ValueView {
    caption: &'static str,
    value: String,
}

impl ValueView {
    pub fn new(caption: &'static str, value: impl Into<String>) -> Self {
        Self {
            caption,
            value: value.into(),
        }
    }
}

impl Component for ValueView {
    fn title(&self) -> String {
        self.value.clone()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let body = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw(format!(" {}: ", self.caption)),
                Span::styled(
                    self.value.as_str(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        render_panel(frame, cx.area, &self.value, body, "Esc Back │ q Quit");
    }
}

/// The screen registered under `MyRegisteredView`.
#[derive(Default)]
pub struct RegisteredView;

impl Component for RegisteredView {
    fn title(&self) -> String {
        "MyRegisteredView".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let body = vec![
            Line::from(""),
            Line::styled(" Resolved through the navigator.", Style::default().fg(Color::Green)),
            Line::from(""),
            Line::styled(
                " A fresh instance is built on every navigation.",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        render_panel(frame, cx.area, "MyRegisteredView", body, "Esc Back │ q Quit");
    }
}

/// Fallback shown when a key has no registered destination.
pub struct NotFoundView {
    key: String,
}

impl NotFoundView {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Component for NotFoundView {
    fn title(&self) -> String {
        format!("{} (missing)", self.key)
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let body = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" ✗ ", Style::default().fg(Color::Red)),
                Span::raw("No destination registered for "),
                Span::styled(format!("'{}'", self.key), Style::default().fg(Color::Red)),
            ]),
            Line::from(""),
            Line::styled(
                " The host shows this screen instead of failing the navigation.",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        render_panel(frame, cx.area, "Destination not found", body, "Esc Back │ q Quit");
    }
}
