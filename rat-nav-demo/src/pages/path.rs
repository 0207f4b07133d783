use super::{render_panel, ButtonList, ValueView, ACCENT};
use crate::component::{Action, Component, Context, Event};
use crossterm::event::KeyCode;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Programmatic navigation: a button appends "ViewA" to the path.
pub struct PathPage {
    buttons: ButtonList,
}

impl Default for PathPage {
    fn default() -> Self {
        Self {
            buttons: ButtonList::new(&["Go to View A"]),
        }
    }
}

impl Component for PathPage {
    fn title(&self) -> String {
        "Programmatic Path".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let mut body = vec![
            Line::from(""),
            Line::styled(
                " Navigation state is a path the code appends to.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(vec![
                Span::raw(" Path length: "),
                Span::styled(cx.depth.to_string(), Style::default().fg(ACCENT)),
            ]),
            Line::from(""),
        ];
        body.extend(self.buttons.lines());
        render_panel(
            frame,
            cx.area,
            "Programmatic Path",
            body,
            "Enter Append │ Esc Back │ q Quit",
        );
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) if key.code == KeyCode::Enter => {
                Some(Action::Push(Box::new(ValueView::new("Navigated to", "ViewA"))))
            }
            Event::Key(key) if self.buttons.handle_key(key.code) => Some(Action::Noop),
            _ => None,
        }
    }
}
