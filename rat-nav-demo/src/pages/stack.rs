use super::{render_panel, ButtonList, ValueView};
use crate::component::{Action, Component, Context, Event};
use crossterm::event::KeyCode;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Stack navigation with a value link: the link carries "SomeValue" and the
/// pushed screen shows it.
pub struct StackPage {
    buttons: ButtonList,
}

impl Default for StackPage {
    fn default() -> Self {
        Self {
            buttons: ButtonList::new(&["Go to Details"]),
        }
    }
}

impl Component for StackPage {
    fn title(&self) -> String {
        "Navigation Stack".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let mut body = vec![
            Line::from(""),
            Line::styled(
                " A link carries a value; the stack builds a screen for it.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];
        body.extend(self.buttons.lines());
        render_panel(
            frame,
            cx.area,
            "Navigation Stack",
            body,
            "Enter Follow link │ Esc Back │ q Quit",
        );
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) if key.code == KeyCode::Enter => Some(Action::Push(Box::new(
                ValueView::new("You navigated to", "SomeValue"),
            ))),
            Event::Key(key) if self.buttons.handle_key(key.code) => Some(Action::Noop),
            _ => None,
        }
    }
}
