use super::{render_panel, ButtonList, ValueView};
use crate::component::{Action, Component, Context, Event};
use crossterm::event::KeyCode;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Same as the programmatic path, but the push slides in.
pub struct AnimatedPathPage {
    buttons: ButtonList,
}

impl Default for AnimatedPathPage {
    fn default() -> Self {
        Self {
            buttons: ButtonList::new(&["Go to View A"]),
        }
    }
}

impl Component for AnimatedPathPage {
    fn title(&self) -> String {
        "Animated Path".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let mut body = vec![
            Line::from(""),
            Line::styled(
                " The pushed screen slides in from the right.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];
        body.extend(self.buttons.lines());
        render_panel(frame, cx.area, "Animated Path", body, "Enter Append │ Esc Back │ q Quit");
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) if key.code == KeyCode::Enter => Some(Action::PushAnimated(Box::new(
                ValueView::new("Navigated to", "ViewA"),
            ))),
            Event::Key(key) if self.buttons.handle_key(key.code) => Some(Action::Noop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{cx, key};

    #[test]
    fn test_push_is_animated() {
        let mut page = AnimatedPathPage::default();
        let action = page.handle_event(key(KeyCode::Enter), &mut cx());
        assert!(matches!(action, Some(Action::PushAnimated(_))));
    }
}
