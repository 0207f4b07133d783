use super::{render_panel, ACCENT};
use crate::component::{Action, Component, Context, Event};
use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Numbered level for building a deep path and unwinding it.
pub struct LevelPage {
    level: usize,
}

impl LevelPage {
    pub fn new(level: usize) -> Self {
        Self { level }
    }
}

impl Component for LevelPage {
    fn title(&self) -> String {
        format!("Level {}", self.level)
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let body = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw(" You are on level "),
                Span::styled(
                    self.level.to_string(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(" Path length: "),
                Span::styled(cx.depth.to_string(), Style::default().fg(ACCENT)),
            ]),
        ];
        render_panel(
            frame,
            cx.area,
            &self.title(),
            body,
            "Enter Deeper │ Esc Back │ r Pop to root │ q Quit",
        );
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Enter => Some(Action::Push(Box::new(LevelPage::new(self.level + 1)))),
                KeyCode::Char('r') => Some(Action::PopToRoot),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{cx, key, title_of};

    #[test]
    fn test_enter_pushes_next_level() {
        let mut page = LevelPage::new(1);
        let action = page.handle_event(key(KeyCode::Enter), &mut cx());
        assert_eq!(title_of(&action), Some("Level 2".to_string()));
    }

    #[test]
    fn test_r_pops_to_root() {
        let mut page = LevelPage::new(3);
        let action = page.handle_event(key(KeyCode::Char('r')), &mut cx());
        assert!(matches!(action, Some(Action::PopToRoot)));
    }
}
