use super::{render_panel, ButtonList, ACCENT};
use crate::component::{Action, Component, Context, Event};
use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Selection-based navigation: an `is_active` flag decides whether the
/// linked detail is showing. Nothing is pushed on the host's path.
pub struct ClassicSelectionPage {
    is_active: bool,
    buttons: ButtonList,
}

impl Default for ClassicSelectionPage {
    fn default() -> Self {
        Self {
            is_active: false,
            buttons: ButtonList::new(&["Go", "Navigate"]),
        }
    }
}

impl ClassicSelectionPage {
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Component for ClassicSelectionPage {
    fn title(&self) -> String {
        if self.is_active {
            "Classic Selection › Details".to_string()
        } else {
            "Classic Selection".to_string()
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        if self.is_active {
            let body = vec![
                Line::from(""),
                Line::styled(" Details", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
                Line::from(""),
                Line::styled(
                    " Shown because is_active = true.",
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            render_panel(frame, cx.area, "Details", body, "Esc Clear selection │ q Quit");
            return;
        }

        let mut body = vec![
            Line::from(""),
            Line::styled(
                " A boolean binding drives the link (deprecated pattern).",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(vec![
                Span::raw(" is_active: "),
                Span::styled(self.is_active.to_string(), Style::default().fg(ACCENT)),
            ]),
            Line::from(""),
        ];
        body.extend(self.buttons.lines());
        render_panel(
            frame,
            cx.area,
            "Classic Selection",
            body,
            "Enter Activate │ Esc Back │ q Quit",
        );
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        let Event::Key(key) = event else {
            return None;
        };

        if self.is_active {
            return match key.code {
                KeyCode::Esc | KeyCode::Backspace => {
                    self.is_active = false;
                    Some(Action::Noop)
                }
                _ => None,
            };
        }

        match key.code {
            // Both the link and the button flip the same binding.
            KeyCode::Enter => {
                self.is_active = true;
                Some(Action::Noop)
            }
            code if self.buttons.handle_key(code) => Some(Action::Noop),
            _ => None,
        }
    }
}
