pub mod animated;
pub mod classic;
pub mod detail;
pub mod menu;
pub mod modal;
pub mod path;
pub mod pop_to_root;
pub mod router;
pub mod stack;

pub use animated::AnimatedPathPage;
pub use classic::ClassicSelectionPage;
pub use detail::{NotFoundView, RegisteredView, ValueView};
pub use menu::Menu;
pub use modal::{FullScreenPage, SheetPage};
pub use path::PathPage;
pub use pop_to_root::LevelPage;
pub use router::RouterPage;
pub use stack::StackPage;

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub(crate) const ACCENT: Color = Color::Cyan;

/// Bordered body with a one-line key hint footer.
pub(crate) fn render_panel(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    body: Vec<Line<'_>>,
    hints: &str,
) {
    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let panel = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        );
    frame.render_widget(panel, body_area);

    let footer = Paragraph::new(format!(" {hints} "))
        .style(Style::default().bg(ACCENT).fg(Color::Black))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

/// A vertical set of buttons with one selected.
pub(crate) struct ButtonList {
    labels: &'static [&'static str],
    selected: usize,
}

impl ButtonList {
    pub fn new(labels: &'static [&'static str]) -> Self {
        Self { labels, selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection on arrow keys. Returns whether the key was used.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let last = self.labels.len().saturating_sub(1);
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = if self.selected == 0 { last } else { self.selected - 1 };
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = if self.selected >= last { 0 } else { self.selected + 1 };
                true
            }
            _ => false,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i == self.selected {
                    Line::from(vec![
                        Span::styled(" ▶ ", Style::default().fg(ACCENT)),
                        Span::styled(
                            format!("[ {label} ]"),
                            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![Span::raw("   "), Span::raw(format!("[ {label} ]"))])
                }
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::component::{Action, Context, Event};
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::layout::Rect;

    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    pub fn cx() -> Context {
        Context {
            area: Rect::new(0, 0, 80, 24),
            depth: 0,
        }
    }

    pub fn title_of(action: &Option<Action>) -> Option<String> {
        match action {
            Some(Action::Push(screen))
            | Some(Action::PushAnimated(screen))
            | Some(Action::Present(_, screen)) => Some(screen.title()),
            _ => None,
        }
    }
}
