//! Modal presentation over the current screen.

use crate::component::{Context, Screen};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear};

/// How a modal covers the screen beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Centered overlay; `Esc` dismisses it.
    Sheet,
    /// Covers everything; only an explicit dismiss action closes it.
    FullScreen,
}

impl Presentation {
    pub fn dismissable_with_escape(&self) -> bool {
        matches!(self, Presentation::Sheet)
    }

    /// The part of `full` this presentation occupies.
    pub fn area(&self, full: Rect) -> Rect {
        match self {
            Presentation::Sheet => {
                let [row] = Layout::vertical([Constraint::Percentage(60)])
                    .flex(Flex::Center)
                    .areas(full);
                let [area] = Layout::horizontal([Constraint::Percentage(70)])
                    .flex(Flex::Center)
                    .areas(row);
                area
            }
            Presentation::FullScreen => full,
        }
    }
}

pub struct Modal {
    pub presentation: Presentation,
    pub screen: Screen,
}

impl Modal {
    pub fn new(presentation: Presentation, screen: Screen) -> Self {
        Self { presentation, screen }
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let area = self.presentation.area(cx.area);
        let block = Block::default()
            .title(format!(" {} ", self.screen.title()))
            .borders(Borders::ALL)
            .border_type(match self.presentation {
                Presentation::Sheet => BorderType::Rounded,
                Presentation::FullScreen => BorderType::Double,
            })
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let mut cx = Context { area: inner, ..*cx };
        self.screen.render(frame, &mut cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_is_centered_inside() {
        let full = Rect::new(0, 0, 100, 50);
        let sheet = Presentation::Sheet.area(full);

        assert_eq!(sheet.width, 70);
        assert_eq!(sheet.height, 30);
        assert_eq!(sheet.x, 15);
        assert_eq!(sheet.y, 10);
    }

    #[test]
    fn test_full_screen_covers_everything() {
        let full = Rect::new(0, 1, 80, 23);
        assert_eq!(Presentation::FullScreen.area(full), full);
    }

    #[test]
    fn test_only_sheet_dismisses_on_escape() {
        assert!(Presentation::Sheet.dismissable_with_escape());
        assert!(!Presentation::FullScreen.dismissable_with_escape());
    }
}
