use super::{render_panel, ButtonList};
use crate::component::{Action, Component, Context, Event};
use crate::modal::Presentation;
use crossterm::event::KeyCode;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Content of a presented modal.
pub struct ModalContent {
    presentation: Presentation,
}

impl ModalContent {
    pub fn new(presentation: Presentation) -> Self {
        Self { presentation }
    }
}

impl Component for ModalContent {
    fn title(&self) -> String {
        match self.presentation {
            Presentation::Sheet => "Modal View".to_string(),
            Presentation::FullScreen => "Full-Screen Modal View".to_string(),
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let (text, hints) = match self.presentation {
            Presentation::Sheet => (" Modal View (Esc or d dismisses)", "Esc / d Dismiss"),
            Presentation::FullScreen => (
                " Full-Screen Modal View (needs the dismiss button)",
                "d Dismiss",
            ),
        };
        let body = vec![Line::from(""), Line::from(text)];
        render_panel(frame, cx.area, &self.title(), body, hints);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) if key.code == KeyCode::Char('d') => Some(Action::Dismiss),
            _ => None,
        }
    }
}

/// Presents its content as a sheet.
pub struct SheetPage {
    buttons: ButtonList,
}

impl Default for SheetPage {
    fn default() -> Self {
        Self {
            buttons: ButtonList::new(&["Current View"]),
        }
    }
}

impl Component for SheetPage {
    fn title(&self) -> String {
        "Sheet".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let mut body = vec![
            Line::from(""),
            Line::styled(
                " Presents a sheet over this screen.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];
        body.extend(self.buttons.lines());
        render_panel(frame, cx.area, "Sheet", body, "Enter Present │ Esc Back │ q Quit");
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) if key.code == KeyCode::Enter => Some(Action::Present(
                Presentation::Sheet,
                Box::new(ModalContent::new(Presentation::Sheet)),
            )),
            Event::Key(key) if self.buttons.handle_key(key.code) => Some(Action::Noop),
            _ => None,
        }
    }
}

/// Presents its content full screen.
pub struct FullScreenPage {
    buttons: ButtonList,
}

impl Default for FullScreenPage {
    fn default() -> Self {
        Self {
            buttons: ButtonList::new(&["Current View"]),
        }
    }
}

impl Component for FullScreenPage {
    fn title(&self) -> String {
        "Full Screen".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let mut body = vec![
            Line::from(""),
            Line::styled(
                " Presents a cover that hides this screen entirely.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];
        body.extend(self.buttons.lines());
        render_panel(frame, cx.area, "Full Screen", body, "Enter Present │ Esc Back │ q Quit");
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) if key.code == KeyCode::Enter => Some(Action::Present(
                Presentation::FullScreen,
                Box::new(ModalContent::new(Presentation::FullScreen)),
            )),
            Event::Key(key) if self.buttons.handle_key(key.code) => Some(Action::Noop),
            _ => None,
        }
    }
}
