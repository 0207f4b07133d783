use super::{render_panel, ButtonList};
use crate::component::{Action, Component, Context, Event};
use crate::destinations::Destination;
use crossterm::event::KeyCode;
use rat_nav::DestinationKey;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Key that is deliberately never registered.
pub const UNREGISTERED_KEY: &str = "UnregisteredView";

/// Router-based navigation: buttons name destination keys and the host
/// resolves them through the navigator.
pub struct RouterPage {
    buttons: ButtonList,
}

impl Default for RouterPage {
    fn default() -> Self {
        Self {
            buttons: ButtonList::new(&["Go to a registered view", "Go to an unregistered view"]),
        }
    }
}

impl RouterPage {
    fn target(&self) -> Option<DestinationKey> {
        match self.buttons.selected() {
            0 => Some(Destination::MyRegisteredView.key()),
            _ => DestinationKey::new(UNREGISTERED_KEY).ok(),
        }
    }
}

impl Component for RouterPage {
    fn title(&self) -> String {
        "Router".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let mut body = vec![
            Line::from(""),
            Line::styled(
                " Keys are looked up in the registry; deep links use the same path.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];
        body.extend(self.buttons.lines());
        render_panel(
            frame,
            cx.area,
            "Router",
            body,
            "↑/↓ Select │ Enter Navigate │ Esc Back │ q Quit",
        );
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) if key.code == KeyCode::Enter => self.target().map(Action::Navigate),
            Event::Key(key) if self.buttons.handle_key(key.code) => Some(Action::Noop),
            _ => None,
        }
    }
}
