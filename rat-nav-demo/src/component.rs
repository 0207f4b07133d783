//! Component model for playground screens.

use crate::modal::Presentation;
use rat_nav::DestinationKey;
use ratatui::layout::Rect;
use std::fmt;

/// Event type for component interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
    Paste(String),
}

/// What the host passes to every component call.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub area: Rect,
    /// Screens on the navigation path above the root.
    pub depth: usize,
}

/// Action that a component can return after handling an event.
pub enum Action {
    /// Push a screen the component built itself (a value link).
    Push(Screen),
    /// Like `Push`, sliding the new screen in.
    PushAnimated(Screen),
    /// Resolve a key through the navigator and push the result.
    Navigate(DestinationKey),
    Back,
    PopToRoot,
    Present(Presentation, Screen),
    Dismiss,
    Quit,
    /// The event was consumed; skip the host's default key bindings.
    Noop,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Push(screen) => f.debug_tuple("Push").field(&screen.title()).finish(),
            Action::PushAnimated(screen) => {
                f.debug_tuple("PushAnimated").field(&screen.title()).finish()
            }
            Action::Navigate(key) => f.debug_tuple("Navigate").field(key).finish(),
            Action::Back => f.write_str("Back"),
            Action::PopToRoot => f.write_str("PopToRoot"),
            Action::Present(presentation, screen) => f
                .debug_tuple("Present")
                .field(presentation)
                .field(&screen.title())
                .finish(),
            Action::Dismiss => f.write_str("Dismiss"),
            Action::Quit => f.write_str("Quit"),
            Action::Noop => f.write_str("Noop"),
        }
    }
}

/// The core Component trait for screens.
pub trait Component: Send + Sync + 'static {
    /// Short name shown in the breadcrumb bar.
    fn title(&self) -> String;

    /// Called when the component becomes the visible screen.
    fn on_enter(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Called when the component is covered or removed (e.g. navigation).
    fn on_exit(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Render the component into `cx.area`.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut Context) -> Option<Action> {
        let _ = event;
        let _ = cx;
        None
    }
}

/// A renderable destination: what the router's factories produce.
pub type Screen = Box<dyn Component>;
