//! The host: owns the navigation path and modal state, and turns component
//! actions into navigation.
//!
//! The navigator is injected; the host never registers destinations itself.

use crate::component::{Action, Context, Event, Screen};
use crate::modal::{Modal, Presentation};
use crate::nav_path::NavigationPath;
use crate::pages::NotFoundView;
use crossterm::event::{KeyCode, KeyModifiers};
use rat_nav::Navigator;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ticks an animated push takes to finish.
pub const TRANSITION_STEPS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    step: u16,
}

impl Transition {
    /// Columns the incoming screen is still shifted right by.
    fn offset(&self, width: u16) -> u16 {
        let remaining = u32::from(TRANSITION_STEPS.saturating_sub(self.step));
        (u32::from(width) * remaining / u32::from(TRANSITION_STEPS)) as u16
    }
}

pub struct Host {
    navigator: Arc<dyn Navigator<Screen> + Send + Sync>,
    root: Screen,
    path: NavigationPath,
    modal: Option<Modal>,
    transition: Option<Transition>,
    area: Rect,
}

impl Host {
    /// Create a host showing `root`, resolving keys through `navigator`.
    pub fn new(navigator: Arc<dyn Navigator<Screen> + Send + Sync>, mut root: Screen) -> Self {
        let area = Rect::default();
        root.on_enter(&mut Context { area, depth: 0 });
        Self {
            navigator,
            root,
            path: NavigationPath::new(),
            modal: None,
            transition: None,
            area,
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    #[cfg(test)]
    pub fn presentation(&self) -> Option<Presentation> {
        self.modal.as_ref().map(|modal| modal.presentation)
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Title of whatever currently receives events.
    pub fn current_title(&self) -> String {
        if let Some(modal) = &self.modal {
            return modal.screen.title();
        }
        match self.path_top() {
            Some(screen) => screen.title(),
            None => self.root.title(),
        }
    }

    /// Follow a deep link.
    pub fn open(&mut self, key: &str) {
        info!(key, "opening deep link");
        self.navigate(key);
    }

    /// Dispatch an event. Returns `Some(Action::Quit)` when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        if let Event::Resize(width, height) = event {
            self.area = Rect::new(0, 0, width, height);
            return None;
        }

        // Input finishes a running slide immediately.
        self.transition = None;

        let mut cx = self.context();
        let action = match &mut self.modal {
            Some(modal) => modal.screen.handle_event(event.clone(), &mut cx),
            None => self.top_mut().handle_event(event.clone(), &mut cx),
        };

        match action.or_else(|| self.fallback(&event)) {
            Some(action) => self.apply(action),
            None => None,
        }
    }

    /// Advance the running transition. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let Some(transition) = &mut self.transition else {
            return false;
        };
        transition.step += 1;
        if transition.step >= TRANSITION_STEPS {
            self.transition = None;
        }
        true
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        self.area = area;

        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(self.breadcrumbs()), header);

        let depth = self.path.len();
        let mut cx = Context { area: body, depth };
        match (self.transition, self.path.split_top_mut()) {
            (Some(transition), Some((top, below))) => {
                let beneath = match below.last_mut() {
                    Some(entry) => &mut entry.screen,
                    None => &mut self.root,
                };
                beneath.render(frame, &mut Context { area: body, depth: depth - 1 });

                let offset = transition.offset(body.width);
                let sliding = Rect {
                    x: body.x + offset,
                    width: body.width - offset,
                    ..body
                };
                frame.render_widget(Clear, sliding);
                top.screen.render(frame, &mut Context { area: sliding, depth });
            }
            (_, Some((top, _))) => top.screen.render(frame, &mut cx),
            (_, None) => self.root.render(frame, &mut cx),
        }

        if let Some(modal) = &mut self.modal {
            let mut cx = Context { area: body, depth };
            modal.render(frame, &mut cx);
        }
    }

    fn breadcrumbs(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" {}", self.root.title()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        for label in self.path.labels() {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(label.to_string()));
        }
        if let Some(modal) = &self.modal {
            spans.push(Span::styled(
                format!("  [{:?}: {}]", modal.presentation, modal.screen.title()),
                Style::default().fg(Color::Magenta),
            ));
        }
        Line::from(spans)
    }

    fn context(&self) -> Context {
        Context {
            area: self.area,
            depth: self.path.len(),
        }
    }

    fn path_top(&self) -> Option<&Screen> {
        self.path.top().map(|entry| &entry.screen)
    }

    fn top_mut(&mut self) -> &mut Screen {
        match self.path.top_mut() {
            Some(entry) => &mut entry.screen,
            None => &mut self.root,
        }
    }

    /// Key bindings that apply when the focused screen ignores an event.
    fn fallback(&self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match &self.modal {
            Some(modal)
                if key.code == KeyCode::Esc && modal.presentation.dismissable_with_escape() =>
            {
                Some(Action::Dismiss)
            }
            // A full-screen cover only closes through its own dismiss action.
            Some(_) => None,
            None => match key.code {
                KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
        }
    }

    fn apply(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Push(screen) => self.push(screen.title(), screen, false),
            Action::PushAnimated(screen) => self.push(screen.title(), screen, true),
            Action::Navigate(key) => self.navigate(&key),
            Action::Back if self.modal.is_some() => self.dismiss(),
            Action::Back => self.back(),
            Action::PopToRoot => self.pop_to_root(),
            Action::Present(presentation, screen) => self.present(presentation, screen),
            Action::Dismiss => self.dismiss(),
            Action::Quit => {
                info!("quit requested");
                return Some(Action::Quit);
            }
            Action::Noop => {}
        }
        None
    }

    fn navigate(&mut self, key: &str) {
        match self.navigator.resolve(key) {
            Ok(screen) => self.push(key.to_string(), screen, false),
            Err(err) => {
                warn!(key, error = %err, "navigation failed, showing fallback screen");
                self.push(key.to_string(), Box::new(NotFoundView::new(key)), false);
            }
        }
    }

    fn push(&mut self, label: String, mut screen: Screen, animated: bool) {
        // A modal belongs to the screen that presented it.
        if self.modal.is_some() {
            self.dismiss();
        }

        let mut cx = self.context();
        self.top_mut().on_exit(&mut cx);

        cx.depth += 1;
        screen.on_enter(&mut cx);
        debug!(label = %label, depth = cx.depth, animated, "push");
        self.path.push(label, screen);

        self.transition = animated.then_some(Transition { step: 0 });
    }

    fn back(&mut self) {
        let Some(mut entry) = self.path.remove_last() else {
            debug!("back at root ignored");
            return;
        };
        let mut cx = self.context();
        entry.screen.on_exit(&mut cx);
        self.top_mut().on_enter(&mut cx);
        debug!(label = %entry.label, depth = self.path.len(), "back");
    }

    fn pop_to_root(&mut self) {
        if self.path.is_empty() {
            debug!("pop to root at root ignored");
            return;
        }
        let removed = self.path.pop_to_root();
        let mut cx = self.context();
        if let Some(mut top) = removed.into_iter().next() {
            top.screen.on_exit(&mut cx);
            self.root.on_enter(&mut cx);
        }
        self.transition = None;
        debug!("pop to root");
    }

    fn present(&mut self, presentation: Presentation, mut screen: Screen) {
        if self.modal.is_some() {
            self.dismiss();
        }
        let mut cx = self.context();
        screen.on_enter(&mut cx);
        debug!(?presentation, title = %screen.title(), "present");
        self.modal = Some(Modal::new(presentation, screen));
    }

    fn dismiss(&mut self) {
        if let Some(mut modal) = self.modal.take() {
            let mut cx = self.context();
            modal.screen.on_exit(&mut cx);
            debug!(presentation = ?modal.presentation, "dismiss");
        }
    }
}
