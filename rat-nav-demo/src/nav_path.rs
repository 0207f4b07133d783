//! Navigation path: the host's back-stack of pushed screens.
//!
//! The root screen is not part of the path; an empty path means the root is
//! showing.

use crate::component::Screen;

/// A screen on the path, with the label shown in the breadcrumb bar.
pub struct Entry {
    pub label: String,
    pub screen: Screen,
}

/// An ordered stack of screens pushed over the root.
///
/// # Example
/// ```ignore
/// let mut path = NavigationPath::new();
/// path.push("ViewA", view_a);
/// path.push("ViewA", another_view_a); // same label twice is fine
/// assert_eq!(path.len(), 2);
/// path.pop_to_root();
/// assert!(path.is_empty());
/// ```
#[derive(Default)]
pub struct NavigationPath {
    entries: Vec<Entry>,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Push a screen. Unlike a route history, repeated labels are kept.
    pub fn push(&mut self, label: impl Into<String>, screen: Screen) {
        self.entries.push(Entry {
            label: label.into(),
            screen,
        });
    }

    pub fn top(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Entry> {
        self.entries.last_mut()
    }

    /// The top entry and everything beneath it.
    pub fn split_top_mut(&mut self) -> Option<(&mut Entry, &mut [Entry])> {
        self.entries.split_last_mut()
    }

    /// Remove the top screen. Returns `None` when the path is empty.
    pub fn remove_last(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// Remove up to `n` screens from the top, returning them top first.
    pub fn remove_last_n(&mut self, n: usize) -> Vec<Entry> {
        let keep = self.entries.len().saturating_sub(n);
        let mut removed = self.entries.split_off(keep);
        removed.reverse();
        removed
    }

    /// Remove every screen, returning them top first.
    pub fn pop_to_root(&mut self) -> Vec<Entry> {
        self.remove_last_n(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels from the bottom of the path to the top.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }
}
