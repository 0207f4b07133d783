//! Destinations the playground registers at startup.

use crate::component::Screen;
use crate::pages::{
    AnimatedPathPage, ClassicSelectionPage, FullScreenPage, LevelPage, PathPage, RegisteredView,
    RouterPage, SheetPage, StackPage,
};
use rat_nav::{destinations, Registrar};

#[destinations]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    NavigationStack,
    ProgrammaticPath,
    ClassicSelection,
    Router,
    PopToRoot,
    Sheet,
    FullScreen,
    Animated,
    MyRegisteredView,
}

impl Destination {
    /// Destinations listed on the menu, in display order.
    pub const MENU: &'static [Destination] = &[
        Destination::NavigationStack,
        Destination::ProgrammaticPath,
        Destination::ClassicSelection,
        Destination::Router,
        Destination::PopToRoot,
        Destination::Sheet,
        Destination::FullScreen,
        Destination::Animated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Destination::NavigationStack => "Navigation Stack",
            Destination::ProgrammaticPath => "Programmatic Path",
            Destination::ClassicSelection => "Classic Selection",
            Destination::Router => "Router",
            Destination::PopToRoot => "Pop To Root",
            Destination::Sheet => "Sheet",
            Destination::FullScreen => "Full Screen",
            Destination::Animated => "Animated Path",
            Destination::MyRegisteredView => "My Registered View",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Destination::NavigationStack => "Value links pushed onto a stack",
            Destination::ProgrammaticPath => "Code appends to the navigation path",
            Destination::ClassicSelection => "Boolean binding drives the link",
            Destination::Router => "Resolve keys through the registry",
            Destination::PopToRoot => "Go deep, then unwind in one step",
            Destination::Sheet => "Dismissable overlay",
            Destination::FullScreen => "Cover with explicit dismiss",
            Destination::Animated => "Push with a slide transition",
            Destination::MyRegisteredView => "Only reachable through the router",
        }
    }
}

/// Register a factory for every [`Destination`].
pub fn register_destinations<R>(registrar: &R) -> rat_nav::Result<()>
where
    R: Registrar<Screen>,
{
    registrar.register(Destination::NavigationStack, || Box::new(StackPage::default()) as Screen)?;
    registrar.register(Destination::ProgrammaticPath, || Box::new(PathPage::default()) as Screen)?;
    registrar.register(Destination::ClassicSelection, || {
        Box::new(ClassicSelectionPage::default()) as Screen
    })?;
    registrar.register(Destination::Router, || Box::new(RouterPage::default()) as Screen)?;
    registrar.register(Destination::PopToRoot, || Box::new(LevelPage::new(1)) as Screen)?;
    registrar.register(Destination::Sheet, || Box::new(SheetPage::default()) as Screen)?;
    registrar.register(Destination::FullScreen, || Box::new(FullScreenPage::default()) as Screen)?;
    registrar.register(Destination::Animated, || Box::new(AnimatedPathPage::default()) as Screen)?;
    registrar.register(Destination::MyRegisteredView, || Box::new(RegisteredView) as Screen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rat_nav::{Error, NavRouter};

    #[test]
    fn test_every_destination_registered() {
        let router = NavRouter::<Screen>::new();
        register_destinations(&router).unwrap();

        assert_eq!(router.len(), Destination::ALL.len());
        assert!(router.ensure_registered(Destination::ALL.iter().copied()).is_ok());
    }

    #[test]
    fn test_registering_twice_fails() {
        let router = NavRouter::<Screen>::new();
        register_destinations(&router).unwrap();

        let err = register_destinations(&router).unwrap_err();
        assert_eq!(err, Error::DuplicateKey { key: Destination::NavigationStack.key() });
        assert_eq!(router.len(), Destination::ALL.len());
    }

    #[test]
    fn test_resolved_screens_match_labels() {
        let router = NavRouter::<Screen>::new();
        register_destinations(&router).unwrap();

        for destination in Destination::MENU {
            let screen = router.resolve(destination.as_str()).unwrap();
            let title = screen.title();
            assert!(
                title.starts_with(destination.label()) || *destination == Destination::PopToRoot,
                "{destination} resolved to {title}"
            );
        }
        assert_eq!(router.resolve("MyRegisteredView").unwrap().title(), "MyRegisteredView");
    }

    #[test]
    fn test_menu_omits_router_only_view() {
        assert!(!Destination::MENU.contains(&Destination::MyRegisteredView));
        assert_eq!(Destination::MENU.len() + 1, Destination::ALL.len());
    }
}
