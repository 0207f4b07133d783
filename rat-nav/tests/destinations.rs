use rat_nav::{DestinationKey, Error, NavRouter, ParseKeyError, destinations};

#[destinations]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Destination {
    Menu,
    #[key = "ViewA"]
    DetailA,
    MyRegisteredView,
}

#[test]
fn test_keys_follow_variant_names_and_overrides() {
    assert_eq!(Destination::Menu.as_str(), "Menu");
    assert_eq!(Destination::DetailA.as_str(), "ViewA");
    assert_eq!(Destination::MyRegisteredView.to_string(), "MyRegisteredView");
    assert_eq!(DestinationKey::from(Destination::DetailA), "ViewA");
}

#[test]
fn test_all_in_declaration_order() {
    assert_eq!(
        Destination::ALL,
        &[Destination::Menu, Destination::DetailA, Destination::MyRegisteredView]
    );
}

#[test]
fn test_parse_is_exact() {
    assert_eq!("ViewA".parse::<Destination>(), Ok(Destination::DetailA));
    assert_eq!("Menu".parse::<Destination>(), Ok(Destination::Menu));
    assert_eq!("".parse::<Destination>(), Err(ParseKeyError::Empty));

    // The variant name is not an alias for an overridden key.
    let err = "DetailA".parse::<Destination>().unwrap_err();
    assert_eq!(
        err,
        ParseKeyError::Unrecognized {
            input: "DetailA".to_string(),
            available: vec!["Menu", "ViewA", "MyRegisteredView"],
        }
    );

    assert!("menu".parse::<Destination>().is_err());
}

#[test]
fn test_typed_keys_with_router() {
    let router = NavRouter::new();
    for destination in Destination::ALL {
        router.register(*destination, move || destination.as_str().len()).unwrap();
    }

    assert_eq!(router.resolve(Destination::DetailA.as_str()).unwrap(), 5);
    assert!(router.ensure_registered(Destination::ALL.iter().copied()).is_ok());
    assert_eq!(
        router.register(Destination::Menu, || 0),
        Err(Error::DuplicateKey { key: Destination::Menu.key() })
    );
}

mod raw {
    use super::*;

    #[destinations]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Kind {
        r#Type,
        Plain,
    }

    #[test]
    fn test_raw_variant_keyed_without_prefix() {
        assert_eq!(Kind::r#Type.as_str(), "Type");
        assert_eq!(Kind::r#Type.to_string(), "Type");
        assert_eq!(DestinationKey::from(Kind::r#Type), "Type");
        assert_eq!("Type".parse::<Kind>(), Ok(Kind::r#Type));
        assert!("r#Type".parse::<Kind>().is_err());
    }
}
