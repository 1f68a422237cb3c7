use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    Login,
    Dashboard,
    Profile,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Profile => "Profile",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The set of screens reachable in one authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavigationTree {
    Unauthenticated,
    Authenticated,
}

impl NavigationTree {
    const UNAUTHENTICATED_SCREENS: &'static [Screen] = &[Screen::Login];
    const AUTHENTICATED_SCREENS: &'static [Screen] = &[Screen::Dashboard, Screen::Profile];

    /// Screen every fresh visit of this tree starts at.
    pub fn entry(self) -> Screen {
        match self {
            NavigationTree::Unauthenticated => Screen::Login,
            NavigationTree::Authenticated => Screen::Dashboard,
        }
    }

    pub fn screens(self) -> &'static [Screen] {
        match self {
            NavigationTree::Unauthenticated => Self::UNAUTHENTICATED_SCREENS,
            NavigationTree::Authenticated => Self::AUTHENTICATED_SCREENS,
        }
    }

    pub fn contains(self, screen: Screen) -> bool {
        self.screens().contains(&screen)
    }

    // Login renders its own chrome, the authenticated screens share a titled header.
    pub fn header_shown(self) -> bool {
        matches!(self, NavigationTree::Authenticated)
    }
}

impl fmt::Display for NavigationTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NavigationTree::Unauthenticated => f.write_str("unauthenticated"),
            NavigationTree::Authenticated => f.write_str("authenticated"),
        }
    }
}

/// Pick the navigation tree for the given authentication state.
pub fn select_tree(is_authenticated: bool) -> NavigationTree {
    if is_authenticated {
        NavigationTree::Authenticated
    } else {
        NavigationTree::Unauthenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_total() {
        assert_eq!(select_tree(false), NavigationTree::Unauthenticated);
        assert_eq!(select_tree(true), NavigationTree::Authenticated);
    }

    #[test]
    fn trees_are_disjoint() {
        for screen in NavigationTree::Unauthenticated.screens() {
            assert!(!NavigationTree::Authenticated.contains(*screen));
        }
    }

    #[test]
    fn entries_belong_to_their_tree() {
        for tree in [NavigationTree::Unauthenticated, NavigationTree::Authenticated] {
            assert!(tree.contains(tree.entry()));
        }
        assert_eq!(NavigationTree::Authenticated.entry(), Screen::Dashboard);
        assert!(!NavigationTree::Unauthenticated.header_shown());
    }
}
