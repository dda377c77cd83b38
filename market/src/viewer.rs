//! Current-viewer capability and the header navigation it selects.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use serde::{Deserialize, Serialize};

/// A signed-in marketplace member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub display_name: String,
}

impl Member {
    /// Avatar fallback: first letter of up to two name parts.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Who is looking at the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Viewer {
    #[default]
    Anonymous,
    Member(Member),
}

impl Viewer {
    #[must_use]
    pub fn member(&self) -> Option<&Member> {
        match self {
            Self::Anonymous => None,
            Self::Member(member) => Some(member),
        }
    }

    #[must_use]
    pub fn is_member(&self) -> bool {
        self.member().is_some()
    }
}

/// Where a header link sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSlot {
    /// Primary navigation next to the logo.
    Primary,
    /// Call-to-action buttons on the right.
    Action,
    /// Entries inside the account dropdown.
    Account,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub slot: NavSlot,
}

const fn link(label: &'static str, href: &'static str, slot: NavSlot) -> NavLink {
    NavLink { label, href, slot }
}

/// Header links for `viewer`.
#[must_use]
pub fn nav_links(viewer: &Viewer) -> Vec<NavLink> {
    let mut links =
        vec![link("Browse", "/products", NavSlot::Primary), link("Categories", "/categories", NavSlot::Primary)];
    match viewer {
        Viewer::Anonymous => {
            links.push(link("Log in", "/login", NavSlot::Action));
            links.push(link("Sign up", "/register", NavSlot::Action));
        }
        Viewer::Member(_) => {
            links.push(link("Sell", "/products/new", NavSlot::Action));
            links.push(link("Profile", "/profile", NavSlot::Account));
            links.push(link("My Products", "/my-products", NavSlot::Account));
            links.push(link("Sell Item", "/products/new", NavSlot::Account));
            links.push(link("Log out", "/logout", NavSlot::Account));
        }
    }
    links
}
