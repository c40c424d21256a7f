//! Defines the [`NavMenu`] type, which models the site's navigation element
//! (the `#navigation` node in the rendered page) as the set of class names
//! attached to it. Visibility is a single marker class: the menu is
//! concealed exactly when the [`HIDDEN_CLASS`] marker is present.

use std::collections::HashSet;

/// The marker class whose presence conceals the navigation menu.
pub const HIDDEN_CLASS: &str = "hidden";

/// The navigation element's class set. There is no state beyond the
/// classes themselves.
pub struct NavMenu {
    classes: HashSet<String>,
}

impl NavMenu {
    /// Constructs a visible menu with no classes.
    pub fn new() -> NavMenu {
        NavMenu {
            classes: HashSet::new(),
        }
    }

    /// Constructs a menu carrying the given classes (which may or may not
    /// include the hidden marker).
    pub fn with_classes<I, S>(classes: I) -> NavMenu
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NavMenu {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the hidden marker is present.
    pub fn is_hidden(&self) -> bool {
        self.classes.contains(HIDDEN_CLASS)
    }

    /// Whether the menu carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Flips the hidden marker: removes it if present (reveal), adds it
    /// otherwise (conceal). Other classes are untouched. Two calls always
    /// restore the starting state.
    pub fn toggle(&mut self) {
        if !self.classes.remove(HIDDEN_CLASS) {
            self.classes.insert(HIDDEN_CLASS.to_owned());
        }
    }
}

impl Default for NavMenu {
    fn default() -> NavMenu {
        NavMenu::new()
    }
}
