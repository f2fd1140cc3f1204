//! The global display attribute: a class list on the document root.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Class that marks the root as rendering the dark palette.
pub const DARK_CLASS: &str = "dark";

/// A root element whose classes drive the palette.
pub trait DisplayRoot {
    fn has_class(&self, name: &str) -> bool;

    /// Adds `name` when `enabled`, removes it otherwise.
    fn set_class(&mut self, name: &str, enabled: bool);
}

/// In-memory class list shared between clones.
///
/// Seed it with [`ClassList::with_class`] to stand in for a bootstrap script
/// that marked the root before mount.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(self, name: &str) -> Self {
        self.classes.borrow_mut().insert(name.to_string());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.borrow().contains(name)
    }

    /// Space-separated class attribute, sorted.
    pub fn to_attribute(&self) -> String {
        self.classes
            .borrow()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl DisplayRoot for ClassList {
    fn has_class(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn set_class(&mut self, name: &str, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(name.to_string());
        } else {
            classes.remove(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_class_toggles() {
        let mut root = ClassList::new();
        root.set_class(DARK_CLASS, true);
        assert!(root.has_class(DARK_CLASS));
        root.set_class(DARK_CLASS, false);
        assert!(!root.has_class(DARK_CLASS));
    }

    #[test]
    fn test_set_class_is_idempotent() {
        let mut root = ClassList::new().with_class("app");
        root.set_class(DARK_CLASS, true);
        root.set_class(DARK_CLASS, true);
        assert_eq!(root.to_attribute(), "app dark");
    }

    #[test]
    fn test_clones_share_classes() {
        let root = ClassList::new();
        let mut handle = root.clone();
        handle.set_class(DARK_CLASS, true);
        assert!(root.contains(DARK_CLASS));
    }

    #[test]
    fn test_other_classes_untouched() {
        let mut root = ClassList::new().with_class("antialiased");
        root.set_class(DARK_CLASS, false);
        assert_eq!(root.to_attribute(), "antialiased");
    }
}
