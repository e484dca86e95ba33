//! Conditional class-name composition.

use std::fmt;

/// Space-separated class list built from optional and conditional parts.
///
/// Empty parts are skipped and duplicate classes are kept only once, in
/// first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every whitespace-separated class in `class`.
    pub fn add(mut self, class: &str) -> Self {
        for name in class.split_whitespace() {
            if !self.classes.iter().any(|c| c == name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    /// Add `class` only when `condition` holds.
    pub fn add_if(self, condition: bool, class: &str) -> Self {
        if condition { self.add(class) } else { self }
    }

    /// Add `class` if present.
    pub fn add_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}
