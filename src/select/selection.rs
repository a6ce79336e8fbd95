//! Ordered set of selected values.

/// Outcome of [`Selection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The value was appended.
    Added,
    /// The value was present and has been removed.
    Removed,
    /// The value was absent and the cap is reached; nothing changed.
    Rejected,
}

/// Selected option values, unique, in the order they were chosen.
///
/// The order matters: chips render in this order and the change callback
/// reports values in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection holding `value` if given.
    pub fn from_default(value: Option<&str>) -> Self {
        Self {
            values: value.map(|v| vec![v.to_string()]).unwrap_or_default(),
        }
    }

    /// The selected values in selection order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// The first selected value, used in single-select mode.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// The most recently added value.
    pub fn last(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }

    /// Replaces the selection with exactly `value`.
    pub fn replace(&mut self, value: &str) {
        self.values.clear();
        self.values.push(value.to_string());
    }

    /// Removes `value` if present or appends it if the cap allows.
    ///
    /// `cap` bounds the size only when adding; removal is always allowed.
    /// A cap of zero rejects every addition.
    pub fn toggle(&mut self, value: &str, cap: Option<usize>) -> Toggle {
        if self.remove(value) {
            return Toggle::Removed;
        }
        match cap {
            Some(max) if self.values.len() >= max => Toggle::Rejected,
            _ => {
                self.values.push(value.to_string());
                Toggle::Added
            }
        }
    }

    /// Removes `value`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(values: &[&str]) -> Selection {
        let mut s = Selection::new();
        for v in values {
            s.toggle(v, None);
        }
        s
    }

    #[test]
    fn test_from_default() {
        assert!(Selection::from_default(None).is_empty());
        assert_eq!(Selection::from_default(Some("a")).values(), ["a"]);
    }

    #[test]
    fn test_toggle_appends_in_order() {
        let s = sel(&["b", "a", "c"]);
        assert_eq!(s.values(), ["b", "a", "c"]);
    }

    #[test]
    fn test_toggle_removes_present_value() {
        let mut s = sel(&["a", "b", "c"]);
        assert_eq!(s.toggle("b", None), Toggle::Removed);
        assert_eq!(s.values(), ["a", "c"]);
    }

    #[test]
    fn test_cap_blocks_additions_only() {
        let mut s = sel(&["a", "b"]);
        assert_eq!(s.toggle("c", Some(2)), Toggle::Rejected);
        assert_eq!(s.values(), ["a", "b"]);
        assert_eq!(s.toggle("a", Some(2)), Toggle::Removed);
        assert_eq!(s.toggle("c", Some(2)), Toggle::Added);
        assert_eq!(s.values(), ["b", "c"]);
    }

    #[test]
    fn test_removal_allowed_above_cap() {
        let mut s = sel(&["a", "b", "c"]);
        assert_eq!(s.toggle("a", Some(1)), Toggle::Removed);
        assert_eq!(s.toggle("d", Some(1)), Toggle::Rejected);
    }

    #[test]
    fn test_zero_cap_rejects_everything() {
        let mut s = Selection::new();
        assert_eq!(s.toggle("a", Some(0)), Toggle::Rejected);
        assert!(s.is_empty());
    }

    #[test]
    fn test_remove_absent_value() {
        let mut s = sel(&["a"]);
        assert!(!s.remove("z"));
        assert_eq!(s.values(), ["a"]);
    }

    #[test]
    fn test_replace_and_clear() {
        let mut s = sel(&["a", "b"]);
        s.replace("c");
        assert_eq!(s.first(), Some("c"));
        assert_eq!(s.len(), 1);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.last(), None);
    }
}
