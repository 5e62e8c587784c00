//! Type definitions for sortable list views

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// How the values of a field are compared.
///
/// Each sortable field declares its kind up front instead of the comparator
/// inspecting values at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
}

/// Active sort field and direction of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: PartialEq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Apply a header activation: same field toggles, a new field starts descending
    pub fn activate(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.toggle();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    pub fn indicator(&self, field: &F) -> SortIndicator {
        if &self.field != field {
            return SortIndicator::Unsorted;
        }
        match self.direction {
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        }
    }
}

/// What a column header should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_same_field_toggles() {
        let mut state = SortState::new("points", SortDirection::Descending);
        state.activate("points");
        assert_eq!(state.direction, SortDirection::Ascending);
        state.activate("points");
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_activate_new_field_resets_to_descending() {
        let mut state = SortState::new("name", SortDirection::Ascending);
        state.activate("points");
        assert_eq!(state.field, "points");
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_indicator() {
        let state = SortState::new("name", SortDirection::Ascending);
        assert_eq!(state.indicator(&"name"), SortIndicator::Ascending);
        assert_eq!(state.indicator(&"points"), SortIndicator::Unsorted);
    }
}
