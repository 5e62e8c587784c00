//! Sortable list view state

use super::compare::{sort_records, Sortable};
use super::types::{SortDirection, SortIndicator, SortState};

/// An in-memory sequence of records plus the sort state driving its order.
///
/// The displayed order always matches `state()`: it is applied at mount and
/// re-applied after every mutation.
#[derive(Debug, Clone)]
pub struct SortableList<T: Sortable> {
    items: Vec<T>,
    state: SortState<T::Field>,
}

impl<T: Sortable> SortableList<T> {
    /// Mount a list view with its default sort field and direction
    pub fn new(items: Vec<T>, field: T::Field, direction: SortDirection) -> Self {
        let mut list = Self {
            items,
            state: SortState::new(field, direction),
        };
        list.resort();
        list
    }

    /// Activate a sort header and return the reordered sequence
    pub fn sort_by(&mut self, field: T::Field) -> &[T] {
        self.state.activate(field);
        tracing::debug!(field = ?self.state.field, direction = ?self.state.direction, "sort list view");
        self.resort();
        &self.items
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &SortState<T::Field> {
        &self.state
    }

    pub fn indicator(&self, field: &T::Field) -> SortIndicator {
        self.state.indicator(field)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| pred(item))
    }

    /// Insert a record at the position the current sort state dictates
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.resort();
    }

    /// Remove records; returns how many were dropped
    pub fn retain(&mut self, pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(pred);
        before - self.items.len()
    }

    /// Modify the first matching record in place and restore the order.
    /// Returns false when nothing matched.
    pub fn update(&mut self, pred: impl Fn(&T) -> bool, apply: impl FnOnce(&mut T)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| pred(item)) else {
            return false;
        };
        apply(item);
        self.resort();
        true
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn resort(&mut self) {
        sort_records(&mut self.items, &self.state.field, self.state.direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::{FieldKind, FieldValue};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        points: Option<u32>,
        date: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Name,
        Points,
        Date,
    }

    impl Sortable for Row {
        type Field = Col;

        fn field_kind(field: &Col) -> FieldKind {
            match field {
                Col::Name => FieldKind::Text,
                Col::Points => FieldKind::Number,
                Col::Date => FieldKind::Date,
            }
        }

        fn field_value(&self, field: &Col) -> Option<FieldValue<'_>> {
            match field {
                Col::Name => Some(FieldValue::text(self.name)),
                Col::Points => self.points.map(FieldValue::from),
                Col::Date => Some(FieldValue::text(self.date)),
            }
        }
    }

    fn row(name: &'static str, points: Option<u32>, date: &'static str) -> Row {
        Row { name, points, date }
    }

    fn names(list: &[Row]) -> Vec<&'static str> {
        list.iter().map(|r| r.name).collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Jane", Some(25), "2024-03-07"),
            row("Mike", Some(65), "2024-03-06"),
            row("John", Some(45), "2024-03-08"),
        ]
    }

    #[test]
    fn test_points_example() {
        let mut list = SortableList::new(sample(), Col::Name, SortDirection::Ascending);
        assert_eq!(names(list.sort_by(Col::Points)), vec!["Mike", "John", "Jane"]);
        assert_eq!(list.state().direction, SortDirection::Descending);
        assert_eq!(names(list.sort_by(Col::Points)), vec!["Jane", "John", "Mike"]);
        assert_eq!(list.state().direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sorting_twice_reverses() {
        let mut list = SortableList::new(sample(), Col::Points, SortDirection::Descending);
        let first = names(list.sort_by(Col::Date));
        let mut second = names(list.sort_by(Col::Date));
        second.reverse();
        assert_eq!(first, second);
    }

    #[test]
    fn test_numeric_sort_is_monotone() {
        let items: Vec<Row> = [7, 3, 99, 10, 1, 45]
            .iter()
            .map(|&p| row("x", Some(p), "2024-01-01"))
            .collect();
        let mut list = SortableList::new(items, Col::Name, SortDirection::Ascending);
        let desc: Vec<u32> = list.sort_by(Col::Points).iter().filter_map(|r| r.points).collect();
        assert!(desc.windows(2).all(|w| w[0] >= w[1]));
        let asc: Vec<u32> = list.sort_by(Col::Points).iter().filter_map(|r| r.points).collect();
        assert!(asc.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_date_sort_is_chronological() {
        let items = vec![
            row("a", None, "2024-3-7"),
            row("b", None, "2024-02-20"),
            row("c", None, "2024-03-08"),
        ];
        let mut list = SortableList::new(items, Col::Name, SortDirection::Ascending);
        assert_eq!(names(list.sort_by(Col::Date)), vec!["c", "a", "b"]);
        assert_eq!(names(list.sort_by(Col::Date)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_undefined_values_sort_last() {
        let items = vec![
            row("none", None, "2024-01-01"),
            row("low", Some(1), "2024-01-01"),
            row("high", Some(9), "2024-01-01"),
        ];
        let mut list = SortableList::new(items, Col::Name, SortDirection::Ascending);
        assert_eq!(names(list.sort_by(Col::Points)), vec!["high", "low", "none"]);
        assert_eq!(names(list.sort_by(Col::Points)), vec!["low", "high", "none"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let items = vec![
            row("first", Some(10), "2024-01-01"),
            row("second", Some(10), "2024-01-01"),
            row("third", Some(10), "2024-01-01"),
        ];
        let mut list = SortableList::new(items, Col::Date, SortDirection::Ascending);
        assert_eq!(names(list.sort_by(Col::Points)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_mount_applies_default_order() {
        let list = SortableList::new(sample(), Col::Points, SortDirection::Descending);
        assert_eq!(names(list.items()), vec!["Mike", "John", "Jane"]);
    }

    #[test]
    fn test_push_and_update_keep_order() {
        let mut list = SortableList::new(sample(), Col::Points, SortDirection::Descending);
        list.push(row("Ann", Some(50), "2024-03-09"));
        assert_eq!(names(list.items()), vec!["Mike", "Ann", "John", "Jane"]);
        assert!(list.update(|r| r.name == "Jane", |r| r.points = Some(100)));
        assert_eq!(names(list.items()), vec!["Jane", "Mike", "Ann", "John"]);
        assert!(!list.update(|r| r.name == "Nobody", |_| {}));
        assert_eq!(list.retain(|r| r.name != "Mike"), 1);
        assert_eq!(list.len(), 3);
    }
}
