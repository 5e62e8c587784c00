//! Sortable table rendering shared by every list page

use egui::Ui;
use egui_extras::{Column, TableBuilder, TableRow};
use egui_phosphor::regular;

use crate::list_view::{SortIndicator, Sortable, SortableList};

/// Column of a sortable table; `field` is None for non-sortable columns (actions)
pub struct TableColumn<F> {
    pub label: &'static str,
    pub field: Option<F>,
    pub width: f32,
}

impl<F> TableColumn<F> {
    pub fn sorted(label: &'static str, field: F, width: f32) -> Self {
        Self { label, field: Some(field), width }
    }

    pub fn plain(label: &'static str, width: f32) -> Self {
        Self { label, field: None, width }
    }
}

/// Get sort indicator icon for a header
pub fn sort_indicator(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Ascending => regular::CARET_UP,
        SortIndicator::Descending => regular::CARET_DOWN,
        SortIndicator::Unsorted => regular::ARROWS_DOWN_UP,
    }
}

/// Render `list` as a striped table with clickable sort headers.
///
/// `cell` draws column `col` of one record.
pub fn sortable_table<T: Sortable>(
    ui: &mut Ui,
    id_salt: &str,
    list: &mut SortableList<T>,
    columns: &[TableColumn<T::Field>],
    mut cell: impl FnMut(&mut Ui, usize, &T),
) {
    let body_font_size = egui::TextStyle::Body.resolve(ui.style()).size;
    let row_height = body_font_size.max(ui.spacing().interact_size.y) + 8.0;
    let header_height = (24.0 * body_font_size / 14.0).max(24.0);

    let mut table = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for (i, column) in columns.iter().enumerate() {
        table = if i == 0 {
            table.column(Column::initial(column.width).at_least(120.0).clip(true).resizable(true))
        } else {
            table.column(Column::initial(column.width).clip(true))
        };
    }

    let mut clicked: Option<T::Field> = None;
    table
        .header(header_height, |mut header| {
            for column in columns {
                header.col(|ui| match &column.field {
                    Some(field) => {
                        let indicator = list.indicator(field);
                        let label = format!("{} {}", column.label, sort_indicator(indicator));
                        if ui.selectable_label(indicator != SortIndicator::Unsorted, label).clicked() {
                            clicked = Some(field.clone());
                        }
                    }
                    None => {
                        ui.strong(column.label);
                    }
                });
            }
        })
        .body(|body| {
            let items = list.items();
            body.rows(row_height, items.len(), |mut row: TableRow<'_, '_>| {
                let item = &items[row.index()];
                for col in 0..columns.len() {
                    row.col(|ui| cell(ui, col, item));
                }
            });
        });

    if let Some(field) = clicked {
        list.sort_by(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_icons() {
        assert_eq!(sort_indicator(SortIndicator::Ascending), regular::CARET_UP);
        assert_eq!(sort_indicator(SortIndicator::Descending), regular::CARET_DOWN);
        assert_eq!(sort_indicator(SortIndicator::Unsorted), regular::ARROWS_DOWN_UP);
    }
}
