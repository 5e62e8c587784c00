//! Sortable list views - the ordering shared by every listing page
//!
//! Records declare a field-type descriptor per field; the list keeps the
//! active field/direction and re-derives a stable order on every change.

mod types;
mod compare;
mod list;
mod record;

pub use types::{FieldKind, SortDirection, SortIndicator, SortState};
pub use compare::{compare_values, format_number, parse_date, sort_records, FieldValue, Sortable};
pub use list::SortableList;
pub use record::{Record, RecordField, Value};
