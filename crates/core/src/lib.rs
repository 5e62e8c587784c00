//! Activity points portal core
//!
//! Platform-agnostic models, mock data, routing, session handling and the
//! sortable list view. The optional `ui` feature adds the egui rendering
//! shared by the desktop and browser shells.

pub mod constants;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod list_view;
pub mod models;
pub mod pages;
pub mod portal;
pub mod routes;
pub mod session;
pub mod transition;

#[cfg(feature = "ui")]
pub mod ui;

pub use error::{FormError, StoreError};
pub use list_view::{
    FieldKind, FieldValue, Record, RecordField, SortDirection, SortIndicator, SortState, Sortable, SortableList, Value,
};
pub use models::*;
pub use pages::{Outcome, Saved};
pub use portal::{Page, Portal};
pub use routes::{resolve, Route};
pub use session::{MemoryRoleStore, Role, RoleStore, Session};
pub use transition::RouteTransition;
