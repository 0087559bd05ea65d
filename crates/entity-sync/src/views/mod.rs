//! View State Machines
//!
//! Framework-free state behind the list, detail, update and delete views.
//! Components own one of these and drive it from user events; the async
//! helpers await the `EntityService` call in between.

pub mod delete;
pub mod detail;
pub mod list;
pub mod route;
pub mod update;

pub use delete::{CloseReason, DeleteDialog, DeletePhase};
pub use detail::{detail_rows, detail_rows_in, DetailRow};
pub use list::{ListPhase, ListView};
pub use route::{resolve, EntityRoute, Resolved, NOT_FOUND_PATH};
pub use update::{persist, SaveOutcome, UpdatePhase, UpdateView};
