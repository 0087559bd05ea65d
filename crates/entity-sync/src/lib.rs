//! Entity Sync
//!
//! Client-side synchronization of REST entities: a date-aware transcoder over
//! an `HttpClient`, identity comparison, the de-duplicating collection merge,
//! sort state, the form adapter and the state machines behind list, detail,
//! update and delete views.

pub mod collection;
pub mod config;
pub mod entity;
pub mod error;
pub mod form;
pub mod http;
pub mod request;
pub mod service;
pub mod sort;
pub mod timestamp;
pub mod views;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod test_support;

pub use collection::{add_to_collection_if_missing, compare};
pub use config::ApplicationConfig;
pub use entity::{Entity, EntityId, Field, FieldKind, Identified, Persisted, Record, ID_FIELD};
pub use error::{ApiError, ApiResult, FormError, TimestampError, ViewError};
pub use form::{EntityForm, FormControl};
pub use http::{ApiRequest, ApiResponse, HttpClient, Method, ReqwestClient};
pub use request::{Pagination, RequestOptions, ITEMS_PER_PAGE};
pub use service::{relationship_options, EntityService, Page};
pub use sort::{SortOrder, SortState};
pub use timestamp::DisplayZone;
