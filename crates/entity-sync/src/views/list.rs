//! List View
//!
//! `idle -> loading -> idle`. The sort state lives in the route's query
//! string; the view reads it back on every navigation.

use tracing::warn;

use crate::entity::{Entity, EntityId, Persisted};
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::request::{Pagination, RequestOptions};
use crate::service::{EntityService, Page};
use crate::sort::{SortState, SORT_PARAM};
use crate::views::delete::CloseReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    entities: Vec<Persisted<T>>,
    sort: SortState,
    pagination: Option<Pagination>,
    total_count: Option<u64>,
    phase: ListPhase,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            sort: SortState::default(),
            pagination: None,
            total_count: None,
            phase: ListPhase::Idle,
        }
    }
}

impl<T: Entity> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginated(pagination: Pagination) -> Self {
        Self { pagination: Some(pagination), ..Self::default() }
    }

    pub fn entities(&self) -> &[Persisted<T>] {
        &self.entities
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn track_id(entity: &Persisted<T>) -> EntityId {
        entity.id
    }

    /// Reads the sort state from the route, falling back to the route's
    /// default sort when the parameter is missing
    pub fn fill_from_route(&mut self, sort_param: Option<&str>, default_sort: &str) {
        let param = sort_param.filter(|param| !param.is_empty()).unwrap_or(default_sort);
        self.sort = SortState::parse(Some(param));
    }

    pub fn set_page(&mut self, page: u32) {
        if let Some(pagination) = &mut self.pagination {
            pagination.page = page;
        }
    }

    pub fn request_options(&self) -> RequestOptions {
        let options = RequestOptions::new().sort(self.sort.build_sort_param(None));
        match self.pagination {
            Some(pagination) => options.page(pagination),
            None => options,
        }
    }

    /// Enters `Loading` and returns the query to send
    pub fn begin_load(&mut self) -> RequestOptions {
        self.phase = ListPhase::Loading;
        self.request_options()
    }

    /// Leaves `Loading`; on success the rows are replaced and sorted
    /// client-side. On failure the previous rows stay.
    pub fn finish_load(&mut self, result: ApiResult<Page<T>>) -> ApiResult<()> {
        self.phase = ListPhase::Idle;
        match result {
            Ok(page) => {
                self.entities = self.sort.refine(page.items);
                self.total_count = page.total_count;
                Ok(())
            }
            Err(e) => {
                warn!(entity = T::NAME, error = %e, "loading list failed");
                Err(e)
            }
        }
    }

    pub async fn load<C: HttpClient>(&mut self, service: &EntityService<T, C>) -> ApiResult<()> {
        let options = self.begin_load();
        let result = service.query_page(&options).await;
        self.finish_load(result)
    }

    /// Handles a navigation to the list. Returns `true` when the caller has
    /// to load, otherwise the current rows are re-sorted in place.
    pub fn on_route_change(&mut self, sort_param: Option<&str>, default_sort: &str) -> bool {
        self.fill_from_route(sort_param, default_sort);
        if self.entities.is_empty() {
            return true;
        }
        let entities = std::mem::take(&mut self.entities);
        self.entities = self.sort.refine(entities);
        false
    }

    /// Query string that persists `state` (and the page) in the route
    pub fn sort_navigation(&self, state: &SortState) -> String {
        let mut query: Vec<String> = state
            .to_param()
            .map(|param| format!("{}={}", SORT_PARAM, param))
            .into_iter()
            .collect();
        if let Some(pagination) = self.pagination {
            query.push(format!("page={}", pagination.page));
        }
        query.join("&")
    }

    /// Navigation query after a click on the `field` column header
    pub fn toggle_sort(&self, field: &str) -> String {
        self.sort_navigation(&self.sort.toggle(field))
    }

    /// The list reloads only after an actual deletion
    pub fn on_delete_closed(&self, reason: CloseReason) -> bool {
        reason == CloseReason::Deleted
    }
}
