//! Delete Dialog
//!
//! `idle -> confirming -> deleting -> closed(reason)`. A rejected delete
//! goes back to `confirming` so the user can retry or dismiss.

use tracing::warn;

use crate::entity::{Entity, EntityId, Persisted};
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::service::EntityService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Deleted,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Idle,
    Confirming,
    Deleting,
    Closed(CloseReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteDialog<T> {
    target: Option<Persisted<T>>,
    phase: DeletePhase,
}

impl<T> Default for DeleteDialog<T> {
    fn default() -> Self {
        Self { target: None, phase: DeletePhase::Idle }
    }
}

impl<T: Entity> DeleteDialog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DeletePhase {
        self.phase
    }

    pub fn target(&self) -> Option<&Persisted<T>> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, DeletePhase::Confirming | DeletePhase::Deleting)
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        match self.phase {
            DeletePhase::Closed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn open(&mut self, entity: Persisted<T>) {
        self.target = Some(entity);
        self.phase = DeletePhase::Confirming;
    }

    /// Dismisses the dialog unless a delete is in flight
    pub fn cancel(&mut self) -> Option<CloseReason> {
        match self.phase {
            DeletePhase::Confirming => {
                self.phase = DeletePhase::Closed(CloseReason::Dismissed);
                Some(CloseReason::Dismissed)
            }
            _ => None,
        }
    }

    /// Id to delete; `None` unless the dialog is confirming
    pub fn begin_delete(&mut self) -> Option<EntityId> {
        if self.phase != DeletePhase::Confirming {
            return None;
        }
        let id = self.target.as_ref()?.id;
        self.phase = DeletePhase::Deleting;
        Some(id)
    }

    pub fn finish_delete(&mut self, result: ApiResult<bool>) -> ApiResult<Option<CloseReason>> {
        match result {
            Ok(true) => {
                self.phase = DeletePhase::Closed(CloseReason::Deleted);
                Ok(Some(CloseReason::Deleted))
            }
            Ok(false) => {
                self.phase = DeletePhase::Confirming;
                Ok(None)
            }
            Err(e) => {
                warn!(entity = T::NAME, error = %e, "delete failed");
                self.phase = DeletePhase::Confirming;
                Err(e)
            }
        }
    }

    /// Runs the confirmed delete. `Ok(None)` when nothing was deleted.
    pub async fn confirm<C: HttpClient>(
        &mut self,
        service: &EntityService<T, C>,
    ) -> ApiResult<Option<CloseReason>> {
        let Some(id) = self.begin_delete() else {
            return Ok(None);
        };
        let result = service.delete(id).await;
        self.finish_delete(result)
    }
}
