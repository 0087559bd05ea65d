//! Create / Edit View
//!
//! `idle -> saving -> idle`. Validation runs before anything is sent; the
//! extracted record's variant picks create or update.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::entity::{Entity, Persisted, Record};
use crate::error::{ApiResult, FormError, ViewError};
use crate::form::EntityForm;
use crate::http::HttpClient;
use crate::service::EntityService;
use crate::timestamp::DisplayZone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePhase {
    #[default]
    Idle,
    Saving,
}

/// A successful save; the view navigates back afterwards
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome<T> {
    Created(Persisted<T>),
    Updated(Persisted<T>),
}

impl<T> SaveOutcome<T> {
    pub fn entity(&self) -> &Persisted<T> {
        match self {
            SaveOutcome::Created(entity) | SaveOutcome::Updated(entity) => entity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateView<T> {
    form: EntityForm<T>,
    phase: UpdatePhase,
}

impl<T: Entity> UpdateView<T> {
    /// Blank form for `None`, otherwise the resolved entity
    pub fn new(entity: Option<Persisted<T>>, now: DateTime<Utc>) -> Self {
        Self::new_in(entity, now, DisplayZone::Local)
    }

    pub fn new_in(entity: Option<Persisted<T>>, now: DateTime<Utc>, zone: DisplayZone) -> Self {
        let record = entity.map(Record::from);
        Self { form: EntityForm::create_in(record.as_ref(), now, zone), phase: UpdatePhase::Idle }
    }

    pub fn form(&self) -> &EntityForm<T> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntityForm<T> {
        &mut self.form
    }

    pub fn phase(&self) -> UpdatePhase {
        self.phase
    }

    pub fn is_saving(&self) -> bool {
        self.phase == UpdatePhase::Saving
    }

    pub fn is_new(&self) -> bool {
        self.form.is_new()
    }

    /// Validates and extracts. Only a valid form enters `Saving`.
    pub fn begin_save(&mut self) -> Result<Record<T>, FormError> {
        self.form.validate()?;
        let record = self.form.extract()?;
        self.phase = UpdatePhase::Saving;
        Ok(record)
    }

    /// Leaves `Saving` however the request settled
    pub fn finish_save(&mut self, result: ApiResult<SaveOutcome<T>>) -> ApiResult<SaveOutcome<T>> {
        self.phase = UpdatePhase::Idle;
        if let Err(e) = &result {
            warn!(entity = T::NAME, error = %e, "save failed");
        }
        result
    }

    pub async fn save<C: HttpClient>(
        &mut self,
        service: &EntityService<T, C>,
    ) -> Result<SaveOutcome<T>, ViewError> {
        let record = self.begin_save()?;
        let result = persist(service, &record).await;
        Ok(self.finish_save(result)?)
    }
}

/// Creates a draft or updates a persisted record
pub async fn persist<T, C>(
    service: &EntityService<T, C>,
    record: &Record<T>,
) -> ApiResult<SaveOutcome<T>>
where
    T: Entity,
    C: HttpClient,
{
    match record {
        Record::Draft(data) => service.create(data).await.map(SaveOutcome::Created),
        Record::Persisted(entity) => service.update(entity).await.map(SaveOutcome::Updated),
    }
}
