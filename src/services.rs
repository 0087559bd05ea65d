//! Entity Services
//!
//! REST services of the administered entities and the option lists of
//! relation selectors.

use entity_sync::{
    relationship_options, ApiResult, ApplicationConfig, EntityId, EntityService, HttpClient,
    Persisted, ReqwestClient,
};
use serde_json::Value;

use crate::admin::{AdminEntity, EntityKind};
use crate::models::{AppUser, DailyMission, Family, Goal, MissionStatusRecord, Transaction, Wallet};

pub type Service<T> = EntityService<T, ReqwestClient>;

/// One entry of a relation selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationChoice {
    pub id: EntityId,
    pub label: String,
}

/// Every row of `kind`, with the currently selected relation (the form's
/// `{ "id": .. }` value) kept in the list
pub async fn relation_choices<C: HttpClient + Clone>(
    client: &C,
    config: &ApplicationConfig,
    kind: EntityKind,
    selected: Option<Value>,
) -> ApiResult<Vec<RelationChoice>> {
    match kind {
        EntityKind::Family => choices::<Family, C>(client, config, selected).await,
        EntityKind::AppUser => choices::<AppUser, C>(client, config, selected).await,
        EntityKind::Wallet => choices::<Wallet, C>(client, config, selected).await,
        EntityKind::Goal => choices::<Goal, C>(client, config, selected).await,
        EntityKind::DailyMission => choices::<DailyMission, C>(client, config, selected).await,
        EntityKind::MissionStatusRecord => {
            choices::<MissionStatusRecord, C>(client, config, selected).await
        }
        EntityKind::Transaction => choices::<Transaction, C>(client, config, selected).await,
    }
}

async fn choices<R: AdminEntity, C: HttpClient + Clone>(
    client: &C,
    config: &ApplicationConfig,
    selected: Option<Value>,
) -> ApiResult<Vec<RelationChoice>> {
    let service = EntityService::<R, C>::new(client.clone(), config);
    let selected = selected.and_then(|value| serde_json::from_value::<Persisted<R>>(value).ok());
    let options = relationship_options(&service, selected).await?;
    Ok(options
        .iter()
        .map(|option| RelationChoice { id: option.id, label: R::label(option) })
        .collect())
}
