//! Entity Registry
//!
//! Route segments, titles and relation targets of every administered
//! entity. The generic page components only reach concrete types through
//! `AdminEntity`.

use entity_sync::{Entity, EntityId, Persisted};
use strum_macros::EnumIter;

use crate::models::{AppUser, DailyMission, Family, Goal, MissionStatusRecord, Transaction, Wallet};

/// Default `sort` of every list route
pub const DEFAULT_SORT: &str = "id,asc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum EntityKind {
    Family,
    AppUser,
    Wallet,
    Goal,
    DailyMission,
    MissionStatusRecord,
    Transaction,
}

impl EntityKind {
    /// Path segment the entity is mounted under, e.g. "app-user"
    pub fn route(&self) -> &'static str {
        match self {
            EntityKind::Family => "family",
            EntityKind::AppUser => "app-user",
            EntityKind::Wallet => "wallet",
            EntityKind::Goal => "goal",
            EntityKind::DailyMission => "daily-mission",
            EntityKind::MissionStatusRecord => "mission-status-record",
            EntityKind::Transaction => "transaction",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Family => Family::NAME,
            EntityKind::AppUser => AppUser::NAME,
            EntityKind::Wallet => Wallet::NAME,
            EntityKind::Goal => Goal::NAME,
            EntityKind::DailyMission => DailyMission::NAME,
            EntityKind::MissionStatusRecord => MissionStatusRecord::NAME,
            EntityKind::Transaction => Transaction::NAME,
        }
    }

    pub fn from_route(segment: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        EntityKind::iter().find(|kind| kind.route() == segment)
    }
}

/// UI metadata on top of `Entity`
pub trait AdminEntity: Entity {
    const KIND: EntityKind;

    /// Text identifying a row in relation selectors
    fn label(entity: &Persisted<Self>) -> String {
        entity.id.to_string()
    }

    /// Entity a relation field points to
    fn relation(_field: &str) -> Option<EntityKind> {
        None
    }
}

/// `"12 - Silva"`, or just the id when the label field is empty
pub(crate) fn labeled(id: EntityId, text: Option<&str>) -> String {
    match text.filter(|text| !text.is_empty()) {
        Some(text) => format!("{} - {}", id, text),
        None => id.to_string(),
    }
}
