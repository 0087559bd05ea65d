//! Daily Mission entity.

use chrono::{DateTime, Utc};
use entity_sync::{Entity, Field, FieldKind, Persisted};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::{DailyMissionType, Family, GoalCategory};
use crate::admin::{labeled, AdminEntity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMission {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub mission_type: Option<DailyMissionType>,
    pub target_amount: Option<f64>,
    pub category: Option<GoalCategory>,
    pub xp_reward: Option<i32>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    pub family: Option<Persisted<Family>>,
}

impl Entity for DailyMission {
    const NAME: &'static str = "Daily Mission";
    const RESOURCE: &'static str = "daily-missions";
    const FIELDS: &'static [Field] = &[
        Field::new("title", FieldKind::Text).required(),
        Field::new("description", FieldKind::Text),
        Field::new("startDate", FieldKind::Timestamp).required(),
        Field::new("endDate", FieldKind::Timestamp).required(),
        Field::new("type", FieldKind::Enumeration(DailyMissionType::VARIANTS)).required(),
        Field::new("targetAmount", FieldKind::Decimal),
        Field::new("category", FieldKind::Enumeration(GoalCategory::VARIANTS)),
        Field::new("xpReward", FieldKind::Integer).required(),
        Field::new("createdAt", FieldKind::Timestamp).required(),
        Field::new("family", FieldKind::Relation).required(),
    ];
}

impl AdminEntity for DailyMission {
    const KIND: EntityKind = EntityKind::DailyMission;

    fn label(entity: &Persisted<Self>) -> String {
        labeled(entity.id, entity.title.as_deref())
    }

    fn relation(field: &str) -> Option<EntityKind> {
        (field == "family").then_some(EntityKind::Family)
    }
}
