//! Goal entity.

use chrono::{DateTime, Utc};
use entity_sync::{Entity, Field, FieldKind, Persisted};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::{Family, GoalCategory, GoalPriority};
use crate::admin::{labeled, AdminEntity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub due_date: Option<DateTime<Utc>>,
    pub category: Option<GoalCategory>,
    pub priority: Option<GoalPriority>,
    pub alert_enabled: Option<bool>,
    pub alert_threshold: Option<i32>,
    pub family: Option<Persisted<Family>>,
}

impl Entity for Goal {
    const NAME: &'static str = "Goal";
    const RESOURCE: &'static str = "goals";
    const FIELDS: &'static [Field] = &[
        Field::new("title", FieldKind::Text).required(),
        Field::new("description", FieldKind::Text),
        Field::new("targetAmount", FieldKind::Decimal).required(),
        Field::new("currentAmount", FieldKind::Decimal).required(),
        Field::new("createdAt", FieldKind::Timestamp).required(),
        Field::new("dueDate", FieldKind::Timestamp),
        Field::new("category", FieldKind::Enumeration(GoalCategory::VARIANTS)).required(),
        Field::new("priority", FieldKind::Enumeration(GoalPriority::VARIANTS)).required(),
        Field::new("alertEnabled", FieldKind::Boolean).required(),
        Field::new("alertThreshold", FieldKind::Integer).required(),
        Field::new("family", FieldKind::Relation).required(),
    ];

    fn form_defaults(_now: DateTime<Utc>) -> Self {
        Self { alert_enabled: Some(false), ..Default::default() }
    }
}

impl AdminEntity for Goal {
    const KIND: EntityKind = EntityKind::Goal;

    fn label(entity: &Persisted<Self>) -> String {
        labeled(entity.id, entity.title.as_deref())
    }

    fn relation(field: &str) -> Option<EntityKind> {
        (field == "family").then_some(EntityKind::Family)
    }
}
