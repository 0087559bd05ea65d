//! Mission Status Record entity.

use chrono::{DateTime, Utc};
use entity_sync::{Entity, Field, FieldKind, Persisted};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::{DailyMission, MissionStatusType};
use crate::admin::{AdminEntity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionStatusRecord {
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub date: Option<DateTime<Utc>>,
    pub status_type: Option<MissionStatusType>,
    pub mission: Option<Persisted<DailyMission>>,
}

impl Entity for MissionStatusRecord {
    const NAME: &'static str = "Mission Status Record";
    const RESOURCE: &'static str = "mission-status-records";
    const FIELDS: &'static [Field] = &[
        Field::new("date", FieldKind::Timestamp).required(),
        Field::new("statusType", FieldKind::Enumeration(MissionStatusType::VARIANTS)).required(),
        Field::new("mission", FieldKind::Relation).required(),
    ];
}

impl AdminEntity for MissionStatusRecord {
    const KIND: EntityKind = EntityKind::MissionStatusRecord;

    fn relation(field: &str) -> Option<EntityKind> {
        (field == "mission").then_some(EntityKind::DailyMission)
    }
}
