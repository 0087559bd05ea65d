//! Test entities shared by the unit tests of this crate.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Field, FieldKind, Persisted};

pub const CHORE_STATES: &[&str] = &["OPEN", "DONE"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub name: Option<String>,
}

impl Entity for Household {
    const NAME: &'static str = "Household";
    const RESOURCE: &'static str = "households";
    const FIELDS: &'static [Field] = &[Field::new("name", FieldKind::Text).required()];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    pub title: Option<String>,
    pub points: Option<i32>,
    pub reward: Option<f64>,
    pub urgent: Option<bool>,
    pub state: Option<String>,
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::timestamp::option")]
    pub due_at: Option<DateTime<Utc>>,
    pub household: Option<Persisted<Household>>,
}

impl Entity for Chore {
    const NAME: &'static str = "Chore";
    const RESOURCE: &'static str = "chores";
    const FIELDS: &'static [Field] = &[
        Field::new("title", FieldKind::Text).required(),
        Field::new("points", FieldKind::Integer).required(),
        Field::new("reward", FieldKind::Decimal),
        Field::new("urgent", FieldKind::Boolean).required(),
        Field::new("state", FieldKind::Enumeration(CHORE_STATES)),
        Field::new("createdAt", FieldKind::Timestamp).required(),
        Field::new("dueAt", FieldKind::Timestamp),
        Field::new("household", FieldKind::Relation),
    ];

    fn form_defaults(_now: DateTime<Utc>) -> Self {
        Self { urgent: Some(false), ..Default::default() }
    }
}

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 11, hour, minute, 0).unwrap()
}

pub fn household(id: i64, name: &str) -> Persisted<Household> {
    Persisted::new(id, Household { name: Some(name.to_string()) })
}

pub fn chore(id: i64, title: &str, points: i32) -> Persisted<Chore> {
    Persisted::new(
        id,
        Chore {
            title: Some(title.to_string()),
            points: Some(points),
            urgent: Some(false),
            created_at: Some(at(4, 40)),
            ..Default::default()
        },
    )
}
