//! App User entity.

use chrono::{DateTime, Utc};
use entity_sync::{Entity, Field, FieldKind, Persisted};
use serde::{Deserialize, Serialize};

use super::Family;
use crate::admin::{labeled, AdminEntity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub xp_points: Option<i32>,
    pub level: Option<i32>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    pub family: Option<Persisted<Family>>,
}

impl Entity for AppUser {
    const NAME: &'static str = "App User";
    const RESOURCE: &'static str = "app-users";
    const FIELDS: &'static [Field] = &[
        Field::new("username", FieldKind::Text).required(),
        Field::new("name", FieldKind::Text).required(),
        Field::new("avatar", FieldKind::Text),
        Field::new("xpPoints", FieldKind::Integer).required(),
        Field::new("level", FieldKind::Integer).required(),
        Field::new("createdAt", FieldKind::Timestamp).required(),
        Field::new("family", FieldKind::Relation).required(),
    ];
}

impl AdminEntity for AppUser {
    const KIND: EntityKind = EntityKind::AppUser;

    fn label(entity: &Persisted<Self>) -> String {
        labeled(entity.id, entity.username.as_deref())
    }

    fn relation(field: &str) -> Option<EntityKind> {
        (field == "family").then_some(EntityKind::Family)
    }
}
