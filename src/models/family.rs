//! Family entity.

use chrono::{DateTime, Utc};
use entity_sync::{Entity, Field, FieldKind, Persisted};
use serde::{Deserialize, Serialize};

use crate::admin::{labeled, AdminEntity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub name: Option<String>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Family {
    const NAME: &'static str = "Family";
    const RESOURCE: &'static str = "families";
    const FIELDS: &'static [Field] = &[
        Field::new("name", FieldKind::Text).required(),
        Field::new("createdAt", FieldKind::Timestamp).required(),
    ];
}

impl AdminEntity for Family {
    const KIND: EntityKind = EntityKind::Family;

    fn label(entity: &Persisted<Self>) -> String {
        labeled(entity.id, entity.name.as_deref())
    }
}
