//! Wallet entity.

use chrono::{DateTime, Utc};
use entity_sync::{Entity, Field, FieldKind, Persisted};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::{AppUser, WalletType};
use crate::admin::{labeled, AdminEntity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub name: Option<String>,
    pub balance: Option<f64>,
    #[serde(rename = "type")]
    pub wallet_type: Option<WalletType>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    pub owner: Option<Persisted<AppUser>>,
}

impl Entity for Wallet {
    const NAME: &'static str = "Wallet";
    const RESOURCE: &'static str = "wallets";
    const FIELDS: &'static [Field] = &[
        Field::new("name", FieldKind::Text).required(),
        Field::new("balance", FieldKind::Decimal).required(),
        Field::new("type", FieldKind::Enumeration(WalletType::VARIANTS)).required(),
        Field::new("icon", FieldKind::Text),
        Field::new("color", FieldKind::Text),
        Field::new("description", FieldKind::Text),
        Field::new("createdAt", FieldKind::Timestamp).required(),
        Field::new("owner", FieldKind::Relation).required(),
    ];
}

impl AdminEntity for Wallet {
    const KIND: EntityKind = EntityKind::Wallet;

    fn label(entity: &Persisted<Self>) -> String {
        labeled(entity.id, entity.name.as_deref())
    }

    fn relation(field: &str) -> Option<EntityKind> {
        (field == "owner").then_some(EntityKind::AppUser)
    }
}
