//! Transaction entity.
//!
//! Posting a transaction moves its wallet's balance on the backend; the
//! client only sends the row.

use chrono::{DateTime, Utc};
use entity_sync::{Entity, Field, FieldKind, Persisted};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::{TransactionType, Wallet};
use crate::admin::{labeled, AdminEntity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub amount: Option<f64>,
    pub description: Option<String>,
    #[serde(default, with = "entity_sync::timestamp::option")]
    pub transaction_date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub wallet: Option<Persisted<Wallet>>,
}

impl Entity for Transaction {
    const NAME: &'static str = "Transaction";
    const RESOURCE: &'static str = "transactions";
    const FIELDS: &'static [Field] = &[
        Field::new("amount", FieldKind::Decimal).required(),
        Field::new("description", FieldKind::Text).required(),
        Field::new("transactionDate", FieldKind::Timestamp),
        Field::new("type", FieldKind::Enumeration(TransactionType::VARIANTS)).required(),
        Field::new("category", FieldKind::Text),
        Field::new("notes", FieldKind::Text),
        Field::new("wallet", FieldKind::Relation).required(),
    ];
}

impl AdminEntity for Transaction {
    const KIND: EntityKind = EntityKind::Transaction;

    fn label(entity: &Persisted<Self>) -> String {
        labeled(entity.id, entity.description.as_deref())
    }

    fn relation(field: &str) -> Option<EntityKind> {
        (field == "wallet").then_some(EntityKind::Wallet)
    }
}
