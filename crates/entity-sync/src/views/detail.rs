//! Read-only projection of a persisted entity.

use serde_json::Value;

use crate::entity::{Entity, FieldKind, Persisted, ID_FIELD};
use crate::timestamp::{self, DisplayZone};

/// Layout of timestamps on detail pages
pub const DETAIL_DATE_TIME_FORMAT: &str = "%-d %b %Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub field: &'static str,
    pub value: String,
}

/// One row per field, id first; absent values render as empty text.
/// Timestamps read in the local zone.
pub fn detail_rows<T: Entity>(entity: &Persisted<T>) -> Vec<DetailRow> {
    detail_rows_in(entity, DisplayZone::Local)
}

pub fn detail_rows_in<T: Entity>(entity: &Persisted<T>, zone: DisplayZone) -> Vec<DetailRow> {
    let fields = match serde_json::to_value(&entity.data) {
        Ok(Value::Object(fields)) => fields,
        _ => Default::default(),
    };

    let mut rows = vec![DetailRow { field: ID_FIELD, value: entity.id.to_string() }];
    rows.extend(T::FIELDS.iter().map(|field| DetailRow {
        field: field.name,
        value: format_value(field.kind, fields.get(field.name).unwrap_or(&Value::Null), zone),
    }));
    rows
}

fn format_value(kind: FieldKind, value: &Value, zone: DisplayZone) -> String {
    match (kind, value) {
        (_, Value::Null) => String::new(),
        (FieldKind::Timestamp, Value::String(text)) => match timestamp::decode(Some(text)) {
            Ok(Some(parsed)) => zone.format(&parsed, DETAIL_DATE_TIME_FORMAT),
            _ => text.clone(),
        },
        (FieldKind::Relation, Value::Object(related)) => {
            related.get(ID_FIELD).map(Value::to_string).unwrap_or_default()
        }
        (_, Value::String(text)) => text.clone(),
        (_, other) => other.to_string(),
    }
}
