//! Form Adapter
//!
//! Converts between a `Record<T>` and the editable controls of an entity
//! form. Controls hold JSON values in their form representation: timestamps
//! are `datetime-local` text, relations are `{ "id": .. }` references.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use crate::entity::{Entity, EntityId, FieldKind, Persisted, Record, ID_FIELD};
use crate::error::FormError;
use crate::timestamp::{self, DisplayZone};

/// One input of an entity form
#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub disabled: bool,
    pub value: Value,
}

impl FormControl {
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::String(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Text shown in the input element
    pub fn text(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            Value::Object(fields) => fields.get(ID_FIELD).map(Value::to_string).unwrap_or_default(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityForm<T> {
    controls: Vec<FormControl>,
    zone: DisplayZone,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> EntityForm<T> {
    /// Builds the controls for `initial`, or for a blank draft.
    ///
    /// Drafts get `T::form_defaults(now)` under their empty fields and every
    /// still-empty timestamp set to `now`. Persisted records are shown as they
    /// are. The `id` control is always present and read-only. Timestamp
    /// controls hold local wall-clock text.
    pub fn create(initial: Option<&Record<T>>, now: DateTime<Utc>) -> Self {
        Self::create_in(initial, now, DisplayZone::Local)
    }

    /// `create` with timestamp text in `zone`
    pub fn create_in(initial: Option<&Record<T>>, now: DateTime<Utc>, zone: DisplayZone) -> Self {
        let id = initial.and_then(Record::id);
        let is_draft = id.is_none();
        let values = object_of(initial.map(Record::data));
        let defaults = if is_draft { object_of(Some(&T::form_defaults(now))) } else { Map::new() };

        let mut controls = Vec::with_capacity(T::FIELDS.len() + 1);
        controls.push(FormControl {
            name: ID_FIELD,
            kind: FieldKind::Integer,
            required: false,
            disabled: true,
            value: id.map(Value::from).unwrap_or(Value::Null),
        });

        for field in T::FIELDS {
            let mut value = present(values.get(field.name))
                .or_else(|| present(defaults.get(field.name)))
                .cloned()
                .unwrap_or(Value::Null);
            if field.kind == FieldKind::Timestamp {
                value = match value {
                    Value::Null if is_draft => Value::String(zone.to_form(&now)),
                    other => wire_to_form(other, zone),
                };
            }
            controls.push(FormControl {
                name: field.name,
                kind: field.kind,
                required: field.required,
                disabled: false,
                value,
            });
        }

        Self { controls, zone, _entity: PhantomData }
    }

    /// Re-applies `create` to a new record
    pub fn reset(&mut self, record: Option<&Record<T>>, now: DateTime<Utc>) {
        *self = Self::create_in(record, now, self.zone);
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn controls(&self) -> &[FormControl] {
        &self.controls
    }

    pub fn control(&self, name: &str) -> Option<&FormControl> {
        self.controls.iter().find(|control| control.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.control(name).map(|control| &control.value)
    }

    pub fn text(&self, name: &str) -> String {
        self.control(name).map(FormControl::text).unwrap_or_default()
    }

    pub fn id(&self) -> Option<EntityId> {
        self.value(ID_FIELD).and_then(Value::as_i64)
    }

    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// User edit with a value already in form representation
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        let control = self
            .controls
            .iter_mut()
            .find(|control| control.name == name)
            .ok_or_else(|| FormError::UnknownControl(name.to_string()))?;
        if control.disabled {
            return Err(FormError::Disabled(name.to_string()));
        }
        control.value = value;
        Ok(())
    }

    /// User edit from raw input text, converted by the control's kind
    pub fn set_text(&mut self, name: &str, text: &str) -> Result<(), FormError> {
        let kind = self
            .control(name)
            .map(|control| control.kind)
            .ok_or_else(|| FormError::UnknownControl(name.to_string()))?;
        let value = parse_text(name, kind, text, self.zone)?;
        self.set_value(name, value)
    }

    /// Selects a related entity, or clears the relation
    pub fn set_relation<R: Entity>(
        &mut self,
        name: &str,
        related: Option<&Persisted<R>>,
    ) -> Result<(), FormError> {
        let value = match related {
            Some(related) => {
                serde_json::to_value(related).map_err(|e| FormError::Shape(e.to_string()))?
            }
            None => Value::Null,
        };
        self.set_value(name, value)
    }

    /// Fails with every enabled required control that is still empty
    pub fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<String> = self
            .controls
            .iter()
            .filter(|control| control.required && !control.disabled && control.is_empty())
            .map(|control| control.name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::Required(missing))
        }
    }

    /// Reads every control, the read-only id included
    pub fn extract(&self) -> Result<Record<T>, FormError> {
        let mut fields = Map::new();
        for control in self.controls.iter().filter(|control| control.name != ID_FIELD) {
            let value = match (&control.kind, &control.value) {
                (FieldKind::Timestamp, Value::String(text)) => match self.zone.from_form(text)? {
                    Some(parsed) => Value::String(timestamp::to_wire(&parsed)),
                    None => Value::Null,
                },
                (_, value) => value.clone(),
            };
            fields.insert(control.name.to_string(), value);
        }

        let data: T = serde_json::from_value(Value::Object(fields))
            .map_err(|e| FormError::Shape(e.to_string()))?;
        Ok(match self.id() {
            Some(id) => Record::Persisted(Persisted::new(id, data)),
            None => Record::Draft(data),
        })
    }
}

fn object_of<T: Entity>(data: Option<&T>) -> Map<String, Value> {
    match data.map(serde_json::to_value) {
        Some(Ok(Value::Object(fields))) => fields,
        _ => Map::new(),
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

fn wire_to_form(value: Value, zone: DisplayZone) -> Value {
    match &value {
        Value::String(text) => match timestamp::decode(Some(text)) {
            Ok(Some(parsed)) => Value::String(zone.to_form(&parsed)),
            _ => value,
        },
        _ => value,
    }
}

fn parse_text(
    name: &str,
    kind: FieldKind,
    text: &str,
    zone: DisplayZone,
) -> Result<Value, FormError> {
    let raw = text.trim();
    let invalid = || FormError::InvalidValue { field: name.to_string(), value: raw.to_string() };
    if raw.is_empty() {
        return Ok(match kind {
            FieldKind::Boolean => Value::Bool(false),
            _ => Value::Null,
        });
    }
    match kind {
        FieldKind::Text => Ok(Value::String(text.to_string())),
        FieldKind::Integer => raw.parse::<i64>().map(Value::from).map_err(|_| invalid()),
        FieldKind::Decimal => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(invalid),
        FieldKind::Boolean => match raw {
            "true" | "on" => Ok(Value::Bool(true)),
            "false" | "off" => Ok(Value::Bool(false)),
            _ => Err(invalid()),
        },
        FieldKind::Timestamp => {
            zone.from_form(raw)?;
            Ok(Value::String(raw.to_string()))
        }
        FieldKind::Enumeration(values) => values
            .iter()
            .find(|candidate| **candidate == raw)
            .map(|symbol| Value::String(symbol.to_string()))
            .ok_or_else(invalid),
        FieldKind::Relation => raw
            .parse::<EntityId>()
            .map(|id| serde_json::json!({ ID_FIELD: id }))
            .map_err(|_| invalid()),
    }
}
