//! Entity Layer - Core Traits
//!
//! Every REST resource is described by one `Entity` implementation on its
//! field struct. Identity lives outside the fields: `Persisted<T>` carries the
//! backend-assigned id, `Record<T>` tells drafts and persisted rows apart.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend-assigned primary key
pub type EntityId = i64;

/// Wire name of the identifier field
pub const ID_FIELD: &str = "id";

/// How a field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Boolean,
    Timestamp,
    /// Closed set of symbolic names
    Enumeration(&'static [&'static str]),
    /// Nested reference to another entity, carrying at least its id
    Relation,
}

/// One wire field of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }

    pub const fn required(self) -> Self {
        Self { required: true, ..self }
    }
}

/// Core trait for all REST entities
///
/// Implemented on the field struct (no id). Fields are expected to be
/// `Option`s serialized under their camelCase wire names.
pub trait Entity:
    Serialize + DeserializeOwned + Clone + Debug + Default + PartialEq + Send + Sync + 'static
{
    /// Display name, e.g. "Goal"
    const NAME: &'static str;

    /// Resource path segment under `api/`, e.g. "goals"
    const RESOURCE: &'static str;

    /// Field schema in display order
    const FIELDS: &'static [Field];

    /// Defaults merged under a form's initial values. Timestamp fields left
    /// empty here are defaulted to `now` by the form adapter.
    fn form_defaults(_now: DateTime<Utc>) -> Self {
        Self::default()
    }

    fn timestamp_fields() -> impl Iterator<Item = &'static str> {
        Self::FIELDS
            .iter()
            .filter(|field| field.kind == FieldKind::Timestamp)
            .map(|field| field.name)
    }

    fn field(name: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

/// Anything comparable by primary key
pub trait Identified {
    fn identifier(&self) -> EntityId;
}

impl<I: Identified + ?Sized> Identified for &I {
    fn identifier(&self) -> EntityId {
        (**self).identifier()
    }
}

/// An entity that has round-tripped through the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persisted<T> {
    pub id: EntityId,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Persisted<T> {
    pub fn new(id: EntityId, data: T) -> Self {
        Self { id, data }
    }

    /// Reference carrying only the identifier, as sent for relations
    pub fn reference(id: EntityId) -> Self
    where
        T: Default,
    {
        Self { id, data: T::default() }
    }
}

impl<T> Identified for Persisted<T> {
    fn identifier(&self) -> EntityId {
        self.id
    }
}

impl<T> Deref for Persisted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for Persisted<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

/// Either a draft awaiting its first save or a persisted entity
#[derive(Debug, Clone, PartialEq)]
pub enum Record<T> {
    Draft(T),
    Persisted(Persisted<T>),
}

impl<T> Record<T> {
    pub fn id(&self) -> Option<EntityId> {
        match self {
            Record::Draft(_) => None,
            Record::Persisted(entity) => Some(entity.id),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Record::Draft(_))
    }

    pub fn data(&self) -> &T {
        match self {
            Record::Draft(data) => data,
            Record::Persisted(entity) => &entity.data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Record::Draft(data) => data,
            Record::Persisted(entity) => entity.data,
        }
    }
}

impl<T> From<Persisted<T>> for Record<T> {
    fn from(entity: Persisted<T>) -> Self {
        Record::Persisted(entity)
    }
}

/// Wire shape shared by both record variants: `id` is `null` for drafts
#[derive(Serialize)]
pub(crate) struct WireRecord<'a, T> {
    pub id: Option<EntityId>,
    #[serde(flatten)]
    pub data: &'a T,
}

#[derive(Deserialize)]
struct OwnedWireRecord<T> {
    #[serde(default)]
    id: Option<EntityId>,
    #[serde(flatten)]
    data: T,
}

impl<T: Serialize> Serialize for Record<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireRecord { id: self.id(), data: self.data() }.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = OwnedWireRecord::<T>::deserialize(deserializer)?;
        Ok(match wire.id {
            Some(id) => Record::Persisted(Persisted::new(id, wire.data)),
            None => Record::Draft(wire.data),
        })
    }
}
