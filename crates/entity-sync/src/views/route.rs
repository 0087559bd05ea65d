//! Route Conventions
//!
//! Every entity is mounted under its resource path with four child routes:
//! `""` list, `":id/view"`, `"new"`, `":id/edit"`.

use std::fmt;

use crate::entity::{Entity, EntityId, Persisted};
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::service::EntityService;

/// Path of the not-found page
pub const NOT_FOUND_PATH: &str = "404";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRoute {
    List,
    View(EntityId),
    New,
    Edit(EntityId),
}

impl EntityRoute {
    /// Parses the part of the path below the resource segment
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(EntityRoute::List),
            ["new"] => Some(EntityRoute::New),
            [id, "view"] => id.parse().ok().map(EntityRoute::View),
            [id, "edit"] => id.parse().ok().map(EntityRoute::Edit),
            _ => None,
        }
    }

    /// Child path, without the resource segment
    pub fn path(&self) -> String {
        match self {
            EntityRoute::List => String::new(),
            EntityRoute::View(id) => format!("{}/view", id),
            EntityRoute::New => "new".to_string(),
            EntityRoute::Edit(id) => format!("{}/edit", id),
        }
    }

    /// Absolute path under `resource`
    pub fn href(&self, resource: &str) -> String {
        match self {
            EntityRoute::List => format!("/{}", resource),
            other => format!("/{}/{}", resource, other.path()),
        }
    }

    /// Id the route resolver has to fetch, if any
    pub fn id(&self) -> Option<EntityId> {
        match self {
            EntityRoute::View(id) | EntityRoute::Edit(id) => Some(*id),
            EntityRoute::List | EntityRoute::New => None,
        }
    }
}

impl fmt::Display for EntityRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    New,
    Found(Persisted<T>),
    /// Caller routes to `NOT_FOUND_PATH`
    NotFound,
}

/// Resolves the entity of a view or edit route before the view is built
pub async fn resolve<T, C>(
    service: &EntityService<T, C>,
    id: Option<EntityId>,
) -> ApiResult<Resolved<T>>
where
    T: Entity,
    C: HttpClient,
{
    let Some(id) = id else {
        return Ok(Resolved::New);
    };
    match service.find(id).await {
        Ok(Some(entity)) => Ok(Resolved::Found(entity)),
        Ok(None) => Ok(Resolved::NotFound),
        Err(e) if e.is_not_found() => Ok(Resolved::NotFound),
        Err(e) => Err(e),
    }
}
