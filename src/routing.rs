//! Hash Routing
//!
//! The page location lives in `window.location.hash`, e.g.
//! `#/goal/12/edit` or `#/wallet?sort=balance,desc`.

use entity_sync::views::{EntityRoute, NOT_FOUND_PATH};
use entity_sync::sort::SORT_PARAM;

use crate::admin::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Entity {
        kind: EntityKind,
        route: EntityRoute,
        /// Raw `sort` query parameter of list routes
        sort: Option<String>,
    },
    NotFound,
}

impl AppRoute {
    pub fn parse(location: &str) -> Self {
        let location = location.trim_start_matches('#');
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let path = path.trim_matches('/');
        if path.is_empty() {
            return AppRoute::Home;
        }

        let (segment, rest) = path.split_once('/').unwrap_or((path, ""));
        let Some(kind) = EntityKind::from_route(segment) else {
            return AppRoute::NotFound;
        };
        let Some(route) = EntityRoute::parse(rest) else {
            return AppRoute::NotFound;
        };
        let sort = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == SORT_PARAM)
            .map(|(_, value)| value.to_string());
        AppRoute::Entity { kind, route, sort }
    }

    pub fn href(&self) -> String {
        match self {
            AppRoute::Home => "#/".to_string(),
            AppRoute::NotFound => format!("#/{}", NOT_FOUND_PATH),
            AppRoute::Entity { kind, route, sort } => {
                let path = route.href(kind.route());
                match sort {
                    Some(sort) => format!("#{}?{}={}", path, SORT_PARAM, sort),
                    None => format!("#{}", path),
                }
            }
        }
    }
}

/// Href of a child route of `kind`
pub fn entity_href(kind: EntityKind, route: EntityRoute) -> String {
    AppRoute::Entity { kind, route, sort: None }.href()
}

/// Href of the list of `kind` with a query string built by the list view
pub fn list_href(kind: EntityKind, query: &str) -> String {
    if query.is_empty() {
        entity_href(kind, EntityRoute::List)
    } else {
        format!("#/{}?{}", kind.route(), query)
    }
}

pub fn current_location() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Changes the hash; the `hashchange` listener picks the new route up
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(href.trim_start_matches('#')) {
            web_sys::console::error_1(&e);
        }
    }
}

/// Browser history back, as after a successful save
pub fn navigate_back() {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        if let Err(e) = history.back() {
            web_sys::console::error_1(&e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_routes() {
        assert_eq!(AppRoute::parse(""), AppRoute::Home);
        assert_eq!(AppRoute::parse("#/"), AppRoute::Home);
        assert_eq!(
            AppRoute::parse("#/goal/12/view"),
            AppRoute::Entity { kind: EntityKind::Goal, route: EntityRoute::View(12), sort: None }
        );
        assert_eq!(
            AppRoute::parse("#/app-user/new"),
            AppRoute::Entity { kind: EntityKind::AppUser, route: EntityRoute::New, sort: None }
        );
        assert_eq!(
            AppRoute::parse("#/wallet?sort=balance,desc"),
            AppRoute::Entity {
                kind: EntityKind::Wallet,
                route: EntityRoute::List,
                sort: Some("balance,desc".into()),
            }
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(AppRoute::parse("#/404"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("#/wallet-share"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("#/goal/abc/edit"), AppRoute::NotFound);
    }

    #[test]
    fn test_href_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::NotFound,
            AppRoute::Entity {
                kind: EntityKind::DailyMission,
                route: EntityRoute::Edit(3),
                sort: None,
            },
            AppRoute::Entity {
                kind: EntityKind::Family,
                route: EntityRoute::List,
                sort: Some("name,asc".into()),
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.href()), route);
        }
        assert_eq!(list_href(EntityKind::Goal, "sort=id,desc"), "#/goal?sort=id,desc");
        assert_eq!(list_href(EntityKind::Goal, ""), "#/goal");
    }
}
