//! REST Transcoder
//!
//! `EntityService` maps the CRUD operations of one entity onto its
//! `api/<resource>` endpoints. Timestamps go through the entity's serde
//! adapters on the way out and back in, so callers only ever see
//! `DateTime<Utc>` values.

use std::marker::PhantomData;

use serde_json::Value;
use tracing::{debug, warn};

use crate::collection;
use crate::config::ApplicationConfig;
use crate::entity::{Entity, EntityId, Identified, Persisted, WireRecord, ID_FIELD};
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, ApiResponse, HttpClient, Method};
use crate::request::RequestOptions;

/// One page of a list query
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<Persisted<T>>,
    /// From the `X-Total-Count` header, when the backend sends it
    pub total_count: Option<u64>,
}

pub struct EntityService<T, C> {
    client: C,
    resource_url: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T, C: Clone> Clone for EntityService<T, C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource_url: self.resource_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity, C: HttpClient> EntityService<T, C> {
    pub fn new(client: C, config: &ApplicationConfig) -> Self {
        let resource_url = config.endpoint_for(&format!("api/{}", T::RESOURCE));
        Self { client, resource_url, _entity: PhantomData }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn item_url(&self, id: EntityId) -> String {
        format!("{}/{}", self.resource_url, id)
    }

    // ========================
    // CRUD
    // ========================

    /// POST a draft; the body carries `"id": null`
    pub async fn create(&self, entity: &T) -> ApiResult<Persisted<T>> {
        let body = serde_json::to_value(WireRecord { id: None, data: entity })?;
        let request = ApiRequest::new(Method::POST, self.resource_url.clone()).with_body(body);
        let response = self.send(request).await?;
        decode_entity(response)
    }

    /// PUT the full entity
    pub async fn update(&self, entity: &Persisted<T>) -> ApiResult<Persisted<T>> {
        let body = serde_json::to_value(entity)?;
        let request = ApiRequest::new(Method::PUT, self.item_url(entity.id)).with_body(body);
        let response = self.send(request).await?;
        decode_entity(response)
    }

    /// PATCH with the id and the fields that are present
    pub async fn partial_update(&self, entity: &Persisted<T>) -> ApiResult<Persisted<T>> {
        let mut body = serde_json::to_value(entity)?;
        if let Value::Object(fields) = &mut body {
            fields.retain(|name, value| name == ID_FIELD || !value.is_null());
        }
        let request = ApiRequest::new(Method::PATCH, self.item_url(entity.id)).with_body(body);
        let response = self.send(request).await?;
        decode_entity(response)
    }

    /// `Ok(None)` when the backend answers 2xx without a body
    pub async fn find(&self, id: EntityId) -> ApiResult<Option<Persisted<T>>> {
        let response = self.send(ApiRequest::new(Method::GET, self.item_url(id))).await?;
        match response.body {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    pub async fn query(&self, options: &RequestOptions) -> ApiResult<Vec<Persisted<T>>> {
        Ok(self.query_page(options).await?.items)
    }

    /// Like `query`, keeping the total row count for pagination
    pub async fn query_page(&self, options: &RequestOptions) -> ApiResult<Page<T>> {
        let request = ApiRequest::new(Method::GET, self.resource_url.clone())
            .with_query(options.params().to_vec());
        let response = self.send(request).await?;
        let items = match response.body {
            Some(body) => serde_json::from_value(body)?,
            None => Vec::new(),
        };
        Ok(Page { items, total_count: response.total_count })
    }

    /// `true` iff the backend answered 2xx. Transport failures are still errors.
    pub async fn delete(&self, id: EntityId) -> ApiResult<bool> {
        debug!(entity = T::NAME, id, "deleting");
        let request = ApiRequest::new(Method::DELETE, self.item_url(id));
        let response = self.client.execute(request).await?;
        if !response.is_success() {
            warn!(entity = T::NAME, id, status = response.status, "delete rejected");
        }
        Ok(response.is_success())
    }

    // ========================
    // Identity helpers
    // ========================

    pub fn get_identifier(entity: &Persisted<T>) -> EntityId {
        entity.identifier()
    }

    pub fn compare(a: Option<&Persisted<T>>, b: Option<&Persisted<T>>) -> bool {
        collection::compare(a, b)
    }

    pub fn add_to_collection_if_missing<I>(
        collection: Vec<Persisted<T>>,
        candidates: I,
    ) -> Vec<Persisted<T>>
    where
        I: IntoIterator<Item = Option<Persisted<T>>>,
    {
        collection::add_to_collection_if_missing(collection, candidates)
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        debug!(entity = T::NAME, method = %request.method, url = %request.url, "sending request");
        let response = self.client.execute(request).await?;
        if !response.is_success() {
            warn!(entity = T::NAME, status = response.status, "request failed");
            return Err(ApiError::from_response(&response));
        }
        Ok(response)
    }
}

fn decode_entity<T: Entity>(response: ApiResponse) -> ApiResult<Persisted<T>> {
    let body = response.body.ok_or(ApiError::EmptyBody)?;
    Ok(serde_json::from_value(body)?)
}

/// Options for a relation selector: every row of the related entity, with the
/// currently selected one merged in front when the query did not return it
pub async fn relationship_options<R, C>(
    service: &EntityService<R, C>,
    selected: Option<Persisted<R>>,
) -> ApiResult<Vec<Persisted<R>>>
where
    R: Entity,
    C: HttpClient,
{
    let options = service.query(&RequestOptions::new()).await?;
    Ok(collection::add_to_collection_if_missing(options, [selected]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, chore, household, Chore, Household};
    use crate::testing::MockHttpClient;
    use serde_json::json;

    fn service(client: &MockHttpClient) -> EntityService<Chore, MockHttpClient> {
        EntityService::new(client.clone(), &ApplicationConfig::default())
    }

    #[test]
    fn test_resource_url_uses_prefix() {
        let client = MockHttpClient::new();
        let service: EntityService<Household, _> =
            EntityService::new(client, &ApplicationConfig::new("http://localhost:8080"));
        assert_eq!(service.resource_url(), "http://localhost:8080/api/households");
    }

    #[tokio::test]
    async fn test_create_posts_null_id_and_decodes_timestamps() {
        let client = MockHttpClient::new();
        client.respond_json(json!({
            "id": 19407,
            "title": "Dishes",
            "points": 3,
            "urgent": false,
            "createdAt": "2025-07-11T04:40:00.000Z"
        }));
        let draft = Chore {
            title: Some("Dishes".into()),
            points: Some(3),
            urgent: Some(false),
            created_at: Some(at(4, 40)),
            ..Default::default()
        };

        let created = service(&client).create(&draft).await.unwrap();

        assert_eq!(created.id, 19407);
        assert_eq!(created.created_at, Some(at(4, 40)));
        let request = client.expect_one(Method::POST);
        assert_eq!(request.url, "api/chores");
        let body = request.body.unwrap();
        assert_eq!(body["id"], json!(null));
        assert_eq!(body["createdAt"], json!("2025-07-11T04:40:00.000Z"));
        assert_eq!(body["dueAt"], json!(null));
        client.verify();
    }

    #[tokio::test]
    async fn test_update_puts_full_entity() {
        let client = MockHttpClient::new();
        let existing = chore(4, "Laundry", 2);
        client.respond_json(serde_json::to_value(&existing).unwrap());

        let updated = service(&client).update(&existing).await.unwrap();

        assert_eq!(updated, existing);
        let request = client.expect_one(Method::PUT);
        assert_eq!(request.url, "api/chores/4");
        let body = request.body.unwrap();
        assert_eq!(body["id"], json!(4));
        assert!(body.as_object().unwrap().contains_key("dueAt"));
    }

    #[tokio::test]
    async fn test_partial_update_sends_only_present_fields() {
        let client = MockHttpClient::new();
        let mut patch = Persisted::<Chore>::reference(8);
        patch.points = Some(10);
        client.respond_json(serde_json::to_value(chore(8, "Garden", 10)).unwrap());

        let patched = service(&client).partial_update(&patch).await.unwrap();

        assert_eq!(patched.title.as_deref(), Some("Garden"));
        let request = client.expect_one(Method::PATCH);
        assert_eq!(request.url, "api/chores/8");
        assert_eq!(request.body, Some(json!({ "id": 8, "points": 10 })));
    }

    #[tokio::test]
    async fn test_write_without_body_is_an_error() {
        let client = MockHttpClient::new();
        client.respond_status(201);
        let err = service(&client).create(&Chore::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyBody));
    }

    #[tokio::test]
    async fn test_find_absent_body_is_none() {
        let client = MockHttpClient::new();
        client.respond_status(200);
        let found = service(&client).find(123).await.unwrap();
        assert!(found.is_none());
        assert_eq!(client.expect_one(Method::GET).url, "api/chores/123");
    }

    #[tokio::test]
    async fn test_find_not_found_is_status_error() {
        let client = MockHttpClient::new();
        client.respond_status(404);
        let err = service(&client).find(123).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_query_passes_options_and_decodes_list() {
        let client = MockHttpClient::new();
        client.respond(
            ApiResponse::ok(json!([
                {
                    "id": 1,
                    "title": "a",
                    "createdAt": "2025-07-11T04:40:00.000Z",
                    "household": { "id": 2 }
                },
                { "id": 2, "title": "b", "createdAt": null }
            ]))
            .with_total_count(42),
        );
        let options = RequestOptions::new().sort(["id,asc"]).filter("household.id", "equals", 2);

        let page = service(&client).query_page(&options).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count, Some(42));
        assert_eq!(page.items[0].created_at, Some(at(4, 40)));
        assert_eq!(page.items[0].household.as_ref().map(|h| h.id), Some(2));
        assert!(page.items[1].created_at.is_none());
        let request = client.expect_one(Method::GET);
        assert_eq!(request.query_param("sort"), Some("id,asc"));
        assert_eq!(request.query_param("household.id.equals"), Some("2"));
    }

    #[tokio::test]
    async fn test_query_absent_body_is_empty() {
        let client = MockHttpClient::new();
        client.respond_status(200);
        let items = service(&client).query(&RequestOptions::new()).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_success_flag() {
        let client = MockHttpClient::new();
        client.respond_status(200).respond_status(500);
        let service = service(&client);

        assert!(service.delete(123).await.unwrap());
        assert!(!service.delete(123).await.unwrap());
        assert_eq!(client.requests()[0].url, "api/chores/123");
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let client = MockHttpClient::new();
        client
            .respond(ApiResponse::with_body(
                400,
                json!({ "title": "Bad Request", "detail": "idexists" }),
            ))
            .fail("connection refused");
        let service = service(&client);

        let err = service.update(&chore(1, "a", 1)).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        let err = service.delete(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_relationship_options_keep_selected() {
        let client = MockHttpClient::new();
        client.respond_json(json!([{ "id": 1, "name": "Silva" }]));
        let households: EntityService<Household, _> =
            EntityService::new(client.clone(), &ApplicationConfig::default());

        let options = relationship_options(&households, Some(household(9, "Souza"))).await.unwrap();

        let ids: Vec<_> = options.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![9, 1]);
        assert_eq!(client.expect_one(Method::GET).url, "api/households");
    }

    #[test]
    fn test_identity_helpers() {
        let a = chore(1, "a", 1);
        type ChoreService = EntityService<Chore, MockHttpClient>;
        assert_eq!(ChoreService::get_identifier(&a), 1);
        assert!(ChoreService::compare(Some(&a), Some(&chore(1, "b", 2))));
        let merged = ChoreService::add_to_collection_if_missing(vec![a], [Some(chore(2, "b", 1))]);
        assert_eq!(merged.len(), 2);
    }
}
