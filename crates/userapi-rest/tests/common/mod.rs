//! Shared helpers for router tests.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::util::ServiceExt;
use userapi_core::{RequestContext, UserApiError, UserApiResult, UserId};
use userapi_repository::{UserRecord, UserRepository};
use userapi_rest::{create_router, AppState};
use userapi_service::UserServiceImpl;

/// In-memory `users` table honoring the request deadline.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<i32, UserRecord>>,
    next_id: Mutex<i32>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self, ctx: &RequestContext) -> UserApiResult<Vec<UserRecord>> {
        ctx.run(async { Ok(self.users.lock().unwrap().values().cloned().collect()) })
            .await
    }

    async fn get_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<UserRecord> {
        ctx.run(async {
            self.users
                .lock()
                .unwrap()
                .get(&id.into_inner())
                .cloned()
                .ok_or_else(|| UserApiError::not_found("record", id))
        })
        .await
    }

    async fn create_user(
        &self,
        ctx: &RequestContext,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<()> {
        ctx.run(async {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            self.users
                .lock()
                .unwrap()
                .insert(*next_id, UserRecord::new(*next_id, name, dob));
            Ok(())
        })
        .await
    }

    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: UserId,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<u64> {
        ctx.run(async {
            match self.users.lock().unwrap().get_mut(&id.into_inner()) {
                Some(record) => {
                    record.name = name.to_string();
                    record.dob = dob;
                    Ok(1)
                }
                None => Ok(0),
            }
        })
        .await
    }

    async fn delete_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<()> {
        ctx.run(async {
            self.users.lock().unwrap().remove(&id.into_inner());
            Ok(())
        })
        .await
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn list_users(&self, _ctx: &RequestContext) -> UserApiResult<Vec<UserRecord>> {
        Err(UserApiError::database("connection refused"))
    }

    async fn get_user(&self, _ctx: &RequestContext, _id: UserId) -> UserApiResult<UserRecord> {
        Err(UserApiError::database("connection refused"))
    }

    async fn create_user(
        &self,
        _ctx: &RequestContext,
        _name: &str,
        _dob: NaiveDate,
    ) -> UserApiResult<()> {
        Err(UserApiError::database("connection refused"))
    }

    async fn update_user(
        &self,
        _ctx: &RequestContext,
        _id: UserId,
        _name: &str,
        _dob: NaiveDate,
    ) -> UserApiResult<u64> {
        Err(UserApiError::database("connection refused"))
    }

    async fn delete_user(&self, _ctx: &RequestContext, _id: UserId) -> UserApiResult<()> {
        Err(UserApiError::database("connection refused"))
    }
}

/// Repository that panics on list and stalls on get and delete.
pub struct MisbehavingUserRepository;

#[async_trait]
impl UserRepository for MisbehavingUserRepository {
    async fn list_users(&self, _ctx: &RequestContext) -> UserApiResult<Vec<UserRecord>> {
        panic!("repository exploded");
    }

    async fn get_user(&self, ctx: &RequestContext, _id: UserId) -> UserApiResult<UserRecord> {
        ctx.run(async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Err(UserApiError::internal("unreachable"))
        })
        .await
    }

    async fn create_user(
        &self,
        _ctx: &RequestContext,
        _name: &str,
        _dob: NaiveDate,
    ) -> UserApiResult<()> {
        Ok(())
    }

    async fn update_user(
        &self,
        _ctx: &RequestContext,
        _id: UserId,
        _name: &str,
        _dob: NaiveDate,
    ) -> UserApiResult<u64> {
        Ok(0)
    }

    async fn delete_user(&self, ctx: &RequestContext, _id: UserId) -> UserApiResult<()> {
        ctx.run(async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await
    }
}

/// Builds the router over `repo` with the real service.
pub fn app_with<R: UserRepository + 'static>(repo: Arc<R>) -> Router {
    app_with_timeout(repo, Duration::from_secs(30))
}

/// Builds the router with a custom per-request deadline.
pub fn app_with_timeout<R: UserRepository + 'static>(repo: Arc<R>, timeout: Duration) -> Router {
    let state = AppState::new(Arc::new(UserServiceImpl::new(repo))).with_request_timeout(timeout);
    create_router(state)
}

/// Response parts with the body decoded as JSON (`Value::Null` if empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Sends one request through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    send_with_headers(app, method, uri, body, &[]).await
}

/// Sends one request with extra headers.
pub async fn send_with_headers(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

/// Sends a prebuilt request.
pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
