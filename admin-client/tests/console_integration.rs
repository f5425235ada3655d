// admin-client/tests/console_integration.rs
// End-to-end flows against a mock platform API.

use admin_client::views::merch_empty_message;
use admin_client::{
    AdminClient, ClientConfig, ClientError, Destination, GuardState, ImageFile, Locale, Role,
    RouteGuard, SessionUser,
};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use shared::models::Teammate;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ============================================================================
// Mock API
// ============================================================================

#[derive(Default)]
struct MockState {
    /// Role the current-user endpoint answers with.
    role: Mutex<String>,
    current_user_calls: AtomicUsize,
    collections_calls: AtomicUsize,
    /// Part names seen by the partner create endpoint, in order.
    partner_parts: Mutex<Vec<String>>,
    /// (id, locale) seen by the teammate delete endpoint.
    teammate_delete: Mutex<Option<(String, String)>>,
}

impl MockState {
    fn with_role(role: &str) -> Arc<Self> {
        let state = Self::default();
        *state.role.lock().unwrap() = role.to_string();
        Arc::new(state)
    }
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains("inharmony_session="))
}

async fn login(Json(_body): Json<serde_json::Value>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            "inharmony_session=test-session; HttpOnly; Path=/",
        )],
        Json(json!({"success": true, "data": {"message": "Logged in"}})),
    )
}

async fn current_user(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.current_user_calls.fetch_add(1, Ordering::SeqCst);
    if !has_session(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let role = state.role.lock().unwrap().clone();
    Json(json!({
        "_id": "u1",
        "name": "Olena",
        "email": "olena@example.org",
        "role": role,
    }))
    .into_response()
}

async fn list_partners() -> Response {
    Json(json!([{
        "_id": "p0",
        "image": {"url": "", "path": "all/p0.webp"},
        "logo": "Existing Partner",
        "link": "https://example.org",
        "language": "ua",
    }]))
    .into_response()
}

async fn create_partner(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> Response {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        parts.push(field.name().unwrap_or_default().to_string());
        let _ = field.bytes().await;
    }
    *state.partner_parts.lock().unwrap() = parts;
    Json(json!({
        "_id": "p1",
        "image": {"url": "", "path": "all/p1.webp"},
        "logo": "Red Cross",
        "link": "https://redcross.org",
        "language": "ua",
    }))
    .into_response()
}

async fn list_teammates(Query(params): Query<HashMap<String, String>>) -> Response {
    // grouped wire shape: the client must flatten it
    let locale = params.get("locale").cloned().unwrap_or_else(|| "ua".into());
    Json(json!([{
        "locale": locale,
        "teammates": [{
            "_id": "t1",
            "name": "Ivan",
            "role": "Driver",
            "description": "Logistics",
            "image": {"path": "all/t1.webp"},
        }],
    }]))
    .into_response()
}

async fn delete_teammate(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    let locale = params.get("locale").cloned().unwrap_or_default();
    *state.teammate_delete.lock().unwrap() = Some((id, locale));
    StatusCode::NO_CONTENT
}

async fn list_collections(
    State(state): State<Arc<MockState>>,
    Path(locale): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.collections_calls.fetch_add(1, Ordering::SeqCst);
    let per_page: u64 = params
        .get("perPage")
        .and_then(|p| p.parse().ok())
        .unwrap_or(6);
    Json(json!({
        "status": 200,
        "data": {
            "activeCollections": [{
                "_id": "c1",
                "title": "Drones for the 93rd",
                "image": [{"url": "", "path": "all/c1.webp"}],
                "collected": 125000,
                "target": 500000,
                "desc": "FPV drones and spare parts",
                "long_desc": {"section1": "Why this matters"},
                "status": "active",
                "importance": "urgent",
                "language": locale,
            }],
            "closedCollections": [],
        },
        "pagination": {
            "totalItems": 1,
            "totalPages": 1,
            "currentPage": 1,
            "perPage": per_page,
        },
    }))
    .into_response()
}

async fn list_merch() -> Response {
    // only the UA locale has settings
    Json(json!([{
        "status": "on",
        "content": "Хутко, мерч!",
        "link": "https://store.example.org",
        "locale": "ua",
    }]))
    .into_response()
}

fn mock_app(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/users/current", get(current_user))
        .route("/partners", get(list_partners).post(create_partner))
        .route("/teammates", get(list_teammates))
        .route("/teammates/{id}", delete(delete_teammate))
        .route("/collections/{locale}", get(list_collections))
        .route("/merch", get(list_merch))
        .with_state(state)
}

async fn spawn_mock(state: Arc<MockState>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock_app(state)).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, dir: &TempDir) -> AdminClient {
    AdminClient::new(ClientConfig::new(format!("http://{addr}")).with_session_dir(dir.path()))
        .unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn login_primes_cookie_cache_and_mirror() {
    let state = MockState::with_role("editor");
    let addr = spawn_mock(state.clone()).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    let user = client.auth().login("olena@example.org", "pw").await.unwrap();
    assert_eq!(user.role, Role::Editor);

    // the mirror now holds the denormalized profile
    let mirrored = client.session().get_user().unwrap();
    assert_eq!(mirrored.email, "olena@example.org");
    assert_eq!(mirrored.role, Role::Editor);

    // subsequent reads ride the cookie the login set
    let again = client.auth().refresh_current_user().await.unwrap();
    assert_eq!(again.id, user.id);
}

#[tokio::test]
async fn guard_reuses_a_recent_current_user_read() {
    let state = MockState::with_role("admin");
    let addr = spawn_mock(state.clone()).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    client.auth().login("olena@example.org", "pw").await.unwrap();
    let after_login = state.current_user_calls.load(Ordering::SeqCst);

    // two guard resolutions inside the TTL window add no round trips
    for _ in 0..2 {
        let mut guard = RouteGuard::new();
        assert!(guard.resolve(&client).await.should_render());
    }
    assert_eq!(state.current_user_calls.load(Ordering::SeqCst), after_login);
}

#[tokio::test]
async fn editor_on_an_admin_page_lands_on_the_dashboard() {
    let state = MockState::with_role("editor");
    let addr = spawn_mock(state).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    client.auth().login("olena@example.org", "pw").await.unwrap();

    let mut guard = RouteGuard::require_role(Role::Admin);
    let resolved = guard.resolve(&client).await;
    assert!(matches!(resolved, GuardState::Forbidden(_)));
    assert_eq!(resolved.destination(), Some(Destination::Dashboard));
    assert!(!resolved.should_render());
}

#[tokio::test]
async fn unauthenticated_session_goes_to_login_with_a_cleared_mirror() {
    let state = MockState::with_role("editor");
    let addr = spawn_mock(state).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    // a stale mirror left over from an earlier session
    client
        .session()
        .set_user(&SessionUser {
            id: "u1".into(),
            name: "Olena".into(),
            email: "olena@example.org".into(),
            role: Role::Admin,
        })
        .unwrap();

    // no login, so no cookie: the current-user read answers 401
    let err = client.auth().refresh_current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert_eq!(client.session().get_user(), None);

    let mut guard = RouteGuard::new();
    assert_eq!(
        guard.resolve(&client).await.destination(),
        Some(Destination::Login)
    );
}

#[tokio::test]
async fn partner_create_is_multipart_and_sweeps_the_prefix() {
    let state = MockState::with_role("editor");
    let addr = spawn_mock(state.clone()).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    client.auth().login("olena@example.org", "pw").await.unwrap();

    // warm the list entry so the sweep has something to hit
    let listed = client.partners().list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!client.cache().is_stale("partners"));

    let draft = shared::models::PartnerCreate {
        logo: "Red Cross".into(),
        link: "https://redcross.org".into(),
        language: Locale::Ua,
    };
    let image = ImageFile::new("logo.webp", vec![0u8; 16]);
    let created = client.partners().create(&draft, image).await.unwrap();
    assert_eq!(created.logo, "Red Cross");

    // one part per defined field, image included
    let parts = state.partner_parts.lock().unwrap().clone();
    assert_eq!(parts, ["image", "logo", "link", "language"]);

    // every cached key under the partners prefix is now stale
    assert!(client.cache().is_stale("partners"));
}

#[tokio::test]
async fn teammate_delete_carries_locale_and_invalidates_both_entries() {
    let state = MockState::with_role("editor");
    let addr = spawn_mock(state.clone()).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    client.auth().login("olena@example.org", "pw").await.unwrap();

    // warm the EN list and a detail entry
    let listed = client.teammates().list(Locale::En).await.unwrap();
    assert_eq!(listed[0].name, "Ivan");
    assert_eq!(listed[0].locale, Locale::En);
    client.cache().overwrite("teammates-t1", listed[0].clone());

    client.teammates().delete("t1", Locale::En).await.unwrap();

    let seen = state.teammate_delete.lock().unwrap().clone();
    assert_eq!(seen, Some(("t1".to_string(), "en".to_string())));

    assert!(client.cache().is_stale("teammates-en"));
    assert!(client.cache().get_cached::<Teammate>("teammates-t1").is_none());
}

#[tokio::test]
async fn page_size_is_part_of_the_cache_key() {
    let state = MockState::with_role("editor");
    let addr = spawn_mock(state.clone()).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    client.auth().login("olena@example.org", "pw").await.unwrap();

    client.collections().list(Locale::Ua, 1, 6).await.unwrap();
    client.collections().list(Locale::Ua, 1, 6).await.unwrap();
    assert_eq!(state.collections_calls.load(Ordering::SeqCst), 1);

    // same locale and page, different page size: a distinct entry
    let wide = client.collections().list(Locale::Ua, 1, 12).await.unwrap();
    assert_eq!(state.collections_calls.load(Ordering::SeqCst), 2);
    assert_eq!(wide.pagination.per_page, 12);
}

#[tokio::test]
async fn oversized_title_is_rejected_before_any_network_call() {
    // nothing is listening here; a network attempt would fail differently
    let dir = TempDir::new().unwrap();
    let client = AdminClient::new(
        ClientConfig::new("http://127.0.0.1:9").with_session_dir(dir.path()),
    )
    .unwrap();

    let draft = shared::models::CollectionCreate {
        title: "t".repeat(49),
        collected: rust_decimal::Decimal::ZERO,
        target: rust_decimal::Decimal::new(1000, 0),
        alt: "alt".into(),
        people_donate: 0,
        people_donate_title: "donors".into(),
        desc: "desc".into(),
        days: None,
        period: "days".into(),
        quantity: None,
        status: None,
        value: "value".into(),
        importance: shared::models::Importance::Urgent,
        long_desc: vec!["section".into()],
    };
    let image = ImageFile::new("hero.webp", vec![0u8; 8]);

    let err = client
        .collections()
        .create(Locale::Ua, &draft, image)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_merch_locale_is_an_empty_state_not_an_error() {
    let state = MockState::with_role("editor");
    let addr = spawn_mock(state).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    client.auth().login("olena@example.org", "pw").await.unwrap();

    let merch = client.merch().get(Locale::En).await.unwrap();
    assert_eq!(merch, None);
    assert_eq!(
        merch_empty_message(Locale::En, Locale::En),
        "No merch settings found for EN"
    );

    // the UA locale does resolve from the same bulk read
    let ua = client.merch().get(Locale::Ua).await.unwrap().unwrap();
    assert_eq!(ua.locale, Locale::Ua);
}
