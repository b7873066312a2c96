//! End-to-end tests against the full router with fake Google collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, NaiveDate};
use r2d2_sqlite::SqliteConnectionManager;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use rfv_google::{
    CalendarEvent, CalendarReader, DocumentPublisher, EventStart, GoogleError, PublishedDocument,
    document_url,
};
use rfv_server::{AppState, Service, build_router};
use rfv_settings::CalendarSettings;
use rfv_store::Store;

// ── Fakes ───────────────────────────────────────────────────────────

#[derive(Default)]
struct FakePublisher {
    fail: bool,
    calls: AtomicUsize,
    summaries: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl DocumentPublisher for FakePublisher {
    async fn publish(
        &self,
        _title: &str,
        summary: Option<&str>,
    ) -> rfv_google::Result<PublishedDocument> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.summaries
            .lock()
            .unwrap()
            .push(summary.map(str::to_string));
        if self.fail {
            return Err(GoogleError::Api {
                status: 403,
                message: "create document: quota exceeded".into(),
            });
        }
        let doc_id = format!("doc-{n}");
        Ok(PublishedDocument {
            doc_url: document_url(&doc_id),
            doc_id,
        })
    }
}

#[derive(Clone)]
enum Upcoming {
    Event(CalendarEvent),
    Nothing,
    Fail,
}

struct FakeCalendar {
    upcoming: Upcoming,
    queried: Mutex<Vec<String>>,
}

impl FakeCalendar {
    fn new(upcoming: Upcoming) -> Self {
        Self {
            upcoming,
            queried: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CalendarReader for FakeCalendar {
    async fn next_event(&self, calendar_id: &str) -> rfv_google::Result<Option<CalendarEvent>> {
        self.queried.lock().unwrap().push(calendar_id.to_string());
        match &self.upcoming {
            Upcoming::Event(event) => Ok(Some(event.clone())),
            Upcoming::Nothing => Ok(None),
            Upcoming::Fail => Err(GoogleError::Api {
                status: 403,
                message: "list events: The caller does not have permission".into(),
            }),
        }
    }
}

// ── Harness ─────────────────────────────────────────────────────────

struct TestApp {
    router: Router,
    store: Store,
    publisher: Arc<FakePublisher>,
    calendar: Arc<FakeCalendar>,
    dir: TempDir,
}

struct Options {
    fail_publish: bool,
    upcoming: Upcoming,
    calendar_id: Option<String>,
    services: Vec<Service>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fail_publish: false,
            upcoming: Upcoming::Nothing,
            calendar_id: Some("fallback-calendar".into()),
            services: Service::ALL.to_vec(),
        }
    }
}

fn boot(opts: Options) -> TestApp {
    let dir = TempDir::new().unwrap();
    let store = Store::open_in_memory().unwrap();
    let publisher = Arc::new(FakePublisher {
        fail: opts.fail_publish,
        ..FakePublisher::default()
    });
    let calendar = Arc::new(FakeCalendar::new(opts.upcoming));
    let calendar_settings = CalendarSettings {
        calendar_id: opts.calendar_id,
        campaign_file: dir.path().join("campaign.yml").to_string_lossy().into_owned(),
    };
    let state = AppState {
        store: store.clone(),
        publisher: publisher.clone(),
        calendar: calendar.clone(),
        calendar_settings: Arc::new(calendar_settings),
    };
    TestApp {
        router: build_router(state, &opts.services),
        store,
        publisher,
        calendar,
        dir,
    }
}

impl TestApp {
    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let resp = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1_000_000)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn post_raw(&self, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let resp = self
            .router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1_000_000)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    async fn create_session(&self, body: Value) -> String {
        let (status, session) = self.post("/api/sessions", body).await;
        assert_eq!(status, StatusCode::OK, "{session}");
        session["id"].as_str().unwrap().to_string()
    }
}

// ── Health ──────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_reachable_database() {
    let app = boot(Options::default());
    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": "reachable" }));
}

#[tokio::test]
async fn health_is_routed_for_every_service_subset() {
    for service in Service::ALL {
        let app = boot(Options {
            services: vec![service],
            ..Options::default()
        });
        let (status, _) = app.get("/api/health").await;
        assert_eq!(status, StatusCode::OK, "{service}");
    }
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let dir = TempDir::new().unwrap();
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .min_idle(Some(0))
        .connection_timeout(Duration::from_millis(200))
        .build_unchecked(SqliteConnectionManager::file(
            dir.path().join("missing").join("nested").join("rfv.db"),
        ));
    let state = AppState {
        store: Store::new(pool),
        publisher: Arc::new(FakePublisher::default()),
        calendar: Arc::new(FakeCalendar::new(Upcoming::Nothing)),
        calendar_settings: Arc::new(CalendarSettings::default()),
    };
    let router = build_router(state, &Service::ALL);

    let resp = router
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "detail": "database unreachable" }));
}

// ── Sessions ────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_fetch_session() {
    let app = boot(Options::default());
    let (status, created) = app
        .post(
            "/api/sessions",
            json!({ "title": "Session 1", "scheduled_at": "2025-11-28T19:00:00-05:00", "notes": "bring dice" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].as_str().unwrap().starts_with("sess_"));
    assert_eq!(created["title"], "Session 1");
    assert_eq!(created["scheduled_at"], "2025-11-29T00:00:00.000000Z");
    assert_eq!(created["notes"], "bring dice");
    assert!(created["created_at"].is_string());

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = app.get(&format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_session_is_404_with_detail() {
    let app = boot(Options::default());
    let (status, body) = app.get("/api/sessions/sess_missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Session not found" }));
}

#[tokio::test]
async fn invalid_scheduled_at_is_422() {
    let app = boot(Options::default());
    let (status, body) = app
        .post("/api/sessions", json!({ "title": "x", "scheduled_at": "next friday" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("scheduled_at"));
    assert!(app.store.list_sessions().unwrap().is_empty());
}

#[tokio::test]
async fn session_list_puts_unscheduled_last() {
    let app = boot(Options::default());
    let early = app
        .create_session(json!({ "title": "early", "scheduled_at": "2025-01-01" }))
        .await;
    let unscheduled = app.create_session(json!({ "title": "someday" })).await;
    let late = app
        .create_session(json!({ "title": "late", "scheduled_at": "2025-06-01T18:00:00Z" }))
        .await;

    let (status, list) = app.get("/api/sessions").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![late.as_str(), early.as_str(), unscheduled.as_str()]);
}

#[tokio::test]
async fn malformed_session_body_is_rejected() {
    let app = boot(Options::default());
    let (status, _) = app.post("/api/sessions", json!({ "notes": "no title" })).await;
    assert!(status.is_client_error());
    assert!(app.store.list_sessions().unwrap().is_empty());
}

#[tokio::test]
async fn undecodable_bodies_use_detail_shape() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;
    let attributes = format!("/api/sessions/{session}/attributes");

    let cases = [
        ("/api/sessions", Some("application/json"), "{not json", StatusCode::BAD_REQUEST),
        (attributes.as_str(), Some("application/json"), r#"{"key": 5, "value": 1}"#, StatusCode::UNPROCESSABLE_ENTITY),
        ("/api/recordings", None, r#"{"session_id": "x", "title": "t"}"#, StatusCode::UNSUPPORTED_MEDIA_TYPE),
    ];
    for (uri, content_type, body, expected) in cases {
        let (status, json) = app.post_raw(uri, content_type, body).await;
        assert_eq!(status, expected, "{uri}: {json}");
        assert!(json["detail"].is_string(), "{uri}: {json}");
    }
    assert_eq!(app.publisher.calls.load(Ordering::SeqCst), 0);
    assert!(app.store.list_attributes(&session).unwrap().is_empty());
}

// ── Attributes ──────────────────────────────────────────────────────

#[tokio::test]
async fn attribute_upsert_replaces_in_place() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;
    let uri = format!("/api/sessions/{session}/attributes");

    let (status, first) = app.post(&uri, json!({ "key": "hp", "value": 42 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["session_id"], session.as_str());
    assert_eq!(first["key"], "hp");
    assert_eq!(first["value"], 42);
    assert_eq!(first["value_type"], "number");

    let (status, second) = app.post(&uri, json!({ "key": "hp", "value": 40 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["value"], 40);
    assert_eq!(second["value_type"], "number");
    assert!(second["updated_at"].as_str().unwrap() >= first["updated_at"].as_str().unwrap());

    let (_, list) = app.get(&uri).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn attribute_kind_follows_new_value() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;
    let uri = format!("/api/sessions/{session}/attributes");

    let (_, first) = app.post(&uri, json!({ "key": "mood", "value": "grim" })).await;
    assert_eq!(first["value_type"], "string");
    let (_, second) = app.post(&uri, json!({ "key": "mood", "value": null })).await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["value"], Value::Null);
    assert_eq!(second["value_type"], "null");
}

#[tokio::test]
async fn attributes_are_listed_by_key() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;
    let uri = format!("/api/sessions/{session}/attributes");

    let _ = app
        .post(&uri, json!({ "key": "tags", "value": ["a", "b"] }))
        .await;
    let _ = app.post(&uri, json!({ "key": "alive", "value": true })).await;
    let _ = app
        .post(&uri, json!({ "key": "loot", "value": { "gold": 12 } }))
        .await;

    let (status, list) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().unwrap();
    let keys: Vec<&str> = rows.iter().map(|a| a["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["alive", "loot", "tags"]);
    let kinds: Vec<&str> = rows
        .iter()
        .map(|a| a["value_type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["bool", "json", "json"]);
    assert_eq!(rows[2]["value"], json!(["a", "b"]));
}

#[tokio::test]
async fn session_without_attributes_lists_empty() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;
    let (status, list) = app
        .get(&format!("/api/sessions/{session}/attributes"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn attributes_of_unknown_session_are_404() {
    let app = boot(Options::default());
    let uri = "/api/sessions/sess_missing/attributes";

    let (status, body) = app.get(uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Session not found");

    let (status, _) = app.post(uri, json!({ "key": "hp", "value": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let count: i64 = app
        .store
        .read(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM session_attributes", [], |row| {
                row.get(0)
            })?)
        })
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn empty_attribute_key_is_422() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;
    let uri = format!("/api/sessions/{session}/attributes");

    for key in ["", "   "] {
        let (status, body) = app.post(&uri, json!({ "key": key, "value": 1 })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "key must not be empty");
    }
    assert!(app.store.list_attributes(&session).unwrap().is_empty());
}

#[tokio::test]
async fn attribute_without_value_stores_null() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;
    let (status, attr) = app
        .post(
            &format!("/api/sessions/{session}/attributes"),
            json!({ "key": "hp" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{attr}");
    assert_eq!(attr["key"], "hp");
    assert_eq!(attr["value"], Value::Null);
    assert_eq!(attr["value_type"], "null");
    assert_eq!(app.store.list_attributes(&session).unwrap().len(), 1);
}

// ── Recordings ──────────────────────────────────────────────────────

#[tokio::test]
async fn recording_is_published_then_stored() {
    let app = boot(Options::default());
    let session = app.create_session(json!({ "title": "s" })).await;

    let (status, rec) = app
        .post(
            "/api/recordings",
            json!({ "session_id": session, "title": "Session 1 recap", "summary": "The party met a dragon." }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{rec}");
    assert!(rec["id"].as_str().unwrap().starts_with("rec_"));
    assert_eq!(rec["session_id"], session.as_str());
    assert_eq!(rec["title"], "Session 1 recap");
    assert_eq!(rec["summary"], "The party met a dragon.");
    assert_eq!(rec["doc_id"], "doc-0");
    assert_eq!(rec["doc_url"], "https://docs.google.com/document/d/doc-0/edit");
    assert!(rec["created_at"].is_string());
    assert!(rec["updated_at"].is_string());

    assert_eq!(app.publisher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        *app.publisher.summaries.lock().unwrap(),
        vec![Some("The party met a dragon.".to_string())]
    );
}

#[tokio::test]
async fn recording_lists() {
    let app = boot(Options::default());
    let s1 = app.create_session(json!({ "title": "one" })).await;
    let s2 = app.create_session(json!({ "title": "two" })).await;

    for (session, title) in [(&s1, "a"), (&s2, "b"), (&s1, "c")] {
        let (status, _) = app
            .post(
                "/api/recordings",
                json!({ "session_id": session, "title": title }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, all) = app.get("/api/recordings").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["c", "b", "a"]);

    let (status, mine) = app.get(&format!("/api/recordings/session/{s1}")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = mine
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["c", "a"]);

    let (status, none) = app.get("/api/recordings/session/sess_missing").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn recording_for_unknown_session_never_publishes() {
    let app = boot(Options::default());
    let (status, body) = app
        .post(
            "/api/recordings",
            json!({ "session_id": "sess_missing", "title": "t" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Session not found");
    assert_eq!(app.publisher.calls.load(Ordering::SeqCst), 0);
    assert!(app.store.list_recordings().unwrap().is_empty());
}

#[tokio::test]
async fn publish_failure_is_502_and_stores_nothing() {
    let app = boot(Options {
        fail_publish: true,
        ..Options::default()
    });
    let session = app.create_session(json!({ "title": "s" })).await;

    let (status, body) = app
        .post(
            "/api/recordings",
            json!({ "session_id": session, "title": "t", "summary": "x" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Failed to create document"), "{detail}");
    assert!(detail.contains("quota exceeded"), "{detail}");
    assert_eq!(app.publisher.calls.load(Ordering::SeqCst), 1);
    assert!(app.store.list_recordings().unwrap().is_empty());
}

// ── Calendar ────────────────────────────────────────────────────────

fn timed_event() -> CalendarEvent {
    CalendarEvent {
        title: "Session 13: The Lich".into(),
        start: EventStart::DateTime(
            DateTime::parse_from_rfc3339("2025-11-28T19:00:00-05:00").unwrap(),
        ),
        link: Some("https://calendar.google.com/event?eid=abc".into()),
    }
}

#[tokio::test]
async fn next_session_formats_event() {
    let app = boot(Options {
        upcoming: Upcoming::Event(timed_event()),
        ..Options::default()
    });
    let (status, body) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "title": "Session 13: The Lich",
            "date": "Nov 28, 2025",
            "link": "https://calendar.google.com/event?eid=abc"
        })
    );
    assert_eq!(*app.calendar.queried.lock().unwrap(), vec!["fallback-calendar"]);
}

#[tokio::test]
async fn next_session_all_day_event() {
    let app = boot(Options {
        upcoming: Upcoming::Event(CalendarEvent {
            title: "Next Session".into(),
            start: EventStart::Date(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()),
            link: None,
        }),
        ..Options::default()
    });
    let (status, body) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "Dec 24, 2025");
    assert_eq!(body["link"], Value::Null);
}

#[tokio::test]
async fn next_session_none_upcoming() {
    let app = boot(Options::default());
    let (status, body) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "No upcoming sessions found." }));
}

#[tokio::test]
async fn next_session_upstream_failure_is_500() {
    let app = boot(Options {
        upcoming: Upcoming::Fail,
        ..Options::default()
    });
    let (status, body) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("does not have permission")
    );
}

#[tokio::test]
async fn next_session_without_calendar_id_is_500() {
    let app = boot(Options {
        calendar_id: None,
        upcoming: Upcoming::Event(timed_event()),
        ..Options::default()
    });
    let (status, body) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Missing API Key or Calendar ID" }));
    assert!(app.calendar.queried.lock().unwrap().is_empty());
}

#[tokio::test]
async fn campaign_file_calendar_id_wins_and_is_reread() {
    let app = boot(Options {
        upcoming: Upcoming::Nothing,
        ..Options::default()
    });
    let campaign = app.dir.path().join("campaign.yml");

    std::fs::write(&campaign, "calendar:\n  calendarId: party@group.calendar.google.com\n").unwrap();
    let (status, _) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::OK);

    std::fs::write(&campaign, "calendar:\n  calendarId: other@group.calendar.google.com\n").unwrap();
    let (status, _) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        *app.calendar.queried.lock().unwrap(),
        vec![
            "party@group.calendar.google.com",
            "other@group.calendar.google.com"
        ]
    );
}

// ── Routing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn unselected_services_are_not_routed() {
    let app = boot(Options {
        services: vec![Service::Calendar],
        ..Options::default()
    });
    let (status, _) = app.get("/api/sessions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get("/api/recordings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get("/api/next-session").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = boot(Options::default());
    let req = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "https://rollforvibes.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
