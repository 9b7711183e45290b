//! In-process fake of the activity sign-up API.
//!
//! Credentials are matched exactly (no username normalization), so tests can
//! tell which spelling the client sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct FakeActivity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

#[derive(Default)]
pub struct FakeState {
    activities: Mutex<Vec<(String, FakeActivity)>>,
    teachers: HashMap<String, String>,
    requests: AtomicUsize,
    probe_usernames: Mutex<Vec<String>>,
}

pub struct ServerGuard {
    pub base_url: String,
    state: Arc<FakeState>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerGuard {
    /// Requests received so far, of any kind.
    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Usernames sent to the login probe, in order.
    pub fn probe_usernames(&self) -> Vec<String> {
        self.state.probe_usernames.lock().unwrap().clone()
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.state
            .activities
            .lock()
            .unwrap()
            .iter()
            .find(|(n, _)| n == activity)
            .map(|(_, a)| a.participants.clone())
            .unwrap_or_default()
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        self.stop();
    }
}

fn seed_activities() -> Vec<(String, FakeActivity)> {
    let mk = |name: &str, description: &str, schedule: &str, max: u32, people: &[&str]| {
        (
            name.to_string(),
            FakeActivity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: max,
                participants: people.iter().map(|p| p.to_string()).collect(),
            },
        )
    };
    vec![
        mk(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        mk(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        mk(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &[],
        ),
    ]
}

pub fn spawn_server() -> Result<ServerGuard> {
    spawn_server_with_teachers(&[("mr.smith", "chess123"), ("mrs.brown", "art456")])
}

pub fn spawn_server_with_teachers(teachers: &[(&str, &str)]) -> Result<ServerGuard> {
    let state = Arc::new(FakeState {
        activities: Mutex::new(seed_activities()),
        teachers: teachers
            .iter()
            .map(|(u, p)| (u.to_string(), p.to_string()))
            .collect(),
        ..FakeState::default()
    });

    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", delete(unregister))
        .with_state(state.clone());

    serve_router(app, state)
}

/// Serves a router that answers 404 on every path, like a wrong base URL.
pub fn spawn_not_found_server() -> Result<ServerGuard> {
    let app = Router::new().fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") });
    serve_router(app, Arc::new(FakeState::default()))
}

/// Accepts every login, then answers each mutation with a plain-text 400.
pub fn spawn_plain_text_rejection_server() -> Result<ServerGuard> {
    async fn signup(Path(name): Path<String>) -> Response {
        if name == "test" {
            return detail(StatusCode::NOT_FOUND, "Activity not found");
        }
        (StatusCode::BAD_REQUEST, "oops").into_response()
    }
    async fn unregister() -> Response {
        (StatusCode::BAD_REQUEST, "oops").into_response()
    }
    let app = Router::new()
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", delete(unregister));
    serve_router(app, Arc::new(FakeState::default()))
}

/// Serves `app` on an ephemeral port; `state` backs the guard's accessors.
pub fn serve_router(app: Router, state: Arc<FakeState>) -> Result<ServerGuard> {
    let (addr_tx, addr_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let thread = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                let _ = addr_tx.send(Err(anyhow::Error::from(err)));
                return;
            }
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(err) => {
                    let _ = addr_tx.send(Err(anyhow::Error::from(err)));
                    return;
                }
            };
            let _ = addr_tx.send(listener.local_addr().map_err(anyhow::Error::from));
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });
    });

    let addr = addr_rx
        .recv()
        .context("fake server thread exited")?
        .context("bind fake server")?;

    Ok(ServerGuard {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

fn detail(status: StatusCode, msg: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "detail": msg }))).into_response()
}

fn message(msg: String) -> Response {
    axum::Json(serde_json::json!({ "message": msg })).into_response()
}

/// Returns the matched teacher username.
fn authenticate(state: &FakeState, headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(token).ok()?).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    match state.teachers.get(user) {
        Some(expected) if expected == pass => Some(user.to_string()),
        _ => None,
    }
}

fn attempted_username(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let decoded = STANDARD.decode(raw.strip_prefix("Basic ")?).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    decoded.split_once(':').map(|(u, _)| u.to_string())
}

async fn list_activities(State(state): State<Arc<FakeState>>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let activities = state.activities.lock().unwrap();
    // Built by hand so the wire order matches the seed order.
    let body = activities
        .iter()
        .map(|(name, a)| {
            format!(
                "{}:{}",
                serde_json::to_string(name).unwrap(),
                serde_json::to_string(a).unwrap()
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    (
        [(header::CONTENT_TYPE, "application/json")],
        format!("{{{}}}", body),
    )
        .into_response()
}

async fn signup(
    State(state): State<Arc<FakeState>>,
    Path(name): Path<String>,
    Query(q): Query<EmailQuery>,
    headers: HeaderMap,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if name == "test"
        && let Some(user) = attempted_username(&headers)
    {
        state.probe_usernames.lock().unwrap().push(user);
    }

    let Some(teacher) = authenticate(&state, &headers) else {
        return detail(StatusCode::UNAUTHORIZED, "Invalid credentials");
    };
    let mut activities = state.activities.lock().unwrap();
    let Some((_, activity)) = activities.iter_mut().find(|(n, _)| *n == name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    if activity.participants.contains(&q.email) {
        return detail(StatusCode::BAD_REQUEST, "Student is already signed up");
    }
    activity.participants.push(q.email.clone());
    message(format!(
        "Signed up {} for {} by teacher {}",
        q.email, name, teacher
    ))
}

async fn unregister(
    State(state): State<Arc<FakeState>>,
    Path(name): Path<String>,
    Query(q): Query<EmailQuery>,
    headers: HeaderMap,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let Some(teacher) = authenticate(&state, &headers) else {
        return detail(StatusCode::UNAUTHORIZED, "Invalid credentials");
    };
    let mut activities = state.activities.lock().unwrap();
    let Some((_, activity)) = activities.iter_mut().find(|(n, _)| *n == name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    let Some(pos) = activity.participants.iter().position(|p| *p == q.email) else {
        return detail(
            StatusCode::BAD_REQUEST,
            "Student is not signed up for this activity",
        );
    };
    activity.participants.remove(pos);
    message(format!(
        "Unregistered {} from {} by teacher {}",
        q.email, name, teacher
    ))
}
