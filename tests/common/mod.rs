// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::{Body, Bytes},
    extract::{Path, Request},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Form, Json, Router,
};
use eclaria_gateway::config::Config;
use eclaria_gateway::routes::create_router;
use eclaria_gateway::services::BackendClient;
use eclaria_gateway::session::Session;
use eclaria_gateway::AppState;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Password the fake backend accepts for every account.
#[allow(dead_code)]
pub const GOOD_PASSWORD: &str = "correct-horse";

/// Pause inside the `slow` audio clip.
#[allow(dead_code)]
pub const SLOW_CHUNK_DELAY: Duration = Duration::from_millis(1500);

/// Token the fake backend treats as revoked.
#[allow(dead_code)]
pub const REVOKED_TOKEN: &str = "revoked";

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Recorded {
    pub method: String,
    pub uri: String,
    pub authorization: Option<String>,
    pub cookie: Option<String>,
    pub cache_control: Option<String>,
}

/// Scripted stand-in for the backend REST API on an ephemeral port.
pub struct FakeBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub async fn start() -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorder = requests.clone();

        let app = backend_routes().layer(middleware::from_fn(move |req: Request, next: Next| {
            let recorder = recorder.clone();
            async move {
                let recorded = record(&req);
                recorder.lock().unwrap().push(recorded);
                next.run(req).await
            }
        }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests()
            .last()
            .cloned()
            .expect("backend received no requests")
    }

    pub fn client(&self) -> BackendClient {
        BackendClient::new(&self.url, Duration::from_secs(5)).unwrap()
    }
}

fn record(req: &Request) -> Recorded {
    let header_str = |name: header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Recorded {
        method: req.method().to_string(),
        uri: req.uri().to_string(),
        authorization: header_str(header::AUTHORIZATION),
        cookie: header_str(header::COOKIE),
        cache_control: header_str(header::CACHE_CONTROL),
    }
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

fn user_json(email: &str) -> Value {
    json!({"id": 1, "email": email, "name": "Alice", "profile_id": null, "is_mentor": false})
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn backend_routes() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|Form(form): Form<LoginForm>| async move {
                if form.password != GOOD_PASSWORD {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"detail": "Incorrect credentials"})),
                    );
                }
                let mut body = json!({
                    "access_token": format!("tok-{}", form.username),
                    "token_type": "bearer",
                });
                if form.username != "quiet@example.com" {
                    body["user"] = user_json(&form.username);
                }
                (StatusCode::OK, Json(body))
            }),
        )
        .route(
            "/api/auth/register",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "taken@example.com" {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"detail": "Email already registered"})),
                    );
                }
                (
                    StatusCode::OK,
                    Json(json!({"id": 2, "email": body["email"], "name": body["name"]})),
                )
            }),
        )
        .route(
            "/api/auth/me",
            get(|headers: HeaderMap| async move {
                match bearer(&headers) {
                    Some(token) if token == REVOKED_TOKEN => {
                        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
                    }
                    Some(token) => match token.strip_prefix("tok-") {
                        Some(email) => Json(user_json(email)).into_response(),
                        None => (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"detail": "Could not validate credentials"})),
                        )
                            .into_response(),
                    },
                    None => StatusCode::UNAUTHORIZED.into_response(),
                }
            }),
        )
        .route(
            "/api/profile/",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"status": "saved", "user_id": body["user_id"]}))
            }),
        )
        .route(
            "/api/profile/{user_id}",
            get(|Path(user_id): Path<i64>| async move {
                match user_id {
                    1 => Json(json!({
                        "user_id": 1,
                        "name": "Food Bank",
                        "mission": "Feed everyone",
                        "service_tags": ["food", "housing"],
                        "operating_years": 12
                    }))
                    .into_response(),
                    3 => Json(json!({
                        "user_id": 3,
                        "name": "Shelter",
                        "mission": null,
                        "past_methods": null,
                        "service_tags": "food, housing",
                        "operating_years": null
                    }))
                    .into_response(),
                    404 => (
                        StatusCode::NOT_FOUND,
                        Json(json!({"detail": "Profile not found"})),
                    )
                        .into_response(),
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
                }
            }),
        )
        .route(
            "/api/community/questions",
            get(|| async {
                Json(json!({
                    "data": [{
                        "id": 10,
                        "title": "Grant writing tips?",
                        "content": "Where do I start?",
                        "user_id": 1,
                        "tags": "grants"
                    }],
                    "totalCount": 25
                }))
            }),
        )
        .route(
            "/api/community/question",
            post(|| async { Json(json!({"id": 11, "status": "created"})) }),
        )
        .route(
            "/api/community/answer/{answer_id}",
            delete(|| async { StatusCode::NO_CONTENT }),
        )
        .route(
            "/api/community/answers/{question_id}",
            get(|| async {
                Json(json!([{
                    "id": 5,
                    "content": "Start with local foundations",
                    "user_id": 2,
                    "question_id": 10,
                    "upvotes": 3
                }]))
            }),
        )
        .route(
            "/api/community/suggested_answer/{question_id}",
            get(|| async { "this is not json" }),
        )
        .route(
            "/api/mentorship/mentors",
            get(|| async {
                Json(json!([{
                    "id": 3,
                    "user_id": 4,
                    "expertise_areas": "fundraising",
                    "experience_years": 8,
                    "bio": "Former development director",
                    "availability": "weekends"
                }]))
            }),
        )
        .route(
            "/api/mentorship/message",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"id": 30, "status": "sent", "receiver_id": body["receiver_id"]}))
            }),
        )
        .route(
            "/api/mentorship/messages/{user_id}",
            get(|Path(user_id): Path<i64>| async move {
                Json(json!([{
                    "id": 30,
                    "sender_id": 1,
                    "receiver_id": user_id,
                    "content": "Could we talk about grant deadlines?",
                    "created_at": "2026-10-01T12:00:00Z"
                }]))
            }),
        )
        .route(
            "/api/mentorship/suggest_reply/{message_id}",
            get(|| async { Json(json!({"suggested_reply": "Happy to help, how about Tuesday?"})) }),
        )
        .route(
            "/api/outreach/generate",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "content": format!("Dear {}, help us {}", body["audience"].as_str().unwrap_or(""), body["goal"].as_str().unwrap_or(""))
                }))
            }),
        )
        .route(
            "/api/strategy/generate",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"strategy": format!("Plan for: {}", body["query"].as_str().unwrap_or(""))}))
            }),
        )
        .route(
            "/audio/{id}",
            get(|Path(id): Path<String>| async move {
                if id == "slow" {
                    return Response::builder()
                        .status(StatusCode::OK)
                        .body(Body::from_stream(slow_chunks()))
                        .unwrap();
                }
                if id == "clip-1" {
                    Response::builder()
                        .status(StatusCode::OK)
                        .header(header::CONTENT_TYPE, HeaderValue::from_static("audio/ogg"))
                        .body(Body::from("OggS-audio-bytes"))
                        .unwrap()
                } else {
                    (StatusCode::NOT_FOUND, "no such clip").into_response()
                }
            }),
        )
}

/// Audio body whose second chunk arrives after [`SLOW_CHUNK_DELAY`].
fn slow_chunks() -> impl futures_util::Stream<Item = Result<Bytes, std::io::Error>> {
    futures_util::stream::unfold(0u8, |step| async move {
        match step {
            0 => Some((Ok(Bytes::from_static(b"first-")), 1)),
            1 => {
                tokio::time::sleep(SLOW_CHUNK_DELAY).await;
                Some((Ok(Bytes::from_static(b"second")), 2))
            }
            _ => None,
        }
    })
}

/// Session carrying the given token, as if read from the browser's cookie.
#[allow(dead_code)]
pub fn session_with_token(token: &str) -> Session {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("token={}", token)).unwrap(),
    );
    Session::from_headers(&headers, false)
}

/// Session for a request that sent no cookies.
#[allow(dead_code)]
pub fn empty_session() -> Session {
    Session::from_headers(&HeaderMap::new(), false)
}

/// Create a test app proxying to the given backend.
#[allow(dead_code)]
pub fn create_test_app(backend_url: &str) -> (Router, Arc<AppState>) {
    let config = Config {
        api_url: backend_url.to_string(),
        ..Config::test_default()
    };
    create_test_app_with_config(config)
}

#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config).unwrap());
    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

#[allow(dead_code)]
pub fn find_cookie(headers: &[String], name: &str) -> String {
    headers
        .iter()
        .find(|value| value.starts_with(&format!("{name}=")))
        .cloned()
        .unwrap_or_else(|| panic!("missing Set-Cookie header for {name}: {headers:?}"))
}

#[allow(dead_code)]
pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
