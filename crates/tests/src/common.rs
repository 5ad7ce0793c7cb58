use std::sync::{Arc, Mutex};

use api_client::ApiClient;
use axum::{
    body::{to_bytes, Body},
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::{json, Value};

/// One request as the mock API saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Requests received so far, in arrival order.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<Recorded>>>);

impl RequestLog {
    pub fn all(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }

    /// The last request whose method and path match.
    pub fn find(&self, method: &str, path: &str) -> Option<Recorded> {
        self.all()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.all()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

/// A running mock of the school API plus a client pointed at it.
pub struct TestApi {
    pub client: ApiClient,
    pub log: RequestLog,
}

/// Unsigned token carrying the given role and user id.
pub fn token_for(role: &str, user_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "role": role, "userId": user_id }).to_string());
    format!("{header}.{payload}.signature")
}

/// Serve the mock API on an ephemeral loopback port.
pub async fn test_api() -> TestApi {
    let log = RequestLog::default();
    let router = api_router()
        .layer(middleware::from_fn_with_state(log.clone(), record_and_authorize))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("mock api address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock api server");
    });

    TestApi {
        client: ApiClient::new(format!("http://{addr}/")),
        log,
    }
}

fn api_router() -> Router<RequestLog> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/class", get(list_classes))
        .route("/api/class/", post(create_record))
        .route("/api/class/{id}", get(get_class).delete(delete_class))
        .route("/api/class/{id}/assign-student", put(ok_empty))
        .route("/api/teacher/", get(list_teachers).post(create_record))
        .route("/api/teacher/{id}", get(teacher_profile))
        .route("/api/teacher/teacher/{id}", get(get_teacher))
        .route("/api/teacher/{id}/assign-class", put(ok_empty))
        .route("/api/student/", get(list_students).post(create_record))
        .route("/api/student/{id}", get(student_profile))
        .route("/api/student/student/{id}", get(get_student))
}

/// Log every request, then reject protected calls that carry no bearer token.
async fn record_and_authorize(
    State(log): State<RequestLog>,
    req: Request,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let bearer = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    log.0.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        bearer: bearer.clone(),
        body: serde_json::from_slice(&bytes).ok(),
    });

    if !parts.uri.path().starts_with("/api/auth/") && bearer.is_none() {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "err": "No token provided" })))
            .into_response();
    }
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "asha" && body["password"] == "pw" {
        Json(json!({ "token": "abc" })).into_response()
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "err": "Invalid credentials" }))).into_response()
    }
}

async fn signup(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Username already exists" })))
            .into_response();
    }
    let role = body["role"].as_str().unwrap_or_default();
    Json(json!({ "token": token_for(role, "u-new") })).into_response()
}

fn class_c1() -> Value {
    json!({
        "_id": "c1",
        "name": "Grade 5",
        "year": 2024,
        "teacher": "t1",
        "students": ["s1", "s2"],
        "studentFees": 1200
    })
}

async fn list_classes() -> Json<Value> {
    Json(json!([
        {
            "_id": "c1",
            "name": "Grade 5",
            "year": "2024",
            "teacher": { "_id": "t1", "name": "Ms. Rao" },
            "students": ["s1", "s2"]
        },
        { "_id": "c2", "name": "Grade 6", "year": "2024", "teacher": null, "students": [] }
    ]))
}

async fn get_class(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "c1" => Json(class_c1()).into_response(),
        // References a teacher that no longer exists.
        "c-orphan" => Json(json!({
            "_id": "c-orphan",
            "name": "Grade 7",
            "year": "2023",
            "teacher": "t-gone",
            "students": ["s1"]
        }))
        .into_response(),
        // One member cannot be fetched.
        "c-broken" => Json(json!({
            "_id": "c-broken",
            "name": "Grade 8",
            "students": ["s1", "s-gone"]
        }))
        .into_response(),
        _ => not_found("Class not found"),
    }
}

async fn delete_class(Path(id): Path<String>) -> Response {
    if id == "c1" {
        Json(json!({ "message": "Class deleted" })).into_response()
    } else {
        not_found("Class not found")
    }
}

fn teacher_t1() -> Value {
    json!({
        "_id": "t1",
        "name": "Ms. Rao",
        "gender": "Female",
        "dob": "1985-02-11T00:00:00.000Z",
        "contactDetails": "555-0100",
        "salary": 30000,
        "assignedClass": {
            "_id": "c1",
            "name": "Grade 5",
            "students": [
                { "_id": "s1", "name": "Ravi" },
                { "_id": "s2", "name": "Asha" }
            ]
        }
    })
}

async fn list_teachers() -> Json<Value> {
    Json(json!([
        teacher_t1(),
        { "_id": "t2", "name": "Mr. Iyer", "salary": "12000" },
        { "_id": "t3", "name": "New Hire", "salary": null }
    ]))
}

async fn teacher_profile(Path(user_id): Path<String>) -> Response {
    if user_id == "u-t1" {
        Json(teacher_t1()).into_response()
    } else {
        not_found("Teacher not found")
    }
}

async fn get_teacher(Path(id): Path<String>) -> Response {
    if id == "t1" {
        Json(teacher_t1()).into_response()
    } else {
        not_found("Teacher not found")
    }
}

fn student(id: &str) -> Option<Value> {
    match id {
        "s1" => Some(json!({
            "_id": "s1",
            "name": "Ravi",
            "gender": "Male",
            "dob": "2012-04-09T00:00:00.000Z",
            "contactDetails": "555-0101",
            "feesPaid": 500,
            "class": [{ "_id": "c1", "name": "Grade 5", "teacherName": "Ms. Rao" }]
        })),
        "s2" => Some(json!({
            "_id": "s2",
            "name": "Asha",
            "gender": "Female",
            "dob": "2011-11-30T00:00:00.000Z",
            "contactDetails": "555-0102",
            "feesPaid": 750,
            "class": []
        })),
        _ => None,
    }
}

async fn list_students() -> Json<Value> {
    Json(json!([student("s1"), student("s2")]))
}

async fn student_profile(Path(user_id): Path<String>) -> Response {
    match user_id.as_str() {
        "u-s1" => Json(student("s1")).into_response(),
        _ => not_found("Student not found"),
    }
}

async fn get_student(Path(id): Path<String>) -> Response {
    match student(&id) {
        Some(s) => Json(s).into_response(),
        None => not_found("Student not found"),
    }
}

async fn create_record(Json(body): Json<Value>) -> Response {
    if body["name"].as_str().unwrap_or_default().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Name is required" })))
            .into_response();
    }
    let mut created = body;
    created["_id"] = json!("new-id");
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn ok_empty() -> Json<Value> {
    Json(json!({}))
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}
