use futures::future::try_join_all;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AdminOverview, AppError, AssignClassRequest, AssignStudentRequest, Class, ClassAnalytics,
    CreateRecordRequest, LoginRequest, RecordModel, SignupRequest, Student, Teacher, TokenResponse,
};

/// Fallback messages used when an error body carries no text of its own.
const AUTH_FALLBACK: &str = "Authentication failed";
const REQUEST_FALLBACK: &str = "Request failed";

/// Somewhere a loaded [`AdminOverview`] lives, so a confirmed deletion can
/// be reflected without reloading everything.
pub trait OverviewSlot {
    fn patch(&mut self, f: impl FnOnce(&mut AdminOverview));
}

impl OverviewSlot for AdminOverview {
    fn patch(&mut self, f: impl FnOnce(&mut AdminOverview)) {
        f(self)
    }
}

/// Thin wrapper over `reqwest` for the school records API.
///
/// Every protected call takes the bearer token explicitly; the client itself
/// holds no session state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // --- Auth ---

    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, AppError> {
        let builder = self.http.post(self.url("/api/auth/login")).json(req);
        self.fetch_json(builder, "/api/auth/login", AUTH_FALLBACK).await
    }

    #[tracing::instrument(skip(self, req), fields(username = %req.username, role = %req.role))]
    pub async fn signup(&self, req: &SignupRequest) -> Result<TokenResponse, AppError> {
        let builder = self.http.post(self.url("/api/auth/signup")).json(req);
        self.fetch_json(builder, "/api/auth/signup", shared_types::SIGNUP_FALLBACK_ERROR)
            .await
    }

    // --- Reads ---

    #[tracing::instrument(skip(self, token))]
    pub async fn list_classes(&self, token: &str) -> Result<Vec<Class>, AppError> {
        self.get_json(token, "/api/class").await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get_class(&self, token: &str, class_id: &str) -> Result<Class, AppError> {
        self.get_json(token, &format!("/api/class/{class_id}")).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_teachers(&self, token: &str) -> Result<Vec<Teacher>, AppError> {
        self.get_json(token, "/api/teacher/").await
    }

    /// The signed-in teacher's own profile, looked up by user id.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_teacher_profile(&self, token: &str, user_id: &str) -> Result<Teacher, AppError> {
        self.get_json(token, &format!("/api/teacher/{user_id}")).await
    }

    /// A teacher record looked up by its own id.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_teacher(&self, token: &str, teacher_id: &str) -> Result<Teacher, AppError> {
        self.get_json(token, &format!("/api/teacher/teacher/{teacher_id}"))
            .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_students(&self, token: &str) -> Result<Vec<Student>, AppError> {
        self.get_json(token, "/api/student/").await
    }

    /// The signed-in student's own profile, looked up by user id.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_student_profile(&self, token: &str, user_id: &str) -> Result<Student, AppError> {
        self.get_json(token, &format!("/api/student/{user_id}")).await
    }

    /// A student record looked up by its own id.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_student(&self, token: &str, student_id: &str) -> Result<Student, AppError> {
        self.get_json(token, &format!("/api/student/student/{student_id}"))
            .await
    }

    /// Fetch several students concurrently. Results keep the order of `ids`;
    /// the first failure fails the whole batch.
    pub async fn get_students(&self, token: &str, ids: &[String]) -> Result<Vec<Student>, AppError> {
        try_join_all(ids.iter().map(|id| self.get_student(token, id))).await
    }

    // --- Writes ---

    #[tracing::instrument(skip(self, token, body), fields(endpoint = model.endpoint()))]
    pub async fn create_record(
        &self,
        token: &str,
        model: RecordModel,
        body: &CreateRecordRequest,
    ) -> Result<serde_json::Value, AppError> {
        let path = format!("/api/{}/", model.endpoint());
        let builder = self.http.post(self.url(&path)).bearer_auth(token).json(body);
        self.fetch_json(builder, &path, shared_types::CREATE_FALLBACK_ERROR)
            .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn assign_student(
        &self,
        token: &str,
        class_id: &str,
        student_id: &str,
    ) -> Result<(), AppError> {
        let path = format!("/api/class/{class_id}/assign-student");
        let body = AssignStudentRequest {
            student_id: student_id.to_string(),
        };
        self.send_json(token, reqwest::Method::PUT, &path, &body).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn assign_class(
        &self,
        token: &str,
        teacher_id: &str,
        class_name: &str,
    ) -> Result<(), AppError> {
        let path = format!("/api/teacher/{teacher_id}/assign-class");
        let body = AssignClassRequest {
            class: class_name.to_string(),
        };
        self.send_json(token, reqwest::Method::PUT, &path, &body).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_class(&self, token: &str, class_id: &str) -> Result<(), AppError> {
        let path = format!("/api/class/{class_id}");
        let builder = self.http.delete(self.url(&path)).bearer_auth(token);
        let response = self.execute(builder, &path).await?;
        Self::check_status(response, &path, REQUEST_FALLBACK).await?;
        tracing::info!(class_id, "Class deleted");
        Ok(())
    }

    /// Delete a class, then drop it from `overview` once the API confirmed.
    /// A refused or failed request leaves `overview` untouched.
    pub async fn delete_listed_class(
        &self,
        token: &str,
        class_id: &str,
        overview: &mut impl OverviewSlot,
    ) -> Result<(), AppError> {
        self.delete_class(token, class_id).await?;
        overview.patch(|o| {
            if !o.remove_class(class_id) {
                tracing::debug!(class_id, "Deleted class was not in the local list");
            }
        });
        Ok(())
    }

    // --- Aggregates ---

    /// Classes, teachers and students, fetched one after another.
    pub async fn load_admin_overview(&self, token: &str) -> Result<AdminOverview, AppError> {
        let classes = self.list_classes(token).await?;
        let teachers = self.list_teachers(token).await?;
        let students = self.list_students(token).await?;
        Ok(AdminOverview::new(classes, &teachers, &students))
    }

    /// Everything the class analytics page needs.
    ///
    /// A failed teacher lookup is tolerated and shown as "N/A". Students are
    /// fetched concurrently and all must succeed.
    #[tracing::instrument(skip(self, token))]
    pub async fn load_class_analytics(
        &self,
        token: &str,
        class_id: &str,
    ) -> Result<ClassAnalytics, AppError> {
        let class = self.get_class(token, class_id).await?;

        let teacher = match class.teacher_id() {
            Some(teacher_id) => match self.get_teacher(token, teacher_id).await {
                Ok(teacher) => Some(teacher),
                Err(e) => {
                    tracing::warn!(error = %e, teacher_id, "Teacher lookup failed");
                    None
                }
            },
            None => None,
        };

        let students = self.get_students(token, &class.student_ids()).await?;
        Ok(ClassAnalytics::compute(class, teacher, students))
    }

    // --- Plumbing ---

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, AppError> {
        let builder = self.http.get(self.url(path)).bearer_auth(token);
        self.fetch_json(builder, path, REQUEST_FALLBACK).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        token: &str,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let builder = self
            .http
            .request(method, self.url(path))
            .bearer_auth(token)
            .json(body);
        let response = self.execute(builder, path).await?;
        Self::check_status(response, path, REQUEST_FALLBACK).await?;
        Ok(())
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self.execute(builder, path).await?;
        let body = Self::check_status(response, path, fallback).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, endpoint = path, "Unexpected response body");
            AppError::decode(format!("{path}: {e}"))
        })
    }

    async fn execute(&self, builder: RequestBuilder, path: &str) -> Result<Response, AppError> {
        builder.send().await.map_err(|e| {
            tracing::error!(error = %e, endpoint = path, "Request failed");
            AppError::network(e.to_string())
        })
    }

    /// Read the body, turning a non-2xx status into an `AppError`.
    async fn check_status(response: Response, path: &str, fallback: &str) -> Result<String, AppError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), endpoint = path, "Request succeeded");
            return Ok(body);
        }
        let err = AppError::from_response(status.as_u16(), &body, fallback);
        tracing::error!(status = status.as_u16(), endpoint = path, error = %err, "API error");
        Err(err)
    }
}
