use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, GENDER_LABELS};

use crate::common;

#[tokio::test]
async fn test_class_analytics_aggregates() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    let analytics = api.client.load_class_analytics(&token, "c1").await.unwrap();

    assert_eq!(GENDER_LABELS, ["Male", "Female"]);
    assert_eq!(analytics.gender_series(), [1, 1]);
    assert_eq!(analytics.total_revenue, 1250.0);
    assert_eq!(analytics.total_students(), 2);
    assert_eq!(analytics.teacher_name(), "Ms. Rao");
    assert_eq!(analytics.class.year, "2024");

    let names: Vec<&str> = analytics.students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ravi", "Asha"]);
    assert_eq!(api.log.count("GET", "/api/teacher/teacher/t1"), 1);
}

#[tokio::test]
async fn test_missing_teacher_is_tolerated() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    let analytics = api
        .client
        .load_class_analytics(&token, "c-orphan")
        .await
        .unwrap();

    assert!(analytics.teacher.is_none());
    assert_eq!(analytics.teacher_name(), "N/A");
    assert_eq!(analytics.total_students(), 1);
}

#[tokio::test]
async fn test_one_failed_student_fails_the_page() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    let err = api
        .client
        .load_class_analytics(&token, "c-broken")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_unknown_class() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");
    let err = api.client.load_class_analytics(&token, "zz").await.unwrap_err();
    assert_eq!(err.message, "Class not found");
    assert_eq!(api.log.all().len(), 1);
}

#[tokio::test]
async fn test_add_student_body() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    api.client.assign_student(&token, "c1", "s9").await.unwrap();

    let sent = api.log.find("PUT", "/api/class/c1/assign-student").unwrap();
    assert_eq!(sent.body, Some(json!({ "studentId": "s9" })));
    assert_eq!(sent.bearer.as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn test_assign_teacher_links_by_class_name() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    api.client.assign_class(&token, "t2", "Grade 5").await.unwrap();

    let sent = api.log.find("PUT", "/api/teacher/t2/assign-class").unwrap();
    assert_eq!(sent.body, Some(json!({ "class": "Grade 5" })));
}
