use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{FormValues, RecordModel};

use crate::common;

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_create_class_posts_to_class_endpoint() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");
    let form = values(&[("name", "Grade 9"), ("year", "2025"), ("studentFees", "1500")]);
    let body = RecordModel::Class.build_request("u-admin", &form);

    let created = api
        .client
        .create_record(&token, RecordModel::Class, &body)
        .await
        .unwrap();

    assert_eq!(created["_id"], "new-id");
    let sent = api.log.find("POST", "/api/class/").unwrap();
    assert_eq!(
        sent.body,
        Some(json!({
            "user": "u-admin",
            "name": "Grade 9",
            "year": "2025",
            "studentFees": 1500.0
        }))
    );
}

#[tokio::test]
async fn test_teacher_salary_that_is_not_a_number_becomes_zero() {
    let api = common::test_api().await;
    let token = common::token_for("teacher", "u-t9");
    let form = values(&[
        ("name", "Mr. Iyer"),
        ("gender", "Male"),
        ("dob", "1980-01-01"),
        ("contactDetails", "555-0199"),
        ("salary", "lots"),
    ]);
    let body = RecordModel::Teacher.build_request("u-t9", &form);

    api.client
        .create_record(&token, RecordModel::Teacher, &body)
        .await
        .unwrap();

    let sent = api.log.find("POST", "/api/teacher/").unwrap().body.unwrap();
    assert_eq!(sent["user"], "u-t9");
    assert_eq!(sent["salary"], json!(0.0));
}

#[tokio::test]
async fn test_student_record_has_empty_class_list() {
    let api = common::test_api().await;
    let token = common::token_for("student", "u-s9");
    let form = values(&[("name", "Meera"), ("feesPaid", "800")]);
    let body = RecordModel::Student.build_request("u-s9", &form);

    api.client
        .create_record(&token, RecordModel::Student, &body)
        .await
        .unwrap();

    let sent = api.log.find("POST", "/api/student/").unwrap().body.unwrap();
    assert_eq!(sent["class"], json!([]));
    assert_eq!(sent["feesPaid"], json!(800.0));
}

#[tokio::test]
async fn test_rejected_record_reports_error_field() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");
    let body = RecordModel::Class.build_request("u-admin", &FormValues::new());

    let err = api
        .client
        .create_record(&token, RecordModel::Class, &body)
        .await
        .unwrap_err();

    assert_eq!(err.message, "Name is required");
}
