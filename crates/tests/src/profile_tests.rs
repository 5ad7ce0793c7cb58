use pretty_assertions::assert_eq;
use shared_types::table::{table_row, StudentProfileRow};
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_student_profile_row() {
    let api = common::test_api().await;
    let token = common::token_for("student", "u-s1");

    let student = api.client.get_student_profile(&token, "u-s1").await.unwrap();
    let row = table_row(&StudentProfileRow::from(&student));

    assert_eq!(
        row,
        vec!["Ravi", "555-0101", "4/9/2012", "500", "Grade 5", "Ms. Rao"]
    );
    let sent = api.log.find("GET", "/api/student/u-s1").unwrap();
    assert_eq!(sent.bearer.as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn test_unknown_student_profile_is_not_found() {
    let api = common::test_api().await;
    let token = common::token_for("student", "u-missing");
    let err = api
        .client
        .get_student_profile(&token, "u-missing")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message(), "Student not found");
}

#[tokio::test]
async fn test_teacher_profile_with_roster() {
    let api = common::test_api().await;
    let token = common::token_for("teacher", "u-t1");

    let teacher = api.client.get_teacher_profile(&token, "u-t1").await.unwrap();

    assert_eq!(teacher.name, "Ms. Rao");
    assert_eq!(teacher.salary, 30000.0);
    assert_eq!(teacher.assigned_class().map(|c| c.name.as_str()), Some("Grade 5"));
    assert_eq!(teacher.roster_names(), vec!["Ravi", "Asha"]);
}

#[tokio::test]
async fn test_single_teacher_lookup_uses_record_id() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    let teacher = api.client.get_teacher(&token, "t1").await.unwrap();

    assert_eq!(teacher.id, "t1");
    assert_eq!(api.log.count("GET", "/api/teacher/teacher/t1"), 1);
}
