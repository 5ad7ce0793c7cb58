use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_admin_overview_totals() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    let overview = api.client.load_admin_overview(&token).await.unwrap();

    assert_eq!(overview.classes.len(), 2);
    assert_eq!(overview.classes[0].teacher_name(), "Ms. Rao");
    assert_eq!(overview.classes[0].student_count(), 2);
    assert_eq!(overview.classes[1].teacher_name(), "N/A");
    // 30000 + "12000" + null
    assert_eq!(overview.total_teacher_salary, 42000.0);
    assert_eq!(overview.total_fees_received, 1250.0);
}

#[tokio::test]
async fn test_admin_overview_fetches_in_order() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");

    api.client.load_admin_overview(&token).await.unwrap();

    let paths: Vec<String> = api.log.all().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/api/class", "/api/teacher/", "/api/student/"]);
}

#[tokio::test]
async fn test_delete_class_success_removes_it_locally() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");
    let mut overview = api.client.load_admin_overview(&token).await.unwrap();

    api.client
        .delete_listed_class(&token, "c1", &mut overview)
        .await
        .unwrap();

    let ids: Vec<&str> = overview.classes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c2"]);
    assert_eq!(api.log.count("DELETE", "/api/class/c1"), 1);
}

#[tokio::test]
async fn test_delete_class_failure_keeps_list() {
    let api = common::test_api().await;
    let token = common::token_for("admin", "u-admin");
    let mut overview = api.client.load_admin_overview(&token).await.unwrap();
    let before = overview.clone();

    // The mock only knows how to delete "c1"; "c2" is listed but refused.
    let err = api
        .client
        .delete_listed_class(&token, "c2", &mut overview)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Class not found");
    assert_eq!(overview, before);
    assert_eq!(api.log.count("DELETE", "/api/class/c2"), 1);
}

#[tokio::test]
async fn test_delete_without_token_keeps_list() {
    let api = common::test_api().await;
    let mut overview = api
        .client
        .load_admin_overview(&common::token_for("admin", "u-admin"))
        .await
        .unwrap();
    let before = overview.clone();

    let err = api
        .client
        .delete_listed_class("", "c1", &mut overview)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(overview, before);
}
