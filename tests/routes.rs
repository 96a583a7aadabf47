use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use advocate_directory::dto::api::{AdvocateDto, AdvocatesResponse, ApiError};
use advocate_directory::repository::{AdvocateWriter, DieselRepository};
use advocate_directory::{build_tera, configure};

mod common;

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());
    let advocates = vec![
        common::advocate("Alice", "Johnson", "Chicago", 5554567890),
        common::advocate("Bob", "Smith", "New York", 5551234567),
        common::advocate("Carol", "Nguyen", "Austin", 3125550000),
        common::advocate("Dan", "Reed", "Boston", 6175550199),
        common::advocate("Erin", "Newman", "New Orleans", 5045551111),
    ];
    repo.create_advocates(&advocates).unwrap();
    repo
}

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .app_data(web::Data::new(build_tera("templates/**/*").unwrap()))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_list_paginates_with_meta() {
    let test_db = common::TestDb::new("test_list_paginates_with_meta.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=1&pageSize=2")
        .to_request();
    let body: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.len(), 2);
    assert_eq!(body.meta.total, 5);
    assert_eq!(body.meta.total_pages, 3);
    assert_eq!(body.meta.page_size, 2);

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=3&pageSize=2")
        .to_request();
    let body: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.len(), 1);
    assert_eq!(body.data[0].first_name, "Erin");
    assert_eq!(body.meta.page, 3);
}

#[actix_web::test]
async fn test_list_defaults_and_clamping() {
    let test_db = common::TestDb::new("test_list_defaults_and_clamping.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/advocates").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["pageSize"], 10);
    assert_eq!(body["meta"]["total"], 5);
    assert_eq!(body["meta"]["totalPages"], 1);
    assert_eq!(body["meta"]["q"], "");
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert!(body["data"][0]["yearsOfExperience"].is_number());
    assert!(body["data"][0]["phoneNumber"].is_number());

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=0&pageSize=1000")
        .to_request();
    let body: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.meta.page, 1);
    assert_eq!(body.meta.page_size, 100);

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=abc&pageSize=1x")
        .to_request();
    let body: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.meta.page, 1);
    assert_eq!(body.meta.page_size, 10);

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=&pageSize=")
        .to_request();
    let body: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.meta.page, 1);
    assert_eq!(body.meta.page_size, 1);
    assert_eq!(body.meta.total_pages, 5);
    assert_eq!(body.data.len(), 1);
}

#[actix_web::test]
async fn test_list_search() {
    let test_db = common::TestDb::new("test_list_search.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/advocates?q=%20%20new%20")
        .to_request();
    let body: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.meta.q, "new");
    assert_eq!(body.meta.total, 2);
    assert!(body.data.len() <= body.meta.page_size);

    let req = test::TestRequest::get()
        .uri("/api/advocates?q=617")
        .to_request();
    let body: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.meta.total, 1);
    assert_eq!(body.data[0].phone_number, 6175550199);
}

#[actix_web::test]
async fn test_detail_returns_advocate() {
    let test_db = common::TestDb::new("test_detail_returns_advocate.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/advocates/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: AdvocateDto = test::read_body_json(resp).await;
    assert_eq!(body.id, 2);
    assert_eq!(body.last_name, "Smith");
    assert_eq!(body.specialties, vec!["Trauma & PTSD"]);
}

#[actix_web::test]
async fn test_detail_rejects_invalid_ids() {
    let test_db = common::TestDb::new("test_detail_rejects_invalid_ids.db");
    let app = init_app!(seeded_repo(&test_db));

    for id in ["0", "-1", "abc", "1.5", "2147483648"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/advocates/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "id {id}");
        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid id");
    }
}

#[actix_web::test]
async fn test_detail_not_found() {
    let test_db = common::TestDb::new("test_detail_not_found.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/advocates/999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ApiError = test::read_body_json(resp).await;
    assert_eq!(body.error, "Not found");
}

#[actix_web::test]
async fn test_index_page_renders_table() {
    let test_db = common::TestDb::new("test_index_page_renders_table.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/?pageSize=2&page=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Carol"));
    assert!(html.contains("Dan"));
    assert!(!html.contains("Alice"));
    assert!(html.contains("<strong>3</strong>–<strong>4</strong>"));
    assert!(html.contains(r#"data-page="1" aria-label="First page""#));
    assert!(html.contains(r#"data-page="3""#));

    let req = test::TestRequest::get().uri("/?q=zzz").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("No advocates found"));
}

#[actix_web::test]
async fn test_advocate_page() {
    let test_db = common::TestDb::new("test_advocate_page.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/advocates/3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Nguyen"));

    for id in ["999", "abc"] {
        let req = test::TestRequest::get()
            .uri(&format!("/advocates/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "id {id}");
    }
}
