mod common;

use actix_web::{
    App,
    http::{StatusCode, header::ContentType},
    test,
    web::Data,
};
use employee_records::{config::Config, routes};
use serde_json::{Value, json};

use common::{empty_store, seed};

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($store.clone()))
                .configure(|cfg| routes::configure(cfg, &Config::default())),
        )
        .await
    };
}

#[actix_web::test]
async fn create_then_get_returns_the_same_record() {
    let store = empty_store().await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({
            "name": "Alice",
            "department": "Engineering",
            "salary": 90000,
            "hire_date": "2021-03-01T00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": 1 }));

    let req = test::TestRequest::get().uri("/api/employees/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Alice",
            "department": "Engineering",
            "salary": 90000.0,
            "hire_date": "2021-03-01 00:00:00"
        })
    );
}

#[actix_web::test]
async fn out_of_range_salary_is_a_validation_error() {
    let store = empty_store().await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({
            "name": "Bob",
            "department": "Sales",
            "salary": 2_000_000,
            "hire_date": "2021-03-01 00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "validation_failed");

    assert!(store.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn future_hire_date_is_a_validation_error() {
    let store = empty_store().await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({
            "name": "Zed",
            "department": "Sales",
            "salary": 1000,
            "hire_date": "2999-01-01 00:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn malformed_input_is_an_invalid_request() {
    let store = empty_store().await;
    let app = app!(store);

    // missing hire_date
    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({ "name": "Bob", "department": "Sales", "salary": 1000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid_request");

    // unparseable date
    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({
            "name": "Bob",
            "department": "Sales",
            "salary": 1000,
            "hire_date": "yesterday"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // not JSON at all
    let req = test::TestRequest::post()
        .uri("/api/employees")
        .insert_header(ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // id is not a number
    let req = test::TestRequest::get().uri("/api/employees/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid_request");

    assert!(store.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn missing_employee_is_not_found() {
    let store = empty_store().await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/employees/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "code": "not_found", "error": "Employee not found" }));

    let req = test::TestRequest::put()
        .uri("/api/employees/99")
        .set_json(json!({ "salary": 1000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/api/employees/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_changes_only_the_supplied_fields() {
    let store = empty_store().await;
    let ids = seed(&store, &[("Alice", "Engineering", 90000.0, "2021-03-01 00:00:00")]).await;
    let app = app!(store);

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}", ids[0]))
        .set_json(json!({ "department": "Research" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "id": ids[0],
            "name": "Alice",
            "department": "Research",
            "salary": 90000.0,
            "hire_date": "2021-03-01 00:00:00"
        })
    );

    // empty body
    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}", ids[0]))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // unknown column
    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}", ids[0]))
        .set_json(json!({ "id": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // rejected salary leaves the record alone
    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}", ids[0]))
        .set_json(json!({ "salary": 0, "name": "Changed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let stored = store.get(ids[0]).await.unwrap();
    assert_eq!(stored.name, "Alice");
    assert_eq!(stored.department, "Research");
}

#[actix_web::test]
async fn delete_then_get_is_not_found() {
    let store = empty_store().await;
    let ids = seed(&store, &[("Eve", "Legal", 70000.0, "2022-05-05 10:00:00")]).await;
    let app = app!(store);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/employees/{}", ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], ids[0]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/employees/{}", ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn department_views() {
    let store = empty_store().await;
    seed(
        &store,
        &[
            ("E1", "Engineering", 100000.0, "2021-01-01 00:00:00"),
            ("S1", "Sales", 50000.0, "2021-02-01 00:00:00"),
            ("E2", "Engineering", 110000.0, "2021-03-01 00:00:00"),
            ("S2", "Sales", 60000.0, "2021-04-01 00:00:00"),
            ("E3", "Engineering", 120000.0, "2021-05-01 00:00:00"),
        ],
    )
    .await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/departments").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!(["Engineering", "Sales"]));

    let req = test::TestRequest::get()
        .uri("/api/departments/Engineering")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["E1", "E2", "E3"]);

    let req = test::TestRequest::get()
        .uri("/api/departments/Marketing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/average_salary/Engineering")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "department": "Engineering", "average_salary": 110000.0 })
    );

    let req = test::TestRequest::get()
        .uri("/api/average_salary/Nonexistent")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No employees found in this department.");
}

#[actix_web::test]
async fn department_names_with_spaces_are_url_decoded() {
    let store = empty_store().await;
    seed(&store, &[("H1", "Human Resources", 45000.0, "2022-01-01 00:00:00")]).await;
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri("/api/average_salary/Human%20Resources")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["average_salary"], 45000.0);
}

#[actix_web::test]
async fn rankings_return_at_most_ten_sorted_rows() {
    let store = empty_store().await;
    let employees = common::synthetic_employees(7, 25, &["Engineering", "Sales", "Ops"]);
    common::seed_synthetic(&store, &employees).await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/top_earners").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let salaries: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["salary"].as_f64().unwrap())
        .collect();
    assert_eq!(salaries.len(), 10);
    assert!(salaries.windows(2).all(|w| w[0] >= w[1]));

    let mut expected: Vec<f64> = employees.iter().map(|e| e.salary).collect();
    expected.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(salaries[0], expected[0]);

    let req = test::TestRequest::get().uri("/api/most_recent_hires").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["hire_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates.len(), 10);
    // the wire format sorts lexicographically in time order
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[actix_web::test]
async fn rankings_on_an_empty_store_are_empty_lists() {
    let store = empty_store().await;
    let app = app!(store);

    for uri in ["/api/top_earners", "/api/most_recent_hires", "/api/employees", "/api/departments"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]), "{uri}");
    }
}
