use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    server::router(engine::Engine::builder().database(db).build())
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_and_list_habits() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(request("POST", "/habits", Some(json!({"name": "Exercise"}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let habit = body_json(response).await;
    assert_eq!(habit["name"], "Exercise");

    let response = app
        .oneshot(request("GET", "/habits", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list["habits"].as_array().unwrap().len(), 1);
    assert_eq!(list["habits"][0]["name"], "Exercise");
}

#[tokio::test]
async fn empty_habit_name_is_unprocessable() {
    let app = app().await;

    let response = app
        .oneshot(request("POST", "/habits", Some(json!({"name": "   "}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn toggle_fills_the_month_grid() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(request("POST", "/habits", Some(json!({"name": "Exercise"}))))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/habits/{id}/days"),
            Some(json!({"date": "2024-01-05", "completed": true})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request(
            "GET",
            &format!("/habits/{id}/grid?year=2024&month=1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let grid = body_json(response).await;
    let days = grid["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[4], true);
    assert_eq!(days.iter().filter(|day| **day == true).count(), 1);
}

#[tokio::test]
async fn toggle_unknown_habit_is_not_found() {
    let app = app().await;

    let response = app
        .oneshot(request(
            "PUT",
            "/habits/999/days",
            Some(json!({"date": "2024-01-05", "completed": true})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn grid_with_bad_month_is_unprocessable() {
    let app = app().await;

    let response = app
        .oneshot(request("GET", "/habits/1/grid?year=2024&month=13", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_habit_is_idempotent() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(request("POST", "/habits", Some(json!({"name": "Exercise"}))))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/habits/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Unknown ids are a no-op, never an error.
    let response = app
        .oneshot(request("DELETE", &format!("/habits/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn expenses_drive_card_debt() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/expenses",
            Some(json!({
                "date": "2024-03-10",
                "amount_minor": 4250,
                "card_used": "Visa Gold",
                "category": "food",
                "description": null
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(request("GET", "/stats/debt", None))
        .await
        .unwrap();
    let debt = body_json(response).await;
    assert_eq!(debt["total_minor"], 4250);
    assert_eq!(debt["cards"][0]["card_name"], "Visa Gold");
    assert_eq!(debt["cards"][0]["debt_minor"], 4250);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/expenses",
            Some(json!({
                "date": "2024-03-11",
                "amount_minor": 750,
                "card_used": "Visa Gold",
                "category": "entertainment",
                "description": "cinema"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(request("GET", "/stats/debt", None))
        .await
        .unwrap();
    let debt = body_json(response).await;
    assert_eq!(debt["total_minor"], 5000);
    assert_eq!(debt["cards"][0]["debt_minor"], 5000);
}

#[tokio::test]
async fn negative_expense_amount_is_unprocessable() {
    let app = app().await;

    let response = app
        .oneshot(request(
            "POST",
            "/expenses",
            Some(json!({
                "date": "2024-03-10",
                "amount_minor": -1,
                "card_used": "Visa Gold",
                "category": "food",
                "description": null
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = app().await;

    let response = app
        .oneshot(request(
            "POST",
            "/expenses",
            Some(json!({
                "date": "2024-03-10",
                "amount_minor": 100,
                "card_used": "Visa Gold",
                "category": "lottery",
                "description": null
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn category_stats_are_year_scoped() {
    let app = app().await;

    for (date, amount, category) in [
        ("2024-03-10", 4250, "food"),
        ("2024-07-02", 1000, "food"),
        ("2023-12-31", 9999, "shopping"),
    ] {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/expenses",
                Some(json!({
                    "date": date,
                    "amount_minor": amount,
                    "card_used": "Visa Gold",
                    "category": category,
                    "description": null
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(request("GET", "/stats/categories?year=2024", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    let totals = stats["totals"].as_array().unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0]["category"], "food");
    assert_eq!(totals[0]["total_minor"], 5250);
}

#[tokio::test]
async fn recent_expenses_are_newest_first() {
    let app = app().await;

    for (date, amount) in [("2024-03-10", 100), ("2024-03-12", 200), ("2024-03-12", 300)] {
        app.clone()
            .oneshot(request(
                "POST",
                "/expenses",
                Some(json!({
                    "date": date,
                    "amount_minor": amount,
                    "card_used": "Visa Gold",
                    "category": "food",
                    "description": null
                })),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(request("GET", "/expenses?limit=2", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let expenses = list["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0]["amount_minor"], 300);
    assert_eq!(expenses[1]["amount_minor"], 200);
}
