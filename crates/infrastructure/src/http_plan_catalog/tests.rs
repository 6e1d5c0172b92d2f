use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use imovel_application::PlanCatalog;
use imovel_core::AppError;
use imovel_domain::PlanLimit;
use serde_json::{Value, json};
use url::Url;

use super::{HttpPlanCatalog, price_to_cents};

fn professional_document() -> Value {
    json!({
        "name": "PROFESSIONAL",
        "displayName": "Profissional",
        "price": 149.9,
        "propertyLimit": 20,
        "tenantLimit": 40,
        "ownerLimit": 20,
        "brokerLimit": 5,
        "managerLimit": 3,
        "freeInspections": 10,
        "freeSearches": 20,
        "freeSettlements": 5,
        "freeApiCalls": -1
    })
}

async fn plan_handler(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "PROFESSIONAL" => Json(professional_document()).into_response(),
        "BROKEN" => StatusCode::BAD_GATEWAY.into_response(),
        "BLANK" => Json(json!({"name": "  "})).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_catalog_server() -> Url {
    let router = Router::new()
        .route(
            "/v1/plans",
            get(|| async { Json(json!([professional_document(), {"name": "free"}])) }),
        )
        .route("/v1/plans/{name}", get(plan_handler))
        .route(
            "/invalid/plans",
            get(|| async { Json(json!([professional_document(), {"name": "  "}])) }),
        );

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(address) = listener.local_addr() else {
        panic!("failed to read test listener address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let Ok(url) = Url::parse(format!("http://{address}/v1").as_str()) else {
        panic!("failed to build test server url");
    };
    url
}

async fn catalog() -> HttpPlanCatalog {
    let Ok(catalog) = HttpPlanCatalog::new(reqwest::Client::new(), spawn_catalog_server().await)
    else {
        panic!("test server url must be a base url");
    };
    catalog
}

#[tokio::test]
async fn find_plan_maps_remote_document() {
    let catalog = catalog().await;

    let plan = catalog.find_plan("PROFESSIONAL").await;
    assert!(matches!(plan, Ok(Some(_))));
    let Ok(Some(plan)) = plan else {
        return;
    };

    assert_eq!(plan.display_name(), "Profissional");
    assert_eq!(plan.price_cents(), 14_990);
    assert_eq!(plan.limits().properties, Some(PlanLimit::Capped(20)));
    assert_eq!(plan.allowances().api_calls, Some(PlanLimit::Unlimited));
}

#[tokio::test]
async fn unknown_plan_is_none() {
    let catalog = catalog().await;

    assert!(matches!(catalog.find_plan("GOLD").await, Ok(None)));
}

#[tokio::test]
async fn server_errors_surface_as_internal() {
    let catalog = catalog().await;

    assert!(matches!(
        catalog.find_plan("BROKEN").await,
        Err(AppError::Internal(_))
    ));
}

#[tokio::test]
async fn invalid_remote_documents_surface_as_internal() {
    let catalog = catalog().await;
    assert!(matches!(
        catalog.find_plan("BLANK").await,
        Err(AppError::Internal(_))
    ));

    let Ok(base_url) = catalog.base_url.join("/invalid") else {
        panic!("failed to build invalid listing url");
    };
    let Ok(invalid_listing) = HttpPlanCatalog::new(reqwest::Client::new(), base_url) else {
        panic!("invalid listing url must be a base url");
    };
    assert!(matches!(
        invalid_listing.list_plans().await,
        Err(AppError::Internal(_))
    ));
}

#[tokio::test]
async fn list_plans_keeps_missing_limits_unknown() {
    let catalog = catalog().await;

    let plans = catalog.list_plans().await.unwrap_or_default();
    assert_eq!(plans.len(), 2);

    let free = plans.iter().find(|plan| plan.name() == "FREE");
    assert!(free.is_some_and(|plan| plan.limits().properties.is_none()));
}

#[test]
fn non_base_url_is_rejected() {
    let Ok(url) = Url::parse("mailto:plans@example.com") else {
        panic!("fixture url must parse");
    };
    assert!(HttpPlanCatalog::new(reqwest::Client::new(), url).is_err());
}

#[test]
fn price_conversion_rounds_and_clamps() {
    assert_eq!(price_to_cents(Some(49.9)), 4_990);
    assert_eq!(price_to_cents(Some(-3.0)), 0);
    assert_eq!(price_to_cents(None), 0);
}
