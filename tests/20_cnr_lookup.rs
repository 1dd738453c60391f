mod common;

use std::sync::Arc;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use casedesk_api::ecourts::{CaseProvider, LookupResult};

fn provider(p: impl CaseProvider + 'static) -> Option<Arc<dyn CaseProvider>> {
    Some(Arc::new(p))
}

async fn post_cnr(base_url: &str, body: Value) -> Result<(StatusCode, Value)> {
    let res = reqwest::Client::new()
        .post(format!("{}/api/ecourts/cnr", base_url))
        .json(&body)
        .send()
        .await?;
    let status = res.status();
    Ok((status, res.json::<Value>().await?))
}

#[tokio::test]
async fn empty_body_is_missing_cnr() -> Result<()> {
    let server = common::spawn_app(provider(common::StaticProvider(common::sample_case())), None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({})).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "MISSING_CNR", "message": "CNR number is required" })
    );
    Ok(())
}

#[tokio::test]
async fn empty_cnr_is_missing_cnr() -> Result<()> {
    let server = common::spawn_app(provider(common::StaticProvider(common::sample_case())), None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({ "cnr": "" })).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MISSING_CNR");
    Ok(())
}

#[tokio::test]
async fn falsy_cnr_values_are_missing_cnr() -> Result<()> {
    let server = common::spawn_app(provider(common::StaticProvider(common::sample_case())), None).await?;

    for cnr in [json!(false), json!(0), json!(null)] {
        let (status, body) = post_cnr(&server.base_url, json!({ "cnr": cnr })).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "cnr {cnr}");
        assert_eq!(body["error"], "MISSING_CNR", "cnr {cnr}");
    }
    Ok(())
}

#[tokio::test]
async fn non_string_cnr_is_invalid_json() -> Result<()> {
    let server = common::spawn_app(provider(common::StaticProvider(common::sample_case())), None).await?;

    for cnr in [json!(true), json!(42), json!(["MHAU010012342023"])] {
        let (status, body) = post_cnr(&server.base_url, json!({ "cnr": cnr })).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "cnr {cnr}");
        assert_eq!(body["error"], "INVALID_JSON", "cnr {cnr}");
    }
    Ok(())
}

#[tokio::test]
async fn missing_cnr_is_checked_before_credentials() -> Result<()> {
    let server = common::spawn_app(None, None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({})).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MISSING_CNR");
    Ok(())
}

#[tokio::test]
async fn provider_result_is_relayed_verbatim() -> Result<()> {
    let expected = common::sample_case();
    let server = common::spawn_app(provider(common::StaticProvider(expected.clone())), None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({ "cnr": "1234567890123456" })).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(&expected)?);
    Ok(())
}

#[tokio::test]
async fn provider_reported_failure_still_returns_200() -> Result<()> {
    let reported = LookupResult::failed("CASE_NOT_FOUND", "No case for this CNR");
    let server = common::spawn_app(provider(common::StaticProvider(reported.clone())), None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({ "cnr": "1234567890123456" })).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(&reported)?);
    Ok(())
}

#[tokio::test]
async fn provider_fault_is_server_error() -> Result<()> {
    let server = common::spawn_app(provider(common::FailingProvider("boom")), None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({ "cnr": "1234567890123456" })).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "SERVER_ERROR", "message": "boom" }));
    Ok(())
}

#[tokio::test]
async fn provider_fault_without_message_is_unknown_server_error() -> Result<()> {
    let server = common::spawn_app(provider(common::FailingProvider("")), None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({ "cnr": "1234567890123456" })).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Unknown server error");
    Ok(())
}

#[tokio::test]
async fn unconfigured_provider_fails_closed() -> Result<()> {
    let server = common::spawn_app(None, None).await?;

    let (status, body) = post_cnr(&server.base_url, json!({ "cnr": "1234567890123456" })).await?;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "PROVIDER_NOT_CONFIGURED");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_invalid_json() -> Result<()> {
    let server = common::spawn_app(provider(common::StaticProvider(common::sample_case())), None).await?;

    let res = reqwest::Client::new()
        .post(format!("{}/api/ecourts/cnr", server.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn lookups_are_never_cached() -> Result<()> {
    let server = common::spawn_app(provider(common::StaticProvider(common::sample_case())), None).await?;

    for body in [json!({}), json!({ "cnr": "1234567890123456" })] {
        let res = reqwest::Client::new()
            .post(format!("{}/api/ecourts/cnr", server.base_url))
            .json(&body)
            .send()
            .await?;

        assert_eq!(
            res.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }
    Ok(())
}
