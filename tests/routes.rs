use actix_web::http::{StatusCode, header};
use actix_web::{App, test};
use serde_json::{Value, json};

use referral_admin::routes;

mod common;

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(common::app_data(common::seeded_repo()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn merchant_tier_tab_is_paginated_with_stats() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/merchants?tier=T1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["records"]["total_items"], 12);
    assert_eq!(body["records"]["total_pages"], 2);
    assert_eq!(body["records"]["items"].as_array().unwrap().len(), 10);
    assert_eq!(body["records"]["pages"], json!([1, 2]));
    assert_eq!(body["stats"]["total"], 24);
    assert_eq!(body["alerts"], json!([]));
    assert_eq!(body["records"]["items"][0]["join"], "01-11-2025 13:00");
}

#[actix_web::test]
async fn merchant_search_is_trimmed_and_echoed() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/merchants?search=%20johor%20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["search_query"], "johor");
    assert_eq!(body["records"]["total_items"], 5);
}

#[actix_web::test]
async fn page_past_the_end_shows_last_page() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/agents?page=9")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["records"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["records"]["total_items"], 5);
    assert_eq!(body["records"]["total_pages"], 1);
    assert_eq!(body["records"]["page"], 1);
}

#[actix_web::test]
async fn max_page_is_clamped_without_overflow() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/merchants?page={}", usize::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["records"]["page"], 3);
    assert_eq!(body["records"]["pages"], json!([1, 2, 3]));
    assert_eq!(body["records"]["items"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn page_zero_shows_first_page() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/merchants?page=0")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["records"]["page"], 1);
    assert_eq!(body["records"]["items"].as_array().unwrap().len(), 10);
}

#[actix_web::test]
async fn unknown_merchant_is_404() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/merchants/Mer99999")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_tier_is_400() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/merchants?tier=gold")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["message"], "invalid tier: gold");
}

#[actix_web::test]
async fn merchant_export_is_filtered_csv() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/merchants/export.csv?tier=T3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert_eq!(text.lines().count(), 6);
    assert!(text.starts_with("id,name,type,state,join,status,tier"));
}

#[actix_web::test]
async fn transaction_export_ignores_page() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/transactions/export.csv?search=success&page=3")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert_eq!(text.lines().count(), 4);
}

#[actix_web::test]
async fn approving_pending_withdrawal_moves_it_to_history() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/withdrawals/AP123455551/approve")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Approved");
    assert_eq!(body["alerts"][0]["level"], "success");
    assert_eq!(body["alerts"][0]["message"], "Withdrawal AP123455551 approved.");

    let req = test::TestRequest::get()
        .uri("/api/v1/withdrawals")
        .to_request();
    let pending: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pending["records"]["total_items"], 4);
    assert_eq!(pending["stats"]["approved"], 6);
}

#[actix_web::test]
async fn approving_decided_withdrawal_is_409() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/withdrawals/AP123455601/approve")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["message"], "Withdrawal AP123455601 is already rejected.");
    assert_eq!(body["alerts"][0]["level"], "error");
}

#[actix_web::test]
async fn rejecting_requires_a_reason() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/withdrawals/AP123455552/reject")
        .set_json(json!({ "reason": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn malformed_json_is_400_with_message() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/withdrawals/AP123455552/reject")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;

    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn withdrawal_history_filters_by_status() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/withdrawals/history?status=rejected&search=8%2C500")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["records"]["total_items"], 1);
    assert_eq!(body["records"]["items"][0]["reason"], "Wallet verification failed");
}

#[actix_web::test]
async fn logs_apply_level_and_status_filters() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/logs?level=WARNING&status=429")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["records"]["total_items"], 1);
    assert_eq!(body["records"]["items"][0]["endpoint"], "/api/rate-limit");
}

#[actix_web::test]
async fn account_lifecycle() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(json!({
            "username": "auditor1",
            "email": "auditor1@nbn.com",
            "character": "Auditor",
            "password": "s3cret-pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], "006");
    assert_eq!(created["character"], "Auditor");
    assert_eq!(created["alerts"][0]["message"], "Account created successfully.");

    let req = test::TestRequest::delete()
        .uri("/api/v1/accounts/003")
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["id"], "003");

    let req = test::TestRequest::get()
        .uri("/api/v1/accounts?search=inactive")
        .to_request();
    let inactive: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(inactive["records"]["total_items"], 1);
    assert_eq!(inactive["records"]["items"][0]["id"], "005");
}

#[actix_web::test]
async fn duplicate_username_is_409() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(json!({
            "username": "finance2",
            "email": "someone@nbn.com",
            "character": "Finance",
            "password": "s3cret-pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn adding_merchant_returns_created_record() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/merchants")
        .set_json(json!({
            "merchantGroup": "T2",
            "email": "owner@laundry.my",
            "companyName": "Dobi Express",
            "ssmNumber": "202401000001",
            "merchantType": "Others",
            "merchantTypeOther": "Laundry",
            "state": "Penang",
            "walletAddress": "0x52908400098527886E0F7030069857D2E4169EE7"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], "Mer12368");
    assert_eq!(created["type"], "Laundry");
    assert_eq!(created["tier"], "T2");

    let req = test::TestRequest::get()
        .uri("/api/v1/merchants?tier=T2&search=laundry")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["records"]["total_items"], 1);
    assert_eq!(listed["stats"]["t2"], 8);
}

#[actix_web::test]
async fn agent_network_filters_level_then_search() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/agents/T1234567890/network?level=level2&search=a000002")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["records"]["total_items"], 2);
    assert_eq!(body["records"]["items"][0]["id"], "A000008");
    assert_eq!(body["records"]["items"][0]["referrer"], "A000002");
    assert_eq!(body["records"]["items"][0]["volume"], "45,300.00");
    assert_eq!(body["records"]["items"][0]["sponsorL1"], 130);
}

#[actix_web::test]
async fn agent_network_rejects_unknown_level_and_agent() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/agents/T1234567890/network?level=level3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "invalid level: level3");

    let req = test::TestRequest::get()
        .uri("/api/v1/agents/T0000000000/network")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn detail_endpoints_return_single_records() {
    let app = app!();

    for (uri, id) in [
        ("/api/v1/agents/T1234567890", "T1234567890"),
        ("/api/v1/users/U1234567891", "U1234567891"),
        ("/api/v1/transactions/T000003", "T000003"),
        ("/api/v1/accounts/002", "002"),
        ("/api/v1/bonuses/tx-q7r8s9t0", "tx-q7r8s9t0"),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], id);
        assert_eq!(body["alerts"], json!([]));
    }
}

#[actix_web::test]
async fn unknown_detail_records_are_404() {
    let app = app!();

    for uri in [
        "/api/v1/agents/T0000000000",
        "/api/v1/users/U0000000000",
        "/api/v1/transactions/T999999",
        "/api/v1/accounts/999",
        "/api/v1/bonuses/tx-missing",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn transaction_detail_does_not_shadow_export() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/transactions/export.csv")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
}

#[actix_web::test]
async fn bonus_unclaims_filter_by_tier() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/bonuses/unclaims?tier=system")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["records"]["total_items"], 2);
    assert_eq!(body["records"]["items"][0]["id"], "U000001");
    assert_eq!(body["records"]["items"][0]["bonus"], "10,000.00");
    assert_eq!(body["records"]["items"][0]["update"], "01-11-2025 13:00");
    assert_eq!(body["records"]["items"][1]["bonusTier"], "System");
}

#[actix_web::test]
async fn bonus_claims_accept_tier_tab() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/bonuses?tier=Agent")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["records"]["total_items"], 1);
    assert_eq!(body["records"]["items"][0]["id"], "tx-i9j0k1l2");

    let req = test::TestRequest::get()
        .uri("/api/v1/bonuses/unclaims?tier=gold")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
