// The CurrentUser extractor: every credential problem is the same 401.

use actix_web::http::StatusCode;
use actix_web::{test, web};
use ggnet_backend::auth::claims::{Claims, TOKEN_TTL_SECS};
use ggnet_backend::error::{AppError, UNAUTHORIZED_DETAIL};
use ggnet_backend::extractors::current_user::CurrentUser;
use ggnet_backend::state::security_config::SigningScheme;

use crate::common::assert_problem_details;
use crate::support::auth::{bearer, pinned_state, TEST_NOW};
use crate::support::create_test_app;

async fn whoami(current_user: CurrentUser) -> Result<web::Json<Claims>, AppError> {
    Ok(web::Json(current_user.claims))
}

fn mount(cfg: &mut web::ServiceConfig) {
    cfg.route("/test-auth/me", web::get().to(whoami));
}

#[actix_web::test]
async fn valid_token_yields_claims() {
    let (state, _) = pinned_state(SigningScheme::Legacy);
    let token = state.tokens.issue(42, "a@b.com", "Ana").unwrap();
    let app = create_test_app(state).with_routes(mount).build().await;

    let req = test::TestRequest::get()
        .uri("/test-auth/me")
        .insert_header(("Authorization", bearer(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["userId"], 42);
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["displayName"], "Ana");
    assert_eq!(body["exp"], TEST_NOW + TOKEN_TTL_SECS);
}

#[actix_web::test]
async fn every_failure_is_the_same_unauthorized() {
    let (state, _) = pinned_state(SigningScheme::Hs256);
    let good = state.tokens.issue(42, "a@b.com", "Ana").unwrap();

    let mut expired_claims = Claims::issued_at(42, "a@b.com", "Ana", TEST_NOW);
    expired_claims.exp = Some(TEST_NOW - 1);
    let expired = state.tokens.encode_claims(&expired_claims).unwrap();

    let mut tampered = good.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let app = create_test_app(state).with_routes(mount).build().await;

    let cases: Vec<Option<String>> = vec![
        None,
        Some("Token abc".to_string()),
        Some("Bearer ".to_string()),
        Some(bearer("only.two")),
        Some(bearer(&format!("{good}.extra"))),
        Some(bearer(&expired)),
        Some(bearer(&tampered)),
    ];

    for header in cases {
        let mut req = test::TestRequest::get().uri("/test-auth/me");
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }
        let resp = test::call_service(&app, req.to_request()).await;

        assert_problem_details(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            Some(UNAUTHORIZED_DETAIL),
        )
        .await;
    }
}

#[actix_web::test]
async fn token_expires_while_clock_advances() {
    let (state, clock) = pinned_state(SigningScheme::Legacy);
    let token = state.tokens.issue(7, "x@y.z", "X").unwrap();
    let app = create_test_app(state).with_routes(mount).build().await;

    let call = |token: &str| {
        test::TestRequest::get()
            .uri("/test-auth/me")
            .insert_header(("Authorization", bearer(token)))
            .to_request()
    };

    let resp = test::call_service(&app, call(&token)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    clock.advance(TOKEN_TTL_SECS + 1);
    let resp = test::call_service(&app, call(&token)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
