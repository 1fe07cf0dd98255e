// End-to-end behaviour of the token codec through its public API.

use std::sync::Arc;

use ggnet_backend::auth::claims::{Claims, TOKEN_TTL_SECS};
use ggnet_backend::auth::clock::{FixedClock, SystemClock};
use ggnet_backend::auth::token::{TokenCodec, TokenRejection};
use ggnet_backend::state::security_config::SigningScheme;

use crate::support::auth::{test_security, TEST_NOW};

const SCHEMES: [SigningScheme; 2] = [SigningScheme::Legacy, SigningScheme::Hs256];

#[test]
fn issue_validate_then_forge_expired() {
    for scheme in SCHEMES {
        let codec = TokenCodec::new(&test_security(scheme));

        let token = codec.issue(42, "a@b.com", "Ana").unwrap();
        let claims = codec.validate(&token).expect("fresh token should validate");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), TOKEN_TTL_SECS);

        // Same claims and signature derivation, expiry one second ago.
        let now = claims.iat.unwrap();
        let expired = Claims {
            exp: Some(now - 1),
            ..claims
        };
        let forged = codec.encode_claims(&expired).unwrap();
        assert!(codec.validate(&forged).is_none(), "{scheme:?}");
    }
}

#[test]
fn system_clock_stamps_current_time() {
    let codec = TokenCodec::with_clock(
        &test_security(SigningScheme::Legacy),
        Arc::new(SystemClock),
    );
    let before = time::OffsetDateTime::now_utc().unix_timestamp();

    let claims = codec
        .validate(&codec.issue(1, "x@y.z", "X").unwrap())
        .unwrap();
    let after = time::OffsetDateTime::now_utc().unix_timestamp();

    let iat = claims.iat.unwrap();
    assert!(before <= iat && iat <= after);
}

#[test]
fn token_dies_exactly_after_seven_days() {
    let clock = Arc::new(FixedClock::at(TEST_NOW));
    let codec = TokenCodec::with_clock(&test_security(SigningScheme::Hs256), clock.clone());
    let token = codec.issue(9, "x@y.z", "X").unwrap();

    clock.set(TEST_NOW + TOKEN_TTL_SECS);
    assert!(codec.validate(&token).is_some());

    clock.set(TEST_NOW + TOKEN_TTL_SECS + 1);
    assert_eq!(codec.verify(&token), Err(TokenRejection::Expired));
}

#[test]
fn validation_is_shareable_across_threads() {
    let codec = TokenCodec::new(&test_security(SigningScheme::Legacy));
    let token = codec.issue(5, "x@y.z", "X").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let codec = codec.clone();
            let token = token.clone();
            std::thread::spawn(move || codec.validate(&token).map(|c| c.user_id))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(5));
    }
}
