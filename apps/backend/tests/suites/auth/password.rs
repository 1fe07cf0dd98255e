// Password verifier scenarios.

use ggnet_backend::auth::password::{check_password_policy, derive_password_verifier};
use ggnet_backend::state::security_config::SigningScheme;
use proptest::prelude::*;

use crate::support::auth::test_security;

#[test]
fn same_password_same_digest() {
    let security = test_security(SigningScheme::Legacy);

    let first = derive_password_verifier("secret1", &security);
    let second = derive_password_verifier("secret1", &security);

    assert_eq!(first, second);
    assert_ne!(first, derive_password_verifier("secret2", &security));
}

#[test]
fn verifier_does_not_depend_on_token_scheme() {
    assert_eq!(
        derive_password_verifier("secret1", &test_security(SigningScheme::Legacy)),
        derive_password_verifier("secret1", &test_security(SigningScheme::Hs256)),
    );
}

#[test]
fn short_password_is_a_validation_error() {
    let err = check_password_policy("abc").unwrap_err();
    assert_eq!(err.code(), "PASSWORD_TOO_SHORT");
    assert_eq!(err.status().as_u16(), 400);
}

proptest! {
    #[test]
    fn distinct_passwords_get_distinct_digests(a in "\\PC{6,32}", b in "\\PC{6,32}") {
        prop_assume!(a != b);
        let security = test_security(SigningScheme::Legacy);

        prop_assert_ne!(
            derive_password_verifier(&a, &security),
            derive_password_verifier(&b, &security)
        );
    }
}
