//! Token issuance/validation and password verifiers.

pub mod claims;
pub mod clock;
pub mod password;
pub mod token;

pub use claims::{Claims, TOKEN_TTL_SECS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use password::{check_password_policy, derive_password_verifier, verify_password};
pub use token::{TokenCodec, TokenRejection};
