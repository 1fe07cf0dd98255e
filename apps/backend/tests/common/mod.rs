#![allow(dead_code)]

// Logging is auto-installed for every test binary that includes `common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub use backend_test_support::problem_details::assert_problem_details;
