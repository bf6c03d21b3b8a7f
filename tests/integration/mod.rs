//! Shared setup for integration tests.

pub mod curl_workflow_test;
pub mod request_chaining_test;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes logging once per test binary. Set `RUST_LOG=debug` to see
/// what the engine absorbs.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
