//! Integration tests entry point
//!
//! Discovers the tests under `tests/integration/`.

mod integration;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_tests_module_loads() {
        integration::init_test_env();
    }
}
