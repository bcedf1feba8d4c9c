//! Integration tests for Camiseta.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p camiseta-storefront
//!
//! # Run the end-to-end tests against it
//! cargo test -p camiseta-integration-tests -- --ignored
//! ```
//!
//! All tests live under `tests/` and are `#[ignore]`d by default because
//! they require a running server (and, for the delivery flow, outbound
//! access to the real ViaCEP service).
