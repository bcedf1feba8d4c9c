//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Product detail page
//! GET  /health        - Health check
//!
//! # Selection (HTMX fragments)
//! POST /select/color  - Select color (returns selection panel fragment)
//! POST /select/size   - Select size (returns selection panel fragment)
//! POST /cep           - CEP input changed (returns delivery widget fragment)
//!
//! # Cart
//! POST /cart/add      - Add to cart (presentational; returns confirmation fragment)
//! ```

pub mod cart;
pub mod product;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the selection fragment routes router.
pub fn selection_routes() -> Router<AppState> {
    Router::new()
        .route("/color", post(product::select_color))
        .route("/size", post(product::select_size))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product detail page
        .route("/", get(product::show))
        // Selection fragments
        .nest("/select", selection_routes())
        // Delivery lookup fragment
        .route("/cep", post(product::check_delivery))
        // Cart (presentational only)
        .route("/cart/add", post(cart::add))
}
