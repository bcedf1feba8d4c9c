//! Cart route handlers.
//!
//! There is no cart backend; "Add to Cart" answers with a confirmation
//! fragment describing the current selection and nothing else happens.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;

/// Cart confirmation fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub title: String,
    pub size: &'static str,
    pub color: &'static str,
    pub price: String,
}

/// Acknowledge an add-to-cart click with the current selection.
pub async fn add(State(state): State<AppState>) -> CartAddedTemplate {
    let selection = state.selection().snapshot().await;
    let catalog = state.catalog();

    CartAddedTemplate {
        title: catalog.title().to_string(),
        size: selection.size.label(),
        color: selection.color.label(),
        price: catalog.price(selection.size).to_string(),
    }
}
