//! Product page route handlers.
//!
//! The page is one full render (`GET /`) plus HTMX fragment endpoints that
//! re-render the selection panel or the delivery widget after a state
//! change.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;

use crate::catalog::{Catalog, Color, Size};
use crate::error::Result;
use crate::filters;
use crate::selection::Selection;
use crate::state::AppState;
use crate::viacep::Address;

/// One size button.
#[derive(Clone)]
pub struct SizeOptionView {
    pub value: &'static str,
    pub selected: bool,
}

/// One color button / thumbnail.
#[derive(Clone)]
pub struct ColorOptionView {
    pub value: &'static str,
    pub image: &'static str,
    pub selected: bool,
}

/// Display data for the selection panel: gallery, price, size and color
/// buttons.
#[derive(Clone)]
pub struct SelectionPanelView {
    pub title: String,
    pub main_image: String,
    pub price: String,
    pub sizes: Vec<SizeOptionView>,
    pub colors: Vec<ColorOptionView>,
}

impl SelectionPanelView {
    fn build(catalog: &Catalog, selection: &Selection) -> Self {
        Self {
            title: catalog.title().to_string(),
            main_image: selection.main_image.clone(),
            price: catalog.price(selection.size).to_string(),
            sizes: Size::ALL
                .iter()
                .map(|&size| SizeOptionView {
                    value: size.label(),
                    selected: size == selection.size,
                })
                .collect(),
            colors: Color::ALL
                .iter()
                .map(|&color| ColorOptionView {
                    value: color.label(),
                    image: catalog.image(color),
                    selected: color == selection.color,
                })
                .collect(),
        }
    }
}

/// Resolved address lines for the delivery widget.
#[derive(Clone)]
pub struct AddressView {
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl From<&Address> for AddressView {
    fn from(address: &Address) -> Self {
        Self {
            cep: address.cep.clone(),
            logradouro: address.logradouro.clone(),
            bairro: address.bairro.clone(),
            localidade: address.localidade.clone(),
            uf: address.uf.clone(),
        }
    }
}

/// Display data for the delivery widget: input value, resolved address or
/// inline error.
#[derive(Clone)]
pub struct CepWidgetView {
    pub value: String,
    pub error: Option<&'static str>,
    pub address: Option<AddressView>,
}

impl CepWidgetView {
    fn build(selection: &Selection) -> Self {
        Self {
            value: selection.cep_input.clone(),
            error: selection.error.map(crate::selection::LookupMessage::text),
            address: selection.address.as_ref().map(AddressView::from),
        }
    }
}

/// Color selection form data.
#[derive(Debug, Deserialize)]
pub struct ColorForm {
    pub color: Color,
}

/// Size selection form data.
#[derive(Debug, Deserialize)]
pub struct SizeForm {
    pub size: Size,
}

/// CEP input form data. Arbitrary text; normalization happens in the
/// controller.
#[derive(Debug, Deserialize)]
pub struct CepForm {
    pub cep: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product/show.html")]
pub struct ProductShowTemplate {
    pub panel: SelectionPanelView,
    pub cep: CepWidgetView,
}

/// Selection panel fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/selection_panel.html")]
pub struct SelectionPanelTemplate {
    pub panel: SelectionPanelView,
}

/// Delivery widget fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cep_widget.html")]
pub struct CepWidgetTemplate {
    pub cep: CepWidgetView,
}

/// Display the product detail page with the current (cache-seeded)
/// selection.
pub async fn show(State(state): State<AppState>) -> ProductShowTemplate {
    let selection = state.selection().snapshot().await;

    ProductShowTemplate {
        panel: SelectionPanelView::build(state.catalog(), &selection),
        cep: CepWidgetView::build(&selection),
    }
}

/// Apply a color selection and re-render the selection panel.
pub async fn select_color(
    State(state): State<AppState>,
    Form(form): Form<ColorForm>,
) -> Result<SelectionPanelTemplate> {
    let selection = state.selection().select_color(form.color).await?;

    Ok(SelectionPanelTemplate {
        panel: SelectionPanelView::build(state.catalog(), &selection),
    })
}

/// Apply a size selection and re-render the selection panel.
pub async fn select_size(
    State(state): State<AppState>,
    Form(form): Form<SizeForm>,
) -> Result<SelectionPanelTemplate> {
    let selection = state.selection().select_size(form.size).await?;

    Ok(SelectionPanelTemplate {
        panel: SelectionPanelView::build(state.catalog(), &selection),
    })
}

/// Apply a CEP input change and re-render the delivery widget.
///
/// A complete 8-digit code triggers the address lookup before rendering;
/// lookup failures surface as the widget's inline message, not as an HTTP
/// error.
pub async fn check_delivery(
    State(state): State<AppState>,
    Form(form): Form<CepForm>,
) -> Result<CepWidgetTemplate> {
    let selection = state.selection().set_postal_code(&form.cep).await?;

    Ok(CepWidgetTemplate {
        cep: CepWidgetView::build(&selection),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::selection::LookupMessage;
    use crate::viacep::Address;

    fn selection() -> Selection {
        Selection {
            size: Size::Medium,
            color: Color::Red,
            main_image: "/static/camisa_vermelha.jpg".to_string(),
            cep_input: "01310100".to_string(),
            address: None,
            error: None,
        }
    }

    #[test]
    fn test_panel_view_marks_selected_options() {
        let view = SelectionPanelView::build(&Catalog::premium_tshirt(), &selection());

        assert_eq!(view.price, "$199.99");
        assert_eq!(view.main_image, "/static/camisa_vermelha.jpg");

        let selected_sizes: Vec<_> = view
            .sizes
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.value)
            .collect();
        assert_eq!(selected_sizes, ["Medium"]);

        let selected_colors: Vec<_> = view
            .colors
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.value)
            .collect();
        assert_eq!(selected_colors, ["Red"]);
    }

    #[test]
    fn test_cep_view_with_address() {
        let mut selection = selection();
        selection.address = Some(Address {
            cep: "01310-100".to_string(),
            logradouro: "Avenida Paulista".to_string(),
            bairro: "Bela Vista".to_string(),
            localidade: "São Paulo".to_string(),
            uf: "SP".to_string(),
        });

        let view = CepWidgetView::build(&selection);
        assert_eq!(view.value, "01310100");
        assert!(view.error.is_none());
        assert_eq!(view.address.unwrap().localidade, "São Paulo");
    }

    #[test]
    fn test_cep_view_with_error() {
        let mut selection = selection();
        selection.error = Some(LookupMessage::NotFound);

        let view = CepWidgetView::build(&selection);
        assert!(view.address.is_none());
        assert_eq!(view.error, Some("CEP not found"));
    }

    #[test]
    fn test_page_template_renders() {
        let sel = selection();
        let template = ProductShowTemplate {
            panel: SelectionPanelView::build(&Catalog::premium_tshirt(), &sel),
            cep: CepWidgetView::build(&sel),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Premium T-Shirt"));
        assert!(html.contains("$199.99"));
        assert!(html.contains("camisa_vermelha.jpg"));
        assert!(html.contains("01310100"));
    }

    #[test]
    fn test_widget_template_renders_inline_error() {
        let mut sel = selection();
        sel.error = Some(LookupMessage::Failed);
        let template = CepWidgetTemplate {
            cep: CepWidgetView::build(&sel),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Error fetching address"));
    }
}
