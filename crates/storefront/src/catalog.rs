//! The fixed product catalog.
//!
//! Camiseta sells exactly one product. Sizes and colors are closed enums,
//! so a selection can never point outside the catalog.

use camiseta_core::{CurrencyCode, Price};
use serde::{Deserialize, Serialize};

/// Available shirt sizes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// All sizes, in the order they are rendered.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Available shirt colors, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Red,
    Blue,
}

impl Color {
    /// All colors, in the order they are rendered.
    pub const ALL: [Self; 4] = [Self::White, Self::Black, Self::Red, Self::Blue];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Blue => "Blue",
        }
    }
}

/// The product on sale: title, per-size prices, per-color images.
///
/// Immutable, defined at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    title: String,
    currency: CurrencyCode,
}

impl Catalog {
    /// The one product this storefront sells.
    #[must_use]
    pub fn premium_tshirt() -> Self {
        Self {
            title: "Premium T-Shirt".to_string(),
            currency: CurrencyCode::USD,
        }
    }

    /// Product title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Price for a given size.
    #[must_use]
    pub fn price(&self, size: Size) -> Price {
        let cents = match size {
            Size::Small => 14999,
            Size::Medium => 19999,
            Size::Large => 24999,
        };
        Price::from_cents(cents, self.currency)
    }

    /// Catalog image for a given color.
    #[must_use]
    pub const fn image(&self, color: Color) -> &'static str {
        match color {
            Color::White => "/static/camisa_branca.jpg",
            Color::Black => "/static/camisa_preta.jpg",
            Color::Red => "/static/camisa_vermelha.jpg",
            Color::Blue => "/static/camisa_azul.jpg",
        }
    }

    /// Default size: the first one in display order.
    #[must_use]
    pub const fn default_size(&self) -> Size {
        Size::Small
    }

    /// Default color: the first one in display order.
    #[must_use]
    pub const fn default_color(&self) -> Color {
        Color::White
    }

    /// Default main image: the default color's catalog image.
    #[must_use]
    pub const fn default_image(&self) -> &'static str {
        self.image(Color::White)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::premium_tshirt()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_size_has_a_price() {
        let catalog = Catalog::premium_tshirt();
        assert_eq!(catalog.price(Size::Small).to_string(), "$149.99");
        assert_eq!(catalog.price(Size::Medium).to_string(), "$199.99");
        assert_eq!(catalog.price(Size::Large).to_string(), "$249.99");
    }

    #[test]
    fn test_every_color_has_an_image() {
        let catalog = Catalog::premium_tshirt();
        for color in Color::ALL {
            assert!(catalog.image(color).ends_with(".jpg"));
        }
    }

    #[test]
    fn test_defaults_are_first_in_display_order() {
        let catalog = Catalog::premium_tshirt();
        assert_eq!(Size::ALL.first().copied(), Some(catalog.default_size()));
        assert_eq!(Color::ALL.first().copied(), Some(catalog.default_color()));
        assert_eq!(catalog.default_image(), catalog.image(Color::White));
    }

    #[test]
    fn test_size_serde_uses_labels() {
        let json = serde_json::to_string(&Size::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        let size: Size = serde_json::from_str("\"Large\"").unwrap();
        assert_eq!(size, Size::Large);
    }

    #[test]
    fn test_color_serde_uses_labels() {
        let json = serde_json::to_string(&Color::Red).unwrap();
        assert_eq!(json, "\"Red\"");
        let color: Color = serde_json::from_str("\"Blue\"").unwrap();
        assert_eq!(color, Color::Blue);
    }
}
