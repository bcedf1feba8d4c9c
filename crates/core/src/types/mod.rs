//! Core types for Camiseta.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cep;
pub mod price;

pub use cep::{Cep, CepError};
pub use price::{CurrencyCode, Price};
