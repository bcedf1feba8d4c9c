//! Selection state and its controller.
//!
//! All page interactions funnel through [`SelectionController`]: picking a
//! color or size, typing into the CEP field. Every mutation is mirrored
//! into the expiring store under its own key, and the initial state is
//! seeded from that store field by field, so a reload within the expiry
//! window restores the visitor's choices.

use camiseta_core::{Cep, Price};
use tokio::sync::Mutex;

use crate::catalog::{Catalog, Color, Size};
use crate::storage::{ExpiringStore, StorageError, keys};
use crate::viacep::{Address, ViaCepClient, ViaCepError};

/// User-visible lookup failure, shown inline next to the CEP field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMessage {
    /// Code is well-formed but the service does not know it.
    NotFound,
    /// Transport failure, bad status, or unreadable response.
    Failed,
}

impl LookupMessage {
    /// Inline message text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::NotFound => "CEP not found",
            Self::Failed => "Error fetching address",
        }
    }
}

/// The page's mutable state.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Chosen size; always one of the catalog sizes.
    pub size: Size,
    /// Chosen color; always one of the catalog colors.
    pub color: Color,
    /// Displayed image. Derived from the color on selection, but cached
    /// under its own key, so it is carried as its own field.
    pub main_image: String,
    /// CEP input as typed, reduced to 0-8 digits.
    pub cep_input: String,
    /// Resolved address; `Some` only after a successful lookup for the
    /// current complete code.
    pub address: Option<Address>,
    /// Inline lookup error, if the last lookup failed.
    pub error: Option<LookupMessage>,
}

/// Drives the selection state: applies user events, persists each field,
/// and runs CEP lookups.
///
/// Lookup failures become page state ([`Selection::error`]), never a
/// handler error. Only storage writes propagate as [`StorageError`];
/// storage reads degrade silently to defaults.
pub struct SelectionController {
    catalog: Catalog,
    cache: ExpiringStore,
    viacep: ViaCepClient,
    selection: Mutex<Selection>,
}

impl SelectionController {
    /// Build a controller, seeding every selection field from the cache.
    ///
    /// Each field falls back to its catalog default independently: a stale
    /// `selectedColor` does not discard a fresh `cep`.
    #[must_use]
    pub fn load(catalog: Catalog, cache: ExpiringStore, viacep: ViaCepClient) -> Self {
        let selection = Selection {
            size: cache.read(keys::SELECTED_SIZE, catalog.default_size()),
            color: cache.read(keys::SELECTED_COLOR, catalog.default_color()),
            main_image: cache.read(keys::MAIN_IMAGE, catalog.default_image().to_string()),
            cep_input: cache.read(keys::CEP, String::new()),
            address: cache.read(keys::ADDRESS, None),
            error: None,
        };

        Self {
            catalog,
            cache,
            viacep,
            selection: Mutex::new(selection),
        }
    }

    /// The product catalog behind this controller.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current state, cloned.
    pub async fn snapshot(&self) -> Selection {
        self.selection.lock().await.clone()
    }

    /// Price of the selected size.
    #[must_use]
    pub fn price(&self, selection: &Selection) -> Price {
        self.catalog.price(selection.size)
    }

    /// Select a color: switches the displayed image to that color's
    /// catalog image and persists both fields.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting either field fails.
    pub async fn select_color(&self, color: Color) -> Result<Selection, StorageError> {
        let mut selection = self.selection.lock().await;
        selection.color = color;
        selection.main_image = self.catalog.image(color).to_string();

        self.cache.write(keys::SELECTED_COLOR, &selection.color)?;
        self.cache.write(keys::MAIN_IMAGE, &selection.main_image)?;
        Ok(selection.clone())
    }

    /// Select a size and persist it. The displayed price follows the size
    /// by catalog lookup, so there is nothing else to update.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the size fails.
    pub async fn select_size(&self, size: Size) -> Result<Selection, StorageError> {
        let mut selection = self.selection.lock().await;
        selection.size = size;

        self.cache.write(keys::SELECTED_SIZE, &selection.size)?;
        Ok(selection.clone())
    }

    /// Apply a change to the CEP input.
    ///
    /// The raw value is reduced to at most 8 digits. An incomplete code
    /// clears the address and any error without querying. A complete code
    /// always issues a fresh lookup; the lock is not held across the
    /// request, and whichever lookup completes last wins.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the code or address fails.
    /// Lookup failures do not error; they set [`Selection::error`].
    pub async fn set_postal_code(&self, raw: &str) -> Result<Selection, StorageError> {
        let digits = Cep::normalize(raw);

        let Ok(cep) = Cep::parse(&digits) else {
            let mut selection = self.selection.lock().await;
            selection.cep_input = digits;
            selection.address = None;
            selection.error = None;
            self.cache.write(keys::CEP, &selection.cep_input)?;
            self.cache.write(keys::ADDRESS, &selection.address)?;
            return Ok(selection.clone());
        };

        {
            let mut selection = self.selection.lock().await;
            selection.cep_input = digits;
            self.cache.write(keys::CEP, &selection.cep_input)?;
        }

        self.run_lookup(&cep).await
    }

    async fn run_lookup(&self, cep: &Cep) -> Result<Selection, StorageError> {
        let outcome = self.viacep.lookup(cep).await;

        let mut selection = self.selection.lock().await;
        match outcome {
            Ok(address) => {
                selection.address = Some(address);
                selection.error = None;
            }
            Err(ViaCepError::NotFound(_)) => {
                tracing::debug!(cep = %cep, "CEP not found");
                selection.address = None;
                selection.error = Some(LookupMessage::NotFound);
            }
            Err(err) => {
                tracing::warn!(cep = %cep, error = %err, "CEP lookup failed");
                selection.address = None;
                selection.error = Some(LookupMessage::Failed);
            }
        }
        self.cache.write(keys::ADDRESS, &selection.address)?;
        Ok(selection.clone())
    }
}
