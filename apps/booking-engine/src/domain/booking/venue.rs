//! Venue entity and directory port.
//!
//! Venues are owned by another system; this component only reads them to
//! resolve names and price reservations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::booking::errors::BookingError;
use crate::domain::shared::{Money, VenueId};

/// A bookable space with a name and hourly price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    id: VenueId,
    name: String,
    hourly_price: Money,
}

impl Venue {
    /// Create a venue record.
    #[must_use]
    pub fn new(id: VenueId, name: impl Into<String>, hourly_price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            hourly_price,
        }
    }

    /// Venue identifier.
    #[must_use]
    pub const fn id(&self) -> VenueId {
        self.id
    }

    /// Unique lookup name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cost per reserved hour.
    #[must_use]
    pub const fn hourly_price(&self) -> Money {
        self.hourly_price
    }
}

/// Read-only lookup of venues by name.
///
/// This is a domain port implemented by adapters in the infrastructure
/// layer.
#[async_trait]
pub trait VenueDirectory: Send + Sync {
    /// Resolve a venue by its unique name.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Storage` if the lookup itself fails; a
    /// missing venue is `Ok(None)`.
    async fn find_by_name(&self, name: &str) -> Result<Option<Venue>, BookingError>;
}
