//! Loading shipping zones and methods for the rate resolver.
//!
//! The resolver in `shipping-core` never fetches anything itself. This crate
//! is the collaborator that does: a [`RateSource`] produces a
//! [`RateSnapshot`], and the snapshot's zones and active methods are handed
//! to the resolver.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipping_core::{ShippingQuery, ShippingRateResolver};
//! use shipping_data::{FileRateSource, RateSource};
//!
//! let snapshot = FileRateSource::new("rates.json").load()?;
//! let resolver = ShippingRateResolver::default();
//!
//! let decision = resolver.resolve(
//!     &snapshot.zones,
//!     &snapshot.active_methods(),
//!     &ShippingQuery::new("10001"),
//! )?;
//! println!("Shipping: {}", decision.final_shipping_cost);
//! ```

mod error;
mod snapshot;
mod source;

pub use error::SourceError;
pub use snapshot::{PostalOverlap, RateSnapshot};
pub use source::{parse_snapshot, FileRateSource, RateFormat, RateSource, StaticRateSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        parse_snapshot, FileRateSource, PostalOverlap, RateFormat, RateSnapshot, RateSource,
        SourceError, StaticRateSource,
    };
}
