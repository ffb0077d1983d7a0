//! Shipping zone matching and rate resolution for the storefront checkout.
//!
//! - **Zones**: named cost brackets keyed by exact postal codes
//! - **Methods**: delivery-speed tiers with their own surcharge
//! - **Resolver**: turns a destination, subtotal and weight into a
//!   [`PricingDecision`]
//!
//! # Example
//!
//! ```
//! use shipping_core::prelude::*;
//!
//! let zone = ShippingZone::new(
//!     "z1",
//!     "Metro",
//!     Money::new(50, Currency::USD),
//!     Money::new(10, Currency::USD),
//!     Money::new(500, Currency::USD),
//!     "3-5 days",
//! )
//! .with_postal_codes(["10001"]);
//!
//! let query = ShippingQuery::new("10001")
//!     .with_subtotal(Money::new(100, Currency::USD))
//!     .with_weight(Weight::units(2));
//!
//! let decision = resolve_shipping(&[zone], &[], &query).unwrap();
//! assert_eq!(decision.final_shipping_cost.amount_cents, 70);
//! ```

pub mod config;
pub mod decision;
pub mod error;
pub mod ids;
pub mod method;
pub mod money;
pub mod query;
pub mod resolver;
pub mod weight;
pub mod zone;

pub use config::{FallbackMethodPolicy, ResolverConfig};
pub use decision::{PricingDecision, QuotedMethod};
pub use error::ShippingError;
pub use ids::{ShippingMethodId, ZoneId};
pub use method::ShippingMethod;
pub use money::{Currency, Money};
pub use query::ShippingQuery;
pub use resolver::{resolve_shipping, ShippingRateResolver};
pub use weight::Weight;
pub use zone::ShippingZone;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{FallbackMethodPolicy, ResolverConfig};
    pub use crate::decision::{PricingDecision, QuotedMethod};
    pub use crate::error::ShippingError;
    pub use crate::ids::{ShippingMethodId, ZoneId};
    pub use crate::method::ShippingMethod;
    pub use crate::money::{Currency, Money};
    pub use crate::query::ShippingQuery;
    pub use crate::resolver::{resolve_shipping, ShippingRateResolver};
    pub use crate::weight::Weight;
    pub use crate::zone::ShippingZone;
}
