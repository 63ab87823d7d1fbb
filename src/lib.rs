//! Sabor: restaurant rating prediction for Delhi NCR dining data.
//!
//! Sabor encodes restaurant attributes (price, locality, cuisine mix,
//! delivery volume) into the fixed feature layout expected by a trained
//! rating regressor, loads that regressor from a compact binary artifact,
//! and presents clamped rating predictions with tiered commentary.
//!
//! # Quick Start
//!
//! ```
//! use sabor::prelude::*;
//!
//! // Describe a restaurant. Flag defaults are suggested from the main
//! // cuisine and can be overridden independently.
//! let input = RestaurantInput::for_cuisine(Cuisine::NorthIndian)
//!     .with_price(1000)
//!     .with_locality(Locality::ConnaughtPlace);
//!
//! // Encode into the 11-column layout the trained model expects.
//! let features = encode(&input);
//! assert_eq!(features.as_slice().len(), 11);
//! assert_eq!(features.as_slice()[0], 1000.0);
//! ```
//!
//! # Modules
//!
//! - [`tables`]: Fixed locality and cuisine code tables
//! - [`features`]: Restaurant inputs and the feature encoder
//! - [`rating`]: Rating clamp, commentary tiers, price categories
//! - [`serialization`]: SBR model artifact format (reader/writer)
//! - [`model`]: Trained rating model and the cached model handle
//! - [`error`]: Error types
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod features;
pub mod model;
pub mod prelude;
pub mod rating;
pub mod serialization;
pub mod tables;
