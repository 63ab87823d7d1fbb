//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sabor::prelude::*;
//! ```

pub use crate::error::{Result, SaborError};
pub use crate::features::{encode, FeatureVector, RestaurantInput, FEATURE_NAMES};
pub use crate::model::{ModelHandle, RatingModel, MODEL_FILE};
pub use crate::rating::{clamp_rating, Commentary, PriceCategory};
pub use crate::tables::{Cuisine, Locality};
