//! Restaurant inputs and the feature encoder.
//!
//! [`encode`] maps a [`RestaurantInput`] to the fixed 11-column numeric
//! layout the trained regressor was fitted on. Column order and the set of
//! derived columns are a binding contract with the model artifact — the
//! model has no schema of its own, so any reordering silently corrupts
//! predictions.
//!
//! # Examples
//!
//! ```
//! use sabor::features::{encode, RestaurantInput};
//! use sabor::tables::{Cuisine, Locality};
//!
//! let input = RestaurantInput::for_cuisine(Cuisine::NorthIndian)
//!     .with_locality(Locality::ConnaughtPlace);
//! let features = encode(&input);
//!
//! assert_eq!(
//!     features.as_slice(),
//!     &[1000.0, 1.0, 1.0, 2.0, 11.0, 3.0, 1.0, 0.0, 0.0, 0.0, 100.0]
//! );
//! ```

use crate::rating::PriceCategory;
use crate::tables::{Cuisine, Locality};

/// Number of feature columns the trained model expects.
pub const FEATURE_COUNT: usize = 11;

/// Column names in model order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "price",
    "price_thousands",
    "price_category_code",
    "locality_code",
    "cuisine_code",
    "cuisine_count",
    "is_north_indian",
    "is_chinese",
    "is_fast_food",
    "has_many_deliveries",
    "delivery_count",
];

/// Delivery counts strictly above this set the high-volume flag.
pub const HIGH_DELIVERY_THRESHOLD: u32 = 500;

/// Form bounds and defaults for price in ₹ (for two people).
pub const PRICE_MIN: u32 = 100;
pub const PRICE_MAX: u32 = 10_000;
pub const PRICE_DEFAULT: u32 = 1_000;

/// Form bounds and defaults for the number of cuisines offered.
pub const CUISINE_COUNT_MIN: u8 = 1;
pub const CUISINE_COUNT_MAX: u8 = 10;
pub const CUISINE_COUNT_DEFAULT: u8 = 3;

/// Form bounds and defaults for the delivery rating count.
pub const DELIVERY_COUNT_MIN: u32 = 0;
pub const DELIVERY_COUNT_MAX: u32 = 10_000;
pub const DELIVERY_COUNT_DEFAULT: u32 = 100;

/// Attributes of a single restaurant, as collected from the form.
///
/// Numeric fields are pre-constrained to the documented bounds by the form
/// layer; the encoder itself is total over the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantInput {
    /// Price for two people in ₹ ([`PRICE_MIN`]..=[`PRICE_MAX`]).
    pub price: u32,
    /// Locality of the restaurant.
    pub locality: Locality,
    /// Primary cuisine.
    pub main_cuisine: Cuisine,
    /// Number of cuisines offered
    /// ([`CUISINE_COUNT_MIN`]..=[`CUISINE_COUNT_MAX`]).
    pub cuisine_count: u8,
    /// Delivery rating count
    /// ([`DELIVERY_COUNT_MIN`]..=[`DELIVERY_COUNT_MAX`]).
    pub delivery_count: u32,
    /// Serves North Indian food.
    pub serves_north_indian: bool,
    /// Serves Chinese food.
    pub serves_chinese: bool,
    /// Is a fast-food outlet.
    pub is_fast_food: bool,
}

impl RestaurantInput {
    /// Creates an input with form defaults and the cuisine flags suggested
    /// from `main_cuisine`.
    ///
    /// The suggestion is computed once here; overriding a flag afterwards
    /// does not re-sync it when the cuisine changes.
    #[must_use]
    pub fn for_cuisine(main_cuisine: Cuisine) -> Self {
        Self {
            price: PRICE_DEFAULT,
            locality: Locality::ALL[0],
            main_cuisine,
            cuisine_count: CUISINE_COUNT_DEFAULT,
            delivery_count: DELIVERY_COUNT_DEFAULT,
            serves_north_indian: main_cuisine == Cuisine::NorthIndian,
            serves_chinese: main_cuisine == Cuisine::Chinese,
            is_fast_food: main_cuisine == Cuisine::FastFood,
        }
    }

    /// Sets the price for two people.
    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    /// Sets the locality.
    #[must_use]
    pub fn with_locality(mut self, locality: Locality) -> Self {
        self.locality = locality;
        self
    }

    /// Sets the number of cuisines offered.
    #[must_use]
    pub fn with_cuisine_count(mut self, cuisine_count: u8) -> Self {
        self.cuisine_count = cuisine_count;
        self
    }

    /// Sets the delivery rating count.
    #[must_use]
    pub fn with_delivery_count(mut self, delivery_count: u32) -> Self {
        self.delivery_count = delivery_count;
        self
    }

    /// Overrides the North Indian flag.
    #[must_use]
    pub fn with_north_indian(mut self, flag: bool) -> Self {
        self.serves_north_indian = flag;
        self
    }

    /// Overrides the Chinese flag.
    #[must_use]
    pub fn with_chinese(mut self, flag: bool) -> Self {
        self.serves_chinese = flag;
        self
    }

    /// Overrides the fast-food flag.
    #[must_use]
    pub fn with_fast_food(mut self, flag: bool) -> Self {
        self.is_fast_food = flag;
        self
    }
}

impl Default for RestaurantInput {
    /// Form defaults: the first cuisine option, all flags off.
    fn default() -> Self {
        Self::for_cuisine(Cuisine::ALL[0])
    }
}

/// Encoded feature row in model column order. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    /// Columns in model order (see [`FEATURE_NAMES`]).
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Copies the columns into a Vec.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }
}

/// True when the delivery count qualifies as high volume (strictly above
/// [`HIGH_DELIVERY_THRESHOLD`]).
#[must_use]
pub const fn has_many_deliveries(delivery_count: u32) -> bool {
    delivery_count > HIGH_DELIVERY_THRESHOLD
}

/// Encodes a restaurant into the fixed 11-column feature row.
///
/// Pure and total: every [`RestaurantInput`] encodes, and equal inputs
/// encode equally.
#[must_use]
pub fn encode(input: &RestaurantInput) -> FeatureVector {
    let price = input.price as f32;
    FeatureVector([
        price,
        price / 1000.0,
        f32::from(PriceCategory::from_price(input.price).code()),
        f32::from(input.locality.code()),
        f32::from(input.main_cuisine.code()),
        f32::from(input.cuisine_count),
        f32::from(u8::from(input.serves_north_indian)),
        f32::from(u8::from(input.serves_chinese)),
        f32::from(u8::from(input.is_fast_food)),
        f32::from(u8::from(has_many_deliveries(input.delivery_count))),
        input.delivery_count as f32,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Column Contract Tests
    // =========================================================================

    #[test]
    fn test_encoder_emits_exactly_eleven_columns() {
        let features = encode(&RestaurantInput::default());
        assert_eq!(features.as_slice().len(), FEATURE_COUNT);
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_connaught_place_north_indian_row() {
        let input = RestaurantInput {
            price: 1000,
            locality: Locality::ConnaughtPlace,
            main_cuisine: Cuisine::NorthIndian,
            cuisine_count: 3,
            delivery_count: 100,
            serves_north_indian: true,
            serves_chinese: false,
            is_fast_food: false,
        };
        assert_eq!(
            encode(&input).as_slice(),
            &[1000.0, 1.0, 1.0, 2.0, 11.0, 3.0, 1.0, 0.0, 0.0, 0.0, 100.0]
        );
    }

    #[test]
    fn test_price_thousands_uses_float_division() {
        let input = RestaurantInput::default().with_price(1250);
        assert_eq!(encode(&input).as_slice()[1], 1.25);
    }

    #[test]
    fn test_price_category_column_boundaries() {
        for (price, code) in [(750, 0.0), (751, 1.0), (1750, 1.0), (1751, 2.0)] {
            let input = RestaurantInput::default().with_price(price);
            assert_eq!(encode(&input).as_slice()[2], code, "price {price}");
        }
    }

    #[test]
    fn test_delivery_threshold_is_strict() {
        assert!(!has_many_deliveries(500));
        assert!(has_many_deliveries(501));

        let at = RestaurantInput::default().with_delivery_count(500);
        let above = RestaurantInput::default().with_delivery_count(501);
        assert_eq!(encode(&at).as_slice()[9], 0.0);
        assert_eq!(encode(&above).as_slice()[9], 1.0);
    }

    #[test]
    fn test_flag_columns() {
        let input = RestaurantInput::for_cuisine(Cuisine::Chinese)
            .with_north_indian(true)
            .with_fast_food(true);
        let row = encode(&input);
        assert_eq!(row.as_slice()[6], 1.0);
        assert_eq!(row.as_slice()[7], 1.0);
        assert_eq!(row.as_slice()[8], 1.0);
    }

    // =========================================================================
    // Default / Suggestion Tests
    // =========================================================================

    #[test]
    fn test_form_defaults() {
        let input = RestaurantInput::default();
        assert_eq!(input.price, 1000);
        assert_eq!(input.locality, Locality::BaaniSquare);
        assert_eq!(input.main_cuisine, Cuisine::Asian);
        assert_eq!(input.cuisine_count, 3);
        assert_eq!(input.delivery_count, 100);
        assert!(!input.serves_north_indian);
        assert!(!input.serves_chinese);
        assert!(!input.is_fast_food);
    }

    #[test]
    fn test_cuisine_flag_suggestions() {
        let ni = RestaurantInput::for_cuisine(Cuisine::NorthIndian);
        assert!(ni.serves_north_indian && !ni.serves_chinese && !ni.is_fast_food);

        let cn = RestaurantInput::for_cuisine(Cuisine::Chinese);
        assert!(!cn.serves_north_indian && cn.serves_chinese && !cn.is_fast_food);

        let ff = RestaurantInput::for_cuisine(Cuisine::FastFood);
        assert!(!ff.serves_north_indian && !ff.serves_chinese && ff.is_fast_food);
    }

    #[test]
    fn test_flag_override_is_independent() {
        // The suggestion is one-time; overriding one flag leaves the rest.
        let input = RestaurantInput::for_cuisine(Cuisine::NorthIndian).with_north_indian(false);
        assert!(!input.serves_north_indian);
        assert_eq!(input.main_cuisine, Cuisine::NorthIndian);
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        #[test]
        fn prop_encoding_is_deterministic(
            price in PRICE_MIN..=PRICE_MAX,
            locality_code in 0u8..26,
            cuisine_code in 0u8..16,
            cuisine_count in CUISINE_COUNT_MIN..=CUISINE_COUNT_MAX,
            delivery_count in DELIVERY_COUNT_MIN..=DELIVERY_COUNT_MAX,
        ) {
            let input = RestaurantInput {
                price,
                locality: Locality::from_code(locality_code).unwrap(),
                main_cuisine: Cuisine::from_code(cuisine_code).unwrap(),
                cuisine_count,
                delivery_count,
                serves_north_indian: false,
                serves_chinese: false,
                is_fast_food: false,
            };
            let a = encode(&input);
            let b = encode(&input);
            prop_assert_eq!(a.as_slice(), b.as_slice());
            prop_assert_eq!(a.as_slice().len(), FEATURE_COUNT);
            // Pass-through columns survive unchanged.
            prop_assert_eq!(a.as_slice()[0], price as f32);
            prop_assert_eq!(a.as_slice()[10], delivery_count as f32);
        }
    }
}
