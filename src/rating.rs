//! Rating clamp, commentary tiers, and price categories.
//!
//! The clamp range and tier thresholds are empirical constants tied to the
//! trained model's output distribution. They are presentation policy, not
//! derived quantities, and are kept here as named constants.

/// Lower clamp bound for displayed ratings.
pub const RATING_MIN: f32 = 3.9;

/// Upper clamp bound for displayed ratings.
pub const RATING_MAX: f32 = 4.9;

/// Clamps a raw model output into the displayable rating range.
///
/// # Examples
///
/// ```
/// use sabor::rating::clamp_rating;
///
/// assert_eq!(clamp_rating(2.0), 3.9);
/// assert_eq!(clamp_rating(4.2), 4.2);
/// assert_eq!(clamp_rating(9.0), 4.9);
/// ```
#[must_use]
pub fn clamp_rating(raw: f32) -> f32 {
    raw.clamp(RATING_MIN, RATING_MAX)
}

/// Commentary tier for a clamped rating.
///
/// Tiers are chosen by non-overlapping descending thresholds; everything
/// below the `Good` threshold (the clamp floor included) is `Average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commentary {
    Excellent,
    VeryGood,
    Good,
    Average,
}

impl Commentary {
    /// Tier for a rating value.
    #[must_use]
    pub fn for_rating(rating: f32) -> Self {
        if rating >= 4.5 {
            Commentary::Excellent
        } else if rating >= 4.3 {
            Commentary::VeryGood
        } else if rating >= 4.1 {
            Commentary::Good
        } else {
            Commentary::Average
        }
    }

    /// Short headline for the tier.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Commentary::Excellent => "Excellent!",
            Commentary::VeryGood => "Very Good!",
            Commentary::Good => "Good",
            Commentary::Average => "Average",
        }
    }

    /// One-line commentary for the tier.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Commentary::Excellent => {
                "This restaurant is predicted to have outstanding ratings!"
            }
            Commentary::VeryGood => "Customers are likely to be very satisfied.",
            Commentary::Good => "Above average restaurant with solid ratings.",
            Commentary::Average => "Room for improvement in customer satisfaction.",
        }
    }
}

/// Coarse price tier for the per-two-person dining price.
///
/// The tier code doubles as the `price_category_code` feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCategory {
    Budget,
    MidRange,
    Premium,
}

impl PriceCategory {
    /// Tier for a price in ₹. Boundaries are inclusive on the lower tier.
    #[must_use]
    pub const fn from_price(price: u32) -> Self {
        if price <= 750 {
            PriceCategory::Budget
        } else if price <= 1750 {
            PriceCategory::MidRange
        } else {
            PriceCategory::Premium
        }
    }

    /// Integer code used by the trained model.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            PriceCategory::Budget => 0,
            PriceCategory::MidRange => 1,
            PriceCategory::Premium => 2,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PriceCategory::Budget => "Budget",
            PriceCategory::MidRange => "Mid-range",
            PriceCategory::Premium => "Premium",
        }
    }
}
