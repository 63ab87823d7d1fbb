//! Fixed locality and cuisine code tables.
//!
//! The trained rating model encodes locality and main cuisine as integer
//! codes. Both tables are closed enumerations: code order is fixed, and the
//! display strings must match the strings used at training time exactly —
//! most locality names carry a leading space inherited from the source
//! data, and each table ends its alphabet with a literal `Other` catch-all.
//!
//! # Examples
//!
//! ```
//! use sabor::tables::{Cuisine, Locality};
//!
//! assert_eq!(Locality::ConnaughtPlace.code(), 2);
//! assert_eq!(Locality::ConnaughtPlace.name(), " Connaught Place, New Delhi");
//! assert_eq!(Cuisine::from_code(11), Some(Cuisine::NorthIndian));
//!
//! // Lenient parsing for user-typed text; canonical entries come back.
//! assert_eq!(Locality::parse("connaught place, new delhi"), Some(Locality::ConnaughtPlace));
//! assert_eq!(Cuisine::parse("4"), Some(Cuisine::Chinese));
//! ```

use std::fmt;

/// Locality codes for the Delhi NCR area, as encoded at training time.
///
/// Code 25 is the catch-all `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Locality {
    BaaniSquare = 0,
    Chanakyapuri = 1,
    ConnaughtPlace = 2,
    CyberHub = 3,
    GtbNagar = 4,
    GreaterKailash2 = 5,
    HauzKhas = 6,
    Indirapuram = 7,
    Janakpuri = 8,
    Karkardooma = 9,
    KarolBagh = 10,
    KhanMarket = 11,
    MalviyaNagar = 12,
    NitFaridabad = 13,
    PaschimVihar = 14,
    Pitampura = 15,
    PunjabiBagh = 16,
    RajNagar = 17,
    RajouriGarden = 18,
    Rohini = 19,
    Safdarjung = 20,
    Sector18Noida = 21,
    Sector29Gurgaon = 22,
    Sector72Noida = 23,
    VijayNagar = 24,
    Other = 25,
}

impl Locality {
    /// All localities in code order.
    pub const ALL: [Locality; 26] = [
        Locality::BaaniSquare,
        Locality::Chanakyapuri,
        Locality::ConnaughtPlace,
        Locality::CyberHub,
        Locality::GtbNagar,
        Locality::GreaterKailash2,
        Locality::HauzKhas,
        Locality::Indirapuram,
        Locality::Janakpuri,
        Locality::Karkardooma,
        Locality::KarolBagh,
        Locality::KhanMarket,
        Locality::MalviyaNagar,
        Locality::NitFaridabad,
        Locality::PaschimVihar,
        Locality::Pitampura,
        Locality::PunjabiBagh,
        Locality::RajNagar,
        Locality::RajouriGarden,
        Locality::Rohini,
        Locality::Safdarjung,
        Locality::Sector18Noida,
        Locality::Sector29Gurgaon,
        Locality::Sector72Noida,
        Locality::VijayNagar,
        Locality::Other,
    ];

    /// Integer code used by the trained model.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Display string, exactly as encoded at training time.
    ///
    /// Leading spaces are part of the trained encoding and are preserved.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Locality::BaaniSquare => " Baani Square, Sector 50, Gurgaon",
            Locality::Chanakyapuri => " Chanakyapuri, New Delhi",
            Locality::ConnaughtPlace => " Connaught Place, New Delhi",
            Locality::CyberHub => " Cyber Hub, DLF Cyber City, Gurgaon",
            Locality::GtbNagar => " Delhi University-GTB Nagar, New Delhi",
            Locality::GreaterKailash2 => " Greater Kailash 2 (GK2), New Delhi",
            Locality::HauzKhas => " Hauz Khas, New Delhi",
            Locality::Indirapuram => " Indirapuram, Ghaziabad",
            Locality::Janakpuri => " Janakpuri, New Delhi",
            Locality::Karkardooma => " Karkardooma, New Delhi",
            Locality::KarolBagh => " Karol Bagh, New Delhi",
            Locality::KhanMarket => " Khan Market, New Delhi",
            Locality::MalviyaNagar => " Malviya Nagar, New Delhi",
            Locality::NitFaridabad => " NIT, Faridabad",
            Locality::PaschimVihar => " Paschim Vihar, New Delhi",
            Locality::Pitampura => " Pitampura, New Delhi",
            Locality::PunjabiBagh => " Punjabi Bagh, New Delhi",
            Locality::RajNagar => " Raj Nagar, Ghaziabad",
            Locality::RajouriGarden => " Rajouri Garden, New Delhi",
            Locality::Rohini => " Rohini, New Delhi",
            Locality::Safdarjung => " Safdarjung, New Delhi",
            Locality::Sector18Noida => " Sector 18, Noida",
            Locality::Sector29Gurgaon => " Sector 29, Gurgaon",
            Locality::Sector72Noida => " Sector 72, Noida",
            Locality::VijayNagar => " Vijay Nagar, New Delhi",
            Locality::Other => "Other",
        }
    }

    /// Inverse of [`Locality::code`].
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Inverse of [`Locality::name`]. Exact match only.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.name() == name)
    }

    /// Lenient parse for user-typed text: numeric code, exact name, or
    /// trimmed case-insensitive name.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(locality) = Self::from_name(text) {
            return Some(locality);
        }
        if let Ok(code) = text.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        let wanted = text.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.name().trim().to_lowercase() == wanted)
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cuisine codes, as encoded at training time.
///
/// Code 12 is the catch-all `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cuisine {
    Asian = 0,
    Bakery = 1,
    Burger = 2,
    Cafe = 3,
    Chinese = 4,
    Continental = 5,
    Desserts = 6,
    FastFood = 7,
    FingerFood = 8,
    Italian = 9,
    Mughlai = 10,
    NorthIndian = 11,
    Other = 12,
    Pizza = 13,
    SouthIndian = 14,
    StreetFood = 15,
}

impl Cuisine {
    /// All cuisines in code order.
    pub const ALL: [Cuisine; 16] = [
        Cuisine::Asian,
        Cuisine::Bakery,
        Cuisine::Burger,
        Cuisine::Cafe,
        Cuisine::Chinese,
        Cuisine::Continental,
        Cuisine::Desserts,
        Cuisine::FastFood,
        Cuisine::FingerFood,
        Cuisine::Italian,
        Cuisine::Mughlai,
        Cuisine::NorthIndian,
        Cuisine::Other,
        Cuisine::Pizza,
        Cuisine::SouthIndian,
        Cuisine::StreetFood,
    ];

    /// Integer code used by the trained model.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Display string, exactly as encoded at training time.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Cuisine::Asian => "Asian",
            Cuisine::Bakery => "Bakery",
            Cuisine::Burger => "Burger",
            Cuisine::Cafe => "Cafe",
            Cuisine::Chinese => "Chinese",
            Cuisine::Continental => "Continental",
            Cuisine::Desserts => "Desserts",
            Cuisine::FastFood => "Fast Food",
            Cuisine::FingerFood => "Finger Food",
            Cuisine::Italian => "Italian",
            Cuisine::Mughlai => "Mughlai",
            Cuisine::NorthIndian => "North Indian",
            Cuisine::Other => "Other",
            Cuisine::Pizza => "Pizza",
            Cuisine::SouthIndian => "South Indian",
            Cuisine::StreetFood => "Street Food",
        }
    }

    /// Inverse of [`Cuisine::code`].
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Inverse of [`Cuisine::name`]. Exact match only.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Lenient parse for user-typed text: numeric code, exact name, or
    /// trimmed case-insensitive name.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(cuisine) = Self::from_name(text) {
            return Some(cuisine);
        }
        if let Ok(code) = text.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        let wanted = text.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().trim().to_lowercase() == wanted)
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Bijection Tests
    // =========================================================================

    #[test]
    fn test_locality_code_name_round_trip() {
        for locality in Locality::ALL {
            assert_eq!(Locality::from_code(locality.code()), Some(locality));
            assert_eq!(Locality::from_name(locality.name()), Some(locality));
        }
    }

    #[test]
    fn test_cuisine_code_name_round_trip() {
        for cuisine in Cuisine::ALL {
            assert_eq!(Cuisine::from_code(cuisine.code()), Some(cuisine));
            assert_eq!(Cuisine::from_name(cuisine.name()), Some(cuisine));
        }
    }

    #[test]
    fn test_codes_are_dense_and_ordered() {
        for (i, locality) in Locality::ALL.iter().enumerate() {
            assert_eq!(locality.code() as usize, i);
        }
        for (i, cuisine) in Cuisine::ALL.iter().enumerate() {
            assert_eq!(cuisine.code() as usize, i);
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(Locality::ALL.len(), 26);
        assert_eq!(Cuisine::ALL.len(), 16);
        assert_eq!(Locality::from_code(26), None);
        assert_eq!(Cuisine::from_code(16), None);
    }

    // =========================================================================
    // Trained-Encoding String Tests
    // =========================================================================

    #[test]
    fn test_locality_names_keep_leading_space() {
        // Every entry except the catch-all starts with the space inherited
        // from the source data.
        for locality in Locality::ALL {
            if locality == Locality::Other {
                assert_eq!(locality.name(), "Other");
            } else {
                assert!(locality.name().starts_with(' '), "{locality:?}");
            }
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(Locality::ConnaughtPlace.code(), 2);
        assert_eq!(Locality::Other.code(), 25);
        assert_eq!(Cuisine::NorthIndian.code(), 11);
        assert_eq!(Cuisine::Chinese.code(), 4);
        assert_eq!(Cuisine::FastFood.code(), 7);
        assert_eq!(Cuisine::Other.code(), 12);
    }

    #[test]
    fn test_exact_names() {
        assert_eq!(
            Locality::GtbNagar.name(),
            " Delhi University-GTB Nagar, New Delhi"
        );
        assert_eq!(
            Locality::GreaterKailash2.name(),
            " Greater Kailash 2 (GK2), New Delhi"
        );
        assert_eq!(Cuisine::FingerFood.name(), "Finger Food");
    }

    // =========================================================================
    // Lenient Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_accepts_code_and_trimmed_name() {
        assert_eq!(Locality::parse("2"), Some(Locality::ConnaughtPlace));
        assert_eq!(
            Locality::parse("Hauz Khas, New Delhi"),
            Some(Locality::HauzKhas)
        );
        assert_eq!(
            Locality::parse("  hauz khas, new delhi  "),
            Some(Locality::HauzKhas)
        );
        assert_eq!(Cuisine::parse("north indian"), Some(Cuisine::NorthIndian));
        assert_eq!(Cuisine::parse("13"), Some(Cuisine::Pizza));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Locality::parse("Atlantis"), None);
        assert_eq!(Locality::parse("99"), None);
        assert_eq!(Cuisine::parse("Fusion"), None);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(
            Locality::ConnaughtPlace.to_string(),
            " Connaught Place, New Delhi"
        );
        assert_eq!(Cuisine::StreetFood.to_string(), "Street Food");
    }
}
