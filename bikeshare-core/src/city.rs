//! City registry for the supported bicycle-share datasets.
//!
//! The registry owns the city-to-file mapping and is the authority for it;
//! interactive front ends validate against [`City::KEYS`] but the lookup in
//! [`City::from_key`] decides.

use std::fmt;

use thiserror::Error;

/// A city with a bundled trip-record dataset.
///
/// # Examples
/// ```
/// use bikeshare_core::City;
///
/// let city = City::from_key("nyc").expect("nyc is a registry key");
/// assert_eq!(city, City::NewYorkCity);
/// assert_eq!(city.data_file(), "new_york_city.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    /// Chicago, key `ch`.
    Chicago,
    /// New York City, key `nyc`.
    NewYorkCity,
    /// Washington, key `wa`. Its dataset lacks the gender and birth-year
    /// columns carried by the other two.
    Washington,
}

/// Error returned when a key does not name a supported city.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("`{key}` is not a supported city (expected one of: ch, nyc, wa)")]
pub struct UnknownCity {
    /// The rejected lookup key.
    pub key: String,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Lookup keys accepted by [`Self::from_key`], in prompt order.
    pub const KEYS: [&'static str; 3] = ["ch", "nyc", "wa"];

    /// Resolves a lowercase key to a city.
    ///
    /// # Errors
    /// Returns [`UnknownCity`] when `key` is not one of [`Self::KEYS`].
    pub fn from_key(key: &str) -> Result<Self, UnknownCity> {
        match key {
            "ch" => Ok(Self::Chicago),
            "nyc" => Ok(Self::NewYorkCity),
            "wa" => Ok(Self::Washington),
            other => Err(UnknownCity {
                key: other.to_owned(),
            }),
        }
    }

    /// Returns the lookup key for this city.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chicago => "ch",
            Self::NewYorkCity => "nyc",
            Self::Washington => "wa",
        }
    }

    /// Returns the fixed dataset file name for this city.
    #[must_use]
    pub const fn data_file(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("ch", City::Chicago, "chicago.csv")]
    #[case("nyc", City::NewYorkCity, "new_york_city.csv")]
    #[case("wa", City::Washington, "washington.csv")]
    fn from_key_resolves_registry_keys(
        #[case] key: &str,
        #[case] expected: City,
        #[case] file: &str,
    ) {
        let city = City::from_key(key).expect("registry key must resolve");
        assert_eq!(city, expected);
        assert_eq!(city.key(), key);
        assert_eq!(city.data_file(), file);
    }

    #[rstest]
    #[case("boston")]
    #[case("CH")]
    #[case("")]
    fn from_key_rejects_unknown_keys(#[case] key: &str) {
        let err = City::from_key(key).expect_err("unknown key must be rejected");
        assert_eq!(err.key, key);
    }

    #[test]
    fn keys_match_registry_order() {
        let keys: Vec<_> = City::ALL.iter().map(|city| city.key()).collect();
        assert_eq!(keys, City::KEYS);
    }
}
