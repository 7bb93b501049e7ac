use std::cmp::Ordering;

use crate::Resort;

/// How the resort list is ordered. Session-only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Catalog order, untouched.
    #[default]
    Default,
    /// Ascending by resort name.
    Alphabetical,
    /// Ascending by country name.
    ByCountry,
}

const ALL_SORT_ORDERS: &[SortOrder] = &[
    SortOrder::Default,
    SortOrder::Alphabetical,
    SortOrder::ByCountry,
];

impl SortOrder {
    /// Canonical lowercase name, used on the command line.
    pub fn short_name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Alphabetical => "Alphabetical",
            Self::ByCountry => "By Country",
        }
    }

    /// All accepted spellings. The first entry is the short name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Default => &["default", "catalog", "none"],
            Self::Alphabetical => &["alphabetical", "name", "az", "a-z"],
            Self::ByCountry => &["country", "by-country", "bycountry", "by country"],
        }
    }

    /// Compare two resorts under this order.
    ///
    /// `Default` reports every pair as equal; callers relying on it must use a
    /// stable sort, or skip sorting (see [`SortOrder::reorders`]).
    pub fn compare(&self, lhs: &Resort, rhs: &Resort) -> Ordering {
        match self {
            Self::Default => Ordering::Equal,
            Self::Alphabetical => lhs.name.cmp(&rhs.name),
            Self::ByCountry => lhs.country.cmp(&rhs.country),
        }
    }

    /// Whether applying this order can change the catalog sequence at all.
    pub fn reorders(&self) -> bool {
        !matches!(self, Self::Default)
    }

    pub fn all() -> &'static [SortOrder] {
        ALL_SORT_ORDERS
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string cannot be parsed into a `SortOrder`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sort order: '{0}' (expected default, alphabetical or country)")]
pub struct SortOrderParseError(pub String);

impl std::str::FromStr for SortOrder {
    type Err = SortOrderParseError;

    /// Parse a sort order from any accepted spelling (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SORT_ORDERS
            .iter()
            .copied()
            .find(|order| order.aliases().contains(&lower.as_str()))
            .ok_or_else(|| SortOrderParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resort(name: &str, country: &str) -> Resort {
        Resort {
            id: name.to_lowercase(),
            name: name.to_string(),
            country: country.to_string(),
            ..Resort::default()
        }
    }

    #[test]
    fn short_names_round_trip() {
        for &order in SortOrder::all() {
            let parsed: SortOrder = order.short_name().parse().unwrap();
            assert_eq!(parsed, order);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Alphabetical".parse::<SortOrder>().unwrap(), SortOrder::Alphabetical);
        assert_eq!("BY-COUNTRY".parse::<SortOrder>().unwrap(), SortOrder::ByCountry);
        assert!("random".parse::<SortOrder>().is_err());
    }

    #[test]
    fn default_is_catalog_order() {
        assert_eq!(SortOrder::default(), SortOrder::Default);
        assert!(!SortOrder::Default.reorders());
    }

    #[test]
    fn default_never_prefers_either_side() {
        let a = resort("Zermatt", "Switzerland");
        let b = resort("Aspen", "United States");
        assert_eq!(SortOrder::Default.compare(&a, &b), Ordering::Equal);
        assert_eq!(SortOrder::Default.compare(&b, &a), Ordering::Equal);
    }

    #[test]
    fn comparators_use_plain_string_order() {
        let a = resort("Zermatt", "Switzerland");
        let b = resort("Aspen", "United States");
        assert_eq!(SortOrder::Alphabetical.compare(&a, &b), Ordering::Greater);
        assert_eq!(SortOrder::ByCountry.compare(&a, &b), Ordering::Less);
    }
}
