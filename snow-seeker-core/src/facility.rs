/// A facility offered by a resort, derived from the raw name stored in the
/// dataset.
///
/// The set of recognized facilities is closed. Anything the dataset spells
/// differently lands on [`Facility::Unknown`] instead of failing, so a typo
/// in the data never takes down the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facility {
    Skiing,
    Snowboarding,
    CrossCountry,
    Toboggan,
    Freestyle,
    Family,
    /// Fallback for names outside the recognized set.
    Unknown,
}

/// Recognized facilities in display order. Does not include `Unknown`.
const KNOWN_FACILITIES: &[Facility] = &[
    Facility::Skiing,
    Facility::Snowboarding,
    Facility::CrossCountry,
    Facility::Toboggan,
    Facility::Freestyle,
    Facility::Family,
];

impl Facility {
    /// Map a raw facility name to its descriptor. Total: never fails.
    ///
    /// Matching is exact and case-sensitive against the names used in the
    /// dataset (`"Cross Country"`, not `"cross country"`).
    pub fn resolve(raw: &str) -> Self {
        KNOWN_FACILITIES
            .iter()
            .copied()
            .find(|facility| facility.raw_name() == Some(raw))
            .unwrap_or(Self::Unknown)
    }

    /// Resolve every raw name in order, one descriptor per input element.
    pub fn resolve_all<S: AsRef<str>>(raw_names: &[S]) -> Vec<Self> {
        raw_names.iter().map(|raw| Self::resolve(raw.as_ref())).collect()
    }

    /// The exact dataset spelling that resolves to this facility.
    pub fn raw_name(&self) -> Option<&'static str> {
        match self {
            Self::Skiing => Some("Skiing"),
            Self::Snowboarding => Some("Snowboarding"),
            Self::CrossCountry => Some("Cross Country"),
            Self::Toboggan => Some("Toboggan"),
            Self::Freestyle => Some("Freestyle"),
            Self::Family => Some("Family"),
            Self::Unknown => None,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Skiing => "Skiing",
            Self::Snowboarding => "Snowboarding",
            Self::CrossCountry => "Cross-country",
            Self::Toboggan => "Toboggan",
            Self::Freestyle => "Freestyle",
            Self::Family => "Family",
            Self::Unknown => "Other",
        }
    }

    /// Symbol name used to look up the facility icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Skiing => "figure.skiing.downhill",
            Self::Snowboarding => "figure.snowboarding",
            Self::CrossCountry => "figure.skiing.crosscountry",
            Self::Toboggan => "snowflake",
            Self::Freestyle => "figure.jumprope",
            Self::Family => "person.3",
            Self::Unknown => "questionmark.circle",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Skiing => "This resort has well-groomed downhill pistes for every level.",
            Self::Snowboarding => "This resort welcomes snowboarders and has a dedicated terrain park.",
            Self::CrossCountry => "This resort has many cross-country ski routes.",
            Self::Toboggan => "This resort has marked toboggan runs.",
            Self::Freestyle => "This resort has jumps, rails and halfpipes for freestyle riding.",
            Self::Family => "This resort is popular with families.",
            Self::Unknown => "More information about this facility is not available.",
        }
    }

    /// All recognized facilities, excluding the fallback.
    pub fn all() -> &'static [Facility] {
        KNOWN_FACILITIES
    }
}

impl std::fmt::Display for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "tests/facility_tests.rs"]
mod tests;
