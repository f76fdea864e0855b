/// Sentinel identifier meaning "no match found". Never a valid GeoNames id.
pub const UNRESOLVED: u64 = 0;

/// Outcome of resolving one toponym mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Predicted GeoNames identifier, or [`UNRESOLVED`].
    pub id: u64,
    /// Country code of the match, when the country phase produced one.
    pub country_code: Option<String>,
}

impl Resolution {
    /// A "no match found" outcome.
    pub fn unresolved() -> Self {
        Self {
            id: UNRESOLVED,
            country_code: None,
        }
    }

    /// A match without country context.
    pub fn of(id: u64) -> Self {
        Self {
            id,
            country_code: None,
        }
    }

    /// A match carrying the country it belongs to.
    pub fn with_country(id: u64, code: impl Into<String>) -> Self {
        Self {
            id,
            country_code: Some(code.into()),
        }
    }

    /// Returns `true` if a match was found.
    pub fn is_resolved(&self) -> bool {
        self.id != UNRESOLVED
    }
}
