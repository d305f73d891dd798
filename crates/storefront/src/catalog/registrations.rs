//! Registration request list filtering (admin screen).

use std::cmp::Ordering;

use tradewear_core::{RegistrationRequest, RegistrationStatus};

use super::{Criteria, CriteriaError, Record, Selection};

/// Equality filters for the registration list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationFilters {
    pub status: Selection<RegistrationStatus>,
}

/// Registration list sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegistrationSort {
    #[default]
    Newest,
    Oldest,
}

impl RegistrationSort {
    /// All sort orders in selector order.
    pub const ALL: [Self; 2] = [Self::Newest, Self::Oldest];

    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "최신순",
            Self::Oldest => "오래된순",
        }
    }
}

/// Criteria for the registration list.
pub type RegistrationCriteria = Criteria<RegistrationFilters, RegistrationSort>;

impl Record for RegistrationRequest {
    type Filters = RegistrationFilters;
    type Sort = RegistrationSort;

    fn text_fields(&self) -> impl Iterator<Item = &str> {
        [self.email.as_str(), self.phone.as_str()].into_iter()
    }

    fn matches_filters(&self, filters: &Self::Filters) -> bool {
        filters.status.admits(&self.status)
    }

    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering {
        match sort {
            RegistrationSort::Newest => other.created_at.cmp(&self.created_at),
            RegistrationSort::Oldest => self.created_at.cmp(&other.created_at),
        }
    }

    fn apply_filter(
        filters: &mut Self::Filters,
        field: &str,
        value: &str,
    ) -> Result<(), CriteriaError> {
        if field != "status" {
            return Err(CriteriaError::UnknownField(field.to_owned()));
        }
        filters.status = Selection::parse_with(value, |v| {
            v.parse::<RegistrationStatus>()
                .map_err(|_| CriteriaError::InvalidValue {
                    field: "status",
                    value: v.to_owned(),
                })
        })?;
        Ok(())
    }

    fn parse_sort(key: &str) -> Option<Self::Sort> {
        RegistrationSort::parse(key)
    }
}
