//! Order list filtering.
//!
//! Text search covers the order number, product title, and both party
//! names; the only equality filter is the trade status.

use std::cmp::Ordering;

use tradewear_core::{Order, OrderStatus};

use super::{Criteria, CriteriaError, Record, Selection};

/// Equality filters for the order list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderFilters {
    pub status: Selection<OrderStatus>,
}

/// Order list sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderSort {
    #[default]
    Newest,
    Oldest,
    TotalAsc,
    TotalDesc,
}

impl OrderSort {
    /// All sort orders in selector order.
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::TotalAsc, Self::TotalDesc];

    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "total-asc" | "total_asc" => Some(Self::TotalAsc),
            "total-desc" | "total_desc" => Some(Self::TotalDesc),
            _ => None,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::TotalAsc => "total-asc",
            Self::TotalDesc => "total-desc",
        }
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "최신순",
            Self::Oldest => "오래된순",
            Self::TotalAsc => "낮은금액순",
            Self::TotalDesc => "높은금액순",
        }
    }
}

/// Criteria for the order list.
pub type OrderCriteria = Criteria<OrderFilters, OrderSort>;

impl Record for Order {
    type Filters = OrderFilters;
    type Sort = OrderSort;

    fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.order_number.as_str(),
            self.product.title.as_str(),
            self.seller.name.as_str(),
            self.buyer.name.as_str(),
        ]
        .into_iter()
    }

    fn matches_filters(&self, filters: &Self::Filters) -> bool {
        filters.status.admits(&self.status)
    }

    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering {
        match sort {
            OrderSort::Newest => other.created_at.cmp(&self.created_at),
            OrderSort::Oldest => self.created_at.cmp(&other.created_at),
            OrderSort::TotalAsc => self.total_price.cmp(&other.total_price),
            OrderSort::TotalDesc => other.total_price.cmp(&self.total_price),
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
            v.parse::<OrderStatus>().map_err(|_| CriteriaError::InvalidValue {
                field: "status",
                value: v.to_owned(),
            })
        })?;
        Ok(())
    }

    fn parse_sort(key: &str) -> Option<Self::Sort> {
        OrderSort::parse(key)
    }
}
