//! Product list filtering: title search, category/seller filters, price sort.

use std::cmp::Ordering;

use tradewear_core::{Product, SellerId};

use super::{Criteria, CriteriaError, Record, Selection};

/// Equality filters for the product list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilters {
    pub category: Selection<String>,
    pub seller: Selection<SellerId>,
}

/// Product list sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductSort {
    #[default]
    PriceAsc,
    PriceDesc,
    Newest,
}

impl ProductSort {
    /// All sort orders in selector order.
    pub const ALL: [Self; 3] = [Self::PriceAsc, Self::PriceDesc, Self::Newest];

    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "price-asc" | "price_asc" | "price-ascending" => Some(Self::PriceAsc),
            "price-desc" | "price_desc" | "price-descending" => Some(Self::PriceDesc),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Newest => "newest",
        }
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAsc => "낮은가격순",
            Self::PriceDesc => "높은가격순",
            Self::Newest => "최신순",
        }
    }
}

/// Criteria for the product list.
pub type ProductCriteria = Criteria<ProductFilters, ProductSort>;

impl Record for Product {
    type Filters = ProductFilters;
    type Sort = ProductSort;

    fn text_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
    }

    fn matches_filters(&self, filters: &Self::Filters) -> bool {
        filters.category.admits(&self.category) && filters.seller.admits(&self.seller)
    }

    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering {
        match sort {
            ProductSort::PriceAsc => self.price.cmp(&other.price),
            ProductSort::PriceDesc => other.price.cmp(&self.price),
            ProductSort::Newest => other.created_at.cmp(&self.created_at),
        }
    }

    fn apply_filter(
        filters: &mut Self::Filters,
        field: &str,
        value: &str,
    ) -> Result<(), CriteriaError> {
        match field {
            "category" => {
                filters.category = Selection::parse_with(value, |v| {
                    Ok::<_, CriteriaError>(v.to_owned())
                })?;
            }
            "seller" => {
                filters.seller = Selection::parse_with(value, |v| {
                    Ok::<_, CriteriaError>(SellerId::new(v))
                })?;
            }
            other => return Err(CriteriaError::UnknownField(other.to_owned())),
        }
        Ok(())
    }

    fn parse_sort(key: &str) -> Option<Self::Sort> {
        ProductSort::parse(key)
    }
}
