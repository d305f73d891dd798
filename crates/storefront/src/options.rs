//! Option lists for selector widgets.
//!
//! Sort, status, and category selectors all share one shape: an ordered list
//! of `(value, label)` pairs plus the current selection. The canned
//! constructors below build the lists each list screen needs.

use tradewear_core::{OrderStatus, Product, RegistrationStatus};

use crate::catalog::{MATCH_ALL_LABEL, OrderSort, ProductSort, RegistrationSort, Selection};

/// One selectable choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> SelectOption<T> {
    /// Create an option.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// An ordered option list with a current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptions<T> {
    options: Vec<SelectOption<T>>,
    selected: T,
}

impl<T: PartialEq> SelectOptions<T> {
    /// Create an option list with `selected` as the current value.
    ///
    /// `selected` need not be one of the options; [`Self::selected_label`]
    /// falls back to the first option in that case.
    #[must_use]
    pub const fn new(options: Vec<SelectOption<T>>, selected: T) -> Self {
        Self { options, selected }
    }

    /// The available options in display order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    /// The current selection.
    #[must_use]
    pub const fn selected(&self) -> &T {
        &self.selected
    }

    /// Whether `value` is the current selection.
    pub fn is_selected(&self, value: &T) -> bool {
        &self.selected == value
    }

    /// Label for the current selection.
    ///
    /// Falls back to the first option's label, then to an empty string.
    #[must_use]
    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|option| option.value == self.selected)
            .or_else(|| self.options.first())
            .map_or("", |option| option.label.as_str())
    }

    /// Change the selection to `value` if it is offered.
    ///
    /// Returns `false` and keeps the current selection otherwise.
    pub fn select(&mut self, value: T) -> bool {
        if self.options.iter().any(|option| option.value == value) {
            self.selected = value;
            true
        } else {
            false
        }
    }

    /// Consume the list and return the selected value.
    #[must_use]
    pub fn into_selected(self) -> T {
        self.selected
    }
}

/// Product sort selector (defaults to lowest price first).
#[must_use]
pub fn product_sort_options() -> SelectOptions<ProductSort> {
    SelectOptions::new(
        ProductSort::ALL
            .into_iter()
            .map(|sort| SelectOption::new(sort, sort.label()))
            .collect(),
        ProductSort::default(),
    )
}

/// Order sort selector (defaults to newest first).
#[must_use]
pub fn order_sort_options() -> SelectOptions<OrderSort> {
    SelectOptions::new(
        OrderSort::ALL
            .into_iter()
            .map(|sort| SelectOption::new(sort, sort.label()))
            .collect(),
        OrderSort::default(),
    )
}

/// Registration sort selector (defaults to newest first).
#[must_use]
pub fn registration_sort_options() -> SelectOptions<RegistrationSort> {
    SelectOptions::new(
        RegistrationSort::ALL
            .into_iter()
            .map(|sort| SelectOption::new(sort, sort.label()))
            .collect(),
        RegistrationSort::default(),
    )
}

/// Order status selector with the match-all choice first.
#[must_use]
pub fn order_status_options() -> SelectOptions<Selection<OrderStatus>> {
    with_match_all(
        OrderStatus::ALL
            .into_iter()
            .map(|status| SelectOption::new(Selection::Only(status), status.label())),
    )
}

/// Registration status selector with the match-all choice first.
#[must_use]
pub fn registration_status_options() -> SelectOptions<Selection<RegistrationStatus>> {
    with_match_all(
        RegistrationStatus::ALL
            .into_iter()
            .map(|status| SelectOption::new(Selection::Only(status), status.label())),
    )
}

/// Category selector built from the categories present in `products`.
///
/// Categories appear in first-seen order after the match-all choice.
#[must_use]
pub fn category_options(products: &[Product]) -> SelectOptions<Selection<String>> {
    let mut categories: Vec<&str> = Vec::new();
    for product in products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(&product.category);
        }
    }

    with_match_all(
        categories
            .into_iter()
            .map(|category| SelectOption::new(Selection::Only(category.to_owned()), category)),
    )
}

fn with_match_all<T: PartialEq>(
    choices: impl Iterator<Item = SelectOption<Selection<T>>>,
) -> SelectOptions<Selection<T>> {
    let options = std::iter::once(SelectOption::new(Selection::All, MATCH_ALL_LABEL))
        .chain(choices)
        .collect();
    SelectOptions::new(options, Selection::All)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: id.into(),
            slug: id.to_owned(),
            title: id.to_owned(),
            category: category.to_owned(),
            price: Decimal::ONE,
            seller: "s1".into(),
            seller_name: "Seller".to_owned(),
            thumbnail_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_product_sort_defaults_to_price_asc() {
        let options = product_sort_options();
        assert_eq!(*options.selected(), ProductSort::PriceAsc);
        assert_eq!(options.selected_label(), "낮은가격순");
        assert_eq!(options.options().len(), ProductSort::ALL.len());
    }

    #[test]
    fn test_select_offered_value() {
        let mut options = order_status_options();
        assert!(options.select(Selection::Only(OrderStatus::Reserved)));
        assert_eq!(options.selected_label(), "예약");
        assert!(options.is_selected(&Selection::Only(OrderStatus::Reserved)));
    }

    #[test]
    fn test_select_unknown_value_keeps_selection() {
        let mut options = category_options(&[product("p1", "상의")]);
        assert!(!options.select(Selection::Only("모자".to_owned())));
        assert_eq!(*options.selected(), Selection::All);
    }

    #[test]
    fn test_selected_label_falls_back_to_first() {
        let options = SelectOptions::new(
            vec![SelectOption::new(1, "one"), SelectOption::new(2, "two")],
            9,
        );
        assert_eq!(options.selected_label(), "one");

        let empty: SelectOptions<u8> = SelectOptions::new(Vec::new(), 0);
        assert_eq!(empty.selected_label(), "");
    }

    #[test]
    fn test_status_options_start_with_match_all() {
        let options = registration_status_options();
        let labels: Vec<&str> = options.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["전체", "대기중", "승인", "반려"]);
    }

    #[test]
    fn test_category_options_dedupe_in_first_seen_order() {
        let products = [
            product("p1", "하의"),
            product("p2", "아우터"),
            product("p3", "하의"),
            product("p4", "상의"),
        ];
        let options = category_options(&products);
        let labels: Vec<&str> = options.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["전체", "하의", "아우터", "상의"]);
    }
}
