//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for front ends driving the storefront.
//! The catalog engine has no error path at all and cart reads never fail, so
//! in practice these come from configuration, catalog loading, and cart
//! writes.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::records::RecordStoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog document could not be loaded.
    #[error("Catalog error: {0}")]
    Records(#[from] RecordStoreError),

    /// A cart write failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Whether this error indicates a fault rather than bad user input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Records(_) | Self::Cart(_) | Self::Output(_)
        )
    }

    /// Log the error, capturing internal faults to Sentry.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Command error"
            );
        } else {
            tracing::warn!(error = %self, "Command rejected");
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "p1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::StorageError;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product p9".to_string());
        assert_eq!(err.to_string(), "Not found: product p9");

        let err = AppError::BadRequest("quantity must be at least 1".to_string());
        assert_eq!(err.to_string(), "Bad request: quantity must be at least 1");
    }

    #[test]
    fn test_app_error_from_cart_error() {
        let err: AppError = CartError::Storage(StorageError::Poisoned).into();
        assert_eq!(
            err.to_string(),
            "Cart error: Cart storage error: Slot store lock poisoned"
        );
        assert!(err.is_internal());
    }

    #[test]
    fn test_user_errors_are_not_internal() {
        assert!(!AppError::NotFound("x".to_string()).is_internal());
        assert!(!AppError::BadRequest("x".to_string()).is_internal());
    }
}
