//! Seller registration requests reviewed by admins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{RegistrationId, RegistrationStatus, format_phone_number};

/// A business's request to join the marketplace as a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub id: RegistrationId,
    pub email: String,
    /// Phone number as entered by the applicant.
    pub phone: String,
    pub status: RegistrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RegistrationRequest {
    /// Phone number in display form.
    #[must_use]
    pub fn display_phone(&self) -> String {
        format_phone_number(&self.phone)
    }
}
