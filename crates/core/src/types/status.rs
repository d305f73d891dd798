//! Status enums for orders and registration requests.
//!
//! Each status has a stable snake_case `code` (used for serialization and
//! command-line input) and the Korean `label` shown in the marketplace UI.
//! Parsing accepts either form.

use serde::{Deserialize, Serialize};

/// Error returned when a status string matches neither a code nor a label.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} status: {value}")]
pub struct StatusParseError {
    kind: &'static str,
    value: String,
}

/// Trade status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Listed and open for trade.
    #[default]
    Available,
    /// Held for a buyer.
    Reserved,
    /// Being fulfilled.
    Processing,
    /// Trade finished.
    Completed,
}

impl OrderStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Reserved,
        Self::Processing,
        Self::Completed,
    ];

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Processing => "processing",
            Self::Completed => "completed",
        }
    }

    /// Korean display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "거래가능",
            Self::Reserved => "예약",
            Self::Processing => "처리중",
            Self::Completed => "거래완료",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(s) || status.label() == s)
            .ok_or_else(|| StatusParseError {
                kind: "order",
                value: s.to_owned(),
            })
    }
}

/// Review status of a seller registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Awaiting admin review.
    #[default]
    Pending,
    /// Accepted; the applicant may sell.
    Approved,
    /// Declined.
    Rejected,
}

impl RegistrationStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Korean display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "대기중",
            Self::Approved => "승인",
            Self::Rejected => "반려",
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for RegistrationStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(s) || status.label() == s)
            .ok_or_else(|| StatusParseError {
                kind: "registration",
                value: s.to_owned(),
            })
    }
}
