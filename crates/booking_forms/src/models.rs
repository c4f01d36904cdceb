// --- File: crates/booking_forms/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::luhn::strip_separators;

/// Customer details collected on the first wizard step.
///
/// Fields keep exactly what the customer typed; validation never rewrites them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub full_name: String,
    pub email: String,
    /// Ten digits, no separators.
    pub phone: String,
    /// Free text, may be empty.
    pub visit_reason: String,
}

/// Card details collected on the second wizard step.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInfo {
    /// As typed, spaces and dashes preserved.
    pub card_number: String,
    /// `MM/YY` or `MM / YY`.
    pub expiry_date: String,
    pub cvv: String,
    /// `12345` or `12345-6789`.
    pub billing_zip: String,
    /// Cancellation policy checkbox. Absent in JSON means unchecked.
    pub accepted_policy: bool,
}

impl PaymentInfo {
    /// Card number reduced to its last four digits, e.g. `**** 1111`.
    pub fn masked_card_number(&self) -> String {
        let digits = strip_separators(&self.card_number);
        let visible = digits.len().saturating_sub(4);
        match digits.get(visible..) {
            Some(last_four) if visible > 0 => format!("**** {}", last_four),
            _ => "****".to_string(),
        }
    }
}

// Keep card data out of logs and panic messages
impl fmt::Debug for PaymentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentInfo")
            .field("card_number", &self.masked_card_number())
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .field("billing_zip", &self.billing_zip)
            .field("accepted_policy", &self.accepted_policy)
            .finish()
    }
}

/// Fields of the user details form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserInfoField {
    FullName,
    Email,
    Phone,
    VisitReason,
}

impl UserInfoField {
    pub const ALL: [UserInfoField; 4] = [
        UserInfoField::FullName,
        UserInfoField::Email,
        UserInfoField::Phone,
        UserInfoField::VisitReason,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserInfoField::FullName => "fullName",
            UserInfoField::Email => "email",
            UserInfoField::Phone => "phone",
            UserInfoField::VisitReason => "visitReason",
        }
    }
}

impl fmt::Display for UserInfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of the payment details form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentField {
    CardNumber,
    ExpiryDate,
    Cvv,
    BillingZip,
    AcceptedPolicy,
}

impl PaymentField {
    pub const ALL: [PaymentField; 5] = [
        PaymentField::CardNumber,
        PaymentField::ExpiryDate,
        PaymentField::Cvv,
        PaymentField::BillingZip,
        PaymentField::AcceptedPolicy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "cardNumber",
            PaymentField::ExpiryDate => "expiryDate",
            PaymentField::Cvv => "cvv",
            PaymentField::BillingZip => "billingZip",
            PaymentField::AcceptedPolicy => "acceptedPolicy",
        }
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
