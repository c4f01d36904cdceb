// --- File: crates/booking_forms/src/lib.rs ---
pub mod controller;
pub mod luhn;
#[cfg(test)]
mod luhn_proptest;
#[cfg(test)]
mod luhn_test;
pub mod models;
pub mod rules;
pub mod schema;

pub use booking_config::ValidationConfig;
pub use controller::{FormController, PaymentForm, UserInfoForm};
pub use luhn::{is_valid_luhn, strip_separators};
pub use models::{PaymentField, PaymentInfo, UserInfo, UserInfoField};
pub use rules::{FieldError, FieldErrors, FieldValue, Rule};
pub use schema::{FieldRules, FormSchema, PaymentSchema, UserInfoSchema};
