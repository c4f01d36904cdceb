// --- File: crates/booking_forms/src/schema.rs ---

use booking_config::ValidationConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::luhn::is_valid_luhn;
use crate::models::{PaymentField, PaymentInfo, UserInfo, UserInfoField};
use crate::rules::{first_failure, FieldError, FieldErrors, FieldValue, Rule};

// ASCII classes on purpose: `\d` in the regex crate also matches non-Latin digits.
static CARD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\s-]+$").expect("card regex"));
static EXPIRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\s?/\s?[0-9]{2}$").expect("expiry regex"));
static CVV: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv regex"));
static ZIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip regex"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex"));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    // ASCII letters only; `(?i)` would also fold in U+212A KELVIN SIGN
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email regex")
});

pub const CARD_NUMBER_MIN_DIGITS: usize = 13;
pub const CARD_NUMBER_MAX_DIGITS: usize = 19;

/// Email shape check: the pattern plus the two constraints a regex without
/// look-ahead cannot express (no leading dot, no consecutive dots).
pub fn is_email_shape(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

/// The ordered rules of one field.
#[derive(Debug, Clone)]
pub struct FieldRules<F> {
    pub field: F,
    pub rules: Vec<Rule>,
}

/// A form: its fields in display order, their rules, and how to read a field
/// out of the payload.
pub trait FormSchema {
    type Field: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static;
    type Payload: Clone + fmt::Debug + Send + Sync;

    fn fields(&self) -> &[FieldRules<Self::Field>];

    fn value<'a>(payload: &'a Self::Payload, field: Self::Field) -> FieldValue<'a>;

    /// First failing rule of `field`, if any.
    fn validate_field(&self, payload: &Self::Payload, field: Self::Field) -> Option<FieldError> {
        let rules = self.fields().iter().find(|f| f.field == field)?;
        first_failure(Self::value(payload, field), &rules.rules).map(FieldError::new)
    }

    /// Validates every field independently; at most one error per field.
    fn validate(&self, payload: &Self::Payload) -> Result<(), FieldErrors<Self::Field>> {
        let mut errors = FieldErrors::new();
        for field_rules in self.fields() {
            if let Some(message) =
                first_failure(Self::value(payload, field_rules.field), &field_rules.rules)
            {
                errors.insert(field_rules.field, FieldError::new(message));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Rules of the user details form.
#[derive(Debug, Clone)]
pub struct UserInfoSchema {
    fields: Vec<FieldRules<UserInfoField>>,
}

impl Default for UserInfoSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInfoSchema {
    pub fn new() -> Self {
        let fields = vec![
            FieldRules {
                field: UserInfoField::FullName,
                rules: vec![Rule::Required {
                    message: "Full name is required",
                }],
            },
            FieldRules {
                field: UserInfoField::Email,
                rules: vec![
                    Rule::Required {
                        message: "Email is required",
                    },
                    Rule::Check {
                        check: is_email_shape,
                        message: "Please enter a valid email address",
                    },
                ],
            },
            FieldRules {
                field: UserInfoField::Phone,
                rules: vec![
                    Rule::Required {
                        message: "Phone number is required",
                    },
                    Rule::Pattern {
                        regex: &PHONE,
                        message: "Phone number must be 10 digits",
                    },
                ],
            },
            // Any text, including empty
            FieldRules {
                field: UserInfoField::VisitReason,
                rules: Vec::new(),
            },
        ];
        Self { fields }
    }
}

impl FormSchema for UserInfoSchema {
    type Field = UserInfoField;
    type Payload = UserInfo;

    fn fields(&self) -> &[FieldRules<UserInfoField>] {
        &self.fields
    }

    fn value<'a>(payload: &'a UserInfo, field: UserInfoField) -> FieldValue<'a> {
        match field {
            UserInfoField::FullName => FieldValue::Text(&payload.full_name),
            UserInfoField::Email => FieldValue::Text(&payload.email),
            UserInfoField::Phone => FieldValue::Text(&payload.phone),
            UserInfoField::VisitReason => FieldValue::Text(&payload.visit_reason),
        }
    }
}

/// Rules of the payment details form.
///
/// The Luhn rule is only part of the card number's rule list when
/// [`ValidationConfig::enforce_luhn`] is set.
#[derive(Debug, Clone)]
pub struct PaymentSchema {
    config: ValidationConfig,
    fields: Vec<FieldRules<PaymentField>>,
}

impl Default for PaymentSchema {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl PaymentSchema {
    pub fn new(config: ValidationConfig) -> Self {
        let mut card_rules = vec![
            Rule::Required {
                message: "Card number is required",
            },
            Rule::Pattern {
                regex: &CARD_CHARS,
                message: "Card number must contain only digits",
            },
            Rule::Range {
                min: CARD_NUMBER_MIN_DIGITS,
                max: CARD_NUMBER_MAX_DIGITS,
                message: "Card number must be between 13 and 19 digits",
            },
        ];
        if config.enforce_luhn {
            card_rules.push(Rule::Check {
                check: is_valid_luhn,
                message: "Invalid card number",
            });
        }

        let fields = vec![
            FieldRules {
                field: PaymentField::CardNumber,
                rules: card_rules,
            },
            FieldRules {
                field: PaymentField::ExpiryDate,
                rules: vec![
                    Rule::Required {
                        message: "Expiry date is required",
                    },
                    Rule::Pattern {
                        regex: &EXPIRY,
                        message: "Expiry date must be in MM/YY format",
                    },
                ],
            },
            FieldRules {
                field: PaymentField::Cvv,
                rules: vec![
                    Rule::Required {
                        message: "CVV is required",
                    },
                    Rule::Pattern {
                        regex: &CVV,
                        message: "CVV must be 3 or 4 digits",
                    },
                ],
            },
            FieldRules {
                field: PaymentField::BillingZip,
                rules: vec![
                    Rule::Required {
                        message: "Billing zip code is required",
                    },
                    Rule::Pattern {
                        regex: &ZIP,
                        message: "Zip code must be 5 digits or ZIP+4 (e.g. 12345 or 12345-6789)",
                    },
                ],
            },
            FieldRules {
                field: PaymentField::AcceptedPolicy,
                rules: vec![Rule::MustAccept {
                    message: "You must accept the cancellation policy",
                }],
            },
        ];

        Self { config, fields }
    }

    pub fn config(&self) -> ValidationConfig {
        self.config
    }
}

impl FormSchema for PaymentSchema {
    type Field = PaymentField;
    type Payload = PaymentInfo;

    fn fields(&self) -> &[FieldRules<PaymentField>] {
        &self.fields
    }

    fn value<'a>(payload: &'a PaymentInfo, field: PaymentField) -> FieldValue<'a> {
        match field {
            PaymentField::CardNumber => FieldValue::Text(&payload.card_number),
            PaymentField::ExpiryDate => FieldValue::Text(&payload.expiry_date),
            PaymentField::Cvv => FieldValue::Text(&payload.cvv),
            PaymentField::BillingZip => FieldValue::Text(&payload.billing_zip),
            PaymentField::AcceptedPolicy => FieldValue::Flag(payload.accepted_policy),
        }
    }
}
