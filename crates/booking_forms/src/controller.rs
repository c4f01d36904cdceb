// --- File: crates/booking_forms/src/controller.rs ---

use booking_config::ValidationConfig;
use std::fmt;
use tracing::debug;

use crate::rules::{FieldError, FieldErrors};
use crate::schema::{FormSchema, PaymentSchema, UserInfoSchema};

/// Called once with the validated payload of every successful submission.
pub type SubmitCallback<P> = Box<dyn FnMut(&P) + Send + Sync>;

/// Drives one form: validates on submit, keeps the per-field error state the
/// view renders (message plus invalid flag), and hands valid payloads on.
pub struct FormController<S: FormSchema> {
    schema: S,
    errors: FieldErrors<S::Field>,
    submit_count: usize,
    on_submit: Option<SubmitCallback<S::Payload>>,
}

pub type UserInfoForm = FormController<UserInfoSchema>;
pub type PaymentForm = FormController<PaymentSchema>;

impl<S: FormSchema> FormController<S> {
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            errors: FieldErrors::new(),
            submit_count: 0,
            on_submit: None,
        }
    }

    /// Registers the success callback, replacing any previous one.
    pub fn on_submit<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&S::Payload) + Send + Sync + 'static,
    {
        self.on_submit = Some(Box::new(callback));
        self
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Validates the whole form.
    ///
    /// On failure every invalid field gets its first failing rule's message and
    /// no callback fires. On success the errors are cleared, the callback runs
    /// exactly once, and the payload is returned exactly as given.
    pub fn submit(&mut self, values: &S::Payload) -> Result<S::Payload, FieldErrors<S::Field>> {
        self.submit_count += 1;

        match self.schema.validate(values) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                debug!(attempt = self.submit_count, "Form submitted successfully");
                if let Some(callback) = self.on_submit.as_mut() {
                    callback(values);
                }
                Ok(values.clone())
            }
            Err(errors) => {
                debug!(
                    attempt = self.submit_count,
                    invalid_fields = errors.len(),
                    "Form submission rejected: {:?}",
                    errors.fields().collect::<Vec<_>>()
                );
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Re-checks a single field after an edit.
    ///
    /// Only active once the form has been submitted at least once, so fields
    /// do not light up red while the user is still filling them in. Other
    /// fields' errors are left untouched.
    pub fn revalidate(&mut self, values: &S::Payload, field: S::Field) -> Option<&FieldError> {
        if !self.has_submitted() {
            return None;
        }
        match self.schema.validate_field(values, field) {
            Some(error) => self.errors.insert(field, error),
            None => {
                self.errors.remove(field);
            }
        }
        self.errors.get(field)
    }

    /// Whether the field failed the last validation pass.
    pub fn is_invalid(&self, field: S::Field) -> bool {
        self.errors.contains(field)
    }

    pub fn error(&self, field: S::Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors<S::Field> {
        &self.errors
    }

    pub fn has_submitted(&self) -> bool {
        self.submit_count > 0
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }
}

impl UserInfoForm {
    /// User details form with its standard rules.
    pub fn user_info() -> Self {
        Self::new(UserInfoSchema::new())
    }
}

impl PaymentForm {
    /// Payment form; `config` decides whether the Luhn checksum is enforced.
    pub fn payment(config: ValidationConfig) -> Self {
        Self::new(PaymentSchema::new(config))
    }
}

impl<S: FormSchema + fmt::Debug> fmt::Debug for FormController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("schema", &self.schema)
            .field("errors", &self.errors)
            .field("submit_count", &self.submit_count)
            .field("has_callback", &self.on_submit.is_some())
            .finish()
    }
}
