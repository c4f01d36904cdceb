// --- File: crates/booking_wizard/src/wizard.rs ---

use booking_config::ValidationConfig;
use booking_forms::{PaymentForm, PaymentInfo, UserInfo, UserInfoForm};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::error::WizardError;

/// Wizard steps, in order. The wizard only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[serde(rename = "userinfo")]
    UserInfo,
    #[serde(rename = "paymentinfo")]
    PaymentInfo,
    Success,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::UserInfo => "userinfo",
            Step::PaymentInfo => "paymentinfo",
            Step::Success => "success",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Success)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the customer has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingState {
    pub user_info: Option<UserInfo>,
    pub payment_info: Option<PaymentInfo>,
}

/// Holds the current step and the accumulated booking data.
///
/// Built explicitly and passed to whoever drives the flow. The only ways to
/// change it are the two setters and the two `submit_*` operations, which
/// validate, store and advance in one go.
#[derive(Debug)]
pub struct BookingWizard {
    step: Step,
    state: BookingState,
    user_form: UserInfoForm,
    payment_form: PaymentForm,
}

impl BookingWizard {
    pub fn new(config: ValidationConfig) -> Self {
        Self::with_forms(UserInfoForm::user_info(), PaymentForm::payment(config))
    }

    /// Uses caller-built forms, e.g. with `on_submit` callbacks attached.
    pub fn with_forms(user_form: UserInfoForm, payment_form: PaymentForm) -> Self {
        Self {
            step: Step::UserInfo,
            state: BookingState::default(),
            user_form,
            payment_form,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn user_form(&self) -> &UserInfoForm {
        &self.user_form
    }

    pub fn payment_form(&self) -> &PaymentForm {
        &self.payment_form
    }

    pub fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }

    /// Stores the user details; leaves payment details alone.
    pub fn set_user_info(&mut self, info: UserInfo) {
        self.state.user_info = Some(info);
    }

    /// Stores the payment details; leaves user details alone.
    pub fn set_payment_info(&mut self, info: PaymentInfo) {
        self.state.payment_info = Some(info);
    }

    /// Step 1: validate the user details and move on to payment.
    pub fn submit_user_info(&mut self, values: &UserInfo) -> Result<Step, WizardError> {
        self.expect_step(Step::UserInfo)?;
        let info = self
            .user_form
            .submit(values)
            .map_err(WizardError::InvalidUserInfo)?;
        self.set_user_info(info);
        Ok(self.advance(Step::PaymentInfo))
    }

    /// Step 2: validate the payment details and finish the booking.
    pub fn submit_payment_info(&mut self, values: &PaymentInfo) -> Result<Step, WizardError> {
        self.expect_step(Step::PaymentInfo)?;
        let info = self
            .payment_form
            .submit(values)
            .map_err(WizardError::InvalidPaymentInfo)?;
        self.set_payment_info(info);
        let step = self.advance(Step::Success);

        info!(
            customer = self
                .state
                .user_info
                .as_ref()
                .map(|u| u.full_name.as_str())
                .unwrap_or_default(),
            card = %self
                .state
                .payment_info
                .as_ref()
                .map(PaymentInfo::masked_card_number)
                .unwrap_or_default(),
            "Booking complete"
        );
        Ok(step)
    }

    fn expect_step(&self, submitted: Step) -> Result<(), WizardError> {
        if self.step == submitted {
            Ok(())
        } else {
            Err(WizardError::StepMismatch {
                submitted,
                current: self.step,
            })
        }
    }

    fn advance(&mut self, next: Step) -> Step {
        info!("Booking wizard step {} -> {}", self.step, next);
        self.step = next;
        next
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
