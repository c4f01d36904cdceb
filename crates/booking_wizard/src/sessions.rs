// --- File: crates/booking_wizard/src/sessions.rs ---

use booking_config::ValidationConfig;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::error::WizardError;
use crate::wizard::BookingWizard;

/// One customer's wizard plus when it was started.
#[derive(Debug)]
pub struct BookingSession {
    pub wizard: BookingWizard,
    pub started_at: DateTime<Utc>,
}

/// In-memory wizards keyed by session id. Nothing is persisted; dropping the
/// registry forgets every booking in progress.
#[derive(Debug, Default)]
pub struct BookingSessions {
    config: ValidationConfig,
    sessions: HashMap<Uuid, BookingSession>,
}

impl BookingSessions {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    /// Starts a fresh wizard on the first step and returns its id.
    pub fn start(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            BookingSession {
                wizard: BookingWizard::new(self.config),
                started_at: Utc::now(),
            },
        );
        debug!(session_id = %id, "Booking session started");
        id
    }

    pub fn get(&self, id: Uuid) -> Result<&BookingSession, WizardError> {
        self.sessions.get(&id).ok_or(WizardError::NotInitialized(id))
    }

    pub fn wizard(&self, id: Uuid) -> Result<&BookingWizard, WizardError> {
        self.get(id).map(|session| &session.wizard)
    }

    pub fn wizard_mut(&mut self, id: Uuid) -> Result<&mut BookingWizard, WizardError> {
        self.sessions
            .get_mut(&id)
            .map(|session| &mut session.wizard)
            .ok_or(WizardError::NotInitialized(id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
