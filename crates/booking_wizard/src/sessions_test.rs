#[cfg(test)]
mod tests {
    use crate::error::WizardError;
    use crate::sessions::BookingSessions;
    use crate::wizard::Step;
    use booking_config::ValidationConfig;
    use booking_forms::UserInfo;
    use uuid::Uuid;

    #[test]
    fn test_start_creates_wizard_on_first_step() {
        let mut sessions = BookingSessions::new(ValidationConfig::strict());
        assert!(sessions.is_empty());

        let id = sessions.start();

        assert_eq!(sessions.len(), 1);
        let session = sessions.get(id).unwrap();
        assert_eq!(session.wizard.step(), Step::UserInfo);
        assert!(session.started_at <= chrono::Utc::now());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut sessions = BookingSessions::default();
        let first = sessions.start();
        let second = sessions.start();
        assert_ne!(first, second);

        let user = UserInfo {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "1234567890".to_string(),
            visit_reason: "Checkup".to_string(),
        };
        sessions.wizard_mut(first).unwrap().submit_user_info(&user).unwrap();

        assert_eq!(sessions.wizard(first).unwrap().step(), Step::PaymentInfo);
        assert_eq!(sessions.wizard(second).unwrap().step(), Step::UserInfo);
        assert!(sessions.wizard(second).unwrap().state().user_info.is_none());
    }

    #[test]
    fn test_unknown_session_is_not_initialized() {
        let mut sessions = BookingSessions::default();
        let id = Uuid::new_v4();

        let err = sessions.wizard(id).unwrap_err();
        assert!(matches!(err, WizardError::NotInitialized(missing) if missing == id));
        assert!(err.to_string().contains("before it was initialized"));
        assert!(err.to_string().contains(&id.to_string()));

        assert!(matches!(
            sessions.wizard_mut(id),
            Err(WizardError::NotInitialized(_))
        ));
    }
}
