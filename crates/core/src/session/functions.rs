use std::time::Duration;

use rand::{distr::Alphanumeric, Rng};

use super::PersistAction;

/// Length of generated session identifiers.
pub const SESSION_ID_LEN: usize = 32;

/// Generate a random alphanumeric session identifier.
pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// Map a session's expiry seconds to the backend action taken on save.
///
/// Positive values become a TTL, zero stores without expiration and
/// negative values remove the stored data.
pub fn persist_action(expiry: i64) -> PersistAction {
    match expiry {
        e if e > 0 => PersistAction::Write {
            ttl: Some(Duration::from_secs(e as u64)),
        },
        0 => PersistAction::Write { ttl: None },
        _ => PersistAction::Delete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_session_id_produces_32_char_alphanumeric() {
        let id = generate_session_id();
        assert_eq!(id.len(), SESSION_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_session_id_is_unique() {
        let id1 = generate_session_id();
        let id2 = generate_session_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_persist_action_positive_expiry_sets_ttl() {
        assert_eq!(
            persist_action(3600),
            PersistAction::Write {
                ttl: Some(Duration::from_secs(3600))
            }
        );
    }

    #[test]
    fn test_persist_action_zero_expiry_has_no_ttl() {
        assert_eq!(persist_action(0), PersistAction::Write { ttl: None });
    }

    #[test]
    fn test_persist_action_negative_expiry_deletes() {
        assert_eq!(persist_action(-1), PersistAction::Delete);
        assert_eq!(persist_action(i64::MIN), PersistAction::Delete);
    }
}
