use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::alerts_errors::UserError;
use super::alerts_model::{PriceAlert, User};
use crate::constants::{ALERTS_FILE, USERS_FILE};
use crate::utils::name_matches;

#[derive(Debug, Default)]
struct RegistryState {
    users: HashMap<String, User>,
    alerts: HashMap<String, Vec<PriceAlert>>,
}

/// In-memory user/alert registry backed by two JSON files.
///
/// Loaded once at startup and flushed after every mutation; the mutex
/// serializes each read-modify-write with its paired file write.
pub struct UserRegistry {
    users_path: PathBuf,
    alerts_path: PathBuf,
    state: Mutex<RegistryState>,
}

impl UserRegistry {
    /// Loads the registry from `data_dir`; missing files mean an empty
    /// registry, not an error.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, UserError> {
        let data_dir = data_dir.as_ref();
        let users_path = data_dir.join(USERS_FILE);
        let alerts_path = data_dir.join(ALERTS_FILE);

        let users = match std::fs::read_to_string(&users_path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        let alerts = match std::fs::read_to_string(&alerts_path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(UserRegistry {
            users_path,
            alerts_path,
            state: Mutex::new(RegistryState { users, alerts }),
        })
    }

    fn flush(&self, state: &RegistryState) -> Result<(), UserError> {
        std::fs::write(
            &self.users_path,
            serde_json::to_string_pretty(&state.users)?,
        )?;
        std::fs::write(
            &self.alerts_path,
            serde_json::to_string_pretty(&state.alerts)?,
        )?;
        Ok(())
    }

    /// Inserts a new user, rejecting duplicate ids and (case-insensitive)
    /// duplicate emails. Flushes on success.
    pub fn add_user(&self, user: User) -> Result<(), UserError> {
        let mut state = self.state.lock().expect("user registry mutex poisoned");
        if state.users.contains_key(&user.user_id) {
            return Err(UserError::DuplicateUserId(user.user_id));
        }
        if state
            .users
            .values()
            .any(|u| u.email.to_lowercase() == user.email.to_lowercase())
        {
            return Err(UserError::DuplicateEmail(user.email));
        }
        state.users.insert(user.user_id.clone(), user);
        self.flush(&state)
    }

    pub fn get_user(&self, user_id: &str) -> Option<User> {
        let state = self.state.lock().expect("user registry mutex poisoned");
        state.users.get(user_id).cloned()
    }

    /// Adds an alert for the user, replacing any existing alert for the
    /// same product (and brand, when the new alert names one).
    pub fn upsert_alert(&self, user_id: &str, alert: PriceAlert) -> Result<(), UserError> {
        let mut state = self.state.lock().expect("user registry mutex poisoned");
        let alerts = state.alerts.entry(user_id.to_string()).or_default();
        alerts.retain(|existing| {
            if !name_matches(&existing.product_name, &alert.product_name) {
                return true;
            }
            match alert.brand.as_deref() {
                None | Some("") => false,
                Some(brand) => !existing
                    .brand
                    .as_deref()
                    .is_some_and(|b| name_matches(b, brand)),
            }
        });
        alerts.push(alert);
        self.flush(&state)
    }

    pub fn alerts_for(&self, user_id: &str) -> Vec<PriceAlert> {
        let state = self.state.lock().expect("user registry mutex poisoned");
        state.alerts.get(user_id).cloned().unwrap_or_default()
    }
}
