//! Session state shared across pages

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::types::{LoginResponse, Role};

const STORAGE_KEY_TOKEN: &str = "strata_token";
const STORAGE_KEY_ROLE: &str = "strata_role";
const STORAGE_KEY_EMAIL: &str = "strata_email";
const STORAGE_KEY_USER_ID: &str = "strata_user_id";

/// Session context, constructed once in [`crate::App`] and handed to pages
/// through the reactive context
#[derive(Clone)]
pub struct AppState {
    /// Bearer token; presence implies an authenticated session
    pub token: RwSignal<Option<String>>,
    /// Role of the signed-in account
    pub role: RwSignal<Option<Role>>,
    /// Account email, used for profile lookups
    pub email: RwSignal<Option<String>>,
    /// Backend user id
    pub user_id: RwSignal<Option<String>>,
    /// API base URL
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        // Try to restore a previous session from localStorage
        let (token, role, email, user_id) = Self::load_from_storage();

        Self {
            token: RwSignal::new(token),
            role: RwSignal::new(role),
            email: RwSignal::new(email),
            user_id: RwSignal::new(user_id),
            api_base: RwSignal::new("http://localhost:5085/api".to_string()),
        }
    }

    fn load_from_storage() -> (Option<String>, Option<Role>, Option<String>, Option<String>) {
        let token: Option<String> = LocalStorage::get(STORAGE_KEY_TOKEN).ok();
        let role = LocalStorage::get::<String>(STORAGE_KEY_ROLE)
            .ok()
            .and_then(|r| Role::parse(&r));
        let email: Option<String> = LocalStorage::get(STORAGE_KEY_EMAIL).ok();
        let user_id: Option<String> = LocalStorage::get(STORAGE_KEY_USER_ID).ok();
        (token, role, email, user_id)
    }

    /// Persist a successful login and flip the session to authenticated
    pub fn login(&self, auth: &LoginResponse) {
        let _ = LocalStorage::set(STORAGE_KEY_TOKEN, &auth.token);
        let _ = LocalStorage::set(STORAGE_KEY_ROLE, auth.role.as_str());
        let _ = LocalStorage::set(STORAGE_KEY_EMAIL, &auth.email);
        let _ = LocalStorage::set(STORAGE_KEY_USER_ID, &auth.user_id);

        self.token.set(Some(auth.token.clone()));
        self.role.set(Some(auth.role));
        self.email.set(Some(auth.email.clone()));
        self.user_id.set(Some(auth.user_id.clone()));
    }

    /// Clear storage and reset to unauthenticated
    pub fn logout(&self) {
        LocalStorage::delete(STORAGE_KEY_TOKEN);
        LocalStorage::delete(STORAGE_KEY_ROLE);
        LocalStorage::delete(STORAGE_KEY_EMAIL);
        LocalStorage::delete(STORAGE_KEY_USER_ID);

        self.token.set(None);
        self.role.set(None);
        self.email.set(None);
        self.user_id.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Base URL and token for an API call, read untracked
    pub fn credentials(&self) -> (String, Option<String>) {
        (self.api_base.get_untracked(), self.token.get_untracked())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
