// ABOUTME: Session holder for the single logged-in user profile
// ABOUTME: Mock login/register/logout persisted under auth_user with explicit lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session
//!
//! Holds exactly one `UserProfile` or nothing for the lifetime of the
//! process. The persisted `auth_user` record is authoritative: every
//! transition is written to storage first and only then reflected in memory,
//! so a failed write leaves the session exactly as it was.
//!
//! Authentication is a local stand-in. Passwords are accepted and ignored.

use crate::logging::AppLogger;
use crate::storage::LogStore;
use chrono::{Local, NaiveDate};
use fitlog_core::constants::{profile_defaults, storage_keys};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{ProfilePatch, UserProfile};
use tokio::sync::RwLock;
use tracing::info;

/// The current user's profile, restored from and persisted to the log store
pub struct Session {
    store: LogStore,
    profile: RwLock<Option<UserProfile>>,
}

impl Session {
    /// Restore the persisted profile; an absent or unreadable record means logged out
    pub async fn restore(store: LogStore) -> Self {
        let profile: Option<UserProfile> = store.load_value(storage_keys::AUTH_USER).await;
        match &profile {
            Some(user) => info!(email = %user.email, "Restored session"),
            None => info!("No stored session, starting logged out"),
        }
        Self {
            store,
            profile: RwLock::new(profile),
        }
    }

    /// Snapshot of the current profile
    pub async fn current(&self) -> Option<UserProfile> {
        self.profile.read().await.clone()
    }

    /// Whether a profile is held
    pub async fn is_logged_in(&self) -> bool {
        self.profile.read().await.is_some()
    }

    /// Log in as `email`
    ///
    /// A stored profile with the same email is returned unchanged; otherwise
    /// a default profile is synthesized for the email and persisted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed email, or the storage error if
    /// the new profile cannot be persisted
    pub async fn login(&self, email: &str, _password: &str) -> AppResult<UserProfile> {
        let email = validate_email(email)?;
        let mut guard = self.profile.write().await;

        let stored: Option<UserProfile> = self.store.load_value(storage_keys::AUTH_USER).await;
        if let Some(existing) = stored.filter(|user| user.email == email) {
            AppLogger::log_auth_event(&existing.email, "login_existing", true);
            *guard = Some(existing.clone());
            return Ok(existing);
        }

        let profile = UserProfile::with_defaults(profile_defaults::LOGIN_NAME, email, today());
        if let Err(e) = self.store.save_value(storage_keys::AUTH_USER, &profile).await {
            AppLogger::log_auth_event(email, "login", false);
            return Err(e);
        }
        AppLogger::log_auth_event(email, "login_new", true);
        *guard = Some(profile.clone());
        Ok(profile)
    }

    /// Register a fresh default profile, replacing any stored one
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name or malformed email, or the
    /// storage error if the profile cannot be persisted
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> AppResult<UserProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        let email = validate_email(email)?;

        let mut guard = self.profile.write().await;
        let profile = UserProfile::with_defaults(name, email, today());
        if let Err(e) = self.store.save_value(storage_keys::AUTH_USER, &profile).await {
            AppLogger::log_auth_event(email, "register", false);
            return Err(e);
        }
        AppLogger::log_auth_event(email, "register", true);
        *guard = Some(profile.clone());
        Ok(profile)
    }

    /// Merge `patch` into the current profile and persist the result
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when logged out, `InvalidInput` for an invalid
    /// patched value, or the storage error if the merge cannot be persisted
    pub async fn update(&self, patch: &ProfilePatch) -> AppResult<UserProfile> {
        let mut guard = self.profile.write().await;
        let current = guard.as_ref().ok_or_else(AppError::auth_required)?;

        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(AppError::invalid_input("name must not be empty"));
            }
        }
        if let Some(email) = &patch.email {
            validate_email(email)?;
        }
        if let Some(height) = patch.height {
            if !height.is_finite() || height <= 0.0 {
                return Err(AppError::invalid_input("height must be a positive number"));
            }
        }

        let merged = current.merged(patch);
        self.store
            .save_value(storage_keys::AUTH_USER, &merged)
            .await?;
        info!(email = %merged.email, "Profile updated");
        *guard = Some(merged.clone());
        Ok(merged)
    }

    /// Clear the stored profile
    ///
    /// # Errors
    ///
    /// Returns the storage error if the record cannot be removed; the session
    /// stays logged in in that case
    pub async fn logout(&self) -> AppResult<()> {
        let mut guard = self.profile.write().await;
        self.store.remove(storage_keys::AUTH_USER).await?;
        if let Some(user) = guard.take() {
            AppLogger::log_auth_event(&user.email, "logout", true);
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> AppResult<&str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::invalid_input(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(email)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
