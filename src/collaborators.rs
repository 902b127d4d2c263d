//! Account and saved-query collaborators.
//!
//! Sign-in, subscriptions and query persistence live in external services.
//! Only their interfaces are defined here, plus [`InMemoryQueryStore`] for
//! tests and offline use.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use painpoint_query::{FormState, PlatformId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
}

/// Subscription level of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Pro,
    Premium,
}

/// Searches per calendar month on the free tier.
pub const FREE_MONTHLY_SEARCH_LIMIT: u32 = 5;

impl SubscriptionTier {
    /// Whether queries can be saved to the account.
    pub fn can_save_queries(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Searches allowed per calendar month, `None` for unlimited.
    pub fn monthly_search_limit(self) -> Option<u32> {
        match self {
            Self::Free => Some(FREE_MONTHLY_SEARCH_LIMIT),
            Self::Pro | Self::Premium => None,
        }
    }
}

/// Authentication and subscription lookup.
pub trait SessionService {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Session`] if the credentials are rejected.
    fn sign_in(&mut self, email: &str, password: &str) -> Result<User>;

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Session`] if the account cannot be created.
    fn sign_up(&mut self, email: &str, password: &str, full_name: Option<&str>) -> Result<User>;

    /// End the session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Session`] if the backend call fails.
    fn sign_out(&mut self) -> Result<()>;

    /// Tier of the signed-in user. Signed-out sessions are [`SubscriptionTier::Free`].
    fn tier(&self) -> SubscriptionTier;
}

/// A form snapshot stored under a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: Uuid,
    pub title: String,
    pub form: FormState,
    pub platforms: Vec<PlatformId>,
    pub created_at: DateTime<Utc>,
}

/// Saved-query persistence for the signed-in user.
pub trait QueryStore {
    /// Store a snapshot of `form` under `title`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the snapshot cannot be stored.
    fn save(&mut self, title: &str, form: &FormState, platforms: &[PlatformId])
        -> Result<SavedQuery>;

    /// All saved queries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the backend cannot be read.
    fn list(&self) -> Result<Vec<SavedQuery>>;

    /// Delete a saved query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if no query has this id.
    fn delete(&mut self, id: Uuid) -> Result<()>;
}

/// Save the current form if the session allows it.
///
/// # Errors
///
/// - [`AppError::Session`] when nobody is signed in or the tier cannot save
/// - [`AppError::Form`] when `title` is blank
/// - whatever the store returns
pub fn save_query(
    session: &dyn SessionService,
    store: &mut dyn QueryStore,
    title: &str,
    form: &FormState,
) -> Result<SavedQuery> {
    if session.current_user().is_none() {
        return Err(AppError::Session("sign in to save queries".into()));
    }
    let tier = session.tier();
    if !tier.can_save_queries() {
        return Err(AppError::Session(format!(
            "saving queries needs a paid plan (current: {tier:?})"
        )));
    }
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Form("a title is required to save a query".into()));
    }
    let saved = store.save(title, form, &form.platforms())?;
    tracing::info!(id = %saved.id, "query saved");
    Ok(saved)
}

/// Keeps saved queries in memory.
#[derive(Debug, Default)]
pub struct InMemoryQueryStore {
    queries: Vec<SavedQuery>,
}

impl InMemoryQueryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryStore for InMemoryQueryStore {
    fn save(
        &mut self,
        title: &str,
        form: &FormState,
        platforms: &[PlatformId],
    ) -> Result<SavedQuery> {
        let saved = SavedQuery {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            form: form.clone(),
            platforms: platforms.to_vec(),
            created_at: Utc::now(),
        };
        self.queries.push(saved.clone());
        Ok(saved)
    }

    fn list(&self) -> Result<Vec<SavedQuery>> {
        Ok(self.queries.iter().rev().cloned().collect())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        let pos = self
            .queries
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| AppError::Store(format!("no saved query with id {id}")))?;
        self.queries.remove(pos);
        Ok(())
    }
}
