//! Cookie-consent state and allow-listed activation.
//!
//! Deferred scripts never execute as text. Each one is registered up front
//! as an allow-listed activation entry keyed by a stable ID; granting
//! consent only ever *returns* the IDs that became eligible, and the host
//! page activates them through its own static table. An ID is handed out
//! at most once per session.

use crate::backend::{StorageBackend, StorageBackendExt};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Storage key for the consent decision.
pub const CONSENT_KEY: &str = "vitrine:consent";

/// Independent consent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    Analytics,
    Marketing,
    Preferences,
}

impl ConsentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentCategory::Analytics => "analytics",
            ConsentCategory::Marketing => "marketing",
            ConsentCategory::Preferences => "preferences",
        }
    }
}

/// The visitor's consent decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConsentState {
    pub analytics: bool,
    pub marketing: bool,
    pub preferences: bool,
}

impl ConsentState {
    /// Consent to everything.
    pub fn accept_all() -> Self {
        Self {
            analytics: true,
            marketing: true,
            preferences: true,
        }
    }

    /// Decline everything.
    pub fn decline_all() -> Self {
        Self::default()
    }

    /// Whether a category is consented to.
    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Preferences => self.preferences,
        }
    }
}

/// An allow-listed activation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Activation {
    id: String,
    category: ConsentCategory,
}

/// Owns the persisted consent decision and the activation registry.
pub struct ConsentService<S: StorageBackend> {
    backend: S,
    decision: Option<ConsentState>,
    registry: Vec<Activation>,
    activated: HashSet<String>,
}

impl<S: StorageBackend> ConsentService<S> {
    /// Load any prior decision from storage.
    pub fn load(backend: S) -> Result<Self, StoreError> {
        let decision = backend.get_json(CONSENT_KEY)?;
        Ok(Self {
            backend,
            decision,
            registry: Vec::new(),
            activated: HashSet::new(),
        })
    }

    /// Whether the visitor has answered the banner. Undecided means the
    /// banner is shown and nothing gated is activated.
    pub fn is_decided(&self) -> bool {
        self.decision.is_some()
    }

    /// The stored decision, if any.
    pub fn decision(&self) -> Option<ConsentState> {
        self.decision
    }

    /// Register an allow-listed activation. Duplicate IDs are ignored.
    pub fn register(&mut self, id: impl Into<String>, category: ConsentCategory) {
        let id = id.into();
        if self.registry.iter().any(|a| a.id == id) {
            return;
        }
        self.registry.push(Activation { id, category });
    }

    /// Persist a decision and return the activation IDs newly eligible to
    /// run, in registration order. Each ID is returned at most once per
    /// session, so widening consent later only yields the additions.
    pub fn decide(&mut self, state: ConsentState) -> Result<Vec<String>, StoreError> {
        self.backend.set_json(CONSENT_KEY, &state)?;
        self.decision = Some(state);
        tracing::debug!(
            analytics = state.analytics,
            marketing = state.marketing,
            preferences = state.preferences,
            "consent decision stored"
        );

        let mut eligible = Vec::new();
        for activation in &self.registry {
            if state.allows(activation.category) && self.activated.insert(activation.id.clone()) {
                eligible.push(activation.id.clone());
            }
        }
        Ok(eligible)
    }

    /// Clear the stored decision (the banner shows again).
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.backend.remove(CONSENT_KEY)?;
        self.decision = None;
        Ok(())
    }
}
