//! Resource warnings reported for a project.
//!
//! The upstream payload is a flat JSON object keyed by warning name, with the
//! project ref stored alongside under `project`. Decoding is tolerant: any
//! value that is not a recognizable severity counts as "no warning".
//!
//! Key order matters. When several warnings are active, the first one in
//! payload order supplies the card copy, so entries are kept in an
//! [`IndexMap`].

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Metadata key carrying the project ref. Never a warning.
pub const KEY_PROJECT: &str = "project";

/// Read-only mode overrides every other warning when set.
pub const KEY_READONLY_MODE: &str = "is_readonly_mode_enabled";

/// Legacy auth email warning. Always nulled before evaluation until the auth
/// email sending restriction is retired upstream.
pub const KEY_AUTH_RESTRICTED_EMAIL_SENDING: &str = "auth_restricted_email_sending";

pub const KEY_DISK_IO_EXHAUSTION: &str = "disk_io_exhaustion";
pub const KEY_DISK_SPACE_EXHAUSTION: &str = "disk_space_exhaustion";
pub const KEY_CPU_EXHAUSTION: &str = "cpu_exhaustion";
pub const KEY_MEMORY_AND_SWAP_EXHAUSTION: &str = "memory_and_swap_exhaustion";
pub const KEY_AUTH_RATE_LIMIT_EXHAUSTION: &str = "auth_rate_limit_exhaustion";
pub const KEY_AUTH_EMAIL_OFFENDER: &str = "auth_email_offender";

pub const LEVEL_WARNING: &str = "warning";
pub const LEVEL_CRITICAL: &str = "critical";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Severity of a single resource warning. Absence of a warning is modeled as
/// `Option::None` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Warning,
    Critical,
}

impl WarningLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => LEVEL_WARNING,
            Self::Critical => LEVEL_CRITICAL,
        }
    }

    /// Interpret a raw payload value. Anything unrecognized is `None`.
    ///
    /// A boolean `true` counts as a warning: the read-only flag arrives as a
    /// plain boolean rather than a severity string.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => match s.as_str() {
                LEVEL_WARNING => Some(Self::Warning),
                LEVEL_CRITICAL => Some(Self::Critical),
                _ => None,
            },
            Value::Bool(true) => Some(Self::Warning),
            _ => None,
        }
    }
}

/// The warnings reported for one project, in payload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceWarningSet {
    project: Option<String>,
    entries: IndexMap<String, Option<WarningLevel>>,
}

/// A warning selected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWarning {
    pub key: String,
    pub level: WarningLevel,
}

/// A warning set after the normalization pass: metadata removed, the legacy
/// key nulled, read-only mode split out and empty entries dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedWarnings {
    pub readonly: Option<WarningLevel>,
    pub warnings: Vec<ActiveWarning>,
}

// ---------------------------------------------------------------------------
// ResourceWarningSet
// ---------------------------------------------------------------------------

impl ResourceWarningSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw JSON payload, keeping key order.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let raw: IndexMap<String, Value> = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidWarningSet(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: IndexMap<String, Value>) -> Self {
        let mut set = Self::default();
        for (key, value) in raw {
            if key == KEY_PROJECT {
                set.project = value.as_str().map(String::from);
                continue;
            }
            let level = WarningLevel::from_json(&value);
            set.entries.insert(key, level);
        }
        set
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Add or replace a warning. Replacing keeps the key's original position.
    pub fn with_warning(
        mut self,
        key: impl Into<String>,
        level: impl Into<Option<WarningLevel>>,
    ) -> Self {
        self.entries.insert(key.into(), level.into());
        self
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Level reported for `key`, `None` when absent or not warning.
    pub fn level(&self, key: &str) -> Option<WarningLevel> {
        self.entries.get(key).copied().flatten()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn normalize(&self) -> NormalizedWarnings {
        let mut normalized = NormalizedWarnings::default();

        for (key, level) in &self.entries {
            match key.as_str() {
                KEY_PROJECT => {}
                KEY_AUTH_RESTRICTED_EMAIL_SENDING => {
                    if level.is_some() {
                        tracing::trace!(key = %key, "Ignoring legacy auth email warning");
                    }
                }
                KEY_READONLY_MODE => normalized.readonly = *level,
                _ => {
                    if let Some(level) = level {
                        normalized.warnings.push(ActiveWarning {
                            key: key.clone(),
                            level: *level,
                        });
                    }
                }
            }
        }

        normalized
    }
}

impl<'de> Deserialize<'de> for ResourceWarningSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

// ---------------------------------------------------------------------------
// NormalizedWarnings
// ---------------------------------------------------------------------------

impl NormalizedWarnings {
    /// Warnings to surface. Read-only mode, when set, hides everything else.
    pub fn active(&self) -> Vec<ActiveWarning> {
        match self.readonly {
            Some(level) => vec![ActiveWarning {
                key: KEY_READONLY_MODE.to_string(),
                level,
            }],
            None => self.warnings.clone(),
        }
    }
}

/// Whether any of the given warnings is at the critical level.
pub fn has_critical_warning(active: &[ActiveWarning]) -> bool {
    active.iter().any(|w| w.level == WarningLevel::Critical)
}

/// Critical for display purposes: read-only mode always counts as critical.
pub fn is_critical(active: &[ActiveWarning]) -> bool {
    active.iter().any(|w| w.key == KEY_READONLY_MODE) || has_critical_warning(active)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
