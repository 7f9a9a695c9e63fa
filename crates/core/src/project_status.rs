//! Project lifecycle status as shown on the project card.
//!
//! The wire names (`isHealthy`, `isPaused`, ...) are the inferred status
//! strings the dashboard passes around. [`LifecycleStatus::from_platform_status`]
//! derives them from the raw status reported by the platform.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_HEALTHY: &str = "isHealthy";
pub const STATUS_PAUSED: &str = "isPaused";
pub const STATUS_PAUSING: &str = "isPausing";
pub const STATUS_RESTARTING: &str = "isRestarting";
pub const STATUS_COMING_UP: &str = "isComingUp";
pub const STATUS_RESTORING: &str = "isRestoring";
pub const STATUS_UPGRADING: &str = "isUpgrading";
pub const STATUS_RESTORE_FAILED: &str = "isRestoreFailed";
pub const STATUS_PAUSE_FAILED: &str = "isPauseFailed";

/// All valid lifecycle status strings.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_HEALTHY,
    STATUS_PAUSED,
    STATUS_PAUSING,
    STATUS_RESTARTING,
    STATUS_COMING_UP,
    STATUS_RESTORING,
    STATUS_UPGRADING,
    STATUS_RESTORE_FAILED,
    STATUS_PAUSE_FAILED,
];

/// Raw project statuses reported by the platform.
pub const PLATFORM_ACTIVE_HEALTHY: &str = "ACTIVE_HEALTHY";
pub const PLATFORM_INACTIVE: &str = "INACTIVE";
pub const PLATFORM_GOING_DOWN: &str = "GOING_DOWN";
pub const PLATFORM_PAUSING: &str = "PAUSING";
pub const PLATFORM_RESTARTING: &str = "RESTARTING";
pub const PLATFORM_COMING_UP: &str = "COMING_UP";
pub const PLATFORM_RESTORING: &str = "RESTORING";
pub const PLATFORM_UPGRADING: &str = "UPGRADING";
pub const PLATFORM_RESTORE_FAILED: &str = "RESTORE_FAILED";
pub const PLATFORM_PAUSE_FAILED: &str = "PAUSE_FAILED";

const READY_SOON: &str = "Your project will be ready in a few minutes";
const CONTACT_SUPPORT: &str = "Please contact support for assistance";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The operational phase of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStatus {
    #[serde(rename = "isHealthy")]
    Healthy,
    #[serde(rename = "isPaused")]
    Paused,
    #[serde(rename = "isPausing")]
    Pausing,
    #[serde(rename = "isRestarting")]
    Restarting,
    #[serde(rename = "isComingUp")]
    ComingUp,
    #[serde(rename = "isRestoring")]
    Restoring,
    #[serde(rename = "isUpgrading")]
    Upgrading,
    #[serde(rename = "isRestoreFailed")]
    RestoreFailed,
    #[serde(rename = "isPauseFailed")]
    PauseFailed,
}

/// Fixed card copy for a non-healthy lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub title: &'static str,
    pub description: &'static str,
}

impl LifecycleStatus {
    pub const ALL: [LifecycleStatus; 9] = [
        Self::Healthy,
        Self::Paused,
        Self::Pausing,
        Self::Restarting,
        Self::ComingUp,
        Self::Restoring,
        Self::Upgrading,
        Self::RestoreFailed,
        Self::PauseFailed,
    ];

    /// Parse a wire status name such as `isPaused`.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_HEALTHY => Ok(Self::Healthy),
            STATUS_PAUSED => Ok(Self::Paused),
            STATUS_PAUSING => Ok(Self::Pausing),
            STATUS_RESTARTING => Ok(Self::Restarting),
            STATUS_COMING_UP => Ok(Self::ComingUp),
            STATUS_RESTORING => Ok(Self::Restoring),
            STATUS_UPGRADING => Ok(Self::Upgrading),
            STATUS_RESTORE_FAILED => Ok(Self::RestoreFailed),
            STATUS_PAUSE_FAILED => Ok(Self::PauseFailed),
            _ => Err(CoreError::UnknownStatus(format!(
                "'{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => STATUS_HEALTHY,
            Self::Paused => STATUS_PAUSED,
            Self::Pausing => STATUS_PAUSING,
            Self::Restarting => STATUS_RESTARTING,
            Self::ComingUp => STATUS_COMING_UP,
            Self::Restoring => STATUS_RESTORING,
            Self::Upgrading => STATUS_UPGRADING,
            Self::RestoreFailed => STATUS_RESTORE_FAILED,
            Self::PauseFailed => STATUS_PAUSE_FAILED,
        }
    }

    /// Infer the lifecycle status from the platform's raw project status.
    ///
    /// Statuses the card has no dedicated copy for are treated as healthy so
    /// the card falls back to resource warnings.
    pub fn from_platform_status(raw: &str) -> Self {
        match raw {
            PLATFORM_ACTIVE_HEALTHY => Self::Healthy,
            PLATFORM_INACTIVE => Self::Paused,
            PLATFORM_GOING_DOWN | PLATFORM_PAUSING => Self::Pausing,
            PLATFORM_RESTARTING => Self::Restarting,
            PLATFORM_COMING_UP => Self::ComingUp,
            PLATFORM_RESTORING => Self::Restoring,
            PLATFORM_UPGRADING => Self::Upgrading,
            PLATFORM_RESTORE_FAILED => Self::RestoreFailed,
            PLATFORM_PAUSE_FAILED => Self::PauseFailed,
            other => {
                tracing::warn!(
                    platform_status = other,
                    "Unrecognized platform status, treating project as healthy"
                );
                Self::Healthy
            }
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Fixed title/description for this status, `None` for `Healthy`.
    pub fn message(&self) -> Option<StatusMessage> {
        let (title, description) = match self {
            Self::Healthy => return None,
            Self::Paused => (
                "Project is paused",
                "This project will not accept requests until resumed",
            ),
            Self::Pausing => (
                "Project is pausing",
                "The pause process will complete in a few minutes",
            ),
            Self::Restarting => ("Project is restarting", READY_SOON),
            Self::ComingUp => ("Project is coming up", READY_SOON),
            Self::Restoring => ("Project is restoring", READY_SOON),
            Self::Upgrading => ("Project is upgrading", READY_SOON),
            Self::RestoreFailed => ("Project restore failed", CONTACT_SUPPORT),
            Self::PauseFailed => ("Project pause failed", CONTACT_SUPPORT),
        };
        Some(StatusMessage { title, description })
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- wire names -----------------------------------------------------------

    #[test]
    fn from_str_value_parses_every_status() {
        for status in LifecycleStatus::ALL {
            assert_eq!(
                LifecycleStatus::from_str_value(status.as_str()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn from_str_value_rejects_unknown() {
        let err = LifecycleStatus::from_str_value("isSleeping").unwrap_err();
        assert!(err.to_string().contains("Unknown lifecycle status"));
        assert!(err.to_string().contains("isSleeping"));
    }

    #[test]
    fn from_str_value_is_case_sensitive() {
        assert!(LifecycleStatus::from_str_value("ispaused").is_err());
        assert!(LifecycleStatus::from_str_value("IS_PAUSED").is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&LifecycleStatus::ComingUp).unwrap();
        assert_eq!(json, "\"isComingUp\"");

        let parsed: LifecycleStatus = serde_json::from_str("\"isPauseFailed\"").unwrap();
        assert_eq!(parsed, LifecycleStatus::PauseFailed);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(LifecycleStatus::Restoring.to_string(), "isRestoring");
    }

    // -- platform inference ---------------------------------------------------

    #[test]
    fn platform_active_healthy_is_healthy() {
        assert_eq!(
            LifecycleStatus::from_platform_status("ACTIVE_HEALTHY"),
            LifecycleStatus::Healthy
        );
    }

    #[test]
    fn platform_inactive_is_paused() {
        assert_eq!(
            LifecycleStatus::from_platform_status("INACTIVE"),
            LifecycleStatus::Paused
        );
    }

    #[test]
    fn platform_going_down_and_pausing_are_pausing() {
        assert_eq!(
            LifecycleStatus::from_platform_status("GOING_DOWN"),
            LifecycleStatus::Pausing
        );
        assert_eq!(
            LifecycleStatus::from_platform_status("PAUSING"),
            LifecycleStatus::Pausing
        );
    }

    #[test]
    fn platform_failures_map_to_failed_statuses() {
        assert_eq!(
            LifecycleStatus::from_platform_status("RESTORE_FAILED"),
            LifecycleStatus::RestoreFailed
        );
        assert_eq!(
            LifecycleStatus::from_platform_status("PAUSE_FAILED"),
            LifecycleStatus::PauseFailed
        );
    }

    #[test]
    fn platform_unknown_degrades_to_healthy() {
        assert_eq!(
            LifecycleStatus::from_platform_status("REMOVED"),
            LifecycleStatus::Healthy
        );
        assert_eq!(
            LifecycleStatus::from_platform_status(""),
            LifecycleStatus::Healthy
        );
    }

    // -- messages -------------------------------------------------------------

    #[test]
    fn healthy_has_no_message() {
        assert!(LifecycleStatus::Healthy.message().is_none());
    }

    #[test]
    fn every_non_healthy_status_has_a_message() {
        for status in LifecycleStatus::ALL {
            assert_eq!(status.message().is_some(), !status.is_healthy(), "{status}");
        }
    }

    #[test]
    fn paused_message() {
        let msg = LifecycleStatus::Paused.message().unwrap();
        assert_eq!(msg.title, "Project is paused");
        assert_eq!(
            msg.description,
            "This project will not accept requests until resumed"
        );
    }

    #[test]
    fn transitional_statuses_share_ready_soon_description() {
        for status in [
            LifecycleStatus::Restarting,
            LifecycleStatus::ComingUp,
            LifecycleStatus::Restoring,
            LifecycleStatus::Upgrading,
        ] {
            assert_eq!(status.message().unwrap().description, READY_SOON);
        }
    }

    #[test]
    fn failed_statuses_point_to_support() {
        assert_eq!(
            LifecycleStatus::RestoreFailed.message().unwrap().title,
            "Project restore failed"
        );
        assert_eq!(
            LifecycleStatus::PauseFailed.message().unwrap().description,
            CONTACT_SUPPORT
        );
    }
}
