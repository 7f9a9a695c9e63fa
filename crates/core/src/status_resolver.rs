//! Project card status resolution.
//!
//! Maps a project's lifecycle status and its resource warnings to the single
//! alert the project card shows. Lifecycle status always wins; warnings are
//! only surfaced for healthy projects.
//!
//! Pure logic: no I/O and no state, so a resolver can be shared freely.

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::project_status::LifecycleStatus;
use crate::resource_warnings::{
    self, ActiveWarning, ResourceWarningSet, WarningLevel, KEY_READONLY_MODE,
};
use crate::warning_catalog::{
    DisplayContext, StaticWarningCatalog, WarningCatalog, WarningContent,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Visual variant of the rendered alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    Default,
    Warning,
    Destructive,
}

/// What the project card should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDecision {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: AlertVariant,
    /// When `true` the card renders no alert at all.
    pub suppressed: bool,
    /// Warning keys selected for display, in payload order.
    pub active_warnings: Vec<String>,
}

/// Resolves display decisions against a warning catalog.
#[derive(Debug, Clone, Default)]
pub struct StatusResolver<C = StaticWarningCatalog> {
    catalog: C,
    config: ResolverConfig,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve with the built-in catalog and default configuration.
pub fn resolve(
    status: LifecycleStatus,
    warnings: Option<&ResourceWarningSet>,
) -> DisplayDecision {
    StatusResolver::<StaticWarningCatalog>::default().resolve(status, warnings)
}

impl<C: WarningCatalog> StatusResolver<C> {
    pub fn new(catalog: C, config: ResolverConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn resolve(
        &self,
        status: LifecycleStatus,
        warnings: Option<&ResourceWarningSet>,
    ) -> DisplayDecision {
        let active = warnings
            .map(|set| set.normalize().active())
            .unwrap_or_default();

        let has_critical = resource_warnings::has_critical_warning(&active);
        let is_critical = resource_warnings::is_critical(&active);

        let content = match warnings {
            Some(_) => active.first().and_then(|w| self.single_content(w)),
            None => None,
        };

        let (title, description) = match status.message() {
            Some(msg) => (
                Some(msg.title.to_string()),
                Some(msg.description.to_string()),
            ),
            None if warnings.is_none() => (None, None),
            None => self.warning_text(&active, has_critical, content.as_ref()),
        };

        let suppressed = (active.is_empty() || content.is_none()) && status.is_healthy();
        let variant = alert_variant(status, is_critical);

        tracing::debug!(
            status = %status,
            active_count = active.len(),
            is_critical,
            suppressed,
            "Resolved project card status",
        );

        DisplayDecision {
            title,
            description,
            variant,
            suppressed,
            active_warnings: active.into_iter().map(|w| w.key).collect(),
        }
    }

    /// Card copy for one warning. Read-only mode only has a single tier of
    /// copy, looked up at the warning level.
    fn single_content(&self, warning: &ActiveWarning) -> Option<WarningContent> {
        let level = if warning.key == KEY_READONLY_MODE {
            WarningLevel::Warning
        } else {
            warning.level
        };
        self.catalog
            .warning_content(&warning.key, level, DisplayContext::Card)
    }

    /// Title and description for a healthy project with a warning set.
    fn warning_text(
        &self,
        active: &[ActiveWarning],
        has_critical: bool,
        content: Option<&WarningContent>,
    ) -> (Option<String>, Option<String>) {
        let single_title = content.map(|c| c.title.clone());
        let single_description = content.map(|c| c.description.clone());

        if active.len() <= 1 {
            return (single_title, single_description);
        }

        let tier = if has_critical {
            WarningLevel::Critical
        } else {
            WarningLevel::Warning
        };
        let multiple = self
            .catalog
            .multiple_warnings_content(tier, DisplayContext::Card);

        let title = multiple.as_ref().map(|m| m.title.clone());
        let description = if self.config.show_multiple_warning_descriptions {
            multiple.map(|m| m.description)
        } else {
            single_description
        };

        (title, description)
    }
}

/// Critical warnings take precedence; a paused project is otherwise neutral.
fn alert_variant(status: LifecycleStatus, is_critical: bool) -> AlertVariant {
    if is_critical {
        AlertVariant::Destructive
    } else if status == LifecycleStatus::Paused {
        AlertVariant::Default
    } else {
        AlertVariant::Warning
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
