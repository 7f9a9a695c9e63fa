//! Display copy for resource warnings.
//!
//! The resolver only depends on the [`WarningCatalog`] trait; the built-in
//! [`StaticWarningCatalog`] carries the copy shipped with the dashboard.

use serde::Serialize;

use crate::resource_warnings::{
    WarningLevel, KEY_AUTH_EMAIL_OFFENDER, KEY_AUTH_RATE_LIMIT_EXHAUSTION,
    KEY_AUTH_RESTRICTED_EMAIL_SENDING, KEY_CPU_EXHAUSTION, KEY_DISK_IO_EXHAUSTION,
    KEY_DISK_SPACE_EXHAUSTION, KEY_MEMORY_AND_SWAP_EXHAUSTION, KEY_READONLY_MODE,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Where the warning is rendered. Banners get the long-form copy, project
/// cards the short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayContext {
    Banner,
    Card,
}

/// Title and description handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningContent {
    pub title: String,
    pub description: String,
}

/// Lookup of warning copy by key, severity and display context.
pub trait WarningCatalog {
    /// Copy for a single warning. `None` when the catalog has nothing for it.
    fn warning_content(
        &self,
        key: &str,
        level: WarningLevel,
        context: DisplayContext,
    ) -> Option<WarningContent>;

    /// Copy shown when several warnings are active at once.
    fn multiple_warnings_content(
        &self,
        level: WarningLevel,
        context: DisplayContext,
    ) -> Option<WarningContent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageText {
    pub title: &'static str,
    pub description: &'static str,
}

impl From<MessageText> for WarningContent {
    fn from(text: MessageText) -> Self {
        Self {
            title: text.title.to_string(),
            description: text.description.to_string(),
        }
    }
}

/// Copy for both severity tiers of one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredText {
    pub warning: MessageText,
    pub critical: MessageText,
}

impl TieredText {
    pub fn for_level(&self, level: WarningLevel) -> MessageText {
        match level {
            WarningLevel::Warning => self.warning,
            WarningLevel::Critical => self.critical,
        }
    }
}

/// Catalog entry for one warning key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningEntry {
    pub key: &'static str,
    /// Usage metric the warning relates to, used to deep-link the usage page.
    pub metric: Option<&'static str>,
    pub docs_url: Option<&'static str>,
    pub button_text: Option<&'static str>,
    pub banner: Option<TieredText>,
    pub card: Option<TieredText>,
}

impl WarningEntry {
    pub fn text(&self, context: DisplayContext) -> Option<&TieredText> {
        match context {
            DisplayContext::Banner => self.banner.as_ref(),
            DisplayContext::Card => self.card.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Static catalog
// ---------------------------------------------------------------------------

const fn text(title: &'static str, description: &'static str) -> MessageText {
    MessageText { title, description }
}

const fn same_for_both_tiers(text: MessageText) -> TieredText {
    TieredText {
        warning: text,
        critical: text,
    }
}

const MAY_BECOME_UNRESPONSIVE: &str = "It may become unresponsive if fully exhausted";
const PERFORMANCE_AFFECTED: &str = "Performance may be affected";

const READONLY_ENTRY: WarningEntry = WarningEntry {
    key: KEY_READONLY_MODE,
    metric: None,
    docs_url: Some(
        "https://supabase.com/docs/guides/platform/database-size#disabling-read-only-mode",
    ),
    button_text: Some("View database settings"),
    banner: Some(same_for_both_tiers(text(
        "Your project is currently in read-only mode and is no longer accepting write requests",
        "You will need to manually override read-only mode and reduce the disk size to below 95%",
    ))),
    card: Some(same_for_both_tiers(text(
        "Project is in read-only mode",
        "Database is no longer accepting write requests",
    ))),
};

const WARNING_ENTRIES: &[WarningEntry] = &[
    READONLY_ENTRY,
    WarningEntry {
        key: KEY_DISK_IO_EXHAUSTION,
        metric: Some("disk_io"),
        docs_url: Some("https://supabase.com/docs/guides/platform/exhaust-disk-io"),
        button_text: Some("Check usage"),
        banner: Some(TieredText {
            warning: text(
                "Your project is about to deplete its Disk IO Budget, and may become unresponsive once fully exhausted",
                "Optimize your queries or upgrade to a larger compute add-on for a higher Disk IO Budget",
            ),
            critical: text(
                "Your project has depleted its Disk IO Budget, and may become unresponsive",
                "Optimize your queries or upgrade to a larger compute add-on for a higher Disk IO Budget",
            ),
        }),
        card: Some(TieredText {
            warning: text(
                "Project is depleting its Disk IO Budget",
                MAY_BECOME_UNRESPONSIVE,
            ),
            critical: text(
                "Project has depleted its Disk IO Budget",
                "It may become unresponsive",
            ),
        }),
    },
    WarningEntry {
        key: KEY_DISK_SPACE_EXHAUSTION,
        metric: Some("disk_space"),
        docs_url: Some("https://supabase.com/docs/guides/platform/database-size"),
        button_text: Some("Check usage"),
        banner: Some(TieredText {
            warning: text(
                "Your project is about to exhaust its available disk space, and may become read-only once fully exhausted",
                "Reduce the size of your database or upgrade your plan for more disk space",
            ),
            critical: text(
                "Your project has exhausted its available disk space, and is now in read-only mode",
                "Reduce the size of your database or upgrade your plan for more disk space",
            ),
        }),
        card: Some(TieredText {
            warning: text(
                "Project is running out of disk space",
                "It may become read-only if fully exhausted",
            ),
            critical: text(
                "Project has run out of disk space",
                "It is now in read-only mode",
            ),
        }),
    },
    WarningEntry {
        key: KEY_CPU_EXHAUSTION,
        metric: Some("cpu"),
        docs_url: Some("https://supabase.com/docs/guides/platform/exhaust-cpu"),
        button_text: Some("Check usage"),
        banner: Some(TieredText {
            warning: text(
                "Your project is currently experiencing high CPU usage",
                "Optimize your queries or upgrade to a larger compute add-on",
            ),
            critical: text(
                "Your project's CPU usage is at 100%",
                "Optimize your queries or upgrade to a larger compute add-on",
            ),
        }),
        card: Some(TieredText {
            warning: text("Project has high CPU usage", PERFORMANCE_AFFECTED),
            critical: text("Project CPU usage is at 100%", PERFORMANCE_AFFECTED),
        }),
    },
    WarningEntry {
        key: KEY_MEMORY_AND_SWAP_EXHAUSTION,
        metric: Some("ram"),
        docs_url: Some("https://supabase.com/docs/guides/platform/exhaust-ram"),
        button_text: Some("Check usage"),
        banner: Some(TieredText {
            warning: text(
                "Your project is currently experiencing high memory usage",
                "Optimize your queries or upgrade to a larger compute add-on",
            ),
            critical: text(
                "Your project's memory usage is at 100%",
                "Optimize your queries or upgrade to a larger compute add-on",
            ),
        }),
        card: Some(TieredText {
            warning: text("Project has high memory usage", PERFORMANCE_AFFECTED),
            critical: text("Project memory usage is at 100%", PERFORMANCE_AFFECTED),
        }),
    },
    WarningEntry {
        key: KEY_AUTH_RATE_LIMIT_EXHAUSTION,
        metric: None,
        docs_url: Some("https://supabase.com/docs/guides/auth/rate-limits"),
        button_text: Some("Configure rate limits"),
        banner: Some(same_for_both_tiers(text(
            "Your project has exceeded its auth rate limits",
            "Some auth requests are being rejected until the rate limit window resets",
        ))),
        card: Some(same_for_both_tiers(text(
            "Project has exceeded its auth rate limits",
            "Some auth requests are being rejected",
        ))),
    },
    WarningEntry {
        key: KEY_AUTH_EMAIL_OFFENDER,
        metric: None,
        docs_url: Some("https://supabase.com/docs/guides/auth/auth-smtp"),
        button_text: Some("Configure SMTP"),
        banner: Some(same_for_both_tiers(text(
            "Your project's auth emails have a high bounce rate",
            "Email sending may be restricted unless a custom SMTP provider is configured",
        ))),
        card: Some(same_for_both_tiers(text(
            "Auth emails have a high bounce rate",
            "Email sending may be restricted",
        ))),
    },
    WarningEntry {
        key: KEY_AUTH_RESTRICTED_EMAIL_SENDING,
        metric: None,
        docs_url: Some("https://supabase.com/docs/guides/auth/auth-smtp"),
        button_text: Some("Configure SMTP"),
        banner: Some(same_for_both_tiers(text(
            "Your project's auth email sending is restricted",
            "Set up a custom SMTP provider to send auth emails",
        ))),
        card: Some(same_for_both_tiers(text(
            "Auth email sending is restricted",
            "Set up a custom SMTP provider to send auth emails",
        ))),
    },
];

const MULTIPLE_WARNINGS_CARD: TieredText = TieredText {
    warning: text(
        "Project is exhausting multiple resources",
        MAY_BECOME_UNRESPONSIVE,
    ),
    critical: text(
        "Project has exhausted multiple resources",
        "It may become unresponsive",
    ),
};

const MULTIPLE_WARNINGS_BANNER: TieredText = TieredText {
    warning: text(
        "Your project is about to exhaust multiple resources, and may become unresponsive once fully exhausted",
        "Check your usage to see which resources are under strain",
    ),
    critical: text(
        "Your project has exhausted multiple resources, and may become unresponsive",
        "Check your usage to see which resources are under strain",
    ),
};

/// The warning copy shipped with the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWarningCatalog;

impl StaticWarningCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn entry(&self, key: &str) -> Option<&'static WarningEntry> {
        WARNING_ENTRIES.iter().find(|e| e.key == key)
    }

    pub fn entries(&self) -> &'static [WarningEntry] {
        WARNING_ENTRIES
    }
}

impl WarningCatalog for StaticWarningCatalog {
    fn warning_content(
        &self,
        key: &str,
        level: WarningLevel,
        context: DisplayContext,
    ) -> Option<WarningContent> {
        self.entry(key)
            .and_then(|e| e.text(context))
            .map(|t| t.for_level(level).into())
    }

    fn multiple_warnings_content(
        &self,
        level: WarningLevel,
        context: DisplayContext,
    ) -> Option<WarningContent> {
        let tiers = match context {
            DisplayContext::Banner => &MULTIPLE_WARNINGS_BANNER,
            DisplayContext::Card => &MULTIPLE_WARNINGS_CARD,
        };
        Some(tiers.for_level(level).into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_keys_are_unique() {
        let catalog = StaticWarningCatalog::new();
        for (i, entry) in catalog.entries().iter().enumerate() {
            assert!(
                catalog.entries()[i + 1..].iter().all(|e| e.key != entry.key),
                "duplicate catalog key {}",
                entry.key
            );
        }
    }

    #[test]
    fn every_entry_has_card_copy() {
        for entry in StaticWarningCatalog::new().entries() {
            assert!(entry.card.is_some(), "{} has no card copy", entry.key);
        }
    }

    #[test]
    fn card_content_follows_level() {
        let catalog = StaticWarningCatalog::new();
        let warning = catalog
            .warning_content(KEY_DISK_IO_EXHAUSTION, WarningLevel::Warning, DisplayContext::Card)
            .unwrap();
        let critical = catalog
            .warning_content(KEY_DISK_IO_EXHAUSTION, WarningLevel::Critical, DisplayContext::Card)
            .unwrap();

        assert_eq!(warning.title, "Project is depleting its Disk IO Budget");
        assert_eq!(critical.title, "Project has depleted its Disk IO Budget");
    }

    #[test]
    fn banner_and_card_copy_differ() {
        let catalog = StaticWarningCatalog::new();
        let banner = catalog
            .warning_content(KEY_CPU_EXHAUSTION, WarningLevel::Warning, DisplayContext::Banner)
            .unwrap();
        let card = catalog
            .warning_content(KEY_CPU_EXHAUSTION, WarningLevel::Warning, DisplayContext::Card)
            .unwrap();
        assert_ne!(banner.title, card.title);
    }

    #[test]
    fn unknown_key_has_no_content() {
        let catalog = StaticWarningCatalog::new();
        assert!(catalog
            .warning_content("gpu_exhaustion", WarningLevel::Critical, DisplayContext::Card)
            .is_none());
        assert!(catalog.entry("gpu_exhaustion").is_none());
    }

    #[test]
    fn multiple_warnings_tiers() {
        let catalog = StaticWarningCatalog::new();
        let warning = catalog
            .multiple_warnings_content(WarningLevel::Warning, DisplayContext::Card)
            .unwrap();
        let critical = catalog
            .multiple_warnings_content(WarningLevel::Critical, DisplayContext::Card)
            .unwrap();
        assert_eq!(warning.title, "Project is exhausting multiple resources");
        assert_eq!(critical.title, "Project has exhausted multiple resources");
    }

    #[test]
    fn entry_metadata() {
        let entry = StaticWarningCatalog::new().entry(KEY_DISK_IO_EXHAUSTION).unwrap();
        assert_eq!(entry.metric, Some("disk_io"));
        assert_eq!(entry.button_text, Some("Check usage"));
        assert!(entry.docs_url.unwrap().starts_with("https://"));
    }
}
