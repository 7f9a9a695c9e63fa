/// Feature flags for the status resolver.
///
/// Defaults match what ships today. The resolver never reads the environment
/// itself; load once via [`ResolverConfig::from_env`] and hand it over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Show the aggregated "multiple resources" description when more than
    /// one warning is active, instead of the first warning's description.
    /// Disabled by default.
    pub show_multiple_warning_descriptions: bool,
}

pub const ENV_SHOW_MULTIPLE_WARNING_DESCRIPTIONS: &str = "SHOW_MULTIPLE_WARNING_DESCRIPTIONS";

impl ResolverConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                              | Default |
    /// |--------------------------------------|---------|
    /// | `SHOW_MULTIPLE_WARNING_DESCRIPTIONS` | `false` |
    pub fn from_env() -> Self {
        let show_multiple_warning_descriptions =
            std::env::var(ENV_SHOW_MULTIPLE_WARNING_DESCRIPTIONS)
                .map(|v| parse_flag(&v))
                .unwrap_or(false);

        Self {
            show_multiple_warning_descriptions,
        }
    }
}

/// `true`, `1` and `yes` (any case) enable a flag; everything else disables it.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_multiple_descriptions() {
        assert!(!ResolverConfig::default().show_multiple_warning_descriptions);
    }

    #[test]
    fn parse_flag_accepts_truthy_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("Yes"));
    }

    #[test]
    fn parse_flag_rejects_everything_else() {
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("on"));
    }
}
