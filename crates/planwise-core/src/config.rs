use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Session-scoped engagement parameters.
///
/// These are the authored headline figures the source dashboard kept in
/// mutable session state. Each invocation owns its own copy; overrides apply
/// to that copy only and are never written back. The figures are display
/// totals, not recomputed sums; `pw audit` reports where they disagree with
/// the itemized tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementConfig {
    #[serde(default = "default_duration_weeks")]
    pub duration_weeks: u32,
    #[serde(default = "default_lead_hours")]
    pub lead_hours: u32,
    #[serde(default = "default_intern_hours")]
    pub intern_hours: u32,
    #[serde(default = "default_total_objects")]
    pub total_objects: u32,
    #[serde(default = "default_total_objects")]
    pub in_scope_objects: u32,
    #[serde(default = "default_total_effort_hours")]
    pub total_effort_hours: u32,
    #[serde(default = "default_milestone_count")]
    pub milestone_count: u32,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            duration_weeks: default_duration_weeks(),
            lead_hours: default_lead_hours(),
            intern_hours: default_intern_hours(),
            total_objects: default_total_objects(),
            in_scope_objects: default_total_objects(),
            total_effort_hours: default_total_effort_hours(),
            milestone_count: default_milestone_count(),
        }
    }
}

impl EngagementConfig {
    /// Apply session overrides on top of the plan's authored figures.
    #[must_use]
    pub const fn apply(self, overrides: ConfigOverrides) -> Self {
        Self {
            lead_hours: match overrides.lead_hours {
                Some(hours) => hours,
                None => self.lead_hours,
            },
            intern_hours: match overrides.intern_hours {
                Some(hours) => hours,
                None => self.intern_hours,
            },
            total_objects: match overrides.total_objects {
                Some(count) => count,
                None => self.total_objects,
            },
            ..self
        }
    }
}

/// Optional session override values, the sidebar controls of the source
/// dashboard. Absent fields leave the plan's figure in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    pub lead_hours: Option<u32>,
    pub intern_hours: Option<u32>,
    pub total_objects: Option<u32>,
}

impl ConfigOverrides {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.lead_hours.is_none() && self.intern_hours.is_none() && self.total_objects.is_none()
    }
}

/// User-level preferences from `~/.config/planwise/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Default output mode: `"pretty"`, `"text"`, or `"json"`.
    #[serde(default)]
    pub output: Option<String>,
}

/// Load the user config, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("planwise/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_duration_weeks() -> u32 {
    12
}

const fn default_lead_hours() -> u32 {
    475
}

const fn default_intern_hours() -> u32 {
    213
}

const fn default_total_objects() -> u32 {
    64
}

const fn default_total_effort_hours() -> u32 {
    688
}

const fn default_milestone_count() -> u32 {
    5
}
