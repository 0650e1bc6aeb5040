use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tracker configuration, loaded from TOML.
///
/// The analytics windows are demo-tuned constants with no stated business
/// justification, so they are configurable rather than hard-coded; the
/// defaults preserve the tuned values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub staffing: StaffingConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            analytics: AnalyticsConfig::default(),
            staffing: StaffingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Trailing window for (room, asset) recurrence grouping, in days.
    #[serde(default = "default_recurrence_window_days")]
    pub recurrence_window_days: i64,
    /// Trailing window for per-room hotspot counting, in days.
    #[serde(default = "default_hotspot_window_days")]
    pub hotspot_window_days: i64,
    /// Ticket count at or above which a room is a hotspot.
    #[serde(default = "default_hotspot_threshold")]
    pub hotspot_threshold: usize,
    /// Trailing window for the closed-recently KPI, in days.
    #[serde(default = "default_closed_window_days")]
    pub closed_window_days: i64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            recurrence_window_days: default_recurrence_window_days(),
            hotspot_window_days: default_hotspot_window_days(),
            hotspot_threshold: default_hotspot_threshold(),
            closed_window_days: default_closed_window_days(),
        }
    }
}

/// Shift staffing heuristic inputs. This is a rough volume-based estimate,
/// not a scheduling algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingConfig {
    /// Share of actionable tickets assumed to land on the morning shift.
    #[serde(default = "default_morning_share")]
    pub morning_share: f64,
    /// Share of actionable tickets assumed to land on the evening shift.
    #[serde(default = "default_evening_share")]
    pub evening_share: f64,
    /// Tickets one technician is assumed to handle per shift.
    #[serde(default = "default_tickets_per_tech")]
    pub tickets_per_tech: f64,
    /// Fixed night-shift headcount.
    #[serde(default = "default_night_staff")]
    pub night_staff: u32,
}

impl Default for StaffingConfig {
    fn default() -> Self {
        Self {
            morning_share: default_morning_share(),
            evening_share: default_evening_share(),
            tickets_per_tech: default_tickets_per_tech(),
            night_staff: default_night_staff(),
        }
    }
}

/// Default location for the user-level config file.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("innkeep/config.toml"))
}

/// Default location for the ticket snapshot.
#[must_use]
pub fn default_snapshot_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("innkeep/tickets.json"))
}

/// Load configuration from an explicit path, or from the default location.
///
/// A missing file yields defaults. A file that exists but does not parse is
/// an error with context, never a silent fallback.
pub fn load_config(explicit: Option<&Path>) -> Result<TrackerConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return Ok(TrackerConfig::default()),
        },
    };

    if !path.exists() {
        if explicit.is_some() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(TrackerConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<TrackerConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_recurrence_window_days() -> i64 {
    30
}

const fn default_hotspot_window_days() -> i64 {
    7
}

const fn default_hotspot_threshold() -> usize {
    3
}

const fn default_closed_window_days() -> i64 {
    7
}

const fn default_morning_share() -> f64 {
    0.6
}

const fn default_evening_share() -> f64 {
    0.4
}

const fn default_tickets_per_tech() -> f64 {
    4.0
}

const fn default_night_staff() -> u32 {
    1
}
