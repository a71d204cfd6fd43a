//! Application configuration. Environment overrides plus the static agenda
//! layout (tracker sections, label taxonomy, merge threshold).

use serde::Deserialize;

/// Merge threshold for absorbing adjacent occurrences into one meeting,
/// measured between start-of-day instants. 36 hours tolerates DST shifts
/// and slightly moved start times without merging meetings days apart.
/// Meeting-adjacency semantics are defined by this constant; do not tune it.
pub const MERGE_THRESHOLD_HOURS: i64 = 36;

/// Case-insensitive summary prefix selecting the meeting series.
pub const SERIES_PREFIX: &str = "board of directors";

/// Label pair an issue must carry to appear on the agenda.
pub const AGENDA_LABELS: [&str; 2] = ["agenda", "board"];

/// One tracker section of the agenda. `id` is the repository name under the
/// configured owner; `human_label` is the section heading text.
#[derive(Debug, Clone, Copy)]
pub struct TrackerSection {
    pub id: &'static str,
    pub human_label: &'static str,
}

/// Tracker sections in the order they appear in the document. Declared
/// order, not alphabetical and not discovery order.
pub const TRACKERS: [TrackerSection; 4] = [
    TrackerSection { id: "board", human_label: "Board" },
    TrackerSection { id: "finance", human_label: "Finance Committee" },
    TrackerSection { id: "governance", human_label: "Governance Committee" },
    TrackerSection { id: "strategy", human_label: "Strategy Committee" },
];

/// A classification label and the bolded line it produces. Checked in
/// declared order; first match wins.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub label: &'static str,
    pub text: &'static str,
}

pub const CLASSIFICATIONS: [Classification; 2] = [
    Classification { label: "for discussion", text: "For discussion." },
    Classification { label: "needs resolution", text: "Needs resolution." },
];

/// Hosts recognized as meeting-join links when scanning event descriptions.
pub const CONFERENCING_HOSTS: [&str; 5] = [
    "zoom.us",
    "meet.google.com",
    "teams.microsoft.com",
    "webex.com",
    "meet.jit.si",
];

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Organization owning the tracker repositories. Read from GAVEL_TRACKER_OWNER.
    #[serde(default)]
    pub tracker_owner: Option<String>,

    /// Tracker API base URL override (tests, GitHub Enterprise). Read from GAVEL_API_BASE.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Calendar feed URL override; takes precedence over the stored secret.
    /// Read from GAVEL_CALENDAR_URL.
    #[serde(default)]
    pub calendar_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("GAVEL"));
        if let Ok(path) = std::env::var("GAVEL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the tracker owner organization. Defaults to "w3c".
    pub fn tracker_owner_or_default(&self) -> String {
        self.tracker_owner
            .clone()
            .unwrap_or_else(|| "w3c".to_string())
    }

    /// Returns the tracker API base URL. Defaults to the public GitHub API.
    pub fn api_base_or_default(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| "https://api.github.com".to_string())
    }
}
