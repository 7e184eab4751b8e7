//! Installed application listing - fetches releases and maps them to summaries.

use std::fmt;

use anyhow::Result;
use log::debug;

use crate::api::{ChartRelease, ChartReleaseApi, Portals, ReleaseStatus};

/// Basic information about an installed application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSummary {
    /// The user-specified name given to the application.
    pub name: String,
    /// The currently installed version.
    pub version: String,
    /// URL of the application icon. Empty when the source provides none.
    pub icon_url: String,
    /// The catalog this application was installed from.
    pub catalog: String,
    /// The catalog train this application was installed from.
    pub train: String,
    /// The current state of the application.
    pub state: AppState,
    /// Whether the application has an update available.
    pub update_available: bool,
    /// The URL to the application's web interface, if any.
    pub web_portal_url: Option<String>,
}

/// Possible states an installed application may be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Active,
    Stopped,
    Deploying,
}

impl From<ReleaseStatus> for AppState {
    fn from(status: ReleaseStatus) -> Self {
        match status {
            ReleaseStatus::Active => AppState::Active,
            ReleaseStatus::Stopped => AppState::Stopped,
            ReleaseStatus::Deploying => AppState::Deploying,
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppState::Active => write!(f, "active"),
            AppState::Stopped => write!(f, "stopped"),
            AppState::Deploying => write!(f, "deploying"),
        }
    }
}

/// Retrieves the applications installed on the system.
pub struct InstalledApps<A: ChartReleaseApi> {
    api: A,
}

impl<A: ChartReleaseApi> InstalledApps<A> {
    /// Create a new fetcher backed by the given API collaborator.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch all installed applications, sorted ascending by name.
    ///
    /// Every release returned by the API maps to exactly one summary; no
    /// records are dropped or deduplicated, and releases sharing a name keep
    /// their source order. A release with an unrecognized status fails the
    /// whole call with [`crate::api::UnknownStatusError`].
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<AppSummary>> {
        let releases = self.api.chart_releases().await?;
        debug!("Mapping {} release(s)", releases.len());

        let mut apps = releases
            .into_iter()
            .map(summarize)
            .collect::<Result<Vec<_>>>()?;
        // Vec::sort_by is stable, so duplicate names keep their source order
        apps.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(apps)
    }
}

fn summarize(release: ChartRelease) -> Result<AppSummary> {
    let status: ReleaseStatus = release.status.parse()?;

    Ok(AppSummary {
        name: release.id,
        version: release.human_version,
        icon_url: release.chart_metadata.icon.unwrap_or_default(),
        catalog: release.catalog,
        train: release.catalog_train,
        state: status.into(),
        update_available: release.update_available,
        web_portal_url: select_portal(release.portals.as_ref()),
    })
}

/// Picks the portal URL for a release: the first entry of the "open" list,
/// falling back to the first entry of the "web_portal" list.
fn select_portal(portals: Option<&Portals>) -> Option<String> {
    let portals = portals?;
    portals
        .open
        .iter()
        .flatten()
        .next()
        .or_else(|| portals.web_portal.iter().flatten().next())
        .cloned()
}
