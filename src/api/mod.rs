//! Release-listing side of the TrueNAS SCALE management API.
//!
//! The [`ChartReleaseApi`] trait is the injected collaborator for everything
//! that consumes release records; [`ChartReleaseClient`] is the HTTP-backed
//! implementation.

mod client;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub use client::{build_client, ChartReleaseClient};

/// An installed chart release, as returned by the management API.
#[derive(Deserialize, Debug, Clone)]
pub struct ChartRelease {
    /// Release identifier, unique per installed release.
    pub id: String,
    /// Human-readable version string.
    pub human_version: String,
    #[serde(default)]
    pub chart_metadata: ChartMetadata,
    /// Catalog the release was installed from.
    pub catalog: String,
    /// Catalog train the release was installed from.
    pub catalog_train: String,
    /// Lifecycle status, as reported on the wire.
    pub status: String,
    pub update_available: bool,
    /// Portal URL lists, keyed by category.
    #[serde(default)]
    pub portals: Option<Portals>,
}

/// Metadata of the chart a release was installed from.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChartMetadata {
    pub icon: Option<String>,
}

/// Portal URL lists exposed by a release.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Portals {
    #[serde(default)]
    pub open: Option<Vec<String>>,
    #[serde(default)]
    pub web_portal: Option<Vec<String>>,
}

/// Lifecycle status of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    Active,
    Stopped,
    Deploying,
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseStatus::Active => write!(f, "ACTIVE"),
            ReleaseStatus::Stopped => write!(f, "STOPPED"),
            ReleaseStatus::Deploying => write!(f, "DEPLOYING"),
        }
    }
}

impl FromStr for ReleaseStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(ReleaseStatus::Active),
            "STOPPED" => Ok(ReleaseStatus::Stopped),
            "DEPLOYING" => Ok(ReleaseStatus::Deploying),
            _ => Err(UnknownStatusError(s.to_string())),
        }
    }
}

/// A release reported a status outside the recognized set.
///
/// This signals a contract mismatch with the API, not a transport failure.
/// Callers must not substitute a default state for it.
#[derive(Debug)]
pub struct UnknownStatusError(pub String);

impl fmt::Display for UnknownStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized release status {:?}. Expected ACTIVE, STOPPED or DEPLOYING.",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatusError {}

/// Trait for the release-listing API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChartReleaseApi: Send + Sync {
    /// Fetch every chart release installed on the system.
    async fn chart_releases(&self) -> Result<Vec<ChartRelease>>;
}
