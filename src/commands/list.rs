use anyhow::Result;
use log::debug;

use crate::api::{ChartReleaseClient, build_client};
use crate::apps::{AppSummary, InstalledApps};

/// List all applications installed on the system
#[tracing::instrument(skip(api_key))]
pub async fn list(url: &str, api_key: Option<&str>) -> Result<()> {
    let client = build_client(api_key)?;
    let api = ChartReleaseClient::new(client, url);

    let apps = InstalledApps::new(api).fetch().await?;
    if apps.is_empty() {
        println!("No applications installed.");
        return Ok(());
    }

    debug!("Found {} application(s)", apps.len());

    for app in &apps {
        println!("{}", render_line(app));
    }

    Ok(())
}

fn render_line(app: &AppSummary) -> String {
    let mut line = format!(
        "{} {} ({}/{}) {}",
        app.name, app.version, app.catalog, app.train, app.state
    );
    if app.update_available {
        line.push_str(" [update available]");
    }
    if let Some(portal) = &app.web_portal_url {
        line.push(' ');
        line.push_str(portal);
    }
    line
}
