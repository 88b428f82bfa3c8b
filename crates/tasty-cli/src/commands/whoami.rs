//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let session = session::require().await?;

    output::field("User", &session.username);
    output::field("Email", &session.email);
    output::field("API", &session.client.base_url().to_string());
    if let Some(version) = session.client.api_version() {
        output::field("API version", version);
    }

    Ok(())
}
