//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tasty::{ApiUrl, Client, Credentials};

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username or email
    #[arg(long, env = "TT_USER")]
    pub login: String,

    /// Account password
    #[arg(long, env = "TT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// API base URL; takes precedence over --sandbox
    #[arg(long, env = "TT_BASE_URL")]
    pub base_url: Option<String>,

    /// Use the certification (sandbox) environment
    #[arg(long)]
    pub sandbox: bool,

    /// Accept-Version sent on instrument requests, e.g. 20250715
    #[arg(long, env = "TT_API_VERSION")]
    pub api_version: Option<String>,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let mut builder = Client::builder();
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(ApiUrl::new(base_url).context("Invalid API URL")?);
    } else if args.sandbox {
        builder = builder.sandbox();
    }
    if let Some(version) = args.api_version {
        builder = builder.api_version(version);
    }
    let client = builder.build().context("Failed to create client")?;

    eprintln!("{}", "Logging in...".dimmed());

    let user = client
        .authenticate(Credentials::new(&args.login, &args.password))
        .await
        .context("Failed to login")?;

    storage::save_session(&client, &user)
        .await
        .context("Failed to save session")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &user.username);
    output::field("Email", &user.email);
    output::field("API", &client.base_url().to_string());

    Ok(())
}
