//! Subcommand implementations.

pub mod accounts;
pub mod balances;
pub mod futures_greeks;
pub mod login;
pub mod logout;
pub mod option_chain;
pub mod positions;
pub mod quotes;
pub mod transactions;
pub mod whoami;

use anyhow::Result;

use crate::cli::Commands;

pub async fn handle(command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::Accounts(args) => accounts::run(args).await,
        Commands::Balances(args) => balances::run(args).await,
        Commands::Positions(args) => positions::run(args).await,
        Commands::Transactions(args) => transactions::run(args).await,
        Commands::Quotes(args) => quotes::run(args).await,
        Commands::FuturesGreeks(args) => futures_greeks::run(args).await,
        Commands::OptionChain(args) => option_chain::run(args).await,
    }
}
