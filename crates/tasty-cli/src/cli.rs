//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    accounts, balances, futures_greeks, login, logout, option_chain, positions, quotes,
    transactions, whoami,
};

/// Command-line client for the tastytrade brokerage API.
#[derive(Parser, Debug)]
#[command(name = "tasty")]
#[command(author, version = env!("TASTY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new session (login)
    Login(login::LoginArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),

    /// Display the stored session
    Whoami(whoami::WhoamiArgs),

    /// List the accounts the user can access
    Accounts(accounts::AccountsArgs),

    /// Show an account's balances
    Balances(balances::BalancesArgs),

    /// List an account's open positions
    Positions(positions::PositionsArgs),

    /// List an account's transactions
    Transactions(transactions::TransactionsArgs),

    /// Fetch market data quotes
    Quotes(quotes::QuotesArgs),

    /// Show delta and theta of futures option positions
    FuturesGreeks(futures_greeks::FuturesGreeksArgs),

    /// Dump an equity option chain with quotes
    OptionChain(option_chain::OptionChainArgs),
}
