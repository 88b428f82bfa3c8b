//! Customer and account records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Address {
    pub street_one: Option<String>,
    pub city: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_foreign: bool,
    pub is_domestic: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CustomerSuitability {
    pub id: Option<u64>,
    pub marital_status: Option<String>,
    pub number_of_dependents: Option<u32>,
    pub employment_status: Option<String>,
    pub occupation: Option<String>,
    pub employer_name: Option<String>,
    pub job_title: Option<String>,
    pub annual_net_income: Option<i64>,
    pub net_worth: Option<i64>,
    pub liquid_net_worth: Option<i64>,
    pub stock_trading_experience: Option<String>,
    pub covered_options_trading_experience: Option<String>,
    pub uncovered_options_trading_experience: Option<String>,
    pub futures_trading_experience: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Person {
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(deserialize_with = "de::opt_date")]
    pub birth_date: Option<NaiveDate>,
    pub citizenship_country: Option<String>,
    pub usa_citizenship_type: Option<String>,
    pub marital_status: Option<String>,
    pub number_of_dependents: Option<u32>,
    pub employment_status: Option<String>,
    pub occupation: Option<String>,
    pub employer_name: Option<String>,
    pub job_title: Option<String>,
}

/// The logged-in customer (`GET /customers/me`).
///
/// Tax identifiers come back masked; they are kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Customer {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile_phone_number: Option<String>,
    pub address: Address,
    pub mailing_address: Address,
    pub customer_suitability: CustomerSuitability,
    pub usa_citizenship_type: Option<String>,
    pub citizenship_country: Option<String>,
    #[serde(deserialize_with = "de::opt_date")]
    pub birth_date: Option<NaiveDate>,
    pub external_id: Option<String>,
    pub tax_number_type: Option<String>,
    pub tax_number: Option<String>,
    pub is_foreign: bool,
    pub is_professional: bool,
    pub subject_to_tax_withholding: bool,
    pub agreed_to_margining: bool,
    pub agreed_to_terms: bool,
    pub has_industry_affiliation: bool,
    pub has_political_affiliation: bool,
    pub has_listed_affiliation: bool,
    pub has_delayed_quotes: bool,
    pub has_pending_or_approved_application: bool,
    pub identifiable_type: Option<String>,
    pub person: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Account {
    pub account_number: String,
    pub external_id: Option<String>,
    pub nickname: Option<String>,
    pub account_type_name: Option<String>,
    pub margin_or_cash: Option<String>,
    pub investment_objective: Option<String>,
    pub futures_account_purpose: Option<String>,
    pub suitable_options_level: Option<String>,
    pub day_trader_status: bool,
    pub is_closed: bool,
    pub is_firm_error: bool,
    pub is_firm_proprietary: bool,
    pub is_futures_approved: bool,
    pub is_test_drive: bool,
    pub is_foreign: bool,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_date")]
    pub funding_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// An account together with the caller's authority over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountAuthority {
    pub account: Account,
    pub authority_level: Option<String>,
}

/// Trading permissions and restrictions on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TradingStatus {
    pub id: Option<u64>,
    pub account_number: String,
    pub day_trade_count: u32,
    pub equities_margin_calculation_type: Option<String>,
    pub fee_schedule_name: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub futures_margin_rate_multiplier: Option<rust_decimal::Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub small_notional_futures_margin_rate_multiplier: Option<rust_decimal::Decimal>,
    pub options_level: Option<String>,
    pub has_intraday_equities_margin: bool,
    pub is_aggregated_at_clearing: bool,
    pub is_closed: bool,
    pub is_closing_only: bool,
    pub is_cryptocurrency_closing_only: bool,
    pub is_cryptocurrency_enabled: bool,
    pub is_frozen: bool,
    pub is_full_equity_margin_required: bool,
    pub is_futures_closing_only: bool,
    pub is_futures_intra_day_enabled: bool,
    pub is_futures_enabled: bool,
    pub is_in_day_trade_equity_maintenance_call: bool,
    pub is_in_margin_call: bool,
    pub is_pattern_day_trader: bool,
    pub is_risk_reducing_only: bool,
    pub is_small_notional_futures_intra_day_enabled: bool,
    pub is_roll_the_day_forward_enabled: bool,
    pub are_far_otm_net_options_restricted: bool,
    pub short_calls_enabled: bool,
    pub is_equity_offering_enabled: bool,
    pub is_equity_offering_closing_only: bool,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub enhanced_fraud_safeguards_enabled_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}
