//! Fixed term deposit products and accounts

use chrono::NaiveDate;
use platform_commands_macros::ApiCommand;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::request::ModifiedParameters;

/// Create or update a deposit product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale"))]
pub struct DepositProductCommand {
    /// Deposit product being updated, from the request path
    #[param(skip)]
    pub id:                                    Option<i64>,
    /// Display name
    pub name:                                  Option<String>,
    /// Identifier in an external system
    pub external_id:                           Option<String>,
    /// Free text description
    pub description:                           Option<String>,
    /// ISO 4217 currency code
    pub currency_code:                         Option<String>,
    /// Decimal places of the currency
    pub digits_after_decimal:                  Option<i32>,
    /// Smallest deposit accepted
    pub minimum_balance:                       Option<Decimal>,
    /// Largest deposit accepted
    pub maximum_balance:                       Option<Decimal>,
    /// Term of the deposit in months
    pub tenure_in_months:                      Option<i32>,
    /// Default interest rate at maturity
    pub maturity_default_interest_rate:        Option<Decimal>,
    /// Lowest interest rate at maturity
    pub maturity_min_interest_rate:            Option<Decimal>,
    /// Highest interest rate at maturity
    pub maturity_max_interest_rate:            Option<Decimal>,
    /// Number of periods between interest postings
    pub interest_compounded_every:             Option<i32>,
    /// Period unit of `interest_compounded_every`
    pub interest_compounded_every_period_type: Option<i32>,
    /// Whether the deposit may be renewed at maturity
    pub renewal_allowed:                       bool,
    /// Whether the deposit may be closed early
    pub pre_closure_allowed:                   bool,
    /// Interest rate applied when closed early
    pub pre_closure_interest_rate:             Option<Decimal>,
    /// Whether interest is compounded
    pub interest_compounding_allowed:          bool,
    /// Whether a lock-in period applies
    pub is_lockin_period_allowed:              bool,
    /// Length of the lock-in period
    pub lockin_period:                         Option<i32>,
    /// Period unit of `lockin_period`
    pub lockin_period_type:                    Option<i32>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:                   ModifiedParameters,
}

/// Open or modify a deposit account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct DepositAccountCommand {
    /// Deposit account being modified, from the request path
    #[param(skip)]
    pub id:                                    Option<i64>,
    /// Owning client
    pub client_id:                             Option<i64>,
    /// Product the account is opened from
    pub product_id:                            Option<i64>,
    /// Identifier in an external system
    pub external_id:                           Option<String>,
    /// Amount deposited at the start
    pub deposit:                               Option<Decimal>,
    /// Interest rate paid at maturity
    pub maturity_interest_rate:                Option<Decimal>,
    /// Interest rate applied when closed early
    pub pre_closure_interest_rate:             Option<Decimal>,
    /// Term of the deposit in months
    pub tenure_in_months:                      Option<i32>,
    /// Number of periods between interest postings
    pub interest_compounded_every:             Option<i32>,
    /// Period unit of `interest_compounded_every`
    pub interest_compounded_every_period_type: Option<i32>,
    /// Date the account starts
    pub commencement_date:                     Option<NaiveDate>,
    /// Whether the deposit may be renewed at maturity
    pub renewal_allowed:                       bool,
    /// Whether the deposit may be closed early
    pub pre_closure_allowed:                   bool,
    /// Whether interest is compounded
    pub interest_compounding_allowed:          bool,
    /// Whether interest may be withdrawn before maturity
    pub is_interest_withdrawable:              bool,
    /// Whether a lock-in period applies
    pub is_lockin_period_allowed:              bool,
    /// Length of the lock-in period
    pub lockin_period:                         Option<i32>,
    /// Period unit of `lockin_period`
    pub lockin_period_type:                    Option<i32>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:                   ModifiedParameters,
}

/// Move a deposit account between states
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct DepositStateTransitionCommand {
    /// Account, from the request path
    #[param(skip)]
    pub account_id:          Option<i64>,
    /// Date the transition takes effect
    pub event_date:          Option<NaiveDate>,
    /// Free text note
    pub note:                Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Approve a deposit account, optionally changing its terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct DepositStateTransitionApprovalCommand {
    /// Account, from the request path
    #[param(skip)]
    pub account_id:                            Option<i64>,
    /// Product the account is opened from
    pub product_id:                            Option<i64>,
    /// Date the account starts
    pub commencement_date:                     Option<NaiveDate>,
    /// Term of the deposit in months
    pub tenure_in_months:                      Option<i32>,
    /// Amount deposited
    pub deposit:                               Option<Decimal>,
    /// Period unit of `interest_compounded_every`
    pub interest_compounded_every_period_type: Option<i32>,
    /// Number of periods between interest postings
    pub interest_compounded_every:             Option<i32>,
    /// Note recorded with the approval
    pub note:                                  Option<String>,
    /// Interest rate paid at maturity
    pub maturity_interest_rate:                Option<Decimal>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:                   ModifiedParameters,
}

/// Withdraw a matured deposit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct DepositAccountWithdrawalCommand {
    /// Account, from the request path
    #[param(skip)]
    pub account_id:          Option<i64>,
    /// Note recorded with the withdrawal
    pub note:                Option<String>,
    /// Maturity date of the deposit
    pub matures_on_date:     Option<NaiveDate>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Withdraw interest earned on a deposit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale"))]
pub struct DepositAccountWithdrawInterestCommand {
    /// Account, from the request path
    #[param(skip)]
    pub account_id:          Option<i64>,
    /// Interest amount withdrawn
    pub amount:              Option<Decimal>,
    /// Free text note
    pub note:                Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}
