//! Loan products, loan applications and the transactions on a loan

use chrono::NaiveDate;
use platform_commands_macros::ApiCommand;
use rust_decimal::Decimal;
use serde::Serialize;

use super::LoanChargeCommand;
use crate::request::ModifiedParameters;

/// Create or update a loan product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale"))]
pub struct LoanProductCommand {
    /// Loan product being updated, from the request path
    #[param(skip)]
    pub id:                                 Option<i64>,
    /// Display name
    pub name:                               Option<String>,
    /// Free text description
    pub description:                        Option<String>,
    /// Fund the money comes from
    pub fund_id:                            Option<i64>,
    /// Order repayments are allocated in
    pub transaction_processing_strategy_id: Option<i64>,
    /// ISO 4217 currency code
    pub currency_code:                      Option<String>,
    /// Decimal places of the currency
    pub digits_after_decimal:               Option<i32>,
    /// Amount lent
    pub principal:                          Option<Decimal>,
    /// Overdue amount tolerated before the loan is in arrears
    pub in_arrears_tolerance:               Option<Decimal>,
    /// Nominal interest rate per rate period
    pub interest_rate_per_period:           Option<Decimal>,
    /// Number of periods between repayments
    pub repayment_every:                    Option<i32>,
    /// Count of scheduled repayments
    pub number_of_repayments:               Option<i32>,
    /// Period unit of `repayment_every`
    pub repayment_frequency_type:           Option<i32>,
    /// Period unit of the interest rate
    pub interest_rate_frequency_type:       Option<i32>,
    /// Equal instalments or equal principal
    pub amortization_type:                  Option<i32>,
    /// Flat or declining balance interest
    pub interest_type:                      Option<i32>,
    /// Daily or per repayment period calculation
    pub interest_calculation_period_type:   Option<i32>,
    /// Identifiers of the charges attached to the product
    pub charges:                            Option<Vec<String>>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:                ModifiedParameters,
}

/// Submit or modify a loan application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat", "id"))]
pub struct LoanApplicationCommand {
    /// Loan being modified, from the request path
    #[param(skip)]
    pub id:                                 Option<i64>,
    /// Borrowing client
    pub client_id:                          Option<i64>,
    /// Borrowing group
    pub group_id:                           Option<i64>,
    /// Loan product applied for
    pub product_id:                         Option<i64>,
    /// Identifier in an external system
    pub external_id:                        Option<String>,
    /// Fund the money comes from
    pub fund_id:                            Option<i64>,
    /// Order repayments are allocated in
    pub transaction_processing_strategy_id: Option<i64>,
    /// Amount lent
    pub principal:                          Option<Decimal>,
    /// Overdue amount tolerated before the loan is in arrears
    pub in_arrears_tolerance:               Option<Decimal>,
    /// Nominal interest rate per rate period
    pub interest_rate_per_period:           Option<Decimal>,
    /// Number of periods between repayments
    pub repayment_every:                    Option<i32>,
    /// Count of scheduled repayments
    pub number_of_repayments:               Option<i32>,
    /// Length of the loan term
    pub loan_term_frequency:                Option<i32>,
    /// Period unit of `loan_term_frequency`
    pub loan_term_frequency_type:           Option<i32>,
    /// Charges to apply, each read with this request's locale and date format
    pub charges:                            Option<Vec<LoanChargeCommand>>,
    /// Period unit of `repayment_every`
    pub repayment_frequency_type:           Option<i32>,
    /// Period unit of the interest rate
    pub interest_rate_frequency_type:       Option<i32>,
    /// Equal instalments or equal principal
    pub amortization_type:                  Option<i32>,
    /// Flat or declining balance interest
    pub interest_type:                      Option<i32>,
    /// Daily or per repayment period calculation
    pub interest_calculation_period_type:   Option<i32>,
    /// Date the money is expected to be paid out
    pub expected_disbursement_date:         Option<NaiveDate>,
    /// Date of the first repayment
    pub repayments_starting_from_date:      Option<NaiveDate>,
    /// Date interest starts accruing
    pub interest_charged_from_date:         Option<NaiveDate>,
    /// Date the application was submitted
    pub submitted_on_date:                  Option<NaiveDate>,
    /// Note recorded with the submission
    pub submitted_on_note:                  Option<String>,
    /// Loan officer responsible
    pub loan_officer_id:                    Option<i64>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:                ModifiedParameters,
}

/// Approve, disburse, reject or withdraw a loan, or undo one of those
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct LoanStateTransitionCommand {
    /// Loan, from the request path
    #[param(skip)]
    pub loan_id:             Option<i64>,
    /// Date the transition takes effect
    pub event_date:          Option<NaiveDate>,
    /// Free text note
    pub note:                Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Record a repayment, waiver or write-off against a loan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("dateFormat", "locale"))]
pub struct LoanTransactionCommand {
    /// Loan, from the request path
    #[param(skip)]
    pub loan_id:             Option<i64>,
    /// Date the money moved
    pub transaction_date:    Option<NaiveDate>,
    /// Amount of the transaction
    pub transaction_amount:  Option<Decimal>,
    /// Free text note
    pub note:                Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Correct an existing loan transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("dateFormat", "locale"))]
pub struct AdjustLoanTransactionCommand {
    /// Loan, from the request path
    #[param(skip)]
    pub loan_id:             Option<i64>,
    /// Transaction being adjusted, from the request path
    #[param(skip)]
    pub transaction_id:      Option<i64>,
    /// Date the money moved
    pub transaction_date:    Option<NaiveDate>,
    /// Amount of the transaction
    pub transaction_amount:  Option<Decimal>,
    /// Free text note
    pub note:                Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Move loans from one loan officer to another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct BulkLoanReassignmentCommand {
    /// Loan officer giving up the loans
    pub from_loan_officer_id: Option<i64>,
    /// Loan officer taking over the loans
    pub to_loan_officer_id:   Option<i64>,
    /// Loans to reassign
    pub loans:                Option<Vec<String>>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:  ModifiedParameters,
}
