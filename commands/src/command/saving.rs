//! Recurring and regular saving products and accounts

use chrono::NaiveDate;
use platform_commands_macros::ApiCommand;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::request::ModifiedParameters;

/// Create or update a recurring saving product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale"))]
pub struct SavingProductCommand {
    /// Saving product being updated, from the request path
    #[param(skip)]
    pub id:                             Option<i64>,
    /// Display name
    pub name:                           Option<String>,
    /// Free text description
    pub description:                    Option<String>,
    /// ISO 4217 currency code
    pub currency_code:                  Option<String>,
    /// Decimal places of the currency
    pub digits_after_decimal:           Option<i32>,
    /// Default interest rate
    pub interest_rate:                  Option<Decimal>,
    /// Lowest interest rate allowed
    pub min_interest_rate:              Option<Decimal>,
    /// Highest interest rate allowed
    pub max_interest_rate:              Option<Decimal>,
    /// Default amount deposited each period
    pub savings_deposit_amount:         Option<Decimal>,
    /// Recurring or regular saving
    pub saving_product_type:            Option<i32>,
    /// Period unit of `tenure`
    pub tenure_type:                    Option<i32>,
    /// Length of the term
    pub tenure:                         Option<i32>,
    /// Deposits per tenure period
    pub frequency:                      Option<i32>,
    /// Flat or declining balance interest
    pub interest_type:                  Option<i32>,
    /// How interest is calculated
    pub interest_calculation_method:    Option<i32>,
    /// Balance that must remain after a withdrawal
    pub minimum_balance_for_withdrawal: Option<Decimal>,
    /// Whether a period may be paid in part
    pub is_partial_deposit_allowed:     bool,
    /// Whether a lock-in period applies
    pub is_lockin_period_allowed:       bool,
    /// Length of the lock-in period
    pub lockin_period:                  Option<i32>,
    /// Period unit of `lockin_period`
    pub lockin_period_type:             Option<i32>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:            ModifiedParameters,
}

/// Open or modify a recurring saving account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct SavingAccountCommand {
    /// Saving account being modified, from the request path
    #[param(skip)]
    pub id:                                Option<i64>,
    /// Owning client
    pub client_id:                         Option<i64>,
    /// Product the account is opened from
    pub product_id:                        Option<i64>,
    /// Identifier in an external system
    pub external_id:                       Option<String>,
    /// ISO 4217 currency code
    pub currency_code:                     Option<String>,
    /// Decimal places of the currency
    pub digits_after_decimal:              Option<i32>,
    /// Amount deposited each period
    pub savings_deposit_amount_per_period: Option<Decimal>,
    /// Interest rate of recurring deposits
    pub recurring_interest_rate:           Option<Decimal>,
    /// Interest rate of regular savings
    pub saving_interest_rate:              Option<Decimal>,
    /// Length of the term
    pub tenure:                            Option<i32>,
    /// Date the account starts
    pub commencement_date:                 Option<NaiveDate>,
    /// Whether a lock-in period applies
    pub is_lockin_period_allowed:          bool,
    /// Length of the lock-in period
    pub lockin_period:                     Option<i32>,
    /// Period unit of `lockin_period`
    pub lockin_period_type:                Option<i32>,
    /// Recurring or regular saving
    pub saving_product_type:               Option<i32>,
    /// Period unit of `tenure`
    pub tenure_type:                       Option<i32>,
    /// Deposits per tenure period
    pub frequency:                         Option<i32>,
    /// Flat or declining balance interest
    pub interest_type:                     Option<i32>,
    /// How interest is calculated
    pub interest_calculation_method:       Option<i32>,
    /// Balance that must remain after a withdrawal
    pub minimum_balance_for_withdrawal:    Option<Decimal>,
    /// Whether a period may be paid in part
    pub is_partial_deposit_allowed:        bool,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:               ModifiedParameters,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ApiCommand;

    #[test]
    fn test_saving_product_allow_list() {
        assert_eq!(
            SavingProductCommand::SUPPORTED_PARAMETERS,
            &[
                "name",
                "description",
                "currencyCode",
                "digitsAfterDecimal",
                "interestRate",
                "minInterestRate",
                "maxInterestRate",
                "savingsDepositAmount",
                "savingProductType",
                "tenureType",
                "tenure",
                "frequency",
                "interestType",
                "interestCalculationMethod",
                "minimumBalanceForWithdrawal",
                "isPartialDepositAllowed",
                "isLockinPeriodAllowed",
                "lockinPeriod",
                "lockinPeriodType",
                "locale"
            ]
        );
    }

    #[test]
    fn test_saving_account_accepts_dates() {
        let keys = SavingAccountCommand::SUPPORTED_PARAMETERS;
        assert_eq!(keys.len(), 22);
        assert!(keys.contains(&"savingsDepositAmountPerPeriod"));
        assert!(keys.contains(&"commencementDate"));
        assert!(keys.contains(&"isPartialDepositAllowed"));
        assert_eq!(keys[keys.len() - 2..], ["locale", "dateFormat"]);
        assert!(!keys.contains(&"id"));
    }
}
