//! Charge definitions and the charges applied to a loan

use chrono::NaiveDate;
use platform_commands_macros::ApiCommand;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use super::ApiCommand;
use crate::request::{Extraction, FromParameter, ModifiedParameters};

/// Create or update a charge definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "currencyOptions", "chargeCalculationTypeOptions"))]
pub struct ChargeCommand {
    /// Charge being updated, from the request path
    #[param(skip)]
    pub id:                      Option<i64>,
    /// Display name
    pub name:                    Option<String>,
    /// Amount charged
    pub amount:                  Option<Decimal>,
    /// ISO 4217 currency code
    pub currency_code:           Option<String>,
    /// Product type the charge applies to
    pub charge_applies_to:       Option<i32>,
    /// When the charge falls due
    pub charge_time_type:        Option<i32>,
    /// Flat or percentage calculation
    pub charge_calculation_type: Option<i32>,
    /// Whether the charge is a penalty
    pub penalty:                 bool,
    /// Whether the charge can be used
    pub active:                  bool,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:     ModifiedParameters,
}

/// Add or change a charge on a loan
///
/// Also used for each element of a loan application's `charges` array, where
/// `id` comes from the element instead of the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct LoanChargeCommand {
    /// Loan charge being updated, from the path or the `charges` element
    #[param(skip)]
    pub id:                      Option<i64>,
    /// Loan the charge belongs to, from the request path
    #[param(skip)]
    pub loan_id:                 Option<i64>,
    /// Charge definition applied
    pub charge_id:               Option<i64>,
    /// Amount charged, overriding the charge definition
    pub amount:                  Option<Decimal>,
    /// When the charge falls due
    pub charge_time_type:        Option<i32>,
    /// Flat or percentage calculation
    pub charge_calculation_type: Option<i32>,
    /// Due date of a charge that falls on a specified date
    pub specified_due_date:      Option<NaiveDate>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:     ModifiedParameters,
}

impl LoanChargeCommand {
    /// Read one element of a loan application's `charges` array
    fn from_element<'r>(element: &'r Map<String, Value>, parent: &mut Extraction<'r>) -> Self {
        let mut nested = parent.nested(element);
        let id = nested.long("id");
        let charge = Self {
            id,
            ..Self::extract(&mut nested)
        };
        parent.absorb(nested);
        charge
    }
}

impl FromParameter for Option<Vec<LoanChargeCommand>> {
    fn from_parameter(name: &str, extraction: &mut Extraction<'_>) -> Self {
        let elements = extraction.object_array(name)?;

        let mut charges = Vec::with_capacity(elements.len());
        for element in elements {
            charges.push(LoanChargeCommand::from_element(element, extraction));
        }
        Some(charges)
    }
}
