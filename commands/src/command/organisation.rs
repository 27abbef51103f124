//! Offices, staff, users and other organisation set-up commands

use chrono::NaiveDate;
use platform_commands_macros::ApiCommand;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::request::ModifiedParameters;

/// Create or update an office
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct OfficeCommand {
    /// Office being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Display name
    pub name:                Option<String>,
    /// Identifier in an external system
    pub external_id:         Option<String>,
    /// Parent office
    pub parent_id:           Option<i64>,
    /// Date the office opened
    pub opening_date:        Option<NaiveDate>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Create or update a staff member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct StaffCommand {
    /// Staff member being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Given name
    pub firstname:           Option<String>,
    /// Family name
    pub lastname:            Option<String>,
    /// Office the staff member works in
    pub office_id:           Option<i64>,
    /// Whether the staff member is a loan officer
    pub loan_officer_flag:   bool,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Create or update a fund
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct FundCommand {
    /// Fund being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Fund name
    pub name:                Option<String>,
    /// Identifier in an external system
    pub external_id:         Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Create or update a code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct CodeCommand {
    /// Code being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Display name
    pub name:                Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Replace the currencies the organisation permits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationCurrencyCommand {
    /// ISO 4217 codes permitted
    pub currencies:          Option<Vec<String>>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Move money between two branch offices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct BranchMoneyTransferCommand {
    /// Sending office
    pub from_office_id:      Option<i64>,
    /// Receiving office
    pub to_office_id:        Option<i64>,
    /// Date the money moved
    pub transaction_date:    Option<NaiveDate>,
    /// ISO 4217 currency code
    pub currency_code:       Option<String>,
    /// Amount of the transaction
    pub transaction_amount:  Option<Decimal>,
    /// Reason for the transfer
    pub description:         Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Create or update a role and its permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct RoleCommand {
    /// Role being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Display name
    pub name:                Option<String>,
    /// Free text description
    pub description:         Option<String>,
    /// Permission codes granted to the role
    pub permissions:         Option<Vec<String>>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Create or update an application user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct UserCommand {
    /// User being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Login name
    pub username:            Option<String>,
    /// Given name
    pub firstname:           Option<String>,
    /// Family name
    pub lastname:            Option<String>,
    /// New password
    pub password:            Option<String>,
    /// Confirmation of `password`
    pub repeat_password:     Option<String>,
    /// Contact email address
    pub email:               Option<String>,
    /// Office the user works in
    pub office_id:           Option<i64>,
    /// Roles offered but not granted
    pub not_selected_roles:  Option<Vec<String>>,
    /// Roles granted
    pub roles:               Option<Vec<String>>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ApiCommand;

    #[test]
    fn test_allow_lists_follow_field_order() {
        assert_eq!(
            OfficeCommand::SUPPORTED_PARAMETERS,
            &[
                "name",
                "externalId",
                "parentId",
                "openingDate",
                "locale",
                "dateFormat"
            ]
        );
        assert_eq!(
            StaffCommand::SUPPORTED_PARAMETERS,
            &["firstname", "lastname", "officeId", "loanOfficerFlag"]
        );
        assert_eq!(
            UserCommand::SUPPORTED_PARAMETERS,
            &[
                "username",
                "firstname",
                "lastname",
                "password",
                "repeatPassword",
                "email",
                "officeId",
                "notSelectedRoles",
                "roles"
            ]
        );
        assert_eq!(OrganisationCurrencyCommand::SUPPORTED_PARAMETERS, &["currencies"]);
    }
}
