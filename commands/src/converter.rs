//! Conversion of JSON request bodies into typed commands
//!
//! Every conversion runs the same pipeline: the body must be a JSON object,
//! every key must be on the command's allow-list, and every parameter is then
//! read with the request's `locale` and `dateFormat`. Parse problems are
//! collected across all parameters and reported together. Identifiers that
//! come from the request path are set on the command last.

use error_stack::Report;
use tracing::debug;

use crate::command::{
    AdjustLoanTransactionCommand, ApiCommand, BranchMoneyTransferCommand,
    BulkLoanReassignmentCommand, ChargeCommand, ClientCommand, ClientIdentifierCommand,
    CodeCommand, CommandKind, ConvertedCommand, DepositAccountCommand,
    DepositAccountWithdrawInterestCommand, DepositAccountWithdrawalCommand, DepositProductCommand,
    DepositStateTransitionApprovalCommand, DepositStateTransitionCommand, FundCommand,
    GroupCommand, LoanApplicationCommand, LoanChargeCommand, LoanProductCommand,
    LoanStateTransitionCommand, LoanTransactionCommand, NoteCommand, OfficeCommand,
    OrganisationCurrencyCommand, PathIds, ResourceIds, RoleCommand, SavingAccountCommand,
    SavingProductCommand, StaffCommand, UserCommand,
};
use crate::config::ConversionConfig;
use crate::error::{Error, Result};
use crate::request::{Extraction, JsonRequest};

/// Turns request bodies into commands
#[derive(Debug, Clone, Default)]
pub struct CommandConverter {
    config: ConversionConfig,
}

impl CommandConverter {
    /// Create a converter with the given fallbacks
    pub const fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    fn parse<C: ApiCommand>(&self, json: &str) -> Result<C> {
        let request = JsonRequest::parse(json)?;
        request.check_supported(C::SUPPORTED_PARAMETERS)?;

        let formatting = request.formatting(&self.config);
        let mut extraction = Extraction::new(request.object(), &formatting);
        let command = C::extract(&mut extraction);
        extraction.finish()?;

        Ok(command)
    }

    /// Convert a request for `kind`, taking path identifiers from `ids`
    pub fn convert(&self, kind: CommandKind, ids: ResourceIds, json: &str) -> Result<ConvertedCommand> {
        check_path_ids(kind, ids)?;

        let ResourceIds { resource, parent } = ids;
        let command = match kind {
            CommandKind::Charge => {
                ConvertedCommand::Charge(self.convert_json_to_charge_command(resource, json)?)
            }
            CommandKind::Fund => {
                ConvertedCommand::Fund(self.convert_json_to_fund_command(resource, json)?)
            }
            CommandKind::Staff => {
                ConvertedCommand::Staff(self.convert_json_to_staff_command(resource, json)?)
            }
            CommandKind::BulkLoanReassignment => ConvertedCommand::BulkLoanReassignment(
                self.convert_json_to_bulk_loan_reassignment_command(json)?,
            ),
            CommandKind::Office => {
                ConvertedCommand::Office(self.convert_json_to_office_command(resource, json)?)
            }
            CommandKind::Role => {
                ConvertedCommand::Role(self.convert_json_to_role_command(resource, json)?)
            }
            CommandKind::User => {
                ConvertedCommand::User(self.convert_json_to_user_command(resource, json)?)
            }
            CommandKind::BranchMoneyTransfer => ConvertedCommand::BranchMoneyTransfer(
                self.convert_json_to_branch_money_transfer_command(json)?,
            ),
            CommandKind::Client => {
                ConvertedCommand::Client(self.convert_json_to_client_command(resource, json)?)
            }
            CommandKind::Group => {
                ConvertedCommand::Group(self.convert_json_to_group_command(resource, json)?)
            }
            CommandKind::LoanProduct => ConvertedCommand::LoanProduct(
                self.convert_json_to_loan_product_command(resource, json)?,
            ),
            CommandKind::LoanApplication => ConvertedCommand::LoanApplication(
                self.convert_json_to_loan_application_command(resource, json)?,
            ),
            CommandKind::LoanCharge => ConvertedCommand::LoanCharge(
                self.convert_json_to_loan_charge_command(parent, resource, json)?,
            ),
            CommandKind::LoanStateTransition => ConvertedCommand::LoanStateTransition(
                self.convert_json_to_loan_state_transition_command(resource, json)?,
            ),
            CommandKind::LoanTransaction => ConvertedCommand::LoanTransaction(
                self.convert_json_to_loan_transaction_command(resource, json)?,
            ),
            CommandKind::AdjustLoanTransaction => ConvertedCommand::AdjustLoanTransaction(
                self.convert_json_to_adjust_loan_transaction_command(parent, resource, json)?,
            ),
            CommandKind::Note => {
                ConvertedCommand::Note(self.convert_json_to_note_command(parent, resource, json)?)
            }
            CommandKind::OrganisationCurrency => ConvertedCommand::OrganisationCurrency(
                self.convert_json_to_organisation_currency_command(json)?,
            ),
            CommandKind::SavingProduct => ConvertedCommand::SavingProduct(
                self.convert_json_to_saving_product_command(resource, json)?,
            ),
            CommandKind::SavingAccount => ConvertedCommand::SavingAccount(
                self.convert_json_to_saving_account_command(resource, json)?,
            ),
            CommandKind::DepositProduct => ConvertedCommand::DepositProduct(
                self.convert_json_to_deposit_product_command(resource, json)?,
            ),
            CommandKind::DepositAccount => ConvertedCommand::DepositAccount(
                self.convert_json_to_deposit_account_command(resource, json)?,
            ),
            CommandKind::DepositStateTransition => ConvertedCommand::DepositStateTransition(
                self.convert_json_to_deposit_state_transition_command(resource, json)?,
            ),
            CommandKind::DepositStateTransitionApproval => {
                ConvertedCommand::DepositStateTransitionApproval(
                    self.convert_json_to_deposit_state_transition_approval_command(resource, json)?,
                )
            }
            CommandKind::DepositAccountWithdrawal => ConvertedCommand::DepositAccountWithdrawal(
                self.convert_json_to_deposit_account_withdrawal_command(resource, json)?,
            ),
            CommandKind::DepositAccountWithdrawInterest => {
                ConvertedCommand::DepositAccountWithdrawInterest(
                    self.convert_json_to_deposit_account_withdraw_interest_command(resource, json)?,
                )
            }
            CommandKind::ClientIdentifier => ConvertedCommand::ClientIdentifier(
                self.convert_json_to_client_identifier_command(parent, resource, json)?,
            ),
            CommandKind::Code => {
                ConvertedCommand::Code(self.convert_json_to_code_command(resource, json)?)
            }
        };

        debug!(
            "Converted {kind} request with {} modified parameter(s)",
            command.modified_parameters().len()
        );
        Ok(command)
    }

    /// Convert a charge request
    pub fn convert_json_to_charge_command(
        &self,
        charge_id: Option<i64>,
        json: &str,
    ) -> Result<ChargeCommand> {
        let command: ChargeCommand = self.parse(json)?;
        Ok(ChargeCommand {
            id: charge_id,
            ..command
        })
    }

    /// Convert a fund request
    pub fn convert_json_to_fund_command(
        &self,
        fund_id: Option<i64>,
        json: &str,
    ) -> Result<FundCommand> {
        let command: FundCommand = self.parse(json)?;
        Ok(FundCommand {
            id: fund_id,
            ..command
        })
    }

    /// Convert a staff request
    pub fn convert_json_to_staff_command(
        &self,
        staff_id: Option<i64>,
        json: &str,
    ) -> Result<StaffCommand> {
        let command: StaffCommand = self.parse(json)?;
        Ok(StaffCommand {
            id: staff_id,
            ..command
        })
    }

    /// Convert a bulk loan reassignment request
    pub fn convert_json_to_bulk_loan_reassignment_command(
        &self,
        json: &str,
    ) -> Result<BulkLoanReassignmentCommand> {
        self.parse(json)
    }

    /// Convert an office request
    pub fn convert_json_to_office_command(
        &self,
        office_id: Option<i64>,
        json: &str,
    ) -> Result<OfficeCommand> {
        let command: OfficeCommand = self.parse(json)?;
        Ok(OfficeCommand {
            id: office_id,
            ..command
        })
    }

    /// Convert a role request
    pub fn convert_json_to_role_command(
        &self,
        role_id: Option<i64>,
        json: &str,
    ) -> Result<RoleCommand> {
        let command: RoleCommand = self.parse(json)?;
        Ok(RoleCommand {
            id: role_id,
            ..command
        })
    }

    /// Convert a user request
    pub fn convert_json_to_user_command(
        &self,
        user_id: Option<i64>,
        json: &str,
    ) -> Result<UserCommand> {
        let command: UserCommand = self.parse(json)?;
        Ok(UserCommand {
            id: user_id,
            ..command
        })
    }

    /// Convert a branch money transfer request
    pub fn convert_json_to_branch_money_transfer_command(
        &self,
        json: &str,
    ) -> Result<BranchMoneyTransferCommand> {
        self.parse(json)
    }

    /// Convert a client request
    pub fn convert_json_to_client_command(
        &self,
        client_id: Option<i64>,
        json: &str,
    ) -> Result<ClientCommand> {
        let command: ClientCommand = self.parse(json)?;
        Ok(ClientCommand {
            id: client_id,
            ..command
        })
    }

    /// Convert a group request
    pub fn convert_json_to_group_command(
        &self,
        group_id: Option<i64>,
        json: &str,
    ) -> Result<GroupCommand> {
        let command: GroupCommand = self.parse(json)?;
        Ok(GroupCommand {
            id: group_id,
            ..command
        })
    }

    /// Convert a loan product request
    pub fn convert_json_to_loan_product_command(
        &self,
        loan_product_id: Option<i64>,
        json: &str,
    ) -> Result<LoanProductCommand> {
        let command: LoanProductCommand = self.parse(json)?;
        Ok(LoanProductCommand {
            id: loan_product_id,
            ..command
        })
    }

    /// Loan application, charges included
    ///
    /// An `id` in the body is accepted but the path id always wins.
    pub fn convert_json_to_loan_application_command(
        &self,
        loan_id: Option<i64>,
        json: &str,
    ) -> Result<LoanApplicationCommand> {
        let command: LoanApplicationCommand = self.parse(json)?;
        Ok(LoanApplicationCommand {
            id: loan_id,
            ..command
        })
    }

    /// Convert a loan charge request
    pub fn convert_json_to_loan_charge_command(
        &self,
        loan_id: Option<i64>,
        loan_charge_id: Option<i64>,
        json: &str,
    ) -> Result<LoanChargeCommand> {
        let command: LoanChargeCommand = self.parse(json)?;
        Ok(LoanChargeCommand {
            id: loan_charge_id,
            loan_id,
            ..command
        })
    }

    /// Convert a loan state transition request
    pub fn convert_json_to_loan_state_transition_command(
        &self,
        loan_id: Option<i64>,
        json: &str,
    ) -> Result<LoanStateTransitionCommand> {
        let command: LoanStateTransitionCommand = self.parse(json)?;
        Ok(LoanStateTransitionCommand {
            loan_id,
            ..command
        })
    }

    /// Convert a loan transaction request
    pub fn convert_json_to_loan_transaction_command(
        &self,
        loan_id: Option<i64>,
        json: &str,
    ) -> Result<LoanTransactionCommand> {
        let command: LoanTransactionCommand = self.parse(json)?;
        Ok(LoanTransactionCommand {
            loan_id,
            ..command
        })
    }

    /// Convert an adjust loan transaction request
    pub fn convert_json_to_adjust_loan_transaction_command(
        &self,
        loan_id: Option<i64>,
        transaction_id: Option<i64>,
        json: &str,
    ) -> Result<AdjustLoanTransactionCommand> {
        let command: AdjustLoanTransactionCommand = self.parse(json)?;
        Ok(AdjustLoanTransactionCommand {
            loan_id,
            transaction_id,
            ..command
        })
    }

    /// Convert a note request
    pub fn convert_json_to_note_command(
        &self,
        client_id: Option<i64>,
        note_id: Option<i64>,
        json: &str,
    ) -> Result<NoteCommand> {
        let command: NoteCommand = self.parse(json)?;
        Ok(NoteCommand {
            id: note_id,
            client_id,
            ..command
        })
    }

    /// Convert an organisation currency request
    pub fn convert_json_to_organisation_currency_command(
        &self,
        json: &str,
    ) -> Result<OrganisationCurrencyCommand> {
        self.parse(json)
    }

    /// Convert a saving product request
    pub fn convert_json_to_saving_product_command(
        &self,
        saving_product_id: Option<i64>,
        json: &str,
    ) -> Result<SavingProductCommand> {
        let command: SavingProductCommand = self.parse(json)?;
        Ok(SavingProductCommand {
            id: saving_product_id,
            ..command
        })
    }

    /// Convert a saving account request
    pub fn convert_json_to_saving_account_command(
        &self,
        account_id: Option<i64>,
        json: &str,
    ) -> Result<SavingAccountCommand> {
        let command: SavingAccountCommand = self.parse(json)?;
        Ok(SavingAccountCommand {
            id: account_id,
            ..command
        })
    }

    /// Convert a deposit product request
    pub fn convert_json_to_deposit_product_command(
        &self,
        deposit_product_id: Option<i64>,
        json: &str,
    ) -> Result<DepositProductCommand> {
        let command: DepositProductCommand = self.parse(json)?;
        Ok(DepositProductCommand {
            id: deposit_product_id,
            ..command
        })
    }

    /// Convert a deposit account request
    pub fn convert_json_to_deposit_account_command(
        &self,
        account_id: Option<i64>,
        json: &str,
    ) -> Result<DepositAccountCommand> {
        let command: DepositAccountCommand = self.parse(json)?;
        Ok(DepositAccountCommand {
            id: account_id,
            ..command
        })
    }

    /// Convert a deposit state transition request
    pub fn convert_json_to_deposit_state_transition_command(
        &self,
        account_id: Option<i64>,
        json: &str,
    ) -> Result<DepositStateTransitionCommand> {
        let command: DepositStateTransitionCommand = self.parse(json)?;
        Ok(DepositStateTransitionCommand {
            account_id,
            ..command
        })
    }

    /// Convert a deposit state transition approval request
    pub fn convert_json_to_deposit_state_transition_approval_command(
        &self,
        account_id: Option<i64>,
        json: &str,
    ) -> Result<DepositStateTransitionApprovalCommand> {
        let command: DepositStateTransitionApprovalCommand = self.parse(json)?;
        Ok(DepositStateTransitionApprovalCommand {
            account_id,
            ..command
        })
    }

    /// Convert a deposit account withdrawal request
    pub fn convert_json_to_deposit_account_withdrawal_command(
        &self,
        account_id: Option<i64>,
        json: &str,
    ) -> Result<DepositAccountWithdrawalCommand> {
        let command: DepositAccountWithdrawalCommand = self.parse(json)?;
        Ok(DepositAccountWithdrawalCommand {
            account_id,
            ..command
        })
    }

    /// Convert a deposit account withdraw interest request
    pub fn convert_json_to_deposit_account_withdraw_interest_command(
        &self,
        account_id: Option<i64>,
        json: &str,
    ) -> Result<DepositAccountWithdrawInterestCommand> {
        let command: DepositAccountWithdrawInterestCommand = self.parse(json)?;
        Ok(DepositAccountWithdrawInterestCommand {
            account_id,
            ..command
        })
    }

    /// Convert a client identifier request
    pub fn convert_json_to_client_identifier_command(
        &self,
        client_id: Option<i64>,
        identifier_id: Option<i64>,
        json: &str,
    ) -> Result<ClientIdentifierCommand> {
        let command: ClientIdentifierCommand = self.parse(json)?;
        Ok(ClientIdentifierCommand {
            id: identifier_id,
            client_id,
            ..command
        })
    }

    /// Convert a code request
    pub fn convert_json_to_code_command(
        &self,
        code_id: Option<i64>,
        json: &str,
    ) -> Result<CodeCommand> {
        let command: CodeCommand = self.parse(json)?;
        Ok(CodeCommand {
            id: code_id,
            ..command
        })
    }
}

fn check_path_ids(kind: CommandKind, ids: ResourceIds) -> Result<()> {
    let rejected = match kind.path_ids() {
        PathIds::None if ids.resource.is_some() => Some("resource id"),
        PathIds::None | PathIds::Resource if ids.parent.is_some() => Some("parent id"),
        _ => None,
    };

    match rejected {
        Some(what) => Err(Report::new(Error::invalid(
            what,
            format!("{kind} commands do not take one"),
        ))
        .attach(format!("{kind} takes path ids: {}", kind.path_ids()))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "tests fail loudly"
    )]

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::constants::{
        CODE_INVALID_DATE, CODE_INVALID_DECIMAL, CODE_INVALID_TYPE, CODE_MISSING_DATE_FORMAT,
        CODE_MISSING_LOCALE,
    };

    fn converter() -> CommandConverter {
        CommandConverter::new(ConversionConfig::default())
    }

    fn validation_codes(error: &Report<Error>) -> Vec<(String, String)> {
        error
            .current_context()
            .parameter_errors()
            .iter()
            .map(|error| {
                (
                    error.parameter_name.clone(),
                    error.user_message_globalisation_code.clone(),
                )
            })
            .collect()
    }

    #[test]
    fn test_unsupported_keys_are_listed_in_request_order() {
        let error = converter()
            .convert_json_to_fund_command(None, r#"{"name":"Growth","zeta":1,"alpha":2}"#)
            .unwrap_err();

        match error.current_context() {
            Error::UnsupportedParameters(names) => assert_eq!(names, &["zeta", "alpha"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_body_is_invalid_json() {
        let error = converter()
            .convert_json_to_office_command(Some(1), "   ")
            .unwrap_err();
        assert!(matches!(error.current_context(), Error::InvalidJson(_)));
    }

    #[test]
    fn test_missing_locale_and_date_format_are_collected() {
        let body = json!({
            "transactionDate": "12 March 2024",
            "transactionAmount": "100.50"
        });
        let error = converter()
            .convert_json_to_loan_transaction_command(Some(4), &body.to_string())
            .unwrap_err();

        assert_eq!(
            validation_codes(&error),
            vec![
                ("transactionDate".to_string(), CODE_MISSING_DATE_FORMAT.to_string()),
                ("transactionDate".to_string(), CODE_MISSING_LOCALE.to_string()),
                ("transactionAmount".to_string(), CODE_MISSING_LOCALE.to_string()),
            ]
        );
    }

    #[test]
    fn test_every_bad_value_is_reported() {
        let body = json!({
            "locale": "en",
            "dateFormat": "dd MMMM yyyy",
            "transactionDate": "31 February 2024",
            "transactionAmount": "12abc"
        });
        let error = converter()
            .convert_json_to_loan_transaction_command(Some(4), &body.to_string())
            .unwrap_err();

        assert_eq!(
            validation_codes(&error),
            vec![
                ("transactionDate".to_string(), CODE_INVALID_DATE.to_string()),
                ("transactionAmount".to_string(), CODE_INVALID_DECIMAL.to_string()),
            ]
        );
    }

    #[test]
    fn test_loan_transaction_with_locale_and_path_id() {
        let body = json!({
            "locale": "de",
            "dateFormat": "dd MMMM yyyy",
            "transactionDate": "12 März 2024",
            "transactionAmount": "1.234,56",
            "note": "  paid in branch  "
        });
        let command = converter()
            .convert_json_to_loan_transaction_command(Some(7), &body.to_string())
            .unwrap();

        assert_eq!(command.loan_id, Some(7));
        assert_eq!(command.transaction_date, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert_eq!(command.transaction_amount, Some(dec!(1234.56)));
        assert_eq!(command.note.as_deref(), Some("paid in branch"));
        assert_eq!(
            command.modified_parameters.names().collect::<Vec<_>>(),
            vec!["note", "transactionAmount", "transactionDate"]
        );
    }

    #[test]
    fn test_modified_parameters_hold_only_present_keys() {
        let command = converter()
            .convert_json_to_fund_command(Some(3), r#"{"name":"Growth"}"#)
            .unwrap();

        assert_eq!(command.id, Some(3));
        assert_eq!(command.name.as_deref(), Some("Growth"));
        assert_eq!(command.external_id, None);
        assert_eq!(command.modified_parameters.names().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_loan_application_reads_nested_charges() {
        let body = json!({
            "locale": "en",
            "dateFormat": "dd MMMM yyyy",
            "principal": "10,000.00",
            "charges": [
                { "id": 11, "chargeId": 2, "amount": "25.5" },
                { "chargeId": 3, "amount": 10, "specifiedDueDate": "01 June 2024" }
            ]
        });
        let command = converter()
            .convert_json_to_loan_application_command(Some(9), &body.to_string())
            .unwrap();

        assert_eq!(command.id, Some(9));
        assert_eq!(command.principal, Some(dec!(10000.00)));

        let charges = command.charges.unwrap();
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[0].id, Some(11));
        assert_eq!(charges[0].charge_id, Some(2));
        assert_eq!(charges[0].amount, Some(dec!(25.5)));
        assert_eq!(charges[1].id, None);
        assert_eq!(charges[1].amount, Some(dec!(10)));
        assert_eq!(
            charges[1].specified_due_date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert!(command.modified_parameters.contains("charges"));
    }

    #[test]
    fn test_nested_charge_errors_reach_the_request() {
        let body = json!({
            "locale": "en",
            "charges": [{ "chargeId": 2, "amount": "lots" }]
        });
        let error = converter()
            .convert_json_to_loan_application_command(None, &body.to_string())
            .unwrap_err();

        assert_eq!(
            validation_codes(&error),
            vec![("amount".to_string(), CODE_INVALID_DECIMAL.to_string())]
        );
    }

    #[test]
    fn test_convert_dispatches_and_sets_parent_id() {
        let converted = converter()
            .convert(
                CommandKind::Note,
                ResourceIds {
                    resource: Some(5),
                    parent:   Some(2),
                },
                r#"{"note":"called back"}"#,
            )
            .unwrap();

        assert_eq!(converted.modified_parameters().len(), 1);
        let ConvertedCommand::Note(note) = converted else {
            panic!("expected a note command");
        };
        assert_eq!(note.id, Some(5));
        assert_eq!(note.client_id, Some(2));
    }

    #[test]
    fn test_convert_rejects_ids_the_kind_does_not_take() {
        let error = converter()
            .convert(
                CommandKind::OrganisationCurrency,
                ResourceIds::resource(Some(1)),
                r#"{"currencies":["USD"]}"#,
            )
            .unwrap_err();
        assert!(matches!(error.current_context(), Error::InvalidArgument(_)));

        let error = converter()
            .convert(
                CommandKind::Fund,
                ResourceIds {
                    resource: Some(1),
                    parent:   Some(2),
                },
                r#"{"name":"Growth"}"#,
            )
            .unwrap_err();
        assert!(matches!(error.current_context(), Error::InvalidArgument(_)));
    }

    #[test]
    fn test_converted_command_serialises_with_kind_tag() {
        let converted = converter()
            .convert(
                CommandKind::OrganisationCurrency,
                ResourceIds::default(),
                r#"{"currencies":["USD"," XOF "]}"#,
            )
            .unwrap();

        let value = serde_json::to_value(&converted).unwrap();
        assert_eq!(value["kind"], "organisation-currency");
        assert_eq!(value["command"]["currencies"], json!(["USD", "XOF"]));
        assert_eq!(value["command"]["modifiedParameters"], json!(["currencies"]));
    }

    #[test]
    fn test_config_locale_applies_only_when_request_omits_it() {
        let converter = CommandConverter::new(ConversionConfig::default().with_default_locale("fr"));

        let command = converter
            .convert_json_to_charge_command(None, r#"{"amount":"1 234,5"}"#)
            .unwrap();
        assert_eq!(command.amount, Some(dec!(1234.5)));

        let command = converter
            .convert_json_to_charge_command(None, r#"{"locale":"en","amount":"1,234.5"}"#)
            .unwrap();
        assert_eq!(command.amount, Some(dec!(1234.5)));
    }

    #[test]
    fn test_deposit_account_reads_flags_dates_and_amounts() {
        let body = json!({
            "locale": "en",
            "dateFormat": "dd MMMM yyyy",
            "clientId": 3,
            "productId": "8",
            "deposit": "5,000.00",
            "maturityInterestRate": 4.5,
            "tenureInMonths": "12",
            "commencementDate": "01 July 2024",
            "renewalAllowed": true,
            "preClosureAllowed": "TRUE",
            "interestCompoundingAllowed": "false",
            "isInterestWithdrawable": null
        });
        let command = converter()
            .convert_json_to_deposit_account_command(Some(21), &body.to_string())
            .unwrap();

        assert_eq!(command.id, Some(21));
        assert_eq!(command.client_id, Some(3));
        assert_eq!(command.product_id, Some(8));
        assert_eq!(command.deposit, Some(dec!(5000.00)));
        assert_eq!(command.maturity_interest_rate, Some(dec!(4.5)));
        assert_eq!(command.tenure_in_months, Some(12));
        assert_eq!(command.commencement_date, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert!(command.renewal_allowed);
        assert!(command.pre_closure_allowed);
        assert!(!command.interest_compounding_allowed);
        assert!(!command.is_interest_withdrawable);
        assert!(!command.is_lockin_period_allowed);

        assert!(command.modified_parameters.contains("isInterestWithdrawable"));
        assert!(!command.modified_parameters.contains("isLockinPeriodAllowed"));
        assert!(!command.modified_parameters.contains("locale"));
        assert_eq!(command.modified_parameters.len(), 10);
    }

    #[test]
    fn test_deposit_account_date_without_format_is_reported() {
        let body = json!({
            "locale": "en",
            "commencementDate": "01 July 2024",
            "renewalAllowed": true
        });
        let error = converter()
            .convert_json_to_deposit_account_command(None, &body.to_string())
            .unwrap_err();

        assert_eq!(
            validation_codes(&error),
            vec![("commencementDate".to_string(), CODE_MISSING_DATE_FORMAT.to_string())]
        );
    }

    #[test]
    fn test_role_and_user_read_string_arrays() {
        let body = json!({
            "name": "Teller",
            "permissions": [" READ_LOAN ", "CREATE_LOAN_TRANSACTION", null]
        });
        let role = converter()
            .convert_json_to_role_command(Some(2), &body.to_string())
            .unwrap();
        assert_eq!(role.id, Some(2));
        assert_eq!(
            role.permissions,
            Some(vec!["READ_LOAN".to_string(), "CREATE_LOAN_TRANSACTION".to_string()])
        );

        let body = json!({
            "username": "amina",
            "officeId": 1,
            "roles": ["2", "5"],
            "notSelectedRoles": []
        });
        let user = converter()
            .convert_json_to_user_command(None, &body.to_string())
            .unwrap();
        assert_eq!(user.username.as_deref(), Some("amina"));
        assert_eq!(user.roles, Some(vec!["2".to_string(), "5".to_string()]));
        assert_eq!(user.not_selected_roles, Some(Vec::new()));
        assert_eq!(
            user.modified_parameters.names().collect::<Vec<_>>(),
            vec!["notSelectedRoles", "officeId", "roles", "username"]
        );
    }

    #[test]
    fn test_permissions_must_be_an_array() {
        let error = converter()
            .convert_json_to_role_command(None, r#"{"permissions":"READ_LOAN"}"#)
            .unwrap_err();
        assert_eq!(
            validation_codes(&error),
            vec![("permissions".to_string(), CODE_INVALID_TYPE.to_string())]
        );
    }

    #[test]
    fn test_nested_due_date_is_recorded_on_the_charge_only() {
        let body = json!({
            "locale": "en",
            "dateFormat": "dd MMMM yyyy",
            "charges": [
                { "chargeId": 2 },
                { "chargeId": 3, "specifiedDueDate": "01 June 2024" }
            ]
        });
        let command = converter()
            .convert_json_to_loan_application_command(Some(9), &body.to_string())
            .unwrap();

        assert!(command.modified_parameters.contains("charges"));
        assert!(!command.modified_parameters.contains("specifiedDueDate"));

        let charges = command.charges.unwrap();
        assert!(!charges[0].modified_parameters.contains("specifiedDueDate"));
        assert_eq!(
            charges[1].modified_parameters.names().collect::<Vec<_>>(),
            vec!["chargeId", "specifiedDueDate"]
        );
    }

    #[test]
    fn test_convert_passes_parent_first_for_loan_charges() {
        let converted = converter()
            .convert(
                CommandKind::LoanCharge,
                ResourceIds {
                    resource: Some(30),
                    parent:   Some(4),
                },
                r#"{"chargeId":2}"#,
            )
            .unwrap();

        let ConvertedCommand::LoanCharge(charge) = converted else {
            panic!("expected a loan charge command");
        };
        assert_eq!(charge.id, Some(30));
        assert_eq!(charge.loan_id, Some(4));
    }
}
