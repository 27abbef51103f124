//! Typed commands built from API request bodies

mod charge;
mod client;
mod deposit;
mod loan;
mod organisation;
mod saving;

pub use charge::{ChargeCommand, LoanChargeCommand};
pub use client::{ClientCommand, ClientIdentifierCommand, GroupCommand, NoteCommand};
pub use deposit::{
    DepositAccountCommand, DepositAccountWithdrawInterestCommand, DepositAccountWithdrawalCommand,
    DepositProductCommand, DepositStateTransitionApprovalCommand, DepositStateTransitionCommand,
};
pub use loan::{
    AdjustLoanTransactionCommand, BulkLoanReassignmentCommand, LoanApplicationCommand,
    LoanProductCommand, LoanStateTransitionCommand, LoanTransactionCommand,
};
pub use organisation::{
    BranchMoneyTransferCommand, CodeCommand, FundCommand, OfficeCommand,
    OrganisationCurrencyCommand, RoleCommand, StaffCommand, UserCommand,
};
pub use saving::{SavingAccountCommand, SavingProductCommand};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::request::{Extraction, ModifiedParameters};

/// A command that can be read from a JSON request object
///
/// Implemented through `#[derive(ApiCommand)]`.
pub trait ApiCommand: Sized {
    /// Every JSON key the command accepts
    const SUPPORTED_PARAMETERS: &'static [&'static str];

    /// Read every field, recording parse problems in `extraction`
    fn extract(extraction: &mut Extraction<'_>) -> Self;
}

/// Identifiers taken from the request path rather than the body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceIds {
    /// The resource being changed
    pub resource: Option<i64>,
    /// The resource that owns it, e.g. the loan of a loan charge
    pub parent:   Option<i64>,
}

impl ResourceIds {
    /// Ids for a top-level resource
    pub const fn resource(id: Option<i64>) -> Self {
        Self {
            resource: id,
            parent:   None,
        }
    }
}

/// Which path identifiers a command takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PathIds {
    /// Neither id
    None,
    /// Only the resource id
    Resource,
    /// Resource and parent ids
    ResourceAndParent,
}

/// Every command the converter can build
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CommandKind {
    /// Create or update a charge definition
    Charge,
    /// Create or update a fund
    Fund,
    /// Create or update a staff member
    Staff,
    /// Move loans from one loan officer to another
    BulkLoanReassignment,
    /// Create or update an office
    Office,
    /// Create or update a role and its permissions
    Role,
    /// Create or update an application user
    User,
    /// Move money between two branch offices
    BranchMoneyTransfer,
    /// Create or update a client
    Client,
    /// Create or update a group of clients
    Group,
    /// Create or update a loan product
    LoanProduct,
    /// Submit or modify a loan application
    LoanApplication,
    /// Add or change a charge on a loan
    LoanCharge,
    /// Approve, disburse, reject or withdraw a loan, or undo one of those
    LoanStateTransition,
    /// Record a repayment, waiver or write-off against a loan
    LoanTransaction,
    /// Correct an existing loan transaction
    AdjustLoanTransaction,
    /// Add or change a note on a client
    Note,
    /// Replace the currencies the organisation permits
    OrganisationCurrency,
    /// Create or update a recurring saving product
    SavingProduct,
    /// Open or modify a recurring saving account
    SavingAccount,
    /// Create or update a deposit product
    DepositProduct,
    /// Open or modify a deposit account
    DepositAccount,
    /// Move a deposit account between states
    DepositStateTransition,
    /// Approve a deposit account, optionally changing its terms
    DepositStateTransitionApproval,
    /// Withdraw a matured deposit
    DepositAccountWithdrawal,
    /// Withdraw interest earned on a deposit
    DepositAccountWithdrawInterest,
    /// Add or change an identity document of a client
    ClientIdentifier,
    /// Create or update a code
    Code,
}

impl CommandKind {
    /// JSON keys accepted by this kind of command
    pub const fn supported_parameters(self) -> &'static [&'static str] {
        match self {
            Self::Charge => ChargeCommand::SUPPORTED_PARAMETERS,
            Self::Fund => FundCommand::SUPPORTED_PARAMETERS,
            Self::Staff => StaffCommand::SUPPORTED_PARAMETERS,
            Self::BulkLoanReassignment => BulkLoanReassignmentCommand::SUPPORTED_PARAMETERS,
            Self::Office => OfficeCommand::SUPPORTED_PARAMETERS,
            Self::Role => RoleCommand::SUPPORTED_PARAMETERS,
            Self::User => UserCommand::SUPPORTED_PARAMETERS,
            Self::BranchMoneyTransfer => BranchMoneyTransferCommand::SUPPORTED_PARAMETERS,
            Self::Client => ClientCommand::SUPPORTED_PARAMETERS,
            Self::Group => GroupCommand::SUPPORTED_PARAMETERS,
            Self::LoanProduct => LoanProductCommand::SUPPORTED_PARAMETERS,
            Self::LoanApplication => LoanApplicationCommand::SUPPORTED_PARAMETERS,
            Self::LoanCharge => LoanChargeCommand::SUPPORTED_PARAMETERS,
            Self::LoanStateTransition => LoanStateTransitionCommand::SUPPORTED_PARAMETERS,
            Self::LoanTransaction => LoanTransactionCommand::SUPPORTED_PARAMETERS,
            Self::AdjustLoanTransaction => AdjustLoanTransactionCommand::SUPPORTED_PARAMETERS,
            Self::Note => NoteCommand::SUPPORTED_PARAMETERS,
            Self::OrganisationCurrency => OrganisationCurrencyCommand::SUPPORTED_PARAMETERS,
            Self::SavingProduct => SavingProductCommand::SUPPORTED_PARAMETERS,
            Self::SavingAccount => SavingAccountCommand::SUPPORTED_PARAMETERS,
            Self::DepositProduct => DepositProductCommand::SUPPORTED_PARAMETERS,
            Self::DepositAccount => DepositAccountCommand::SUPPORTED_PARAMETERS,
            Self::DepositStateTransition => DepositStateTransitionCommand::SUPPORTED_PARAMETERS,
            Self::DepositStateTransitionApproval => {
                DepositStateTransitionApprovalCommand::SUPPORTED_PARAMETERS
            }
            Self::DepositAccountWithdrawal => DepositAccountWithdrawalCommand::SUPPORTED_PARAMETERS,
            Self::DepositAccountWithdrawInterest => {
                DepositAccountWithdrawInterestCommand::SUPPORTED_PARAMETERS
            }
            Self::ClientIdentifier => ClientIdentifierCommand::SUPPORTED_PARAMETERS,
            Self::Code => CodeCommand::SUPPORTED_PARAMETERS,
        }
    }

    /// Path identifiers this kind of command takes
    pub const fn path_ids(self) -> PathIds {
        match self {
            Self::BulkLoanReassignment | Self::BranchMoneyTransfer | Self::OrganisationCurrency => {
                PathIds::None
            }
            Self::LoanCharge | Self::AdjustLoanTransaction | Self::Note | Self::ClientIdentifier => {
                PathIds::ResourceAndParent
            }
            _ => PathIds::Resource,
        }
    }
}

/// A converted command tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "command", rename_all = "kebab-case")]
pub enum ConvertedCommand {
    /// Converted `charge` request
    Charge(ChargeCommand),
    /// Converted `fund` request
    Fund(FundCommand),
    /// Converted `staff` request
    Staff(StaffCommand),
    /// Converted `bulk-loan-reassignment` request
    BulkLoanReassignment(BulkLoanReassignmentCommand),
    /// Converted `office` request
    Office(OfficeCommand),
    /// Converted `role` request
    Role(RoleCommand),
    /// Converted `user` request
    User(UserCommand),
    /// Converted `branch-money-transfer` request
    BranchMoneyTransfer(BranchMoneyTransferCommand),
    /// Converted `client` request
    Client(ClientCommand),
    /// Converted `group` request
    Group(GroupCommand),
    /// Converted `loan-product` request
    LoanProduct(LoanProductCommand),
    /// Converted `loan-application` request
    LoanApplication(LoanApplicationCommand),
    /// Converted `loan-charge` request
    LoanCharge(LoanChargeCommand),
    /// Converted `loan-state-transition` request
    LoanStateTransition(LoanStateTransitionCommand),
    /// Converted `loan-transaction` request
    LoanTransaction(LoanTransactionCommand),
    /// Converted `adjust-loan-transaction` request
    AdjustLoanTransaction(AdjustLoanTransactionCommand),
    /// Converted `note` request
    Note(NoteCommand),
    /// Converted `organisation-currency` request
    OrganisationCurrency(OrganisationCurrencyCommand),
    /// Converted `saving-product` request
    SavingProduct(SavingProductCommand),
    /// Converted `saving-account` request
    SavingAccount(SavingAccountCommand),
    /// Converted `deposit-product` request
    DepositProduct(DepositProductCommand),
    /// Converted `deposit-account` request
    DepositAccount(DepositAccountCommand),
    /// Converted `deposit-state-transition` request
    DepositStateTransition(DepositStateTransitionCommand),
    /// Converted `deposit-state-transition-approval` request
    DepositStateTransitionApproval(DepositStateTransitionApprovalCommand),
    /// Converted `deposit-account-withdrawal` request
    DepositAccountWithdrawal(DepositAccountWithdrawalCommand),
    /// Converted `deposit-account-withdraw-interest` request
    DepositAccountWithdrawInterest(DepositAccountWithdrawInterestCommand),
    /// Converted `client-identifier` request
    ClientIdentifier(ClientIdentifierCommand),
    /// Converted `code` request
    Code(CodeCommand),
}

impl ConvertedCommand {
    /// Parameters the request carried explicitly
    pub const fn modified_parameters(&self) -> &ModifiedParameters {
        match self {
            Self::Charge(command) => &command.modified_parameters,
            Self::Fund(command) => &command.modified_parameters,
            Self::Staff(command) => &command.modified_parameters,
            Self::BulkLoanReassignment(command) => &command.modified_parameters,
            Self::Office(command) => &command.modified_parameters,
            Self::Role(command) => &command.modified_parameters,
            Self::User(command) => &command.modified_parameters,
            Self::BranchMoneyTransfer(command) => &command.modified_parameters,
            Self::Client(command) => &command.modified_parameters,
            Self::Group(command) => &command.modified_parameters,
            Self::LoanProduct(command) => &command.modified_parameters,
            Self::LoanApplication(command) => &command.modified_parameters,
            Self::LoanCharge(command) => &command.modified_parameters,
            Self::LoanStateTransition(command) => &command.modified_parameters,
            Self::LoanTransaction(command) => &command.modified_parameters,
            Self::AdjustLoanTransaction(command) => &command.modified_parameters,
            Self::Note(command) => &command.modified_parameters,
            Self::OrganisationCurrency(command) => &command.modified_parameters,
            Self::SavingProduct(command) => &command.modified_parameters,
            Self::SavingAccount(command) => &command.modified_parameters,
            Self::DepositProduct(command) => &command.modified_parameters,
            Self::DepositAccount(command) => &command.modified_parameters,
            Self::DepositStateTransition(command) => &command.modified_parameters,
            Self::DepositStateTransitionApproval(command) => &command.modified_parameters,
            Self::DepositAccountWithdrawal(command) => &command.modified_parameters,
            Self::DepositAccountWithdrawInterest(command) => &command.modified_parameters,
            Self::ClientIdentifier(command) => &command.modified_parameters,
            Self::Code(command) => &command.modified_parameters,
        }
    }
}
