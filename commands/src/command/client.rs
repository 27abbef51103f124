//! Clients, groups and the records kept against a client

use chrono::NaiveDate;
use platform_commands_macros::ApiCommand;
use serde::Serialize;

use crate::request::ModifiedParameters;

/// Create or update a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("locale", "dateFormat"))]
pub struct ClientCommand {
    /// Client being updated, from the request path
    #[param(skip)]
    pub id:                      Option<i64>,
    /// Identifier in an external system
    pub external_id:             Option<String>,
    /// Given name
    pub firstname:               Option<String>,
    /// Family name
    pub lastname:                Option<String>,
    /// Name of a business client
    pub client_or_business_name: Option<String>,
    /// Office the client belongs to
    pub office_id:               Option<i64>,
    /// Date the client joined
    pub joining_date:            Option<NaiveDate>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters:     ModifiedParameters,
}

/// Create or update a group of clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct GroupCommand {
    /// Group being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Display name
    pub name:                Option<String>,
    /// Office the group belongs to
    pub office_id:           Option<i64>,
    /// Identifier in an external system
    pub external_id:         Option<String>,
    /// Clients in the group
    pub client_members:      Option<Vec<String>>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Add or change a note on a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
pub struct NoteCommand {
    /// Note being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Client the note belongs to, from the request path
    #[param(skip)]
    pub client_id:           Option<i64>,
    /// Free text note
    pub note:                Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}

/// Add or change an identity document of a client
///
/// `clientId` in the body is accepted and ignored, the client comes from the
/// request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ApiCommand)]
#[serde(rename_all = "camelCase")]
#[command(also_accepts("clientId"))]
pub struct ClientIdentifierCommand {
    /// Identifier being updated, from the request path
    #[param(skip)]
    pub id:                  Option<i64>,
    /// Client the document belongs to, from the request path
    #[param(skip)]
    pub client_id:           Option<i64>,
    /// Code value of the document type
    pub document_type_id:    Option<i64>,
    /// Number or key of the document
    pub document_key:        Option<String>,
    /// Free text description
    pub description:         Option<String>,
    /// Parameters present in the request
    #[param(modified)]
    pub modified_parameters: ModifiedParameters,
}
