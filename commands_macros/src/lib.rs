//! Procedural macros for platform_commands

mod api_command;
mod attributes;

use proc_macro::TokenStream;

/// Derives `ApiCommand` for a command struct: the JSON allow-list and the
/// per-field extraction.
///
/// # Example
///
/// ```ignore
/// #[derive(ApiCommand)]
/// #[command(also_accepts("locale"))]
/// pub struct FundCommand {
///     #[param(skip)]
///     pub id: Option<i64>,
///
///     pub name: Option<String>,
///
///     #[param(rename = "externalId")]
///     pub external_id: Option<String>,
///
///     #[param(modified)]
///     pub modified_parameters: ModifiedParameters,
/// }
/// ```
///
/// This will generate:
///
/// ```ignore
/// impl crate::command::ApiCommand for FundCommand {
///     const SUPPORTED_PARAMETERS: &'static [&'static str] = &["name", "externalId", "locale"];
///
///     fn extract(extraction: &mut crate::request::Extraction<'_>) -> Self {
///         let name = <Option<String> as crate::request::FromParameter>::from_parameter("name", extraction);
///         let external_id = <Option<String> as crate::request::FromParameter>::from_parameter("externalId", extraction);
///         Self {
///             name,
///             external_id,
///             id: Default::default(),
///             modified_parameters: extraction.take_modified(),
///         }
///     }
/// }
/// ```
///
/// Field names become lowerCamelCase JSON keys unless `#[param(rename = "...")]`
/// is given. `#[param(skip)]` fields are not read from JSON and start from
/// `Default::default()`.
#[proc_macro_derive(ApiCommand, attributes(command, param))]
pub fn derive_api_command(input: TokenStream) -> TokenStream {
    api_command::derive_api_command_impl(input)
}
