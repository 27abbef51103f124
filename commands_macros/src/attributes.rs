//! Attribute parsing for the `ApiCommand` derive

use heck::ToLowerCamelCase;
use syn::ext::IdentExt;
use syn::parse::Parse;
use syn::{Attribute, Field, LitStr, Token};

/// How a struct field takes part in extraction
pub enum FieldRole {
    /// Read from the JSON object under `name`
    Parameter { name: String },
    /// Left at its default, filled in by the converter (path identifiers)
    Skip,
    /// Receives the set of parameters present in the request
    Modified,
}

/// Parse `#[command(also_accepts("a", "b"))]` on the struct
pub fn parse_also_accepts(attrs: &[Attribute]) -> syn::Result<Vec<String>> {
    let mut names = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("command") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("also_accepts") {
                let content;
                syn::parenthesized!(content in meta.input);
                let listed = content.parse_terminated(<LitStr as Parse>::parse, Token![,])?;
                names.extend(listed.iter().map(LitStr::value));
                Ok(())
            } else {
                Err(meta.error("unsupported command attribute"))
            }
        })?;
    }

    Ok(names)
}

/// Work out the role of one field from its `#[param(...)]` attributes
pub fn field_role(field: &Field) -> syn::Result<FieldRole> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(
            field,
            "ApiCommand fields must be named",
        ));
    };

    let mut rename = None;
    let mut skip = false;
    let mut modified = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("param") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value = meta.value()?;
                let s: LitStr = value.parse()?;
                rename = Some(s.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else if meta.path.is_ident("modified") {
                modified = true;
                Ok(())
            } else {
                Err(meta.error("unsupported param attribute"))
            }
        })?;
    }

    match (skip, modified) {
        (true, true) => Err(syn::Error::new_spanned(
            ident,
            "a field cannot be both #[param(skip)] and #[param(modified)]",
        )),
        (true, false) => Ok(FieldRole::Skip),
        (false, true) => Ok(FieldRole::Modified),
        (false, false) => Ok(FieldRole::Parameter {
            name: rename.unwrap_or_else(|| ident.unraw().to_string().to_lower_camel_case()),
        }),
    }
}
