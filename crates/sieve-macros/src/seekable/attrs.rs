//! Attribute parsing for the Seekable derive macro.
//!
//! Two forms of `#[seek(...)]` are recognised:
//!
//! - on the struct: `#[seek(entity = "member")]`
//! - on a field: `#[seek(String)]`, `#[seek(Number, rename = "age")]`,
//!   `#[seek(String, entity = "team", rename = "name")]`, `#[seek(skip)]`

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Ident, Lit, LitStr, Meta, Result, Token,
};

/// The type of a seekable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekType {
    /// String field: `#[seek(String)]`
    String,
    /// Number field: `#[seek(Number)]`
    Number,
}

impl SeekType {
    /// Parse a seek type from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "String" | "string" => Ok(SeekType::String),
            "Number" | "number" => Ok(SeekType::Number),
            other => Err(Error::new(
                ident.span(),
                format!("unknown seek type: '{other}'. Expected one of: String, Number"),
            )),
        }
    }
}

/// Field-level attributes from `#[seek(...)]`.
#[derive(Debug, Clone)]
pub struct SeekAttr {
    /// The type of this seekable field.
    pub seek_type: Option<SeekType>,
    /// Skip this field.
    pub skip: bool,
    /// Field name used in paths (default: the Rust field name).
    pub rename: Option<String>,
    /// Entity override for projections that span several entities.
    pub entity: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for SeekAttr {
    fn default() -> Self {
        SeekAttr {
            seek_type: None,
            skip: false,
            rename: None,
            entity: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for SeekAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SeekAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.seek_type = Some(SeekType::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected seek type: String, Number, or skip",
                        ));
                    }
                }

                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(string_literal(&nv.value, "rename")?.value());
                    } else if nv.path.is_ident("entity") {
                        attr.entity = Some(string_literal(&nv.value, "entity")?.value());
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or entity",
                        ));
                    }
                }

                Meta::List(_) => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown seek attribute. Expected: String, Number, skip, \
                         rename = \"...\", or entity = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Struct-level attributes from `#[seek(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ContainerAttr {
    /// Entity name for every field without its own override.
    pub entity: Option<String>,
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("entity") => {
                    attr.entity = Some(string_literal(&nv.value, "entity")?.value());
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown struct-level seek attribute. Expected: entity = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

fn string_literal<'e>(expr: &'e Expr, key: &str) -> Result<&'e LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s),
        other => Err(Error::new(
            other.span(),
            format!("{key} must be a string literal"),
        )),
    }
}

/// Extract `#[seek(...)]` attributes from a field's attributes.
pub fn parse_seek_attrs(attrs: &[Attribute]) -> Result<SeekAttr> {
    for attr in attrs {
        if attr.path().is_ident("seek") {
            return attr.parse_args::<SeekAttr>();
        }
    }
    Ok(SeekAttr::default())
}

/// Extract the struct-level `#[seek(...)]` attribute.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    for attr in attrs {
        if attr.path().is_ident("seek") {
            return attr.parse_args::<ContainerAttr>();
        }
    }
    Ok(ContainerAttr::default())
}
