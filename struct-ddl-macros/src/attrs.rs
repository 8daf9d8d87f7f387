use std::collections::HashSet;

use proc_macro2::TokenStream as TokenStream2;
use syn::meta::ParseNestedMeta;
use syn::{LitBool, LitStr, Token};

/// Options of `#[table(...)]`.
#[derive(Default)]
pub struct TableAttr {
    /// Explicit table name.
    pub name: Option<LitStr>,
}

impl TableAttr {
    pub fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut table = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("table")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if table.name.is_some() {
                        return Err(meta.error("duplicate `name` option"));
                    }
                    let name = parse_str(&meta)?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new_spanned(name, "table name must not be empty"));
                    }
                    table.name = Some(name);
                    Ok(())
                } else {
                    Err(meta.error("unknown table option; expected `name`"))
                }
            })?;
        }

        Ok(table)
    }
}

/// Options of `#[column(...)]`.
#[derive(Default)]
pub struct ColumnAttr {
    pub sql_type: Option<LitStr>,
    pub primary_key: bool,
    pub unique: bool,
    pub index: bool,
    pub nullable: bool,
    pub default: Option<LitStr>,
    pub comment: Option<LitStr>,
    pub exclude: bool,
}

impl ColumnAttr {
    pub fn from_field(field: &syn::Field) -> syn::Result<Self> {
        let mut column = Self::default();
        let mut seen = HashSet::new();

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("column")) {
            attr.parse_nested_meta(|meta| {
                let Some(key) = meta.path.get_ident().map(ToString::to_string) else {
                    return Err(meta.error("expected a column option"));
                };
                if !seen.insert(key.clone()) {
                    return Err(meta.error(format!("duplicate `{key}` option")));
                }

                match key.as_str() {
                    "pk" => column.primary_key = parse_flag(&meta)?,
                    "unique" => column.unique = parse_flag(&meta)?,
                    "index" => column.index = parse_flag(&meta)?,
                    "null" => column.nullable = parse_flag(&meta)?,
                    "exclude" => column.exclude = parse_flag(&meta)?,
                    "sql_type" => {
                        let sql_type = parse_str(&meta)?;
                        if sql_type.value().is_empty() {
                            return Err(syn::Error::new_spanned(
                                sql_type,
                                "sql_type must not be empty; omit it to infer the type",
                            ));
                        }
                        column.sql_type = Some(sql_type);
                    }
                    "default" => column.default = Some(parse_str(&meta)?),
                    "comment" => column.comment = Some(parse_str(&meta)?),
                    _ => {
                        return Err(meta.error(format!(
                            "unknown column option `{key}`; expected one of `pk`, `unique`, `index`, `null`, `exclude`, `sql_type`, `default`, `comment`"
                        )));
                    }
                }

                Ok(())
            })?;
        }

        Ok(column)
    }

    /// Tokens of the equivalent `ColumnOptions` value.
    pub fn to_options(&self) -> TokenStream2 {
        let sql_type = opt_str(&self.sql_type);
        let default = opt_str(&self.default);
        let comment = opt_str(&self.comment);
        let Self {
            primary_key,
            unique,
            index,
            nullable,
            exclude,
            ..
        } = self;

        quote::quote! {
            ::struct_ddl::prelude::ColumnOptions {
                sql_type: #sql_type,
                primary_key: #primary_key,
                unique: #unique,
                index: #index,
                nullable: #nullable,
                default: #default,
                comment: #comment,
                exclude: #exclude,
            }
        }
    }
}

/// Parses either a bare flag (`pk`) or an explicit boolean (`pk = false`).
fn parse_flag(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        let value: LitBool = meta.value()?.parse()?;
        Ok(value.value)
    } else {
        Ok(true)
    }
}

fn parse_str(meta: &ParseNestedMeta) -> syn::Result<LitStr> {
    meta.value()?.parse()
}

fn opt_str(value: &Option<LitStr>) -> TokenStream2 {
    match value {
        Some(lit) => quote::quote! { ::core::option::Option::Some(#lit) },
        None => quote::quote! { ::core::option::Option::None },
    }
}
