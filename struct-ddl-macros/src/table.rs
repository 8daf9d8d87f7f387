use proc_macro2::TokenStream as TokenStream2;
use syn::ext::IdentExt as _;
use syn::{DeriveInput, Fields};

use crate::attrs::{ColumnAttr, TableAttr};

/// A declared field of the record.
struct Column<'a> {
    ident: &'a syn::Ident,
    /// Field identifier without the raw prefix; used both as column name and lookup key.
    name: String,
    ty: &'a syn::Type,
    options: syn::Ident,
    attr: ColumnAttr,
}

/// Generate implementation of `TableSchema` and `Field` traits.
pub fn table(
    DeriveInput {
        ident,
        data,
        generics,
        attrs,
        ..
    }: DeriveInput,
) -> syn::Result<TokenStream2> {
    let syn::Data::Struct(struct_data) = data else {
        return Err(syn::Error::new_spanned(
            &ident,
            format!("Cannot derive Table for {ident}; it can only be derived for structs"),
        ));
    };
    let fields = match struct_data.fields {
        Fields::Named(fields) => fields.named,
        Fields::Unit => Default::default(),
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new_spanned(
                fields,
                "Table cannot be derived for tuple structs; fields must be named",
            ));
        }
    };

    let table_attr = TableAttr::from_attrs(&attrs)?;
    let table_name = table_attr
        .name
        .map(|name| name.value())
        .unwrap_or_else(|| ident.unraw().to_string())
        .to_lowercase();

    let columns = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "table fields must be named"))?;
            Ok(Column {
                ident,
                name: ident.unraw().to_string(),
                ty: &field.ty,
                options: quote::format_ident!("__COLUMN_OPTIONS_{}", i),
                attr: ColumnAttr::from_field(field)?,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let options = impl_options(&columns);
    let table_schema = impl_table_schema(&columns, &table_name);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        const _: () = {
            #options

            #[allow(unused_variables, unreachable_code)]
            impl #impl_generics ::struct_ddl::prelude::TableSchema for #ident #ty_generics #where_clause {
                #table_schema
            }

            impl #impl_generics ::struct_ddl::prelude::Field for #ident #ty_generics #where_clause {
                fn describe(
                    name: &str,
                    options: &::struct_ddl::prelude::ColumnOptions,
                    columns: &mut ::std::vec::Vec<::struct_ddl::prelude::ColumnDescriptor>,
                ) {
                    ::struct_ddl::prelude::describe_record::<Self>(name, options, columns);
                }

                fn collect(
                    &self,
                    _name: &str,
                    options: &::struct_ddl::prelude::ColumnOptions,
                    columns: &mut ::struct_ddl::prelude::ColumnValues,
                ) {
                    ::struct_ddl::prelude::collect_record(self, options, columns);
                }

                fn value(&self) -> ::core::option::Option<::struct_ddl::prelude::Value> {
                    ::core::option::Option::None
                }
            }
        };
    })
}

/// Generate one `ColumnOptions` constant per field.
fn impl_options(columns: &[Column<'_>]) -> TokenStream2 {
    let consts = columns.iter().map(|column| {
        let options_ident = &column.options;
        let options = column.attr.to_options();
        quote::quote! {
            const #options_ident: ::struct_ddl::prelude::ColumnOptions = #options;
        }
    });

    quote::quote! { #(#consts)* }
}

/// Generate the body of the `TableSchema` implementation.
fn impl_table_schema(columns: &[Column<'_>], table_name: &str) -> TokenStream2 {
    let describe = columns.iter().map(|column| {
        let Column {
            name, ty, options, ..
        } = column;
        quote::quote! {
            <#ty as ::struct_ddl::prelude::Field>::describe(#name, &#options, columns);
        }
    });

    let collect = columns.iter().map(|column| {
        let Column {
            ident,
            name,
            options,
            ..
        } = column;
        quote::quote! {
            ::struct_ddl::prelude::Field::collect(&self.#ident, #name, &#options, columns);
        }
    });

    let lookup = columns.iter().map(|column| {
        let Column { ident, name, .. } = column;
        quote::quote! {
            #name => ::struct_ddl::prelude::Field::value(&self.#ident),
        }
    });

    quote::quote! {
        fn table_name() -> &'static str {
            #table_name
        }

        fn describe_columns(columns: &mut ::std::vec::Vec<::struct_ddl::prelude::ColumnDescriptor>) {
            #(#describe)*
        }

        fn collect_set_columns(&self, columns: &mut ::struct_ddl::prelude::ColumnValues) {
            #(#collect)*
        }

        fn field_value(
            &self,
            name: &str,
        ) -> ::struct_ddl::prelude::TableResult<::struct_ddl::prelude::Value> {
            let value = match name {
                #(#lookup)*
                _ => {
                    return ::core::result::Result::Err(::struct_ddl::prelude::TableError::KeyNotFound {
                        key: name.to_string(),
                    });
                }
            };

            value.ok_or_else(|| ::struct_ddl::prelude::TableError::UnsupportedValue {
                field: name.to_string(),
            })
        }
    }
}
