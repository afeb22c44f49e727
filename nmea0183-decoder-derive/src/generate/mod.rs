use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Generics, Path, Result, WhereClause, parse_quote};

use crate::{config::Config, generate::structs::Struct};

mod structs;

// Usage:
// #[derive(DecodeFields)]
// #[nmea(min_fields(12), max_fields(14))]
// pub struct MySentence {
//     #[nmea(index(0), decoder(utc_seconds))]
//     pub time: u32,
//     #[nmea(index(8), unit('M'))]
//     pub altitude: f32,
//     #[nmea(ignore)]
//     pub computed_field: u32,
// }

trait Generator {
    fn name(&self) -> &Path;
    fn config(&self) -> &Config;
    fn generics(&self) -> &Generics;
    fn min_fields(&self) -> usize;
    fn generate_decode_body(&self) -> Result<TokenStream>;

    fn max_fields(&self) -> usize {
        self.config().max_fields.unwrap_or_else(|| self.min_fields())
    }

    fn generate_decode(&self) -> Result<TokenStream> {
        let fields = &self.config().fields_name;
        let body = self.generate_decode_body()?;

        let func = quote! {
            #[allow(unused_variables)]
            fn decode_fields(
                #fields: &nmea0183_decoder::nmea_content::Fields<'_>,
            ) -> ::core::result::Result<Self, nmea0183_decoder::DecodeError> {
                #body
            }
        };

        Ok(func)
    }

    fn generate_impl(&self) -> Result<TokenStream> {
        let name = self.name();
        let (min_fields, max_fields) = (self.min_fields(), self.max_fields());

        if min_fields > max_fields {
            return Err(Error::new_spanned(
                name,
                format!(
                    "nmea0183-decoder-derive: The struct reads {min_fields} fields but `max_fields` is {max_fields}"
                ),
            ));
        }

        let decode_tokens = self.generate_decode()?;
        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // If there is no where clause, create a new one
        let mut impl_where: WhereClause = if where_clause.is_some() {
            parse_quote!(#where_clause)
        } else {
            parse_quote!(where)
        };

        // Make sure generic parameters can be parsed from any field
        for param in generics.type_params() {
            let param = &param.ident;
            impl_where
                .predicates
                .push(parse_quote!(#param: for<'nmea> nmea0183_decoder::NmeaParse<&'nmea str>));
        }

        let impl_tokens = quote! {
            impl #impl_generics nmea0183_decoder::nmea_content::DecodeFields for #name #ty_generics #impl_where {
                const MIN_FIELDS: usize = #min_fields;
                const MAX_FIELDS: usize = #max_fields;

                #decode_tokens
            }
        };

        Ok(impl_tokens)
    }
}

pub fn generate_decode_fields_impl(input: &DeriveInput) -> Result<TokenStream> {
    let generator: Box<dyn Generator> = match &input.data {
        Data::Struct(datastruct) => {
            let name = &input.ident;
            let attributes = &input.attrs;
            let generics = &input.generics;

            Box::new(Struct::from_datastruct(
                name, datastruct, attributes, generics,
            )?)
        }
        Data::Enum(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-decoder-derive: Enums not supported",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-decoder-derive: Unions not supported",
            ));
        }
    };

    generator.generate_impl()
}
