use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, DataStruct, Generics, Ident, Path, Result, parse_quote};

use crate::{
    config::Config,
    generate::{Generator, structs::parser::StructParser},
    meta,
};

pub mod parser;

pub struct Struct {
    pub name: Path,
    pub config: Config,
    pub generics: Generics,
    pub struct_parser: StructParser,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        let attributes = meta::parse_top_level_attributes(attributes)?;
        let config = Config::from_meta_attributes(&attributes)?;
        let struct_parser = StructParser::from_fields(&datastruct.fields)?;

        Ok(Self {
            name: parse_quote!(#name),
            config,
            generics: generics.clone(),
            struct_parser,
        })
    }
}

impl Generator for Struct {
    fn name(&self) -> &Path {
        &self.name
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn generics(&self) -> &Generics {
        &self.generics
    }

    fn min_fields(&self) -> usize {
        self.config
            .min_fields
            .unwrap_or_else(|| self.struct_parser.required_fields())
    }

    fn generate_decode_body(&self) -> Result<TokenStream> {
        let name = &self.name;
        let fields = &self.config.fields_name;

        let variable_name: Vec<_> = self
            .struct_parser
            .parsers
            .iter()
            .map(|field_parser| Ident::new(&field_parser.variable_name, Span::call_site()))
            .collect();

        let decoder = self
            .struct_parser
            .parsers
            .iter()
            .map(|field_parser| field_parser.decoder.to_expr(fields));

        let unit_check = self.struct_parser.parsers.iter().map(|field_parser| {
            field_parser
                .unit
                .as_ref()
                .map(|unit| unit.to_stmt(fields))
        });

        let struct_def = match (self.struct_parser.empty, self.struct_parser.unnamed) {
            (true, _) => quote! { #name },
            (_, true) => quote! { #name(#(#variable_name),*) },
            (_, false) => quote! { #name { #(#variable_name),* } },
        };

        let body = quote! {
            #(let #variable_name = #decoder; #unit_check)*
            Ok(#struct_def)
        };

        Ok(body)
    }
}
