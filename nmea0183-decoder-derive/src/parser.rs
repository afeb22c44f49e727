use std::ops::Range;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, LitChar, Type};

/// How the value of one struct field is produced.
#[derive(Clone)]
pub enum FieldDecoder {
    /// `#[nmea(ignore)]`
    Default(Box<Type>),
    /// `#[nmea(decoder(path))]`, reading `width` fields from `index`
    Function {
        path: TokenStream,
        index: usize,
        width: usize,
    },
    /// Parsed through `NmeaParse`.
    Type { ty: Box<Type>, index: usize },
}

impl FieldDecoder {
    /// Fields this decoder reads, not counting a unit.
    pub fn indices(&self) -> Range<usize> {
        match self {
            Self::Default(_) => 0..0,
            Self::Function { index, width, .. } => *index..index + width,
            Self::Type { index, .. } => *index..index + 1,
        }
    }

    pub fn to_expr(&self, fields: &Ident) -> TokenStream {
        match self {
            Self::Default(ty) => quote! { <#ty>::default() },
            Self::Function { path, index, .. } => quote! { #path(#fields, #index)? },
            Self::Type { ty, index } => quote! { #fields.parse::<#ty>(#index)? },
        }
    }
}

/// The unit letter expected right after a field's value.
#[derive(Clone)]
pub struct UnitCheck {
    pub index: usize,
    pub unit: LitChar,
}

impl UnitCheck {
    pub fn to_stmt(&self, fields: &Ident) -> TokenStream {
        let Self { index, unit } = self;
        quote! { #fields.expect_unit(#index, #unit)?; }
    }
}
