use proc_macro2::Span;
use syn::{Ident, Result};

use crate::meta::{MetaAttribute, MetaAttributeType};

#[derive(Clone)]
pub struct Config {
    pub fields_name: Ident,
    pub min_fields: Option<usize>,
    pub max_fields: Option<usize>,
}

impl Config {
    pub fn from_meta_attributes(attribute_list: &[MetaAttribute]) -> Result<Self> {
        let mut min_fields = None;
        let mut max_fields = None;

        for meta in attribute_list {
            match meta.r#type {
                MetaAttributeType::MinFields => min_fields = Some(meta.usize_arg()?),
                MetaAttributeType::MaxFields => max_fields = Some(meta.usize_arg()?),
                _ => {}
            }
        }

        Ok(Self {
            fields_name: Ident::new("nmea_fields", Span::call_site()),
            min_fields,
            max_fields,
        })
    }
}
