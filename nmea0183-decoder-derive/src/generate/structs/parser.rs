use std::collections::HashMap;

use syn::{Error, Fields, LitChar, Result, Type, parse2, spanned::Spanned};

use crate::{
    meta::{self, MetaAttribute, MetaAttributeType},
    parser::{FieldDecoder, UnitCheck},
};

#[derive(Clone)]
pub struct FieldParser {
    pub variable_name: String,
    pub decoder: FieldDecoder,
    pub unit: Option<UnitCheck>,
}

impl FieldParser {
    /// Number of fields a sentence needs for this one to be read.
    fn required_fields(&self) -> usize {
        match &self.unit {
            Some(unit) => unit.index + 1,
            None => self.decoder.indices().end,
        }
    }
}

#[derive(Clone)]
pub struct StructParser {
    pub empty: bool,
    pub unnamed: bool,
    pub parsers: Vec<FieldParser>,
}

impl StructParser {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let (empty, unnamed) = match fields {
            Fields::Named(_) => (false, false),
            Fields::Unnamed(_) => (false, true),
            Fields::Unit => (true, false),
        };

        let mut indices = HashMap::new();
        let mut parsers = vec![];
        for (position, field) in fields.iter().enumerate() {
            let variable_name = field.ident.as_ref().map_or_else(
                || format!("_nmea_unnamed_{position}"),
                |ident| ident.to_string(),
            );
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;
            let (decoder, unit) = Self::get_decoder(field, &attributes)?;

            let claimed = decoder.indices().chain(unit.as_ref().map(|u| u.index));
            for index in claimed {
                if let Some(other) = indices.insert(index, variable_name.clone()) {
                    return Err(Error::new(
                        field.span(),
                        format!("nmea0183-decoder-derive: Index {index} is already used by `{other}`"),
                    ));
                }
            }

            parsers.push(FieldParser {
                variable_name,
                decoder,
                unit,
            });
        }

        Ok(Self {
            empty,
            unnamed,
            parsers,
        })
    }

    /// The default `min_fields`: enough fields to read every struct field.
    pub fn required_fields(&self) -> usize {
        self.parsers
            .iter()
            .map(FieldParser::required_fields)
            .max()
            .unwrap_or_default()
    }

    fn get_decoder(
        field: &syn::Field,
        attributes: &[MetaAttribute],
    ) -> Result<(FieldDecoder, Option<UnitCheck>)> {
        let ty: &Type = &field.ty;
        let mut index = None;
        let mut width = None;
        let mut path = None;
        let mut unit = None;

        for attribute in attributes {
            match attribute.r#type {
                MetaAttributeType::Ignore => {
                    return Ok((FieldDecoder::Default(Box::new(ty.clone())), None));
                }
                MetaAttributeType::Index => index = Some(attribute.usize_arg()?),
                MetaAttributeType::Width => {
                    let value = attribute.usize_arg()?;
                    if value == 0 {
                        return Err(Error::new(
                            attribute.span(),
                            "nmea0183-decoder-derive: Attribute `width` must be at least 1",
                        ));
                    }
                    width = Some((value, attribute.span()));
                }
                MetaAttributeType::Decoder => path = Some(attribute.arg()?.clone()),
                MetaAttributeType::Unit => unit = Some(parse2::<LitChar>(attribute.arg()?.clone())?),
                _ => {}
            }
        }

        let index = index.ok_or_else(|| {
            Error::new(
                field.span(),
                "nmea0183-decoder-derive: Field needs an `index` or `ignore` nmea attribute",
            )
        })?;

        let decoder = match (path, width) {
            (Some(path), width) => FieldDecoder::Function {
                path,
                index,
                width: width.map_or(1, |(width, _)| width),
            },
            (None, Some((_, span))) => {
                return Err(Error::new(
                    span,
                    "nmea0183-decoder-derive: Attribute `width` is only allowed with `decoder`",
                ));
            }
            (None, None) => FieldDecoder::Type {
                ty: Box::new(ty.clone()),
                index,
            },
        };
        let unit = unit.map(|unit| UnitCheck {
            index: decoder.indices().end,
            unit,
        });

        Ok((decoder, unit))
    }
}


