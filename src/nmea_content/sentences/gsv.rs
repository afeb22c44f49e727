#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    nmea_content::{DecodeFields, Fields, MessageType, Satellite},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// GSV sentences are recognized but not decoded yet; decoding one fails with
/// [`DecodeError::TypeNotUnderstood`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV sentences to be transmitted in this group
    pub message_total: u8,
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite information
    pub satellites: heapless::Vec<Satellite, 4>,
}

impl DecodeFields for GSV {
    const MIN_FIELDS: usize = 0;
    const MAX_FIELDS: usize = usize::MAX;

    fn decode_fields(_: &Fields<'_>) -> Result<Self, DecodeError> {
        Err(DecodeError::TypeNotUnderstood {
            header: MessageType::GSV.header().unwrap_or_default().to_owned(),
        })
    }
}


