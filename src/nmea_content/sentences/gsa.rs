#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    nmea_content::{DecodeFields, Fields, FixType, MessageType},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
///
/// GSA sentences are recognized but not decoded yet; decoding one fails with
/// [`DecodeError::TypeNotUnderstood`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Fix mode
    pub fix_type: FixType,
    /// PRN numbers of the satellites used in the fix, up to 12
    pub satellite_prns: heapless::Vec<u8, 12>,
    /// Position Dilution of Precision
    pub pdop: f32,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Vertical Dilution of Precision
    pub vdop: f32,
}

impl DecodeFields for GSA {
    const MIN_FIELDS: usize = 0;
    const MAX_FIELDS: usize = usize::MAX;

    fn decode_fields(_: &Fields<'_>) -> Result<Self, DecodeError> {
        Err(DecodeError::TypeNotUnderstood {
            header: MessageType::GSA.header().unwrap_or_default().to_owned(),
        })
    }
}
