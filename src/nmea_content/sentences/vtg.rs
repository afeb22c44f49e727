#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, DecodeFields};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// NMEA 2.3 appends a mode indicator as a ninth field; it is accepted and ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeFields)]
#[nmea(max_fields(9))]
pub struct VTG {
    #[nmea(index(0), unit('T'))]
    /// Course over ground in degrees true
    pub course_true: f32,
    #[nmea(index(2), unit('M'))]
    /// Course over ground in degrees magnetic
    pub course_magnetic: f32,
    #[nmea(index(4), unit('N'))]
    /// Speed over ground in knots
    pub speed_knots: f32,
    #[nmea(index(6), unit('K'))]
    /// Speed over ground in kilometers per hour
    pub speed_kmh: f32,
}


