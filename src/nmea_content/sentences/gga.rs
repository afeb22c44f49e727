#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, DecodeFields,
    nmea_content::parse::{latitude, longitude, utc_seconds},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// The altitude and geoidal separation must be given in meters (`M`). The trailing
/// DGPS age and station fields are not decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, DecodeFields)]
#[nmea(min_fields(12), max_fields(14))]
pub struct GGA {
    #[nmea(index(0), decoder(utc_seconds))]
    /// Fix time in UTC, seconds since midnight
    pub utc: u32,
    #[nmea(index(1), width(2), decoder(latitude))]
    /// Latitude in decimal degrees, negative south of the equator
    pub latitude: f64,
    #[nmea(index(3), width(2), decoder(longitude))]
    /// Longitude in decimal degrees, negative west of Greenwich
    pub longitude: f64,
    #[nmea(index(5))]
    /// GPS Quality Indicator
    pub fix_quality: u8,
    #[nmea(index(6))]
    /// Number of satellites in use
    pub satellite_count: u8,
    #[nmea(index(7))]
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    #[nmea(index(8), unit('M'))]
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: f32,
    #[nmea(index(10), unit('M'))]
    /// Geoidal separation in meters, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoid_height: f32,
}

impl GGA {
    /// Returns the fix time as a time of day, or [`None`] if `utc` is not within a day.
    pub fn fix_time(&self) -> Option<time::Time> {
        let hour = u8::try_from(self.utc / 3600).ok()?;
        let minute = u8::try_from(self.utc / 60 % 60).ok()?;
        let second = u8::try_from(self.utc % 60).ok()?;

        time::Time::from_hms(hour, minute, second).ok()
    }
}


