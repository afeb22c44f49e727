mod gga;
mod gsa;
mod gsv;
mod vtg;

pub use gga::GGA;
pub use gsa::GSA;
pub use gsv::GSV;
pub use vtg::VTG;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type of an NMEA sentence, derived from its header alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Global Positioning System Fix Data
    GGA,
    /// GPS DOP and active satellites
    GSA,
    /// Satellites in View
    GSV,
    /// Track made good and Ground speed
    VTG,
    /// Any header not listed in the classification table
    Unknown,
}

static HEADERS: [(&str, MessageType); 4] = [
    ("$GPGGA", MessageType::GGA),
    ("$GPGSA", MessageType::GSA),
    ("$GPGSV", MessageType::GSV),
    ("$GPVTG", MessageType::VTG),
];

impl MessageType {
    /// Returns the sentence header this type is classified from, or [`None`] for
    /// [`MessageType::Unknown`].
    pub fn header(&self) -> Option<&'static str> {
        HEADERS
            .iter()
            .find(|(_, message_type)| message_type == self)
            .map(|(header, _)| *header)
    }
}

/// Determines the type of a sentence from its first six characters.
///
/// The header, including the leading `$`, must exactly match one of the known
/// headers; anything else, including input shorter than a header, is
/// [`MessageType::Unknown`]. Only the header is inspected.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{MessageType, classify};
///
/// assert_eq!(classify("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"), MessageType::GGA);
/// assert_eq!(classify("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48"), MessageType::VTG);
/// assert_eq!(classify("$GPGLL,4916.45,N,12311.12,W,225444,A"), MessageType::Unknown);
/// ```
pub fn classify(sentence: &str) -> MessageType {
    let Some(header) = sentence.get(..6) else {
        return MessageType::Unknown;
    };

    HEADERS
        .iter()
        .find(|(known, _)| *known == header)
        .map_or(MessageType::Unknown, |(_, message_type)| *message_type)
}

/// A decoded NMEA sentence.
///
/// Each variant wraps the strongly-typed record of one sentence type and carries
/// only the fields relevant to it.
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decoder::{DecodedMessage, MessageType, parse_message};
///
/// let message = parse_message("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").unwrap();
/// assert_eq!(message.message_type(), MessageType::VTG);
///
/// match message {
///     DecodedMessage::VTG(vtg) => println!("Speed: {} km/h", vtg.speed_kmh),
///     _ => println!("Other sentence decoded"),
/// }
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                      | Decoded |
/// |--------------|------------------------------------|---------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data | yes     |
/// | GSA([`GSA`]) | GPS DOP and active satellites      | no      |
/// | GSV([`GSV`]) | Satellites in View                 | no      |
/// | VTG([`VTG`]) | Track made good and Ground speed   | yes     |
///
/// GSA and GSV sentences are recognized, but decoding them fails with
/// [`DecodeError::TypeNotUnderstood`](crate::DecodeError::TypeNotUnderstood).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedMessage {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// Track made good and Ground speed
    VTG(VTG),
}

impl DecodedMessage {
    /// Returns the type tag of the wrapped record.
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::GGA(_) => MessageType::GGA,
            Self::GSA(_) => MessageType::GSA,
            Self::GSV(_) => MessageType::GSV,
            Self::VTG(_) => MessageType::VTG,
        }
    }
}

/// Fix Mode
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixType {
    /// 1 - No fix
    NoFix,
    /// 2 - 2D Fix
    Fix2D,
    /// 3 - 3D Fix
    Fix3D,
}

/// Satellite information used in [`GSV`] sentences
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    pub prn: u8,
    pub elevation: u8,
    pub azimuth: u16,
    pub snr: u8,
}


