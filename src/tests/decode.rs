use crate::{
    DecodeError, DecodedMessage, GGA, Malformed, MessageType, VTG, classify, parse_message,
};

const GGA_SENTENCE: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const VTG_SENTENCE: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48";

fn decode_gga(sentence: &str) -> GGA {
    match parse_message(sentence) {
        Ok(DecodedMessage::GGA(gga)) => gga,
        other => panic!("Unexpected result for {sentence:?}: {other:?}"),
    }
}

fn decode_vtg(sentence: &str) -> VTG {
    match parse_message(sentence) {
        Ok(DecodedMessage::VTG(vtg)) => vtg,
        other => panic!("Unexpected result for {sentence:?}: {other:?}"),
    }
}

#[test]
fn test_decode_vtg() {
    let vtg = decode_vtg(VTG_SENTENCE);
    assert_eq!(
        vtg,
        VTG {
            course_true: 54.7,
            course_magnetic: 34.4,
            speed_knots: 5.5,
            speed_kmh: 10.2,
        }
    );

    let vtg = decode_vtg("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25");
    assert_eq!(vtg.speed_knots, 5.5);
}

#[test]
fn test_decode_gga() {
    let gga = decode_gga(GGA_SENTENCE);
    assert_eq!(gga.utc, 45319);
    assert!((gga.latitude - 48.1173).abs() < 1e-9);
    assert!((gga.longitude - 11.516_666_666_666_667).abs() < 1e-9);
    assert_eq!(gga.fix_quality, 1);
    assert_eq!(gga.satellite_count, 8);
    assert_eq!(gga.hdop, 0.9);
    assert_eq!(gga.altitude, 545.4);
    assert_eq!(gga.geoid_height, 46.9);

    let gga = decode_gga(
        "$GPGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,,*59",
    );
    assert_eq!(gga.utc, 643);
    assert!(gga.longitude < 0.0);
    assert_eq!(gga.geoid_height, -21.3);
}

#[test]
fn test_decode_gga_extremes() {
    let gga = decode_gga(
        "$GPGGA,235959.99,8959.999,S,17959.999,W,2,12,0.5,-10.0,M,0.0,M,,*45",
    );
    assert_eq!(gga.utc, 86399);
    assert!(gga.latitude < -89.99 && gga.latitude >= -90.0);
    assert!(gga.longitude < -179.99 && gga.longitude >= -180.0);
    assert_eq!(gga.altitude, -10.0);
}

#[test]
fn test_decoded_message_type() {
    let message = parse_message(GGA_SENTENCE).unwrap();
    assert_eq!(message.message_type(), MessageType::GGA);
    assert_eq!(message.message_type(), classify(GGA_SENTENCE));

    let message = parse_message(VTG_SENTENCE).unwrap();
    assert_eq!(message.message_type(), MessageType::VTG);
}

#[test]
fn test_decode_type_not_understood() {
    let cases = [
        ("$GPGLL,4916.45,N,12311.12,W,225444,A*31", "$GPGLL"),
        (
            "$GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*59",
            "$GNGGA",
        ),
        ("$GPVTF,054.7,T*00", "$GPVTF"),
        ("$GPVT", "$GPVT"),
        ("", ""),
    ];

    for (input, header) in cases {
        let result = parse_message(input);
        assert_eq!(
            result,
            Err(DecodeError::TypeNotUnderstood {
                header: header.to_owned()
            }),
            "Failed: {input:?}"
        );
    }
}

#[test]
fn test_decode_classifies_before_ascii_check() {
    let cases = [
        ("$GPGLL,4916.45,N,12311.12,W,225444,A\u{b0}*31", "$GPGLL"),
        ("$GP\u{e9}GA,123519*00", "$GP\u{e9}GA"),
        ("\u{b0}GPGGA,123519*00", "\u{b0}GPGGA"),
    ];

    for (input, header) in cases {
        assert_eq!(
            parse_message(input),
            Err(DecodeError::TypeNotUnderstood {
                header: header.to_owned()
            }),
            "Failed: {input:?}"
        );
    }

    assert_eq!(
        parse_message("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48 \u{b0}"),
        Err(DecodeError::SentenceMalformed(Malformed::NonAscii))
    );
}

#[test]
fn test_decode_recognized_but_unsupported() {
    let cases = [
        ("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39", "$GPGSA"),
        (
            "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75",
            "$GPGSV",
        ),
    ];

    for (input, header) in cases {
        assert_eq!(classify(input).header(), Some(header));
        assert_eq!(
            parse_message(input),
            Err(DecodeError::TypeNotUnderstood {
                header: header.to_owned()
            }),
            "Failed: {input:?}"
        );
    }
}

#[test]
fn test_decode_malformed() {
    let cases = [
        (
            "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K",
            Malformed::MissingChecksum,
        ),
        (
            "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*4",
            Malformed::InvalidChecksum,
        ),
        (
            "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*4Z",
            Malformed::InvalidChecksum,
        ),
        (
            "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*480",
            Malformed::InvalidChecksum,
        ),
        ("$GPVTG*52", Malformed::MissingAddressSeparator),
        (
            "$GPVTG;054.7,T,034.4,M,005.5,N,010.2,K*5F",
            Malformed::MissingAddressSeparator,
        ),
        (
            "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n\r\n",
            Malformed::LineEnding,
        ),
        (
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4*7E",
            Malformed::TooFewFields {
                expected: 12,
                found: 9,
            },
        ),
        (
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\u{b0}",
            Malformed::NonAscii,
        ),
    ];

    for (input, reason) in cases {
        assert_eq!(
            parse_message(input),
            Err(DecodeError::SentenceMalformed(reason)),
            "Failed: {input:?}"
        );
    }
}

#[test]
fn test_decode_checksum_mismatch() {
    let result = parse_message("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*49");
    assert_eq!(
        result,
        Err(DecodeError::ChecksumInvalid {
            expected: 0x48,
            found: 0x49
        })
    );

    // A single flipped character in the content
    let result = parse_message("$GPVTG,054.7,T,034.4,M,005.5,N,010.3,K*48");
    assert!(matches!(
        result,
        Err(DecodeError::ChecksumInvalid { found: 0x48, .. })
    ));
}

#[test]
fn test_decode_field_errors() {
    let result = parse_message("$GPGGA,123519,4807.038,,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*09");
    assert_eq!(
        result,
        Err(DecodeError::FieldMisformatted {
            index: 2,
            value: String::new()
        })
    );

    let result = parse_message("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,X*5B");
    assert_eq!(
        result,
        Err(DecodeError::FieldMisformatted {
            index: 7,
            value: "X".to_owned()
        })
    );

    let result = parse_message("$GPVTG,,T,,M,,N,,K*4E");
    assert!(matches!(
        result,
        Err(DecodeError::FieldMisformatted { index: 0, .. })
    ));
}

#[test]
fn test_decode_line_endings() {
    assert_eq!(
        parse_message(&format!("{GGA_SENTENCE}\r\n")),
        parse_message(GGA_SENTENCE)
    );
    assert!(parse_message(&format!("{VTG_SENTENCE}\r\n")).is_ok());
}

#[test]
fn test_decode_is_repeatable() {
    let first = parse_message(GGA_SENTENCE);
    for _ in 0..3 {
        assert_eq!(parse_message(GGA_SENTENCE), first);
    }
}
