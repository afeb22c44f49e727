use crate::{
    ChecksumMode, ChecksumPolicy, DecodeError, DecodedMessage, Decoder, DecoderBuilder,
    FieldCountMode, LineEndingMode, Malformed,
};

const VTG_SENTENCE: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48";
const VTG_BAD_CHECKSUM: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*00";

#[test]
fn test_default_decoder() {
    let decoder = Decoder::default();
    assert_eq!(decoder, DecoderBuilder::new().build());
    assert_eq!(decoder, DecoderBuilder::default().build());

    assert!(decoder.decode(VTG_SENTENCE).is_ok());
    assert!(matches!(
        decoder.decode(VTG_BAD_CHECKSUM),
        Err(DecodeError::ChecksumInvalid { .. })
    ));
}

#[test]
fn test_checksum_policy_warn() {
    let decoder = DecoderBuilder::new()
        .checksum_policy(ChecksumPolicy::Warn)
        .build();

    let message = decoder.decode(VTG_BAD_CHECKSUM);
    assert!(
        matches!(&message, Ok(DecodedMessage::VTG(vtg)) if vtg.speed_kmh == 10.2),
        "{message:?}"
    );

    // Only the mismatch is forgiven, not an unreadable checksum
    assert_eq!(
        decoder.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*0"),
        Err(DecodeError::SentenceMalformed(Malformed::InvalidChecksum))
    );
}

#[test]
fn test_checksum_mode_optional() {
    let decoder = DecoderBuilder::new()
        .checksum_mode(ChecksumMode::Optional)
        .build();

    assert!(decoder.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").is_ok());
    assert!(decoder.decode(VTG_SENTENCE).is_ok());
    assert!(matches!(
        decoder.decode(VTG_BAD_CHECKSUM),
        Err(DecodeError::ChecksumInvalid { expected: 0x48, found: 0x00 })
    ));
}

#[test]
fn test_checksum_mode_required() {
    let decoder = DecoderBuilder::new()
        .checksum_mode(ChecksumMode::Required)
        .build();

    for input in ["$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K", "$GPGGA"] {
        assert_eq!(
            decoder.decode(input),
            Err(DecodeError::SentenceMalformed(Malformed::MissingChecksum)),
            "Failed: {input:?}"
        );
    }
}

#[test]
fn test_line_ending_modes() {
    let with_crlf = format!("{VTG_SENTENCE}\r\n");

    let cases = [
        (LineEndingMode::Optional, true, true),
        (LineEndingMode::Required, false, true),
        (LineEndingMode::Forbidden, true, false),
    ];

    for (mode, without_ok, with_ok) in cases {
        let decoder = DecoderBuilder::new().line_ending_mode(mode).build();

        let result = decoder.decode(VTG_SENTENCE);
        assert_eq!(result.is_ok(), without_ok, "{mode:?}: {result:?}");
        if !without_ok {
            assert_eq!(
                result,
                Err(DecodeError::SentenceMalformed(Malformed::LineEnding))
            );
        }

        let result = decoder.decode(&with_crlf);
        assert_eq!(result.is_ok(), with_ok, "{mode:?}: {result:?}");
        if !with_ok {
            assert_eq!(
                result,
                Err(DecodeError::SentenceMalformed(Malformed::LineEnding))
            );
        }
    }
}

#[test]
fn test_field_count_modes() {
    let sentence = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A,extra*73";

    let lenient = DecoderBuilder::new()
        .field_count_mode(FieldCountMode::Lenient)
        .build();
    assert!(lenient.decode(sentence).is_ok());

    let strict = DecoderBuilder::new()
        .field_count_mode(FieldCountMode::Strict)
        .build();
    assert_eq!(
        strict.decode(sentence),
        Err(DecodeError::TooManyFields {
            expected: 9,
            found: 10
        })
    );
    assert!(strict.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25").is_ok());
}

#[test]
fn test_decoder_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>(_: T) {}

    let decoder = DecoderBuilder::new()
        .checksum_mode(ChecksumMode::Optional)
        .checksum_policy(ChecksumPolicy::Warn)
        .line_ending_mode(LineEndingMode::Forbidden)
        .field_count_mode(FieldCountMode::Strict)
        .build();
    assert_send_sync(decoder);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || decoder.decode(VTG_SENTENCE)))
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
