use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::nmea0183::{LineEndingMode, crlf};

#[test]
fn test_crlf_required() {
    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("12345\r\n");
    assert!(res.is_ok());
    let (data, _) = res.unwrap();
    assert_eq!(data, "12345");

    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("12345");
    assert!(res.is_err());
    let err = res.unwrap_err();
    if let Err::Error(e) = err {
        assert_eq!(e.code, ErrorKind::CrLf);
    }
}

#[test]
fn test_crlf_forbidden() {
    let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("12345");
    assert!(res.is_ok());
    let (data, _) = res.unwrap();
    assert_eq!(data, "12345");

    let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("12345\r\n");
    assert!(res.is_err());
    let err = res.unwrap_err();
    if let Err::Error(e) = err {
        assert_eq!(e.code, ErrorKind::CrLf);
    }
}

#[test]
fn test_crlf_optional() {
    for i in ["12345", "12345\r\n"] {
        let res: IResult<_, _> = crlf(LineEndingMode::Optional).parse(i);
        assert!(res.is_ok(), "Failed: {i:?}");
        let (data, _) = res.unwrap();
        assert_eq!(data, "12345");
    }
}

#[test]
fn test_crlf_not_at_end() {
    for mode in [LineEndingMode::Optional, LineEndingMode::Required] {
        let res: IResult<_, _> = crlf(mode).parse("123\r\n45");
        assert!(res.is_err(), "Failed: {mode:?}");

        let err = res.unwrap_err();
        if let Err::Error(e) = err {
            assert_eq!(e.code, ErrorKind::CrLf);
        } else {
            panic!("Unexpected error")
        }
    }
}
