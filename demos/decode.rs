//! Decodes NMEA 0183 sentences read from standard input, one per line.
//!
//! ```text
//! RUST_LOG=debug cargo run --example decode < track.nmea
//! ```
//!
//! Passing `--warn` decodes sentences with a wrong checksum anyway, and `--strict`
//! rejects sentences with unexpected trailing fields.

use std::io::BufRead;

use nmea0183_decoder::{ChecksumPolicy, DecodedMessage, DecoderBuilder, FieldCountMode};

fn print(line: &str, message: DecodedMessage) {
    match message {
        DecodedMessage::GGA(gga) => {
            let time = gga
                .fix_time()
                .map_or_else(|| "--:--:--".to_owned(), |t| t.to_string());
            println!(
                "GGA {time} lat {:.6} lon {:.6} alt {} m, {} satellites",
                gga.latitude, gga.longitude, gga.altitude, gga.satellite_count
            );
        }
        DecodedMessage::VTG(vtg) => {
            println!(
                "VTG course {} T, speed {} kn / {} km/h",
                vtg.course_true, vtg.speed_knots, vtg.speed_kmh
            );
        }
        other => println!("{:?}: {line}", other.message_type()),
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut builder = DecoderBuilder::new();
    for arg in std::env::args().skip(1) {
        builder = match arg.as_str() {
            "--warn" => builder.checksum_policy(ChecksumPolicy::Warn),
            "--strict" => builder.field_count_mode(FieldCountMode::Strict),
            other => {
                eprintln!("unknown argument `{other}`");
                std::process::exit(2);
            }
        };
    }
    let decoder = builder.build();

    let (mut decoded, mut failed) = (0usize, 0usize);
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        match decoder.decode(line) {
            Ok(message) => {
                decoded += 1;
                print(line, message);
            }
            Err(e) => {
                failed += 1;
                println!("error: {e}: {line}");
            }
        }
    }

    eprintln!("{decoded} decoded, {failed} failed");
    Ok(())
}
