//! Newline-delimited EDN written to stdout.
//!
//! Run with: cargo run --example stream

use serde::Serialize;
use serde_edn::{Keyword, Set, StreamWriter};
use std::collections::BTreeMap;
use std::error::Error;
use std::io;

#[derive(Serialize)]
struct Reading {
    sensor: String,
    celsius: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut writer = StreamWriter::new(stdout.lock());

    writer.encode(&0.1)?;
    writer.encode(&"hello")?;
    writer.encode(&Set::new().with(1).with(2).with(3))?;
    writer.encode(&BTreeMap::from([("K", "Kelvin"), ("ß", "long s")]))?;
    writer.encode(&Keyword::new("done"))?;

    for (i, celsius) in [21.5, -4.0, 1e7].into_iter().enumerate() {
        writer.serialize(&Reading {
            sensor: format!("s{}", i),
            celsius,
        })?;
    }

    if let Err(e) = writer.encode(&f64::INFINITY) {
        eprintln!("skipped value: {}", e);
    }
    writer.flush()?;
    Ok(())
}
