//! Recursive records and custom textual forms.
//!
//! Run with: cargo run --example records

use serde_edn::{edn_record, edn_text, to_string, BoxError, ToEdnText};
use std::error::Error;

struct Version {
    major: u16,
    minor: u16,
}

impl ToEdnText for Version {
    fn to_edn_text(&self) -> Result<String, BoxError> {
        Ok(format!("{}.{}", self.major, self.minor))
    }
}

edn_text!(Version);

struct Module {
    name: String,
    version: Version,
    submodules: Vec<Module>,
}

edn_record!(Module {
    name: String,
    version: Version,
    submodules: Vec<Module>,
});

fn main() -> Result<(), Box<dyn Error>> {
    let root = Module {
        name: "core".to_string(),
        version: Version { major: 1, minor: 4 },
        submodules: vec![
            Module {
                name: "io".to_string(),
                version: Version { major: 0, minor: 9 },
                submodules: vec![],
            },
            Module {
                name: "net".to_string(),
                version: Version { major: 2, minor: 0 },
                submodules: vec![Module {
                    name: "tls".to_string(),
                    version: Version { major: 0, minor: 1 },
                    submodules: vec![],
                }],
            },
        ],
    };

    println!("{}", to_string(&root)?);
    Ok(())
}
