//! Scalars, collections and the EDN extension literals.
//!
//! Run with: cargo run --example simple

use chrono::Utc;
use serde_edn::{edn, to_string, Keyword, Set, Symbol, Tagged};
use std::collections::LinkedList;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", to_string(&42)?);
    println!("{}", to_string(&-3.14e-33)?);
    println!("{}", to_string(&"привет")?);
    println!("{}", to_string(&Keyword::new("user/name"))?);
    println!("{}", to_string(&Symbol::new("clojure.core/inc"))?);

    let tags = Set::new().with("rust").with("edn").with("rust");
    println!("{}", to_string(&tags)?);

    let call: LinkedList<Symbol> = ["inc", "x"].into_iter().map(Symbol::new).collect();
    println!("{}", to_string(&call)?);

    println!("{}", to_string(&b"any + old & data".to_vec())?);
    println!("{}", to_string(&Utc::now())?);
    println!("{}", to_string(&Tagged::new("myapp/color", "#ff8800"))?);

    let value = edn!({
        (Keyword::new("id")) => 7,
        (Keyword::new("roles")) => #{"admin", "ops"},
        (Keyword::new("manager")) => nil,
    });
    println!("{}", to_string(&value)?);

    match to_string(&f64::NAN) {
        Ok(out) => println!("unexpected: {}", out),
        Err(e) => println!("✓ rejected: {}", e),
    }

    Ok(())
}
