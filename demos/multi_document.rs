//! Streams of documents and syntax error reporting.
//!
//! Run with: cargo run --example multi_document

use json_tree::{json, Deserializer, FormatOptions, ParserOptions, Serializer};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Write several documents into one buffer
    let mut serializer = Serializer::new(FormatOptions::new());
    serializer
        .write(&json!({"event": "start", "seq": 1}))
        .write(&json!({"event": "tick", "seq": 2}))
        .write(&json!({"event": "stop", "seq": 3}));

    let buffer = serializer.into_inner();
    println!("Buffer:\n{}\n", buffer);

    // Read them back one root at a time
    let mut de = Deserializer::new();
    de.feed(&buffer);
    while let Some(root) = de.next_root() {
        println!("  {} #{}", root["event"], root["seq"]);
    }

    // A broken buffer keeps the roots completed before the failure
    de.feed("[1, 2]\n{\"ok\": true}\n{\"key\" \"value\"}");
    println!("\nParsed {} roots before the failure", de.len());
    if let Some(err) = de.error() {
        println!("  {}: {}", err, err.message());
    }

    // Limits apply per document
    let mut strict = Deserializer::with_options(ParserOptions::new().with_max_depth(2));
    strict.feed("[[\"fine\"]] [[[\"too deep\"]]]");
    println!("\nWith max_depth 2: {} root(s)", strict.len());
    if let Some(err) = strict.error() {
        println!("  {}", err);
    }

    Ok(())
}
