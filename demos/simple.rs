//! Parse, edit and print a JSON document.
//!
//! Run with: cargo run --example simple

use json_tree::{from_str, to_string, to_string_pretty, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = r#"{
        "service": "billing",
        "port": 8080,
        "replicas": [{"zone": "eu-1"}, {"zone": "us-2"}]
    }"#;

    // Parse into a tree
    let mut config = from_str(text)?;
    println!("Service: {}", config["service"]);
    println!("Port:    {}", config["port"]);

    // Edit in place; missing members are created on demand
    config["port"] = Value::from(9090u32);
    config["replicas"][2]["zone"] = Value::from("ap-3");
    config["limits"]["cpu"] = Value::from(0.5);

    println!("\nCompact:\n{}", to_string(&config));
    println!("\nPretty:\n{}", to_string_pretty(&config));

    // Output always parses back to an equal tree
    assert_eq!(from_str(&to_string(&config))?, config);
    println!("\n✓ Round-trip successful");

    Ok(())
}
