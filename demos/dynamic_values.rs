//! Building, inspecting and walking Value trees.
//!
//! Run with: cargo run --example dynamic_values

use json_tree::{json, to_string_pretty, to_value, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build config dynamically with json! macro
    let mut config = json!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config:\n{}\n", to_string_pretty(&config));

    // Access values dynamically
    if let Some(host) = config["host"].as_str() {
        println!("Accessing field 'host': {}", host);
    }
    if let Some(port) = config["port"].as_i64() {
        println!("Accessing field 'port': {}", port);
    }
    println!("Accessing field 'features': {} items", config["features"].len());
    println!("Missing field is null: {}\n", config["missing"].is_null());

    // Grow the tree
    config["features"].push(Value::from("tracing"))?;
    config.push_member("timeout_ms", Value::from(2500u32))?;

    // Walk members with their keys
    let mut entries = config.iter();
    while let Some((key, value)) = entries.next_entry() {
        println!("  {:<10} {:<7} {}", key, value.value_type(), value);
    }

    // Convert existing struct to Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("\nUser as Value:\n{}\n", to_string_pretty(&user_value));

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    // Strict access reports what went wrong
    if let Err(err) = user_value.at("email") {
        println!("  at(\"email\"): {}", err);
    }

    Ok(())
}
