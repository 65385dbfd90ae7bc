use json_tree::{
    from_reader, from_str, from_str_with_options, json, parse_all, to_string, to_string_pretty,
    to_string_with_options, to_value, Deserializer, FormatOptions, Map, Number, NumberType,
    ParserOptions, Serializer, Value, ValueType,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
    note: Option<String>,
}

fn sample_order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
        note: None,
    }
}

#[test]
fn test_struct_to_value_keeps_field_order() {
    let value = to_value(&sample_order()).unwrap();

    let keys: Vec<&str> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["order_id", "customer", "items", "total", "note"]);
    assert_eq!(value["customer"]["name"], "Alice");
    assert_eq!(value["items"][1]["sku"], "GADGET-002");
    assert!(value["note"].is_null());
}

#[test]
fn test_struct_text_round_trip() {
    let value = to_value(&sample_order()).unwrap();

    let compact = to_string(&value);
    assert_eq!(from_str(&compact).unwrap(), value);

    let pretty = to_string_pretty(&value);
    assert!(pretty.contains("\"order_id\" : 12345"));
    assert_eq!(from_str(&pretty).unwrap(), value);
}

#[test]
fn test_output_matches_serde_json_oracle() {
    let order = sample_order();
    let ours = to_string(&to_value(&order).unwrap());
    let theirs = serde_json::to_string(&order).unwrap();

    let reparsed: serde_json::Value = serde_json::from_str(&ours).unwrap();
    let expected: serde_json::Value = serde_json::from_str(&theirs).unwrap();
    assert_eq!(reparsed, expected);
}

#[test]
fn test_parse_matches_serde_json_oracle() {
    let inputs = [
        r#"{"a": [1, -2, 3.5, "x", null, true, false], "b": {"c": {}}}"#,
        r#"["é\n\t\"", "\\", "\/"]"#,
        r#"[18446744073709551615, -9223372036854775808, 0]"#,
        r#"{"nested": [[[], {}], [{"k": "v"}]]}"#,
    ];

    for input in inputs {
        let ours = from_str(input).unwrap();
        let theirs: Value = serde_json::from_str(input).unwrap();
        assert_eq!(ours, theirs, "{input}");
    }
}

#[test]
fn test_value_serialize_through_serde_json() {
    let value = json!({"b": 1, "a": [true, "s"]});
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"b":1,"a":[true,"s"]}"#
    );
}

#[test]
fn test_number_kinds_from_text() {
    let value = from_str("[7, -7, 7.0, 7e2, 7e-2, -0, 18446744073709551616]").unwrap();
    let kinds: Vec<NumberType> = value
        .iter()
        .map(|v| v.as_number().unwrap().get_type())
        .collect();

    assert_eq!(
        kinds,
        [
            NumberType::Uint,
            NumberType::Int,
            NumberType::Double,
            NumberType::Uint,
            NumberType::Double,
            NumberType::Uint,
            NumberType::Double,
        ]
    );
    assert_eq!(value[3].as_u64(), Some(700));
}

#[test]
fn test_double_output_stays_double() {
    let value = json!([5.0, 0.5, 1e16, (-2.5)]);
    let text = to_string(&value);
    assert_eq!(text, "[5.0,0.5,1.0e16,-2.5]");

    let back = from_str(&text).unwrap();
    for element in &back {
        assert!(element.as_number().unwrap().is_double());
    }
}

#[test]
fn test_non_finite_doubles_write_null() {
    let value = json!([(f64::NAN), (f64::INFINITY)]);
    assert_eq!(to_string(&value), "[null,null]");
}

#[test]
fn test_object_order_and_duplicates() {
    let value = from_str(r#"{"z": 1, "a": 2, "z": 3}"#).unwrap();
    let map = value.as_object().unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get_index(0), Some(("z", &Value::from(3u32))));
    assert_eq!(to_string(&value), r#"{"z":3,"a":2}"#);
}

#[test]
fn test_edit_in_place() {
    let mut config = from_str(r#"{"server": {"port": 80}}"#).unwrap();

    config["server"]["port"] = Value::from(8080u32);
    config["server"]["hosts"].push(Value::from("a")).unwrap();
    config["server"]["hosts"].push(Value::from("b")).unwrap();
    config["limits"][0] = Value::from(10);

    assert_eq!(
        to_string(&config),
        r#"{"server":{"port":8080,"hosts":["a","b"]},"limits":[10]}"#
    );
    assert_eq!(config.erase("limits"), 1);
    assert!(config.get("limits").is_none());
}

#[test]
fn test_missing_lookups_are_null() {
    let value = json!({"a": [1]});
    assert!(value["missing"]["deeper"].is_null());
    assert!(value["a"][5].is_null());
    assert!(value["a"]["key"].is_null());
    assert!(value.at("missing").is_err());
    assert!(value["a"].at_index(1).is_err());
}

#[test]
fn test_iteration_over_members() {
    let value = json!({"one": 1, "two": 2, "three": 3});

    let mut it = value.begin();
    let mut seen = Vec::new();
    while it != value.end() {
        seen.push((it.key(), it.value().and_then(Value::as_u64)));
        it.next();
    }
    assert_eq!(seen, [("one", Some(1)), ("two", Some(2)), ("three", Some(3))]);
    assert!(it.is_end());

    let entries: Vec<(&str, &Value)> = value.iter().entries().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].0, "three");

    let sum: i64 = value.iter().filter_map(Value::as_i64).sum();
    assert_eq!(sum, 6);
}

#[test]
fn test_mutable_iteration() {
    let mut value = json!([1, 2, 3]);
    for element in &mut value {
        let mut n = *element.as_number().unwrap();
        n += Number::from(10);
        *element = Value::Number(n);
    }
    assert_eq!(to_string(&value), "[11,12,13]");
}

#[test]
fn test_multi_document_stream() {
    let mut serializer = Serializer::new(FormatOptions::pretty());
    for i in 0..3u32 {
        serializer.write(&json!({"seq": i}));
    }
    assert_eq!(serializer.documents(), 3);

    let roots = parse_all(serializer.as_str()).unwrap();
    assert_eq!(roots.len(), 3);
    for (i, root) in roots.iter().enumerate() {
        assert_eq!(root["seq"].as_u64(), Some(i as u64));
    }
}

#[test]
fn test_deserializer_keeps_roots_before_failure() {
    let mut de = Deserializer::new();
    de.feed("[1] [2] [3,");

    assert_eq!(de.len(), 2);
    assert!(de.error().is_some());

    de.feed("[4]");
    assert!(de.error().is_none());
    let roots: Vec<Value> = de.into_iter().collect();
    assert_eq!(roots, vec![json!([1]), json!([2]), json!([4])]);
}

#[test]
fn test_size_window_is_per_document() {
    let doc = format!("[{}]", vec!["1"; 100].join(","));
    let input = format!("{doc} {doc} {doc}");

    let options = ParserOptions::new().with_max_document_size(doc.len());
    let mut de = Deserializer::with_options(options);
    de.feed(&input);
    assert!(de.error().is_none());
    assert_eq!(de.len(), 3);

    let options = ParserOptions::new().with_max_document_size(doc.len() - 1);
    let mut de = Deserializer::with_options(options);
    de.feed(&input);
    assert!(de.error().is_some());
    assert_eq!(de.len(), 0);
}

#[test]
fn test_from_reader() {
    let value = from_reader(std::io::Cursor::new(b"{\"k\": [null]}")).unwrap();
    assert_eq!(value, json!({"k": [null]}));
}

#[test]
fn test_custom_indent() {
    let value = json!({"a": {"b": [1]}});
    let text = to_string_with_options(&value, &FormatOptions::pretty().with_indent(1));
    assert_eq!(text, "{\n \"a\" : {\n  \"b\" : [\n   1\n  ]\n }\n}");
}

#[test]
fn test_btreemap_and_nested_collections() {
    let mut map = BTreeMap::new();
    map.insert("b".to_string(), vec![1u8, 2]);
    map.insert("a".to_string(), vec![]);

    let value = to_value(&map).unwrap();
    assert_eq!(to_string(&value), r#"{"a":[],"b":[1,2]}"#);
}

#[test]
fn test_type_queries() {
    let value = from_str(r#"[null, true, "s", 1, [], {}]"#).unwrap();
    let types: Vec<ValueType> = value.iter().map(Value::value_type).collect();
    assert_eq!(
        types,
        [
            ValueType::Null,
            ValueType::Boolean,
            ValueType::String,
            ValueType::Number,
            ValueType::Array,
            ValueType::Object,
        ]
    );
}

#[test]
fn test_map_collects_from_pairs() {
    let map: Map = vec![("x", Value::from(1)), ("y", Value::from(2))]
        .into_iter()
        .collect();
    let value = Value::Object(map);
    assert_eq!(to_string(&value), r#"{"x":1,"y":2}"#);
}

#[test]
fn test_wide_object() {
    let members: Vec<String> = (0..100_000).map(|i| format!("\"k{i}\":{i}")).collect();
    let text = format!("{{{}}}", members.join(","));

    let value = from_str_with_options(&text, &ParserOptions::unlimited()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 100_000);
    assert_eq!(object.get("k99999").and_then(Value::as_u64), Some(99_999));
    assert_eq!(value["k0"], 0);
}
