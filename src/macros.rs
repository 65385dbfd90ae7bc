/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Array elements and member values are single token trees, so negative
/// numbers and other compound expressions need parentheses: `json!([1, (-2)])`.
/// Anything that is not a literal `null`, `true`, `false`, array or object is
/// converted with `Value::from`.
///
/// ```rust
/// use json_tree::json;
///
/// let port = 8080u16;
/// let value = json!({
///     "name": "api",
///     "ports": [port, (-1)],
///     "tls": false,
///     "meta": {}
/// });
/// assert_eq!(value["ports"][0], 8080u32);
/// assert_eq!(value["ports"][1], -1);
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // a repeated key overwrites the first occurrence
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key, $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_json_macro_primitives() {
        assert_eq!(json!(null), Value::Null);
        assert_eq!(json!(true), Value::Bool(true));
        assert_eq!(json!(false), Value::Bool(false));
        assert!(json!(42).as_number().is_some_and(Number::is_int));
        assert!(json!(42u64).as_number().is_some_and(Number::is_uint));
        assert_eq!(json!(3.5), Value::Number(Number::Double(3.5)));
        assert_eq!(json!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_json_macro_arrays() {
        assert_eq!(json!([]), Value::Array(vec![]));

        let arr = json!([1, "two", [null], (-3)]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 4);
                assert_eq!(vec[0], 1);
                assert_eq!(vec[1], "two");
                assert_eq!(vec[2], Value::Array(vec![Value::Null]));
                assert_eq!(vec[3], -3);
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_json_macro_objects() {
        assert_eq!(json!({}), Value::Object(Map::new()));

        let obj = json!({
            "name": "Alice",
            "age": 30,
            "name": "Bob"
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Bob".to_string())));
                assert_eq!(map.get_index(1), Some(("age", &Value::from(30))));
            }
            _ => panic!("Expected object"),
        }
    }
}
