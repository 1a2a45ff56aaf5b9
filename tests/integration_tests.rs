use pretty_assertions::assert_eq;
use sovran_typedmap::{AnyMap, AnyValue, MapError, TypedMap};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_basic_operations() {
    let mut map = TypedMap::new();

    // Store a value
    map.set("key", 42i32);

    // Check if key exists
    assert!(map.contains_key("key"));

    // Get the value untyped, then typed
    let value = map.get("key").expect("value should be present");
    assert!(value.is::<i32>());
    assert_eq!(map.get_int32("key"), (42, true));

    // Replace with entirely new value of different type
    map.set("key", "new value".to_string());

    // The old type no longer matches, the new one does
    assert_eq!(map.get_int32("key"), (0, false));
    assert_eq!(map.get_string("key"), ("new value".to_string(), true));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_multiple_types() {
    let mut map = TypedMap::new();

    // Store different types
    map.set("int", 42i32);
    map.set("string", "hello".to_string());
    map.set("float", 2.5f64);

    // Get them back
    assert_eq!(map.get_int32("int"), (42, true));
    assert_eq!(map.get_string("string"), ("hello".to_string(), true));
    assert_eq!(map.get_float64("float"), (2.5, true));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_custom_types() {
    #[derive(Debug, PartialEq)]
    struct Endpoint {
        host: String,
        port: u16,
    }

    let mut map = TypedMap::new();
    map.set(
        "endpoint",
        Endpoint {
            host: "localhost".to_string(),
            port: 8080,
        },
    );

    let endpoint = map.get_as::<Endpoint>("endpoint").expect("endpoint stored");
    assert_eq!(endpoint.port, 8080);
    assert_eq!(endpoint.host, "localhost");

    // Custom types have no generated accessor, and never match one
    assert!(!map.get_map("endpoint").1);
}

#[test]
fn test_error_handling() {
    let mut map = TypedMap::new();

    // Try to get a non-existent key
    let result = map.try_get::<i32>("nonexistent");
    assert!(matches!(result, Err(MapError::KeyNotFound(_))));

    // Store a value and try to get it with the wrong type
    map.set("key", 42i32);
    let result = map.try_get::<String>("key");
    assert!(matches!(result, Err(MapError::TypeMismatch { found: "i32", .. })));
}

#[test]
fn test_error_display() {
    let key_not_found = MapError::KeyNotFound("missing".to_string());
    let type_mismatch = MapError::TypeMismatch {
        key: "count".to_string(),
        expected: "i32",
        found: "i64",
    };

    assert_eq!(format!("{}", key_not_found), "key not found: missing");
    assert_eq!(
        format!("{}", type_mismatch),
        "type mismatch for key count: expected i32, found i64"
    );

    // Test Debug implementation
    assert!(format!("{:?}", key_not_found).contains("KeyNotFound"));
}

#[test]
fn test_error_propagation() -> Result<(), MapError> {
    let mut map = TypedMap::new();
    map.set("retries", 3i32);
    map.set("timeout", 1.5f64);

    let retries = *map.try_get::<i32>("retries")?;
    let timeout = *map.try_get::<f64>("timeout")?;

    assert_eq!(retries, 3);
    assert_eq!(timeout, 1.5);
    Ok(())
}

#[test]
fn test_empty_map_operations() {
    let map = TypedMap::new();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.get("anything").is_none());
    assert_eq!(map.type_name_of("anything"), None);
}

#[test]
fn test_default_implementation() {
    let mut map: TypedMap = Default::default();

    // Verify it works like a new map
    assert!(map.is_empty());

    map.set("test", 42i32);
    assert_eq!(map.get_int32("test"), (42, true));
}

#[test]
fn test_wrapping_existing_entries() {
    let mut entries: AnyMap = HashMap::new();
    entries.insert("name".to_string(), AnyValue::new("bob".to_string()));
    entries.insert("age".to_string(), AnyValue::new(30i64));

    let map = TypedMap::from(entries);

    assert_eq!(map.get_string("name"), ("bob".to_string(), true));
    assert_eq!(map.get_int64("age"), (30, true));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_external_locking() {
    // The map does no locking of its own; the owner supplies it
    let map = Arc::new(Mutex::new(TypedMap::new()));
    map.lock().unwrap().set("counter", 0i64);

    let mut handles = vec![];
    for _ in 0..10 {
        let map_clone = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let mut guard = map_clone.lock().unwrap();
                let (current, _) = guard.get_int64("counter");
                guard.set("counter", current + 1);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.lock().unwrap().get_int64("counter"), (1000, true));
}
