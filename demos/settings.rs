use sovran_typedmap::{AnyArray, AnyMap, AnyValue, MapError, SemanticType, TypedMap};
use tracing_subscriber::EnvFilter;

// Settings as they might arrive from a loosely-typed source
fn load_settings() -> TypedMap {
    let mut settings = TypedMap::new();
    settings.set("app_name", "demo".to_string());
    settings.set("debug", true);
    settings.set("workers", 4i32);
    settings.set("max_upload", 10i64 * 1024 * 1024);
    // Producer bug: stored as i32 where an i64 is expected
    settings.set("cache_ttl", 300i32);

    let mut database = AnyMap::new();
    database.insert("url".to_string(), AnyValue::new("postgres://localhost".to_string()));
    database.insert("pool".to_string(), AnyValue::new(8i32));
    settings.set("database", database);

    let origins: AnyArray = vec![
        AnyValue::new("https://example.com".to_string()),
        AnyValue::new("https://example.org".to_string()),
    ];
    settings.set("origins", origins);

    settings
}

fn main() -> Result<(), MapError> {
    // RUST_LOG=trace shows every type-mismatched lookup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = load_settings();

    let (name, _) = settings.get_string("app_name");
    let (debug, _) = settings.get_bool("debug");
    let (workers, _) = settings.get_int32("workers");
    println!("{} (debug: {}, workers: {})", name, debug, workers);

    // A mismatch reads the same as a missing key
    match settings.get_int64("cache_ttl") {
        (ttl, true) => println!("Cache TTL: {}s", ttl),
        (_, false) => println!("Cache TTL not set, using default"),
    }

    // Use the discriminated lookup to find out why
    if let Err(e) = settings.try_get::<i64>("cache_ttl") {
        println!("Why: {}", e);
    }

    let (database, found) = settings.get_map("database");
    if found {
        let database = TypedMap::from(database);
        let (url, _) = database.get_string("url");
        let (pool, _) = database.get_int32("pool");
        println!("Database: {} (pool {})", url, pool);
    }

    let (origins, _) = settings.get_array("origins");
    for origin in &origins {
        if let Some(origin) = origin.downcast_ref::<String>() {
            println!("Allowed origin: {}", origin);
        }
    }

    // try_get propagates with ?
    let max_upload = settings.try_get::<i64>("max_upload")?;
    println!("Max upload: {} bytes", max_upload);

    for key in ["workers", "database", "origins"] {
        if let Some(kind) = settings.get(key).and_then(SemanticType::of) {
            println!("{} is a {}", key, kind);
        }
    }

    Ok(())
}
