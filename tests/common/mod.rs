use aqarat::configuration::Settings;
use aqarat::startup::run;
use aqarat::storage::{MemoryStorage, Storage};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub storage: Arc<dyn Storage>,
}

/// Spawns the real server on an ephemeral port, backed by the in-memory
/// store so no database is needed.
pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let settings = Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: port,
        database: None,
    };

    let server = run(listener, storage.clone(), settings)
        .await
        .expect("Failed to start server");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        storage,
    }
}

/// Minimal valid listing payload; tests override fields as needed.
pub fn sample_property(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "location": "الرياض - حي الملقا",
        "price": 850000.0,
        "propertyType": "apartment",
        "bedrooms": 3,
        "bathrooms": 2
    })
}
