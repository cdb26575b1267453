use crate::db::connection::{apply_sql_file, init_db, Database};
use crate::errors::{ResultResp, ServerError};
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use rusqlite::params;
use std::io::Read;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A database in a temp file that is deleted when the value is dropped.
pub struct TestDb {
    db: Database,
    path: PathBuf,
}

impl TestDb {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// A fresh, empty database file in the temp dir (no schema applied).
pub fn make_bare_db() -> TestDb {
    let path = std::env::temp_dir().join(format!(
        "rental_search_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    TestDb {
        db: Database::new(path.to_string_lossy().into_owned()),
        path,
    }
}

/// Fresh database using the production schema, no listings.
pub fn make_db() -> TestDb {
    let db = make_bare_db();
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Fresh database with the demo listings from `sql/seed.sql`.
pub fn make_seeded_db() -> TestDb {
    let db = make_db();
    apply_sql_file(&db, "sql/seed.sql").expect("Failed to seed DB");
    db
}

pub fn insert_listing(
    db: &Database,
    id: i64,
    name: &str,
    price: f64,
    address: &str,
    longitude: f64,
    latitude: f64,
) {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO properties (id, name, price_per_month, property_type, address, city, longitude, latitude)
             VALUES (?1, ?2, ?3, 'Apartment', ?4, 'Testville', ?5, ?6)",
            params![id, name, price, address, longitude, latitude],
        )
        .map_err(|e| ServerError::DbError(format!("insert failed: {e}")))?;
        Ok(())
    })
    .unwrap();
}

/// Run raw SQL against a test database.
pub fn exec(db: &Database, sql: &str) {
    db.with_conn(|conn| {
        conn.execute_batch(sql)
            .map_err(|e| ServerError::DbError(format!("exec failed: {e}")))
    })
    .unwrap();
}

pub fn get(db: &Database, uri: &str) -> ResultResp {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    handle(req, db)
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Pull the first `data-map` payload out of rendered HTML.
pub fn data_map(html: &str) -> serde_json::Value {
    let start = html.find("data-map=\"").expect("no data-map attribute") + "data-map=\"".len();
    let end = start + html[start..].find('"').unwrap();
    let raw = html[start..end]
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    serde_json::from_str(&raw).unwrap()
}

/// Compare a JSON `[a, b]` pair against expected floats, allowing for SQLite's
/// text-to-REAL conversion.
pub fn assert_pair(value: &serde_json::Value, expected: [f64; 2]) {
    let got: Vec<f64> = value
        .as_array()
        .expect("not an array")
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(got.len(), 2, "{value}");
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-9, "{got:?} != {expected:?}");
    }
}
