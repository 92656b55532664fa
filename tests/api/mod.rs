use gearlocker::AppConfig;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::Value;
use tempfile::TempDir;

/// A fully assembled app backed by its own throwaway database
pub struct TestApp {
    pub client: Client,
    _temp_dir: TempDir, // Keep alive for cleanup
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let database_url = temp_dir.path().join("test.sqlite");
        let config = AppConfig::with_database(database_url.to_string_lossy());

        let rocket = gearlocker::create_rocket(config).expect("Failed to build rocket");
        let client = Client::tracked(rocket).expect("valid rocket instance");

        Self {
            client,
            _temp_dir: temp_dir,
        }
    }

    pub fn get(&self, uri: &str) -> (Status, Value) {
        let response = self.client.get(uri).dispatch();
        read(response)
    }

    pub fn post(&self, uri: &str, body: &Value) -> (Status, Value) {
        let response = self
            .client
            .post(uri)
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch();
        read(response)
    }

    pub fn put(&self, uri: &str, body: &Value) -> (Status, Value) {
        let response = self
            .client
            .put(uri)
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch();
        read(response)
    }

    pub fn delete(&self, uri: &str) -> (Status, Value) {
        let response = self.client.delete(uri).dispatch();
        read(response)
    }

    /// POSTs with a non-JSON content type
    pub fn post_plain(&self, uri: &str, body: &str) -> (Status, Value) {
        let response = self
            .client
            .post(uri)
            .header(ContentType::Plain)
            .body(body.to_string())
            .dispatch();
        read(response)
    }

    pub fn add_member(&self, name: &str, edipi: i64) -> Value {
        let (status, body) = self.post(
            "/member/add",
            &serde_json::json!({
                "name": name,
                "edipi": edipi,
                "email": format!("{edipi}@example.com"),
                "phone_num": 5550000000i64 + edipi,
            }),
        );
        assert_eq!(status, Status::Ok);
        assert!(body.is_object(), "member creation failed: {body}");
        body
    }

    pub fn add_issue(&self, member_id: i64, nsn: &str) -> Value {
        let (status, body) = self.post(
            "/issue/add",
            &serde_json::json!({
                "issue_nomenclature": "combat boot",
                "issue_size": "10W",
                "issue_nsn": nsn,
                "issue_count": 1,
                "member_id": member_id,
            }),
        );
        assert_eq!(status, Status::Ok);
        assert!(body.is_object(), "issue creation failed: {body}");
        body
    }

    pub fn add_gear(&self, nsn: &str) -> Value {
        let (status, body) = self.post("/gear/add", &gear_json(nsn));
        assert_eq!(status, Status::Ok);
        assert!(body.is_object(), "gear creation failed: {body}");
        body
    }
}

pub fn gear_json(nsn: &str) -> Value {
    serde_json::json!({
        "category": "boots",
        "nomenclature": "combat boot",
        "size": "10W",
        "nsn": nsn,
    })
}

fn read(response: rocket::local::blocking::LocalResponse<'_>) -> (Status, Value) {
    let status = response.status();
    let body = response.into_string().expect("Response body");
    let json = serde_json::from_str(&body).expect("Valid JSON");
    (status, json)
}
