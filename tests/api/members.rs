use super::api::*;
use rocket::http::Status;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_member_echoes_fields() {
        let app = TestApp::new();

        let (status, member) = app.post(
            "/member/add",
            &json!({
                "name": "Jane Doe",
                "edipi": 1234567890i64,
                "email": "jane@example.com",
                "phone_num": 5551234567i64
            }),
        );

        assert_eq!(status, Status::Ok);
        assert!(member["id"].as_i64().unwrap() > 0);
        assert_eq!(member["name"], "Jane Doe");
        assert_eq!(member["edipi"], 1234567890i64);
        assert_eq!(member["email"], "jane@example.com");
        assert_eq!(member["phone_num"], 5551234567i64);
        assert_eq!(member["all_issues"], json!([]));
    }

    #[test]
    fn test_add_member_requires_edipi_email_phone() {
        let app = TestApp::new();

        let (status, body) = app.post(
            "/member/add",
            &json!({"name": "Jane Doe", "email": "jane@example.com", "phone_num": 1}),
        );
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!("Error: edipi is required"));

        let (_, body) = app.post("/member/add", &json!({"edipi": 1, "phone_num": 1}));
        assert_eq!(body, json!("Error: email is required"));

        let (_, body) = app.post("/member/add", &json!({"edipi": 1, "email": "a@b.c"}));
        assert_eq!(body, json!("Error: phone_num is required"));

        let (_, members) = app.get("/member/get");
        assert_eq!(members, json!([]));
    }

    #[test]
    fn test_non_json_request_leaves_store_untouched() {
        let app = TestApp::new();

        let (status, body) = app.post_plain(
            "/member/add",
            r#"{"name":"Jane","edipi":1,"email":"a@b.c","phone_num":1}"#,
        );
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!("Error: request must be JSON"));

        let (_, members) = app.get("/member/get");
        assert_eq!(members, json!([]));
    }

    #[test]
    fn test_malformed_body_is_reported() {
        let app = TestApp::new();

        let (status, body) = app.post("/member/add", &json!({"edipi": "not a number"}));
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!("Error: request body is not valid JSON"));
    }

    #[test]
    fn test_duplicate_edipi_is_rejected() {
        let app = TestApp::new();
        app.add_member("First", 1001);

        let (status, body) = app.post(
            "/member/add",
            &json!({"name": "Second", "edipi": 1001, "email": "other@example.com", "phone_num": 42}),
        );
        assert_eq!(status, Status::Conflict);
        assert!(body["error"].as_str().unwrap().contains("UNIQUE"));

        let (_, members) = app.get("/member/get");
        assert_eq!(members.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_get_member_nests_issues() {
        let app = TestApp::new();
        let member = app.add_member("Jane Doe", 1001);
        let other = app.add_member("John Roe", 1002);
        let id = member["id"].as_i64().unwrap();

        app.add_issue(id, "8430-01-128-1234");
        app.add_issue(other["id"].as_i64().unwrap(), "8415-01-111-1111");
        app.add_issue(id, "8465-01-222-2222");

        let (status, fetched) = app.get(&format!("/member/get/{id}"));
        assert_eq!(status, Status::Ok);
        let nsns: Vec<_> = fetched["all_issues"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["issue_nsn"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(nsns, vec!["8430-01-128-1234", "8465-01-222-2222"]);

        let (_, all) = app.get("/member/get");
        assert_eq!(all.as_array().unwrap().len(), 2);
        assert_eq!(all[1]["all_issues"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_get_missing_member_is_null() {
        let app = TestApp::new();

        let (status, body) = app.get("/member/get/99");
        assert_eq!(status, Status::Ok);
        assert!(body.is_null());
    }

    #[test]
    fn test_edit_member_is_partial_and_idempotent() {
        let app = TestApp::new();
        let member = app.add_member("Jane Doe", 1001);
        let id = member["id"].as_i64().unwrap();
        let uri = format!("/member/edit/{id}");
        let patch = json!({"name": "Jane Smith", "email": null});

        let (status, first) = app.put(&uri, &patch);
        assert_eq!(status, Status::Ok);
        assert_eq!(first["name"], "Jane Smith");
        assert_eq!(first["email"], member["email"]);
        assert_eq!(first["edipi"], member["edipi"]);
        assert_eq!(first["phone_num"], member["phone_num"]);

        let (_, second) = app.put(&uri, &patch);
        assert_eq!(second, first);

        let (_, fetched) = app.get(&format!("/member/get/{id}"));
        assert_eq!(fetched, first);
    }

    #[test]
    fn test_edit_missing_member_is_not_found() {
        let app = TestApp::new();

        let (status, body) = app.put("/member/edit/42", &json!({"name": "Nobody"}));
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["error"], "Member 42 not found");
    }

    #[test]
    fn test_delete_member_removes_its_issues() {
        let app = TestApp::new();
        let member = app.add_member("Jane Doe", 1001);
        let id = member["id"].as_i64().unwrap();
        let issue = app.add_issue(id, "8430-01-128-1234");

        let (status, body) = app.delete(&format!("/member/delete/{id}"));
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!("member removed"));

        let (_, fetched) = app.get(&format!("/member/get/{id}"));
        assert!(fetched.is_null());

        let (_, fetched_issue) = app.get(&format!("/issue/get/{}", issue["id"]));
        assert!(fetched_issue.is_null());
    }

    #[test]
    fn test_delete_missing_member_is_not_found() {
        let app = TestApp::new();

        let (status, _) = app.delete("/member/delete/42");
        assert_eq!(status, Status::NotFound);
    }

    #[test]
    fn test_add_many_members() {
        let app = TestApp::new();

        let (status, created) = app.post(
            "/member/add/many",
            &json!({"members": [
                {"name": "A", "edipi": 1, "email": "a@example.com", "phone_num": 11},
                {"name": "B", "edipi": 2, "email": "b@example.com", "phone_num": 22}
            ]}),
        );
        assert_eq!(status, Status::Ok);
        let created = created.as_array().unwrap();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0]["name"], "A");
        assert_eq!(created[1]["all_issues"], json!([]));
    }

    #[test]
    fn test_add_many_members_stops_at_existing_edipi() {
        let app = TestApp::new();
        app.add_member("Existing", 2);

        let (status, body) = app.post(
            "/member/add/many",
            &json!({"members": [
                {"name": "A", "edipi": 1, "email": "a@example.com", "phone_num": 11},
                {"name": "Dup", "edipi": 2, "email": "dup@example.com", "phone_num": 22},
                {"name": "C", "edipi": 3, "email": "c@example.com", "phone_num": 33}
            ]}),
        );
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!("Error: member already exists"));

        let (_, members) = app.get("/member/get");
        let edipis: Vec<_> = members
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["edipi"].as_i64().unwrap())
            .collect();
        assert_eq!(edipis, vec![2, 1]);
    }

    #[test]
    fn test_add_many_members_requires_list() {
        let app = TestApp::new();

        let (status, body) = app.post("/member/add/many", &json!({}));
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!("Error: members is required"));
    }

    #[test]
    fn test_add_many_members_stops_at_missing_field() {
        let app = TestApp::new();

        let (status, body) = app.post(
            "/member/add/many",
            &json!({"members": [
                {"name": "A", "edipi": 1, "email": "a@example.com", "phone_num": 11},
                {"edipi": 5},
                {"name": "C", "edipi": 3, "email": "c@example.com", "phone_num": 33}
            ]}),
        );
        assert_eq!(status, Status::Ok);
        assert_eq!(body, json!("Error: email is required"));

        let (_, members) = app.get("/member/get");
        let members = members.as_array().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0]["edipi"], 1);
    }

    #[test]
    fn test_non_integer_id_gets_json_error() {
        let app = TestApp::new();

        for (status, body) in [
            app.get("/member/get/abc"),
            app.put("/member/edit/abc", &json!({"name": "X"})),
            app.delete("/member/delete/abc"),
        ] {
            assert_eq!(status, Status::UnprocessableEntity);
            assert!(body["error"].as_str().unwrap().contains("/member/"));
        }
    }

    #[test]
    fn test_unknown_route_gets_json_error() {
        let app = TestApp::new();

        let (status, body) = app.get("/member/list");
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["error"], "No route for GET /member/list");
    }
}
