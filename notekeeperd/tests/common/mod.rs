#![allow(dead_code)]

use std::path::Path;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use data::Note;
use notekeeperd::{build_rocket, make_figment};
use test_utils::MockHierarchy;

pub const TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

pub struct TestApp {
    pub client: Client,
    pub hierarchy: MockHierarchy,
}

pub enum Backend {
    JsonFile,
    Sqlite,
}

fn toml_path(path: &Path) -> String {
    format!("{:?}", path.display().to_string())
}

pub fn write_config(hierarchy: &MockHierarchy, backend: Backend) {
    let backend = match backend {
        Backend::JsonFile => "json_file",
        Backend::Sqlite => "sqlite",
    };
    hierarchy.write_config(&format!(
        r#"
max_title_size = 64

[storage]
backend = "{backend}"
database_path = {database_path}
notes_file = {notes_file}

[hasher_config]
argon2_m_cost = 8
argon2_t_cost = 1
argon2_p_cost = 1
pepper_path = {pepper_path}
"#,
        database_path = toml_path(&hierarchy.database_path()),
        notes_file = toml_path(&hierarchy.notes_file()),
        pepper_path = toml_path(&hierarchy.pepper_path()),
    ));
}

pub async fn try_launch(hierarchy: &MockHierarchy) -> Result<Client, rocket::Error> {
    let figment = make_figment(hierarchy.config_file())
        .merge(("template_dir", TEMPLATE_DIR))
        .merge(("log_level", "off"));
    Client::tracked(build_rocket(figment)).await
}

pub async fn launch_with(hierarchy: MockHierarchy) -> TestApp {
    let client = try_launch(&hierarchy).await.expect("rocket failed to ignite");
    TestApp { client, hierarchy }
}

pub async fn launch(backend: Backend) -> TestApp {
    let hierarchy = MockHierarchy::new();
    write_config(&hierarchy, backend);
    launch_with(hierarchy).await
}

impl TestApp {
    pub async fn get_page(&self, uri: &str) -> String {
        let response = self.client.get(uri.to_owned()).dispatch().await;
        assert_eq!(response.status(), Status::Ok, "GET {uri}");
        response.into_string().await.expect("empty page")
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> LocalResponse<'_> {
        self.client.post(uri.to_owned())
            .header(ContentType::Form)
            .body(body)
            .dispatch()
            .await
    }

    /// Follows a redirect and returns the page it leads to.
    pub async fn follow(&self, response: LocalResponse<'_>) -> (String, String) {
        let location = redirect_location(&response);
        let page = self.get_page(&location).await;
        (location, page)
    }

    pub async fn add_note(&self, title: &str, content: &str) {
        let response = self.post_form(
            "/add",
            &format!("title={title}&content={content}"),
        ).await;
        assert_eq!(redirect_location(&response), "/");
        let (_, page) = self.follow(response).await;
        assert!(page.contains("Note added."), "{page}");
    }

    pub async fn register(&self, username: &str, password: &str) -> LocalResponse<'_> {
        self.post_form(
            "/register",
            &format!("username={username}&password={password}"),
        ).await
    }

    pub async fn login(&self, username: &str, password: &str) -> LocalResponse<'_> {
        self.post_form(
            "/login",
            &format!("username={username}&password={password}"),
        ).await
    }

    pub async fn register_and_login(&self, username: &str, password: &str) {
        let response = self.register(username, password).await;
        assert_eq!(redirect_location(&response), "/login");
        let response = self.login(username, password).await;
        assert_eq!(redirect_location(&response), "/");
        let (_, page) = self.follow(response).await;
        assert!(page.contains(username), "{page}");
    }

    pub async fn logout(&self) {
        let response = self.client.get("/logout").dispatch().await;
        assert_eq!(redirect_location(&response), "/login");
    }

    pub fn stored_notes(&self) -> Vec<Note> {
        let contents = std::fs::read(self.hierarchy.notes_file())
            .expect("notes file missing");
        serde_json::from_slice(&contents).expect("notes file unparseable")
    }
}

pub fn redirect_location(response: &LocalResponse<'_>) -> String {
    assert_eq!(response.status(), Status::SeeOther);
    response.headers()
        .get_one("Location")
        .expect("redirect without location")
        .to_owned()
}

/// Asserts that `first` is rendered above `second`.
pub fn assert_before(page: &str, first: &str, second: &str) {
    let first_at = page.find(first).unwrap_or_else(|| panic!("{first} missing"));
    let second_at = page.find(second).unwrap_or_else(|| panic!("{second} missing"));
    assert!(first_at < second_at, "{first} is not above {second}");
}
