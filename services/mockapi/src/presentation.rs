//! Console rendering of fixtures. Response payloads are elided so only the
//! route table shape is shown.

use std::fmt::Write as _;

use serde_json::{Map, Value, json};

use mockapi_domain::catalog::FixtureCatalog;
use mockapi_domain::fixture::ApiFixture;

use crate::state::load_fixture_url;

/// Stands in for every stored response in rendered output.
pub const ELIDED: &str = "...";

/// Route table of `fixture` as pretty JSON with payloads elided.
pub fn render_fixture(fixture: &ApiFixture) -> String {
    let table: Map<String, Value> = fixture
        .routes()
        .map(|(path, _)| (path.to_owned(), json!({ "jsonResponse": ELIDED })))
        .collect();
    format!("{:#}", Value::Object(table))
}

/// Every fixture with its name, activation URL and elided route table.
pub fn render_catalog(catalog: &FixtureCatalog, port: u16) -> String {
    let mut out = String::new();
    for (name, fixture) in catalog.entries() {
        let _ = writeln!(out, "== Fixture {name}");
        let _ = writeln!(
            out,
            "To load this fixture click: {}",
            load_fixture_url(port, name)
        );
        let _ = writeln!(out, "{}", render_fixture(fixture));
    }
    out
}
