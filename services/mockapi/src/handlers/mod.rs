pub mod load_fixture;
pub mod serve_fixture;
