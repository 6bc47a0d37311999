pub mod activate;
pub mod route;
