pub mod route;
pub mod table;
pub mod timeline;
