pub mod demo;
pub mod list;
