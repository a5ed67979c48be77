pub mod headers;
pub mod media;
pub mod meta;
pub mod patterns;
pub mod store;
pub mod theme_json;
pub mod writer;
