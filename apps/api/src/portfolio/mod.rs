// Portfolio core: parse -> normalize -> dedupe, plus the generation pipeline
// and HTTP handlers built on top of it.

pub mod dedup;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod validation;
