#[allow(dead_code, reason = "no endpoint serves generation history yet")]
pub mod generation_history_repository;
pub mod user_repository;
