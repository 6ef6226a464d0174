// tests/support/mocks/mod.rs
pub mod article_repo;
pub mod time;

pub use article_repo::InMemoryArticleRepo;
pub use time::{StepClock, fixed_now};
