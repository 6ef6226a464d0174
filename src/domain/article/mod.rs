pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticlePatch};
pub use repository::{ArticleRepository, ArticleTransaction};
pub use value_objects::{ArticleId, AuthorId};
