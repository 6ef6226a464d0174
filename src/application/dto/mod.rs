pub mod articles;

pub use articles::{ArticleDto, CreateArticle, UpdateArticle};
