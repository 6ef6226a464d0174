use crate::domain::errors::DomainError;

const CNT_ARTICLE_TIMESTAMPS: &str = "articles_timestamps_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_ARTICLE_TIMESTAMPS) {
                return DomainError::Validation("updated_at must not precede created_at".into());
            }

            match db_err.code().as_deref() {
                Some("23502") => DomainError::Validation("required column is null".into()),
                Some("23514") => DomainError::Validation("check constraint violated".into()),
                _ => DomainError::Persistence(db_err.message().to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
