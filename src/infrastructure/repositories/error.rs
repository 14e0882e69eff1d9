use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::PoolTimedOut => {
            DomainError::Unavailable("timed out acquiring a database connection".into())
        }
        sqlx::Error::PoolClosed => DomainError::Unavailable("connection pool is closed".into()),
        sqlx::Error::Io(io_err) => DomainError::Unavailable(format!("database i/o: {io_err}")),
        sqlx::Error::Tls(tls_err) => DomainError::Unavailable(format!("database tls: {tls_err}")),
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                // connection exceptions, insufficient resources, operator intervention
                if code.starts_with("08") || code.starts_with("53") || code.starts_with("57") {
                    return DomainError::Unavailable(db_err.message().to_string());
                }
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
