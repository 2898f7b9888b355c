#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    #[error("invalid symbol")]
    InvalidSymbol,

    #[error("invalid command")]
    InvalidCommand,

    #[error("invalid arguments")]
    InvalidArguments,

    #[error("context canceled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,

    #[error("internal error")]
    Internal,
}

impl DbError {
    pub fn to_reply(&self) -> String {
        format!("[error] {self}")
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_format() {
        assert_eq!(DbError::InvalidArguments.to_reply(), "[error] invalid arguments");
        assert_eq!(DbError::Cancelled.to_reply(), "[error] context canceled");
    }
}
