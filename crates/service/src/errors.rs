use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The statement could not run, or the result stream failed part way.
    #[error("{op}: query failed: {source}")]
    Query { op: &'static str, source: DbErr },
    /// A row came back but its columns do not fit an album.
    #[error("{op}: cannot decode row: {source}")]
    RowScan { op: &'static str, source: DbErr },
    #[error("album_by_id {id}: no such album")]
    NotFound { id: i64 },
    #[error("add_album: {source}")]
    Insert { source: DbErr },
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Self::Query { op, .. } | Self::RowScan { op, .. } => op,
            Self::NotFound { .. } => "album_by_id",
            Self::Insert { .. } => "add_album",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_operation() {
        let e = ServiceError::Query { op: "list_albums", source: DbErr::Custom("boom".into()) };
        assert!(e.to_string().starts_with("list_albums: query failed"));
        assert_eq!(e.op(), "list_albums");
        assert!(!e.is_not_found());

        let nf = ServiceError::NotFound { id: 999 };
        assert_eq!(nf.to_string(), "album_by_id 999: no such album");
        assert!(nf.is_not_found());
    }
}
