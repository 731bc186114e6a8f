mod postgres_document_row;
mod postgres_identity_row;

pub use postgres_document_row::PostgresDocumentRow;
pub use postgres_identity_row::IdentityRow;
