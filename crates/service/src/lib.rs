//! Data access for the album table.
//! - `album::queries` holds the statements, one function per operation.
//! - `album::repository` puts them behind a trait so handlers can hold any store.
//! - Every failure is a [`errors::ServiceError`] naming the operation.

pub mod album;
pub mod errors;
#[cfg(test)]
pub mod test_support;

pub use album::repository::{AlbumRepository, SeaOrmAlbumRepository};
pub use errors::ServiceError;
