pub mod album;
pub mod db;

pub use album::{Album, NewAlbum};
