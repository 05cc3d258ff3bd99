pub mod auth;
pub mod image;
pub mod storage;
pub mod upload;
pub mod video;

mod router;
pub use router::get_router;
