pub mod revocation;
pub mod token;
pub mod user;

pub use revocation::{MockRevocationCache, RevocationCache};
pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
