//! Session orchestration on top of the token codecs.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
