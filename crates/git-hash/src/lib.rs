//! Object identity for the git-internals reader.
//!
//! Loose objects are named by the SHA-1 of their uncompressed
//! `"<type> <size>\0<payload>"` bytes. This crate provides the [`ObjectId`]
//! type, lowercase hex encoding/decoding, and a [`hasher::Hasher`] that
//! recomputes an object's name for verification.

mod error;
pub mod hasher;
pub mod hex;
mod oid;

pub use error::HashError;
pub use oid::ObjectId;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a SHA-1 digest in hex digits.
pub const HEX_LEN: usize = DIGEST_LEN * 2;
