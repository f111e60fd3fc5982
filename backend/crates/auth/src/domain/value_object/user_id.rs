//! User ID
//!
//! The kernel's typed UUID; its string form is the token subject.

pub use kernel::id::UserId;
