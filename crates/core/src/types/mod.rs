//! Shared newtype wrappers and enums.

pub mod bytes;
pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use bytes::ByteSize;
pub use email::{Email, EmailError};
pub use price::Price;
pub use status::{
    AdminRole, ChatRole, FileKind, FileStatus, PlanStatus, UserRole, UserStatus, WorkspaceStatus,
};
