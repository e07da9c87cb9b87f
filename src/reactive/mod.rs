//! Plumbing between a flip card and the world around it: change flags for
//! the host, the request mailbox shared with the controller, and the
//! lifetime scope that owns deferred work.

pub mod invalidation;
pub mod mailbox;
pub mod scope;

pub use invalidation::ChangeFlags;
pub use mailbox::Mailbox;
pub use scope::{Scope, TaskId};
