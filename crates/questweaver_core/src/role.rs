//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a message in a generation request.
///
/// # Examples
///
/// ```
/// use questweaver_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::Assistant), "Assistant");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the prompt
    User,
    /// Assistant messages are from the model
    Assistant,
}
