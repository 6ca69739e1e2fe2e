//! Domain types for the core pipeline: [`User`], [`Chat`], [`Message`] and
//! the wire-envelope types ([`Update`], [`BotIdentity`]).
//!
//! Identity types are equal and hash solely on their platform id. For [`Chat`]
//! this holds across variants: a group and a private chat with the same id
//! compare equal. That mirrors the platform contract that ids are unique
//! across chat kinds.

mod chat;
mod message;
mod update;
mod user;

pub use chat::Chat;
pub use message::{Entity, Message};
pub use update::{BotIdentity, Update};
pub use user::User;
