//! Offline stand-ins for the chat CLI and issue tracker integrations.
//!
//! Nothing here talks to a network; replies are canned and tickets live in
//! memory.

pub mod chat;
pub mod tickets;

pub use chat::{respond, ChatReply, EXAMPLE_COMMANDS};
pub use tickets::{Ticket, TicketBoard, TicketStatus};
