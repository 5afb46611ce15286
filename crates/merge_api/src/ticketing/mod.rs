//! Ticketing category (`ticketing/v1`).

mod client;
mod types;

pub use client::TicketingClient;

pub use types::{
    AccessLevel, Account, Attachment, AttachmentExpand, AttachmentRequest, Collection,
    CollectionExpand, CollectionType, Comment, CommentExpand, CommentRequest, Contact,
    ContactExpand, ContactRequest, Priority, Tag, Team, Ticket, TicketExpand, TicketRequest,
    TicketStatus, User, UserExpand,
};
