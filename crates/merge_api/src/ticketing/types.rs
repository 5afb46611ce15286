//! Ticketing common models.

use chrono::{DateTime, Utc};

use crate::model::{Downloadable, Expandable, RemoteField, Updatable, Writable, nullable_vec};

string_enum! {
    pub enum TicketStatus {
        Open => "OPEN",
        Closed => "CLOSED",
        InProgress => "IN_PROGRESS",
        OnHold => "ON_HOLD",
    }
}

string_enum! {
    pub enum Priority {
        Urgent => "URGENT",
        High => "HIGH",
        Normal => "NORMAL",
        Low => "LOW",
    }
}

string_enum! {
    pub enum CollectionType {
        List => "LIST",
        Project => "PROJECT",
    }
}

string_enum! {
    pub enum AccessLevel {
        Private => "PRIVATE",
        Company => "COMPANY",
        Public => "PUBLIC",
    }
}

string_enum! {
    pub enum AttachmentExpand {
        Ticket => "ticket",
    }
}

string_enum! {
    pub enum CollectionExpand {
        ParentCollection => "parent_collection",
    }
}

string_enum! {
    pub enum CommentExpand {
        Contact => "contact",
        Ticket => "ticket",
        User => "user",
    }
}

string_enum! {
    pub enum ContactExpand {
        Account => "account",
    }
}

string_enum! {
    pub enum TicketExpand {
        Account => "account",
        Assignees => "assignees",
        Attachments => "attachments",
        Collections => "collections",
        Contact => "contact",
        Creator => "creator",
        ParentTicket => "parent_ticket",
    }
}

string_enum! {
    pub enum UserExpand {
        Teams => "teams",
    }
}

common_model! {
    /// A customer organization.
    pub struct Account {
        pub name: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub domains: Vec<String>,
    }
}

common_model! {
    pub struct Attachment {
        pub file_name: Option<String>,
        pub ticket: Option<Expandable<Ticket>>,
        pub file_url: Option<String>,
        pub content_type: Option<String>,
        pub uploaded_by: Option<String>,
        pub remote_created_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    /// A project or list grouping tickets.
    pub struct Collection {
        pub name: Option<String>,
        pub description: Option<String>,
        pub collection_type: Option<CollectionType>,
        pub parent_collection: Option<Expandable<Collection>>,
        pub access_level: Option<AccessLevel>,
    }
}

common_model! {
    pub struct Comment {
        pub user: Option<Expandable<User>>,
        pub contact: Option<Expandable<Contact>>,
        pub body: Option<String>,
        pub html_body: Option<String>,
        pub ticket: Option<Expandable<Ticket>>,
        pub is_private: Option<bool>,
        pub remote_created_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    /// An external person who files or follows tickets.
    pub struct Contact {
        pub name: Option<String>,
        pub email_address: Option<String>,
        pub phone_number: Option<String>,
        pub details: Option<String>,
        pub account: Option<Expandable<Account>>,
    }
}

common_model! {
    pub struct Tag {
        pub name: Option<String>,
    }
}

common_model! {
    pub struct Team {
        pub name: Option<String>,
        pub description: Option<String>,
    }
}

common_model! {
    pub struct Ticket {
        pub name: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub assignees: Vec<Expandable<User>>,
        pub creator: Option<Expandable<User>>,
        pub due_date: Option<DateTime<Utc>>,
        pub status: Option<TicketStatus>,
        pub description: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub collections: Vec<Expandable<Collection>>,
        pub ticket_type: Option<String>,
        pub account: Option<Expandable<Account>>,
        pub contact: Option<Expandable<Contact>>,
        pub parent_ticket: Option<Expandable<Ticket>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub attachments: Vec<Expandable<Attachment>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub tags: Vec<String>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        pub completed_at: Option<DateTime<Utc>>,
        pub ticket_url: Option<String>,
        pub priority: Option<Priority>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    /// An agent of the ticketing system.
    pub struct User {
        pub name: Option<String>,
        pub email_address: Option<String>,
        pub is_active: Option<bool>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub teams: Vec<Expandable<Team>>,
        pub avatar: Option<String>,
    }
}

impl_model!(Account, Attachment, Collection, Comment, Contact, Tag, Team, Ticket, User);

request_model! {
    pub struct AttachmentRequest {
        pub file_name: Option<String>,
        pub ticket: Option<String>,
        pub file_url: Option<String>,
        pub content_type: Option<String>,
        pub uploaded_by: Option<String>,
    }
}

request_model! {
    pub struct CommentRequest {
        pub user: Option<String>,
        pub contact: Option<String>,
        pub body: Option<String>,
        pub html_body: Option<String>,
        pub ticket: Option<String>,
        pub is_private: Option<bool>,
    }
}

request_model! {
    pub struct ContactRequest {
        pub name: Option<String>,
        pub email_address: Option<String>,
        pub phone_number: Option<String>,
        pub details: Option<String>,
        pub account: Option<String>,
    }
}

request_model! {
    pub struct TicketRequest {
        pub name: Option<String>,
        pub assignees: Option<Vec<String>>,
        pub creator: Option<String>,
        pub due_date: Option<DateTime<Utc>>,
        pub status: Option<TicketStatus>,
        pub description: Option<String>,
        pub collections: Option<Vec<String>>,
        pub ticket_type: Option<String>,
        pub account: Option<String>,
        pub contact: Option<String>,
        pub parent_ticket: Option<String>,
        pub attachments: Option<Vec<String>>,
        pub tags: Option<Vec<String>>,
        pub completed_at: Option<DateTime<Utc>>,
        pub ticket_url: Option<String>,
        pub priority: Option<Priority>,
    }
}

impl Writable for Attachment {
    type Request = AttachmentRequest;
}

impl Downloadable for Attachment {}

impl Writable for Comment {
    type Request = CommentRequest;
}

impl Writable for Contact {
    type Request = ContactRequest;
}

impl Writable for Ticket {
    type Request = TicketRequest;
}

impl Updatable for Ticket {}
