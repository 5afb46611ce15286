use super::types::{Account, Attachment, Collection, Comment, Contact, Tag, Team, Ticket, User};

category_client! {
    /// Ticketing: tickets, comments and the people working them.
    pub struct TicketingClient => "ticketing/v1" {
        accounts: Account => "accounts",
        /// Attachment contents are fetched with `download`.
        attachments: Attachment => "attachments",
        collections: Collection => "collections",
        comments: Comment => "comments",
        contacts: Contact => "contacts",
        tags: Tag => "tags",
        teams: Team => "teams",
        tickets: Ticket => "tickets",
        users: User => "users",
    }
}
