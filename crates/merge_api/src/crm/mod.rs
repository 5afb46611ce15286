//! Customer relationship management category (`crm/v1`).

mod client;
mod types;

pub use client::CrmClient;

pub use types::{
    Account, AccountExpand, AccountRequest, Address, AddressType, Contact, ContactExpand,
    ContactRequest, Direction, EmailAddress, Engagement, EngagementActivityType,
    EngagementExpand, EngagementRequest, EngagementType, Lead, LeadExpand, LeadRequest, Note,
    NoteExpand, NoteRequest, Opportunity, OpportunityExpand, OpportunityRequest,
    OpportunityStatus, PhoneNumber, Stage, Task, TaskExpand, TaskRequest, TaskStatus, User,
};
