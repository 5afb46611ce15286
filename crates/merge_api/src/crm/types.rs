//! CRM common models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Expandable, Ignorable, RemoteField, Updatable, Writable, nullable_vec};

// ---------- Enums ----------

string_enum! {
    pub enum AddressType {
        Billing => "BILLING",
        Shipping => "SHIPPING",
    }
}

string_enum! {
    /// Kind of engagement an engagement type describes.
    pub enum EngagementActivityType {
        Call => "CALL",
        Meeting => "MEETING",
        Email => "EMAIL",
    }
}

string_enum! {
    pub enum Direction {
        Inbound => "INBOUND",
        Outbound => "OUTBOUND",
    }
}

string_enum! {
    pub enum OpportunityStatus {
        Open => "OPEN",
        Won => "WON",
        Lost => "LOST",
    }
}

string_enum! {
    pub enum TaskStatus {
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

// ---------- Expand relations ----------

string_enum! {
    pub enum AccountExpand {
        Owner => "owner",
    }
}

string_enum! {
    pub enum ContactExpand {
        Account => "account",
        Owner => "owner",
    }
}

string_enum! {
    pub enum EngagementExpand {
        Account => "account",
        Contacts => "contacts",
        EngagementType => "engagement_type",
        Owner => "owner",
    }
}

string_enum! {
    pub enum LeadExpand {
        ConvertedAccount => "converted_account",
        ConvertedContact => "converted_contact",
        Owner => "owner",
    }
}

string_enum! {
    pub enum NoteExpand {
        Account => "account",
        Contact => "contact",
        Opportunity => "opportunity",
        Owner => "owner",
    }
}

string_enum! {
    pub enum OpportunityExpand {
        Account => "account",
        Owner => "owner",
        Stage => "stage",
    }
}

string_enum! {
    pub enum TaskExpand {
        Account => "account",
        Opportunity => "opportunity",
        Owner => "owner",
    }
}

// ---------- Nested values ----------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street_1: Option<String>,
    pub street_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub address_type: Option<AddressType>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email_address: Option<String>,
    /// Free-form label such as `Personal`.
    pub email_address_type: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub phone_number: Option<String>,
    pub phone_number_type: Option<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

// ---------- Models ----------

common_model! {
    /// A company or organization tracked in the CRM.
    pub struct Account {
        pub owner: Option<Expandable<User>>,
        pub name: Option<String>,
        pub description: Option<String>,
        pub industry: Option<String>,
        pub website: Option<String>,
        pub number_of_employees: Option<i64>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub addresses: Vec<Address>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub phone_numbers: Vec<PhoneNumber>,
        pub last_activity_at: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    pub struct Contact {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub account: Option<Expandable<Account>>,
        pub owner: Option<Expandable<User>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub addresses: Vec<Address>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub email_addresses: Vec<EmailAddress>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub phone_numbers: Vec<PhoneNumber>,
        pub last_activity_at: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    pub struct EngagementType {
        pub activity_type: Option<EngagementActivityType>,
        pub name: Option<String>,
    }
}

common_model! {
    /// A call, meeting or email with contacts.
    pub struct Engagement {
        pub owner: Option<Expandable<User>>,
        pub content: Option<String>,
        pub subject: Option<String>,
        pub direction: Option<Direction>,
        pub engagement_type: Option<Expandable<EngagementType>>,
        pub start_time: Option<DateTime<Utc>>,
        pub end_time: Option<DateTime<Utc>>,
        pub account: Option<Expandable<Account>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub contacts: Vec<Expandable<Contact>>,
    }
}

common_model! {
    pub struct Lead {
        pub owner: Option<Expandable<User>>,
        pub lead_source: Option<String>,
        pub title: Option<String>,
        pub company: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub addresses: Vec<Address>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub email_addresses: Vec<EmailAddress>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub phone_numbers: Vec<PhoneNumber>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub converted_date: Option<DateTime<Utc>>,
        pub converted_contact: Option<Expandable<Contact>>,
        pub converted_account: Option<Expandable<Account>>,
    }
}

common_model! {
    pub struct Note {
        pub owner: Option<Expandable<User>>,
        pub content: Option<String>,
        pub contact: Option<Expandable<Contact>>,
        pub account: Option<Expandable<Account>>,
        pub opportunity: Option<Expandable<Opportunity>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct Opportunity {
        pub name: Option<String>,
        pub description: Option<String>,
        pub amount: Option<i64>,
        pub owner: Option<Expandable<User>>,
        pub account: Option<Expandable<Account>>,
        pub stage: Option<Expandable<Stage>>,
        pub status: Option<OpportunityStatus>,
        pub last_activity_at: Option<DateTime<Utc>>,
        pub close_date: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    /// A step of the sales pipeline.
    pub struct Stage {
        pub name: Option<String>,
    }
}

common_model! {
    pub struct Task {
        pub subject: Option<String>,
        pub content: Option<String>,
        pub owner: Option<Expandable<User>>,
        pub account: Option<Expandable<Account>>,
        pub opportunity: Option<Expandable<Opportunity>>,
        pub completed_date: Option<DateTime<Utc>>,
        pub due_date: Option<DateTime<Utc>>,
        pub status: Option<TaskStatus>,
    }
}

common_model! {
    pub struct User {
        pub name: Option<String>,
        pub email: Option<String>,
        pub is_active: Option<bool>,
    }
}

impl_model!(
    Account,
    Contact,
    EngagementType,
    Engagement,
    Lead,
    Note,
    Opportunity,
    Stage,
    Task,
    User,
);

// ---------- Write bodies ----------

request_model! {
    pub struct AccountRequest {
        pub owner: Option<String>,
        pub name: Option<String>,
        pub description: Option<String>,
        pub industry: Option<String>,
        pub website: Option<String>,
        pub number_of_employees: Option<i64>,
        pub addresses: Option<Vec<Address>>,
        pub last_activity_at: Option<DateTime<Utc>>,
    }
}

request_model! {
    pub struct ContactRequest {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub account: Option<String>,
        pub owner: Option<String>,
        pub addresses: Option<Vec<Address>>,
        pub email_addresses: Option<Vec<EmailAddress>>,
        pub phone_numbers: Option<Vec<PhoneNumber>>,
        pub last_activity_at: Option<DateTime<Utc>>,
    }
}

request_model! {
    pub struct EngagementRequest {
        pub owner: Option<String>,
        pub content: Option<String>,
        pub subject: Option<String>,
        pub direction: Option<Direction>,
        pub engagement_type: Option<String>,
        pub start_time: Option<DateTime<Utc>>,
        pub end_time: Option<DateTime<Utc>>,
        pub account: Option<String>,
        pub contacts: Option<Vec<String>>,
    }
}

request_model! {
    pub struct LeadRequest {
        pub owner: Option<String>,
        pub lead_source: Option<String>,
        pub title: Option<String>,
        pub company: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub addresses: Option<Vec<Address>>,
        pub email_addresses: Option<Vec<EmailAddress>>,
        pub phone_numbers: Option<Vec<PhoneNumber>>,
        pub converted_date: Option<DateTime<Utc>>,
        pub converted_contact: Option<String>,
        pub converted_account: Option<String>,
    }
}

request_model! {
    pub struct NoteRequest {
        pub owner: Option<String>,
        pub content: Option<String>,
        pub contact: Option<String>,
        pub account: Option<String>,
        pub opportunity: Option<String>,
    }
}

request_model! {
    pub struct OpportunityRequest {
        pub name: Option<String>,
        pub description: Option<String>,
        pub amount: Option<i64>,
        pub owner: Option<String>,
        pub account: Option<String>,
        pub stage: Option<String>,
        pub status: Option<OpportunityStatus>,
        pub last_activity_at: Option<DateTime<Utc>>,
        pub close_date: Option<DateTime<Utc>>,
    }
}

request_model! {
    pub struct TaskRequest {
        pub subject: Option<String>,
        pub content: Option<String>,
        pub owner: Option<String>,
        pub account: Option<String>,
        pub opportunity: Option<String>,
        pub completed_date: Option<DateTime<Utc>>,
        pub due_date: Option<DateTime<Utc>>,
        pub status: Option<TaskStatus>,
    }
}

impl Writable for Account {
    type Request = AccountRequest;
}

impl Updatable for Account {}

impl Writable for Contact {
    type Request = ContactRequest;
}

impl Updatable for Contact {}

impl Ignorable for Contact {}

impl Writable for Engagement {
    type Request = EngagementRequest;
}

impl Updatable for Engagement {}

impl Writable for Lead {
    type Request = LeadRequest;
}

impl Writable for Note {
    type Request = NoteRequest;
}

impl Writable for Opportunity {
    type Request = OpportunityRequest;
}

impl Updatable for Opportunity {}

impl Writable for Task {
    type Request = TaskRequest;
}

impl Updatable for Task {}
