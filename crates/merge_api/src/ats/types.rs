//! ATS common models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Expandable, Ignorable, RemoteField, Updatable, Writable, nullable_vec};

// ---------- Enums ----------

string_enum! {
    pub enum ActivityType {
        Note => "NOTE",
        Email => "EMAIL",
        Other => "OTHER",
    }
}

string_enum! {
    /// Who can see an activity.
    pub enum Visibility {
        AdminOnly => "ADMIN_ONLY",
        Public => "PUBLIC",
        Private => "PRIVATE",
    }
}

string_enum! {
    pub enum AttachmentType {
        Resume => "RESUME",
        CoverLetter => "COVER_LETTER",
        OfferLetter => "OFFER_LETTER",
        Other => "OTHER",
    }
}

string_enum! {
    pub enum PhoneNumberType {
        Home => "HOME",
        Work => "WORK",
        Mobile => "MOBILE",
        Skype => "SKYPE",
        Other => "OTHER",
    }
}

string_enum! {
    pub enum EmailAddressType {
        Personal => "PERSONAL",
        Work => "WORK",
        Other => "OTHER",
    }
}

string_enum! {
    pub enum UrlType {
        Personal => "PERSONAL",
        Company => "COMPANY",
        Portfolio => "PORTFOLIO",
        Blog => "BLOG",
        SocialMedia => "SOCIAL_MEDIA",
        Other => "OTHER",
        JobPosting => "JOB_POSTING",
    }
}

string_enum! {
    pub enum Race {
        AmericanIndianOrAlaskanNative => "AMERICAN_INDIAN_OR_ALASKAN_NATIVE",
        Asian => "ASIAN",
        BlackOrAfricanAmerican => "BLACK_OR_AFRICAN_AMERICAN",
        HispanicOrLatino => "HISPANIC_OR_LATINO",
        White => "WHITE",
        NativeHawaiianOrOtherPacificIslander => "NATIVE_HAWAIIAN_OR_OTHER_PACIFIC_ISLANDER",
        TwoOrMoreRaces => "TWO_OR_MORE_RACES",
        DeclineToSelfIdentify => "DECLINE_TO_SELF_IDENTIFY",
    }
}

string_enum! {
    pub enum Gender {
        Male => "MALE",
        Female => "FEMALE",
        NonBinary => "NON-BINARY",
        Other => "OTHER",
        DeclineToSelfIdentify => "DECLINE_TO_SELF_IDENTIFY",
    }
}

string_enum! {
    pub enum VeteranStatus {
        NotAProtectedVeteran => "I_AM_NOT_A_PROTECTED_VETERAN",
        ProtectedVeteran => "I_IDENTIFY_AS_ONE_OR_MORE_OF_THE_CLASSIFICATIONS_OF_A_PROTECTED_VETERAN",
        DontWishToAnswer => "I_DONT_WISH_TO_ANSWER",
    }
}

string_enum! {
    pub enum DisabilityStatus {
        HasDisability => "YES_I_HAVE_A_DISABILITY_OR_PREVIOUSLY_HAD_A_DISABILITY",
        NoDisability => "NO_I_DONT_HAVE_A_DISABILITY",
        DontWishToAnswer => "I_DONT_WISH_TO_ANSWER",
    }
}

string_enum! {
    pub enum InterviewStatus {
        Scheduled => "SCHEDULED",
        AwaitingFeedback => "AWAITING_FEEDBACK",
        Complete => "COMPLETE",
    }
}

string_enum! {
    pub enum JobStatus {
        Open => "OPEN",
        Closed => "CLOSED",
        Draft => "DRAFT",
        Archived => "ARCHIVED",
        Pending => "PENDING",
    }
}

string_enum! {
    pub enum JobType {
        Posting => "POSTING",
        Requisition => "REQUISITION",
        Profile => "PROFILE",
    }
}

string_enum! {
    pub enum OfferStatus {
        Draft => "DRAFT",
        ApprovalSent => "APPROVAL-SENT",
        Approved => "APPROVED",
        Sent => "SENT",
        SentManually => "SENT-MANUALLY",
        Opened => "OPENED",
        Denied => "DENIED",
        Signed => "SIGNED",
        Deprecated => "DEPRECATED",
    }
}

string_enum! {
    pub enum OverallRecommendation {
        DefinitelyNo => "DEFINITELY_NO",
        No => "NO",
        Yes => "YES",
        StrongYes => "STRONG_YES",
        NoDecision => "NO_DECISION",
    }
}

string_enum! {
    /// Permission level of a user in the ATS.
    pub enum AccessRole {
        SuperAdmin => "SUPER_ADMIN",
        Admin => "ADMIN",
        TeamMember => "TEAM_MEMBER",
        LimitedTeamMember => "LIMITED_TEAM_MEMBER",
        Interviewer => "INTERVIEWER",
    }
}

// ---------- Expand relations ----------

string_enum! {
    pub enum ActivityExpand {
        User => "user",
    }
}

string_enum! {
    pub enum ApplicationExpand {
        Candidate => "candidate",
        CreditedTo => "credited_to",
        CurrentStage => "current_stage",
        Job => "job",
        Offers => "offers",
        RejectReason => "reject_reason",
    }
}

string_enum! {
    pub enum CandidateExpand {
        Applications => "applications",
        Attachments => "attachments",
    }
}

string_enum! {
    pub enum EeocExpand {
        Candidate => "candidate",
    }
}

string_enum! {
    pub enum InterviewExpand {
        Application => "application",
        Interviewers => "interviewers",
        JobInterviewStage => "job_interview_stage",
        Organizer => "organizer",
    }
}

string_enum! {
    pub enum JobExpand {
        Departments => "departments",
        HiringManagers => "hiring_managers",
        Offices => "offices",
        Recruiters => "recruiters",
    }
}

string_enum! {
    pub enum JobInterviewStageExpand {
        Job => "job",
    }
}

string_enum! {
    pub enum OfferExpand {
        Application => "application",
        Creator => "creator",
    }
}

string_enum! {
    pub enum ScorecardExpand {
        Application => "application",
        Interview => "interview",
        Interviewer => "interviewer",
    }
}

// ---------- Nested values ----------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub value: Option<String>,
    pub phone_number_type: Option<PhoneNumberType>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub value: Option<String>,
    pub email_address_type: Option<EmailAddressType>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// A link attached to a candidate or job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebUrl {
    pub value: Option<String>,
    pub url_type: Option<UrlType>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

// ---------- Models ----------

common_model! {
    /// A note, email or other event on a candidate's timeline.
    pub struct Activity {
        pub user: Option<Expandable<RemoteUser>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub activity_type: Option<ActivityType>,
        pub subject: Option<String>,
        pub body: Option<String>,
        pub visibility: Option<Visibility>,
        pub candidate: Option<Expandable<Candidate>>,
    }
}

common_model! {
    /// A candidate's application to a job.
    pub struct Application {
        pub candidate: Option<Expandable<Candidate>>,
        pub job: Option<Expandable<Job>>,
        pub applied_at: Option<DateTime<Utc>>,
        pub rejected_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub offers: Vec<Expandable<Offer>>,
        pub source: Option<String>,
        pub credited_to: Option<Expandable<RemoteUser>>,
        pub current_stage: Option<Expandable<JobInterviewStage>>,
        pub reject_reason: Option<Expandable<RejectReason>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    /// A file attached to a candidate, such as a resume.
    pub struct Attachment {
        pub file_name: Option<String>,
        pub file_url: Option<String>,
        pub candidate: Option<String>,
        pub attachment_type: Option<AttachmentType>,
    }
}

common_model! {
    pub struct Candidate {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub company: Option<String>,
        pub title: Option<String>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        pub last_interaction_at: Option<DateTime<Utc>>,
        pub is_private: Option<bool>,
        pub can_email: Option<bool>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub locations: Vec<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub phone_numbers: Vec<PhoneNumber>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub email_addresses: Vec<EmailAddress>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub urls: Vec<WebUrl>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub tags: Vec<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub applications: Vec<Expandable<Application>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub attachments: Vec<Expandable<Attachment>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    pub struct Department {
        pub name: Option<String>,
    }
}

common_model! {
    /// Equal employment opportunity survey answers.
    pub struct Eeoc {
        pub candidate: Option<Expandable<Candidate>>,
        pub submitted_at: Option<DateTime<Utc>>,
        pub race: Option<Race>,
        pub gender: Option<Gender>,
        pub veteran_status: Option<VeteranStatus>,
        pub disability_status: Option<DisabilityStatus>,
    }
}

common_model! {
    pub struct ScheduledInterview {
        pub application: Option<Expandable<Application>>,
        pub job_interview_stage: Option<Expandable<JobInterviewStage>>,
        pub organizer: Option<Expandable<RemoteUser>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub interviewers: Vec<Expandable<RemoteUser>>,
        pub location: Option<String>,
        pub start_at: Option<DateTime<Utc>>,
        pub end_at: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        pub status: Option<InterviewStatus>,
    }
}

common_model! {
    /// A stage of a job's interview pipeline.
    pub struct JobInterviewStage {
        pub name: Option<String>,
        pub job: Option<Expandable<Job>>,
        pub stage_order: Option<i64>,
    }
}

common_model! {
    pub struct Job {
        pub name: Option<String>,
        pub description: Option<String>,
        pub code: Option<String>,
        pub status: Option<JobStatus>,
        #[serde(rename = "type")]
        pub job_type: Option<JobType>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub job_postings: Vec<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub job_posting_urls: Vec<WebUrl>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
        pub confidential: Option<bool>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub departments: Vec<Expandable<Department>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub offices: Vec<Expandable<Office>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub hiring_managers: Vec<Expandable<RemoteUser>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub recruiters: Vec<Expandable<RemoteUser>>,
    }
}

common_model! {
    pub struct Offer {
        pub application: Option<Expandable<Application>>,
        pub creator: Option<Expandable<RemoteUser>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub closed_at: Option<DateTime<Utc>>,
        pub sent_at: Option<DateTime<Utc>>,
        pub start_date: Option<DateTime<Utc>>,
        pub status: Option<OfferStatus>,
    }
}

common_model! {
    pub struct Office {
        pub name: Option<String>,
        pub location: Option<String>,
    }
}

common_model! {
    pub struct RejectReason {
        pub name: Option<String>,
    }
}

common_model! {
    /// An interviewer's feedback on an application.
    pub struct Scorecard {
        pub application: Option<Expandable<Application>>,
        pub interview: Option<Expandable<ScheduledInterview>>,
        pub interviewer: Option<Expandable<RemoteUser>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub submitted_at: Option<DateTime<Utc>>,
        pub overall_recommendation: Option<OverallRecommendation>,
    }
}

common_model! {
    pub struct Tag {
        pub name: Option<String>,
    }
}

common_model! {
    /// A user of the ATS, such as a recruiter or interviewer.
    pub struct RemoteUser {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub email: Option<String>,
        pub disabled: Option<bool>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub access_role: Option<AccessRole>,
    }
}

impl_model!(
    Activity,
    Application,
    Attachment,
    Candidate,
    Department,
    Eeoc,
    ScheduledInterview,
    JobInterviewStage,
    Job,
    Offer,
    Office,
    RejectReason,
    Scorecard,
    Tag,
    RemoteUser,
);

// ---------- Write bodies ----------

request_model! {
    pub struct ActivityRequest {
        pub user: Option<String>,
        pub activity_type: Option<ActivityType>,
        pub subject: Option<String>,
        pub body: Option<String>,
        pub visibility: Option<Visibility>,
        pub candidate: Option<String>,
    }
}

request_model! {
    pub struct ApplicationRequest {
        pub candidate: Option<String>,
        pub job: Option<String>,
        pub applied_at: Option<DateTime<Utc>>,
        pub rejected_at: Option<DateTime<Utc>>,
        pub offers: Option<Vec<String>>,
        pub source: Option<String>,
        pub credited_to: Option<String>,
        pub current_stage: Option<String>,
        pub reject_reason: Option<String>,
    }
}

request_model! {
    pub struct AttachmentRequest {
        pub file_name: Option<String>,
        pub file_url: Option<String>,
        pub candidate: Option<String>,
        pub attachment_type: Option<AttachmentType>,
    }
}

request_model! {
    pub struct CandidateRequest {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub company: Option<String>,
        pub title: Option<String>,
        pub last_interaction_at: Option<DateTime<Utc>>,
        pub is_private: Option<bool>,
        pub can_email: Option<bool>,
        pub locations: Option<Vec<String>>,
        pub phone_numbers: Option<Vec<PhoneNumber>>,
        pub email_addresses: Option<Vec<EmailAddress>>,
        pub urls: Option<Vec<WebUrl>>,
        pub tags: Option<Vec<String>>,
        pub applications: Option<Vec<String>>,
        pub attachments: Option<Vec<String>>,
        /// Template the third-party system uses to create the record.
        pub remote_template_id: Option<String>,
    }
}

impl Writable for Activity {
    type Request = ActivityRequest;
}

impl Writable for Application {
    type Request = ApplicationRequest;
}

impl Writable for Attachment {
    type Request = AttachmentRequest;
}

impl Writable for Candidate {
    type Request = CandidateRequest;
}

impl Updatable for Candidate {}

impl Ignorable for Candidate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn candidate_round_trip_keeps_unknown_fields() {
        let json = serde_json::json!({
            "id": "c-1",
            "remote_id": "21198",
            "first_name": "Gil",
            "last_name": "Feig",
            "email_addresses": [{ "value": "gil@example.com", "email_address_type": "PERSONAL" }],
            "phone_numbers": null,
            "applications": ["app-1", { "id": "app-2", "source": "Campus fair" }],
            "tags": ["Vip"],
            "custom_score": 42
        });
        let candidate: Candidate = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(candidate.id(), Some("c-1"));
        assert!(candidate.phone_numbers.is_empty());
        assert_eq!(
            candidate.email_addresses[0].email_address_type,
            Some(EmailAddressType::Personal)
        );
        assert_eq!(candidate.applications[0].id(), Some("app-1"));
        assert!(candidate.applications[1].is_expanded());
        assert_eq!(candidate.additional_properties()["custom_score"], 42);

        let back = serde_json::to_value(&candidate).unwrap();
        assert_eq!(back["custom_score"], 42);
        assert_eq!(back["first_name"], "Gil");
        assert_eq!(back["applications"][0], "app-1");
    }

    #[test]
    fn job_type_uses_wire_name() {
        let job: Job = serde_json::from_str(r#"{"id":"j","type":"POSTING","status":"ON_HOLD"}"#)
            .unwrap();
        assert_eq!(job.job_type, Some(JobType::Posting));
        assert_eq!(job.status, Some(JobStatus::Unknown("ON_HOLD".to_string())));
        assert!(!job.additional_properties.contains_key("type"));
    }

    #[test]
    fn offer_status_keeps_dashes() {
        let offer: Offer = serde_json::from_str(r#"{"status":"APPROVAL-SENT"}"#).unwrap();
        assert_eq!(offer.status, Some(OfferStatus::ApprovalSent));
    }

    #[test]
    fn candidate_request_skips_unset_fields() {
        let request = CandidateRequest {
            first_name: Some("Gil".into()),
            tags: Some(vec!["Vip".into()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "first_name": "Gil", "tags": ["Vip"] })
        );
    }
}
