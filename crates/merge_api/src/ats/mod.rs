//! Applicant tracking system category (`ats/v1`).
//!
//! ```ignore
//! let page = client
//!     .ats()
//!     .candidates()
//!     .list(&ListParams::new().expand([CandidateExpand::Applications]), None)
//!     .await?;
//! ```

mod client;
mod types;

pub use client::AtsClient;

pub use types::{
    AccessRole, Activity, ActivityExpand, ActivityRequest, ActivityType, Application,
    ApplicationExpand, ApplicationRequest, Attachment, AttachmentRequest, AttachmentType,
    Candidate, CandidateExpand, CandidateRequest, Department, DisabilityStatus, Eeoc, EeocExpand,
    EmailAddress, EmailAddressType, Gender, InterviewExpand, InterviewStatus, Job, JobExpand,
    JobInterviewStage, JobInterviewStageExpand, JobStatus, JobType, Offer, OfferExpand,
    OfferStatus, Office, OverallRecommendation, PhoneNumber, PhoneNumberType, Race, RejectReason,
    RemoteUser, ScheduledInterview, Scorecard, ScorecardExpand, Tag, UrlType, VeteranStatus,
    Visibility, WebUrl,
};
