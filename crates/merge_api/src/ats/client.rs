use super::types::{
    Activity, Application, Attachment, Candidate, Department, Eeoc, Job, JobInterviewStage, Offer,
    Office, RejectReason, RemoteUser, ScheduledInterview, Scorecard, Tag,
};

category_client! {
    /// Applicant tracking: candidates, jobs, applications and interviews.
    pub struct AtsClient => "ats/v1" {
        activities: Activity => "activities",
        applications: Application => "applications",
        attachments: Attachment => "attachments",
        candidates: Candidate => "candidates",
        departments: Department => "departments",
        eeocs: Eeoc => "eeocs",
        interviews: ScheduledInterview => "interviews",
        job_interview_stages: JobInterviewStage => "job-interview-stages",
        jobs: Job => "jobs",
        offers: Offer => "offers",
        offices: Office => "offices",
        reject_reasons: RejectReason => "reject-reasons",
        scorecards: Scorecard => "scorecards",
        tags: Tag => "tags",
        users: RemoteUser => "users",
    }
}
