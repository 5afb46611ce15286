//! HRIS common models.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::model::{Expandable, Ignorable, RemoteField, Writable, nullable_vec};

// ---------- Enums ----------

string_enum! {
    pub enum BankAccountType {
        Savings => "SAVINGS",
        Checking => "CHECKING",
    }
}

string_enum! {
    pub enum Gender {
        Male => "MALE",
        Female => "FEMALE",
        NonBinary => "NON-BINARY",
        Other => "OTHER",
        PreferNotToDisclose => "PREFER_NOT_TO_DISCLOSE",
    }
}

string_enum! {
    pub enum Ethnicity {
        AmericanIndianOrAlaskaNative => "AMERICAN_INDIAN_OR_ALASKA_NATIVE",
        AsianOrIndianSubcontinent => "ASIAN_OR_INDIAN_SUBCONTINENT",
        BlackOrAfricanAmerican => "BLACK_OR_AFRICAN_AMERICAN",
        HispanicOrLatino => "HISPANIC_OR_LATINO",
        NativeHawaiianOrOtherPacificIslander => "NATIVE_HAWAIIAN_OR_OTHER_PACIFIC_ISLANDER",
        TwoOrMoreRaces => "TWO_OR_MORE_RACES",
        White => "WHITE",
        PreferNotToDisclose => "PREFER_NOT_TO_DISCLOSE",
    }
}

string_enum! {
    /// Tax filing status.
    pub enum MaritalStatus {
        Single => "SINGLE",
        MarriedFilingJointly => "MARRIED_FILING_JOINTLY",
        MarriedFilingSeparately => "MARRIED_FILING_SEPARATELY",
        HeadOfHousehold => "HEAD_OF_HOUSEHOLD",
        QualifyingWidowOrWidowerWithDependentChild => "QUALIFYING_WIDOW_OR_WIDOWER_WITH_DEPENDENT_CHILD",
    }
}

string_enum! {
    pub enum EmploymentStatus {
        Active => "ACTIVE",
        Pending => "PENDING",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    /// Time unit `pay_rate` is expressed in.
    pub enum PayPeriod {
        Hour => "HOUR",
        Day => "DAY",
        Week => "WEEK",
        EveryTwoWeeks => "EVERY_TWO_WEEKS",
        Semimonthly => "SEMIMONTHLY",
        Month => "MONTH",
        Quarter => "QUARTER",
        EverySixMonths => "EVERY_SIX_MONTHS",
        Year => "YEAR",
    }
}

string_enum! {
    pub enum PayFrequency {
        Weekly => "WEEKLY",
        Biweekly => "BIWEEKLY",
        Monthly => "MONTHLY",
        Quarterly => "QUARTERLY",
        Semiannually => "SEMIANNUALLY",
        Annually => "ANNUALLY",
        ThirteenMonthly => "THIRTEEN-MONTHLY",
        ProRata => "PRO_RATA",
        Semimonthly => "SEMIMONTHLY",
    }
}

string_enum! {
    pub enum FlsaStatus {
        Exempt => "EXEMPT",
        SalariedNonexempt => "SALARIED_NONEXEMPT",
        Nonexempt => "NONEXEMPT",
        Owner => "OWNER",
    }
}

string_enum! {
    pub enum EmploymentType {
        FullTime => "FULL_TIME",
        PartTime => "PART_TIME",
        Intern => "INTERN",
        Contractor => "CONTRACTOR",
        Freelance => "FREELANCE",
    }
}

string_enum! {
    pub enum GroupType {
        Team => "TEAM",
        Department => "DEPARTMENT",
        CostCenter => "COST_CENTER",
        BusinessUnit => "BUSINESS_UNIT",
        Group => "GROUP",
    }
}

string_enum! {
    pub enum LocationType {
        Home => "HOME",
        Work => "WORK",
    }
}

string_enum! {
    pub enum RunState {
        Paid => "PAID",
        Draft => "DRAFT",
        Approved => "APPROVED",
        Failed => "FAILED",
        Closed => "CLOSED",
    }
}

string_enum! {
    pub enum RunType {
        Regular => "REGULAR",
        OffCycle => "OFF_CYCLE",
        Correction => "CORRECTION",
        Termination => "TERMINATION",
        SignOnBonus => "SIGN_ON_BONUS",
    }
}

string_enum! {
    pub enum TimeOffStatus {
        Requested => "REQUESTED",
        Approved => "APPROVED",
        Declined => "DECLINED",
        Cancelled => "CANCELLED",
        Deleted => "DELETED",
    }
}

string_enum! {
    pub enum Units {
        Hours => "HOURS",
        Days => "DAYS",
    }
}

string_enum! {
    /// Kind of leave, shared by time-off requests and balances.
    pub enum LeaveType {
        Vacation => "VACATION",
        Sick => "SICK",
        Personal => "PERSONAL",
        JuryDuty => "JURY_DUTY",
        Volunteer => "VOLUNTEER",
        Bereavement => "BEREAVEMENT",
    }
}

// ---------- Expand relations ----------

string_enum! {
    pub enum BankInfoExpand {
        Employee => "employee",
    }
}

string_enum! {
    pub enum BenefitExpand {
        Employee => "employee",
    }
}

string_enum! {
    pub enum EmployeeExpand {
        Company => "company",
        Employments => "employments",
        Groups => "groups",
        HomeLocation => "home_location",
        Manager => "manager",
        PayGroup => "pay_group",
        Team => "team",
        WorkLocation => "work_location",
    }
}

string_enum! {
    pub enum EmploymentExpand {
        Employee => "employee",
        PayGroup => "pay_group",
    }
}

string_enum! {
    pub enum TeamExpand {
        ParentTeam => "parent_team",
    }
}

string_enum! {
    pub enum TimeOffExpand {
        Approver => "approver",
        Employee => "employee",
    }
}

string_enum! {
    pub enum TimeOffBalanceExpand {
        Employee => "employee",
    }
}

// ---------- Models ----------

common_model! {
    /// Direct deposit account of an employee.
    pub struct BankInfo {
        pub employee: Option<Expandable<Employee>>,
        pub account_number: Option<String>,
        pub routing_number: Option<String>,
        pub bank_name: Option<String>,
        pub account_type: Option<BankAccountType>,
        pub remote_created_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct Benefit {
        pub employee: Option<Expandable<Employee>>,
        pub provider_name: Option<String>,
        pub benefit_plan_type: Option<String>,
        pub employee_contribution: Option<f64>,
        pub company_contribution: Option<f64>,
        pub start_date: Option<DateTime<Utc>>,
        pub end_date: Option<DateTime<Utc>>,
        pub employer_benefit: Option<String>,
    }
}

common_model! {
    pub struct Company {
        pub legal_name: Option<String>,
        pub display_name: Option<String>,
        /// Employer identification numbers.
        #[serde(default, deserialize_with = "nullable_vec")]
        pub eins: Vec<String>,
    }
}

common_model! {
    pub struct Employee {
        pub employee_number: Option<String>,
        pub company: Option<Expandable<Company>>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub preferred_name: Option<String>,
        pub display_full_name: Option<String>,
        pub username: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub groups: Vec<Expandable<Group>>,
        pub work_email: Option<String>,
        pub personal_email: Option<String>,
        pub mobile_phone_number: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub employments: Vec<Expandable<Employment>>,
        pub home_location: Option<Expandable<Location>>,
        pub work_location: Option<Expandable<Location>>,
        pub manager: Option<Expandable<Employee>>,
        pub team: Option<Expandable<Team>>,
        pub pay_group: Option<Expandable<PayGroup>>,
        pub ssn: Option<String>,
        pub gender: Option<Gender>,
        pub ethnicity: Option<Ethnicity>,
        pub marital_status: Option<MaritalStatus>,
        pub date_of_birth: Option<DateTime<Utc>>,
        pub hire_date: Option<DateTime<Utc>>,
        pub start_date: Option<DateTime<Utc>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub employment_status: Option<EmploymentStatus>,
        pub termination_date: Option<DateTime<Utc>>,
        pub avatar: Option<String>,
        pub custom_fields: Option<Map<String, Value>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub remote_fields: Vec<RemoteField>,
    }
}

common_model! {
    /// A position an employee holds, with its compensation.
    pub struct Employment {
        pub employee: Option<Expandable<Employee>>,
        pub job_title: Option<String>,
        pub pay_rate: Option<f64>,
        pub pay_period: Option<PayPeriod>,
        pub pay_frequency: Option<PayFrequency>,
        /// ISO 4217 currency code.
        pub pay_currency: Option<String>,
        pub pay_group: Option<Expandable<PayGroup>>,
        pub flsa_status: Option<FlsaStatus>,
        pub effective_date: Option<DateTime<Utc>>,
        pub employment_type: Option<EmploymentType>,
    }
}

common_model! {
    pub struct Group {
        pub parent_group: Option<String>,
        pub name: Option<String>,
        #[serde(rename = "type")]
        pub group_type: Option<GroupType>,
        pub is_commonly_used_as_team: Option<bool>,
    }
}

common_model! {
    pub struct Location {
        pub name: Option<String>,
        pub phone_number: Option<String>,
        pub street_1: Option<String>,
        pub street_2: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub zip_code: Option<String>,
        pub country: Option<String>,
        pub location_type: Option<LocationType>,
    }
}

common_model! {
    pub struct PayGroup {
        pub pay_group_name: Option<String>,
    }
}

common_model! {
    pub struct PayrollRun {
        pub run_state: Option<RunState>,
        pub run_type: Option<RunType>,
        pub start_date: Option<DateTime<Utc>>,
        pub end_date: Option<DateTime<Utc>>,
        pub check_date: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct Team {
        pub name: Option<String>,
        pub parent_team: Option<Expandable<Team>>,
    }
}

common_model! {
    pub struct TimeOff {
        pub employee: Option<Expandable<Employee>>,
        pub approver: Option<Expandable<Employee>>,
        pub status: Option<TimeOffStatus>,
        pub employee_note: Option<String>,
        pub units: Option<Units>,
        pub amount: Option<f64>,
        pub request_type: Option<LeaveType>,
        pub start_time: Option<DateTime<Utc>>,
        pub end_time: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct TimeOffBalance {
        pub employee: Option<Expandable<Employee>>,
        pub balance: Option<f64>,
        pub used: Option<f64>,
        pub policy_type: Option<LeaveType>,
    }
}

impl_model!(
    BankInfo,
    Benefit,
    Company,
    Employee,
    Employment,
    Group,
    Location,
    PayGroup,
    PayrollRun,
    Team,
    TimeOff,
    TimeOffBalance,
);

// ---------- Write bodies ----------

request_model! {
    pub struct EmployeeRequest {
        pub employee_number: Option<String>,
        pub company: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub preferred_name: Option<String>,
        pub display_full_name: Option<String>,
        pub username: Option<String>,
        pub groups: Option<Vec<String>>,
        pub work_email: Option<String>,
        pub personal_email: Option<String>,
        pub mobile_phone_number: Option<String>,
        pub employments: Option<Vec<String>>,
        pub home_location: Option<String>,
        pub work_location: Option<String>,
        pub manager: Option<String>,
        pub team: Option<String>,
        pub pay_group: Option<String>,
        pub ssn: Option<String>,
        pub gender: Option<Gender>,
        pub ethnicity: Option<Ethnicity>,
        pub marital_status: Option<MaritalStatus>,
        pub date_of_birth: Option<DateTime<Utc>>,
        pub hire_date: Option<DateTime<Utc>>,
        pub start_date: Option<DateTime<Utc>>,
        pub employment_status: Option<EmploymentStatus>,
        pub termination_date: Option<DateTime<Utc>>,
        pub avatar: Option<String>,
    }
}

request_model! {
    pub struct TimeOffRequest {
        pub employee: Option<String>,
        pub approver: Option<String>,
        pub status: Option<TimeOffStatus>,
        pub employee_note: Option<String>,
        pub units: Option<Units>,
        pub amount: Option<f64>,
        pub request_type: Option<LeaveType>,
        pub start_time: Option<DateTime<Utc>>,
        pub end_time: Option<DateTime<Utc>>,
    }
}

impl Writable for Employee {
    type Request = EmployeeRequest;
}

impl Ignorable for Employee {}

impl Writable for TimeOff {
    type Request = TimeOffRequest;
}
