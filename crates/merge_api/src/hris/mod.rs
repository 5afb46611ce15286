//! Human resources information system category (`hris/v1`).

mod client;
mod types;

pub use client::HrisClient;

pub use types::{
    BankAccountType, BankInfo, BankInfoExpand, Benefit, BenefitExpand, Company, Employee,
    EmployeeExpand, EmployeeRequest, Employment, EmploymentExpand, EmploymentStatus,
    EmploymentType, Ethnicity, FlsaStatus, Gender, Group, GroupType, LeaveType, Location,
    LocationType, MaritalStatus, PayFrequency, PayGroup, PayPeriod, PayrollRun, RunState, RunType,
    Team, TeamExpand, TimeOff, TimeOffBalance, TimeOffBalanceExpand, TimeOffExpand,
    TimeOffRequest, TimeOffStatus, Units,
};
