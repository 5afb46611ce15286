use super::types::{
    BankInfo, Benefit, Company, Employee, Employment, Group, Location, PayGroup, PayrollRun, Team,
    TimeOff, TimeOffBalance,
};

category_client! {
    /// Human resources: employees, employments, payroll and time off.
    pub struct HrisClient => "hris/v1" {
        bank_info: BankInfo => "bank-info",
        benefits: Benefit => "benefits",
        companies: Company => "companies",
        employees: Employee => "employees",
        employments: Employment => "employments",
        groups: Group => "groups",
        locations: Location => "locations",
        pay_groups: PayGroup => "pay-groups",
        payroll_runs: PayrollRun => "payroll-runs",
        teams: Team => "teams",
        time_off: TimeOff => "time-off",
        time_off_balances: TimeOffBalance => "time-off-balances",
    }
}
