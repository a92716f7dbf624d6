//! Bundled baseline engagement: an SAP to SuccessFactors migration plan.
//!
//! Rows are authored plan content, reproduced as written. Some headline
//! figures in the authored summaries disagree with what these tables sum to;
//! [`crate::audit::audit_plan`] reports each disagreement rather than this
//! module silently correcting the data.

use crate::config::EngagementConfig;
use crate::model::{
    Category, Milestone, MigrationObject, ModuleOverview, Task, WeeklyAllocation,
};

pub(crate) fn config() -> EngagementConfig {
    EngagementConfig::default()
}

pub(crate) fn objects() -> Vec<MigrationObject> {
    use crate::model::Category::{EmployeeData, FoundationData, PayrollData, TimeData};
    use crate::model::Complexity::{Complex, Medium, Simple, VeryComplex};

    let rows = [
        ("Bank", FoundationData, Simple, 5),
        ("Business Unit", FoundationData, Simple, 5),
        ("Business Unit - Legal Entity", FoundationData, Medium, 10),
        ("Cost Centre", FoundationData, Simple, 5),
        ("Department", FoundationData, Medium, 10),
        ("Department - Division", FoundationData, Medium, 10),
        ("Division", FoundationData, Medium, 10),
        ("Division - Business Unit", FoundationData, Medium, 10),
        ("Holiday", FoundationData, Simple, 5),
        ("Holiday Calendar", FoundationData, Simple, 5),
        ("Job Classification", FoundationData, Medium, 10),
        ("Job Classification AUS", FoundationData, Medium, 10),
        ("Job Family (Job Function)", FoundationData, Medium, 10),
        ("Job Family (Job Function) - Legal Entity", FoundationData, Medium, 10),
        ("Legal Entity (Company)", FoundationData, Simple, 5),
        ("Location", FoundationData, Medium, 10),
        ("Accrual Calculation Base (Attendances)", EmployeeData, Complex, 15),
        ("Addresses", EmployeeData, Complex, 15),
        ("Basic Import", EmployeeData, Simple, 5),
        ("Biographical Information (PersonInfo)", EmployeeData, Medium, 10),
        ("Compensation Info", EmployeeData, Simple, 5),
        ("Email Information", EmployeeData, Medium, 10),
        ("Emergency Contact", EmployeeData, Medium, 10),
        ("Employee Time (Absences)", EmployeeData, VeryComplex, 20),
        ("Employment Info", EmployeeData, Medium, 10),
        ("Global Information", EmployeeData, Medium, 10),
        ("IT0188 Tax", EmployeeData, Medium, 10),
        ("IT0220 Super", EmployeeData, Medium, 10),
        ("Job Information", EmployeeData, VeryComplex, 20),
        ("National ID Information (TFN)", EmployeeData, Simple, 5),
        ("Non Recurring Payments and Allowances", EmployeeData, Complex, 15),
        ("Payment Information", EmployeeData, Medium, 10),
        ("Payment Information - Details", EmployeeData, Complex, 15),
        ("Personal Info (Hire Date)", EmployeeData, Medium, 10),
        ("Phone Information", EmployeeData, Medium, 10),
        ("Recurring deductions - Recurring Items (Child)", EmployeeData, Complex, 15),
        ("Recurring deductions (Parent)", EmployeeData, Complex, 15),
        ("Recurring Payments and Allowances", EmployeeData, Complex, 15),
        ("Super fund code", EmployeeData, Simple, 5),
        ("Time Account (Accrual/Entitlement)", EmployeeData, Complex, 15),
        ("Work Permit details", EmployeeData, Medium, 10),
        ("Work Permit Information", EmployeeData, Medium, 10),
        ("Bank Keys (ECP)", PayrollData, Simple, 5),
        ("Cost Centre (ECP)", PayrollData, Simple, 5),
        ("DWS", PayrollData, VeryComplex, 20),
        ("GL Accounts (ECP)", PayrollData, Simple, 5),
        ("PWS", PayrollData, VeryComplex, 20),
        ("WorkSchedules (ECP) (WSR)", PayrollData, VeryComplex, 20),
        ("Super Fund (ECP)", PayrollData, Medium, 10),
        ("Tax Rules (ECP)", PayrollData, Complex, 15),
        ("Payment Methods (ECP)", PayrollData, Medium, 10),
        ("Time Account Balance", TimeData, Complex, 15),
        ("Time Off Request", TimeData, Complex, 15),
        ("Work Schedule Assignment", TimeData, Medium, 10),
        ("Absence Type", TimeData, Simple, 5),
        ("Time Recording", TimeData, Complex, 15),
        ("Work Schedule Pattern", TimeData, Medium, 10),
        ("Time Account Setup", TimeData, Medium, 10),
        ("Absence Entitlement", TimeData, Complex, 15),
        ("Time Tracking Configuration", TimeData, Medium, 10),
        ("Work Schedule Rules", TimeData, Complex, 15),
        ("Time Approval Workflow", TimeData, Medium, 10),
    ];

    rows.into_iter()
        .map(|(name, category, complexity, hours)| {
            MigrationObject::new(name, category, complexity, hours)
        })
        .collect()
}

pub(crate) fn tasks() -> Vec<Task> {
    use crate::model::Module::{
        Architecture, Deployment, EmployeeData, FoundationData, Integration, PayrollData, Setup,
        TimeData,
    };
    use crate::model::TaskKind::{
        Deployment as DeployWork, Development, Documentation, Setup as SetupWork, Testing,
    };

    let rows = [
        (1, "Project kickoff & environment setup", 10, 5, SetupWork, Setup),
        (1, "Requirements gathering & 64 objects analysis", 8, 10, Documentation, Setup),
        (1, "Schema analysis & object categorization", 7, 0, Development, Setup),
        (2, "Microservices architecture design", 15, 0, Development, Architecture),
        (2, "Interactive mapping UI development", 15, 0, Development, Architecture),
        (2, "Architecture testing & validation", 0, 10, Testing, Architecture),
        (3, "Foundation objects ETL engine (8 objects)", 20, 0, Development, FoundationData),
        (3, "Foundation objects testing & validation", 5, 15, Testing, FoundationData),
        (4, "Complete foundation objects (8 remaining)", 15, 0, Development, FoundationData),
        (4, "Foundation integration testing", 5, 10, Testing, FoundationData),
        (5, "Employee core data transformation engine", 25, 0, Development, EmployeeData),
        (5, "Employee core data testing & validation", 10, 20, Testing, EmployeeData),
        (6, "Employee complex data engine (Time, Accruals)", 30, 0, Development, EmployeeData),
        (6, "Complex employee data testing", 15, 20, Testing, EmployeeData),
        (7, "Employee financial data engine (Tax, Super, Payment)", 35, 0, Development, EmployeeData),
        (7, "Financial employee data testing", 15, 25, Testing, EmployeeData),
        (7, "Recurring payments & deductions implementation", 10, 5, Development, EmployeeData),
        (
            8,
            "Payroll data transformation (DWS, PWS, WorkSchedules ECP)",
            40,
            0,
            Development,
            PayrollData,
        ),
        (8, "Payroll data testing & validation", 15, 20, Testing, PayrollData),
        (9, "Time data integration (Absences, Time Accounts)", 25, 0, Development, TimeData),
        (9, "Work schedule integration", 15, 0, Development, TimeData),
        (9, "Time data testing & validation", 10, 20, Testing, TimeData),
        (10, "Comprehensive system testing", 20, 25, Testing, Integration),
        (10, "Performance benchmarking & optimization", 15, 5, Development, Integration),
        (10, "UAT execution & issue resolution", 20, 15, Testing, Integration),
        (11, "Complete system documentation", 15, 15, Documentation, Deployment),
        (11, "Code obfuscation & licensing system", 25, 0, Development, Deployment),
        (11, "Security testing & audit logging", 10, 20, Testing, Deployment),
        (12, "Production deployment & final validation", 25, 8, DeployWork, Deployment),
        (12, "Knowledge transfer & training materials", 20, 10, Documentation, Deployment),
    ];

    rows.into_iter()
        .map(|(week, description, lead, intern, kind, module)| {
            Task::new(week, description, lead, intern, kind, module)
        })
        .collect()
}

pub(crate) fn milestones() -> Vec<Milestone> {
    let rows = [
        (
            "M1: Architecture & Foundation",
            "W1-W4",
            100,
            50,
            25,
            vec![
                "Project Setup & Requirements Package",
                "Core Architecture & UI Framework",
                "Foundation Data Migration Engine (16 objects)",
            ],
        ),
        (
            "M2: Employee Data Core",
            "W5-W6",
            90,
            40,
            20,
            vec![
                "Employee Core Data Engine (Personal, Employment, Job Info)",
                "Employee Complex Data Engine (Time, Accruals)",
            ],
        ),
        (
            "M3: Employee Data Financial",
            "W7",
            60,
            30,
            15,
            vec![
                "Employee Financial Data Engine (Tax, Super, Payment Info)",
                "Recurring Payments & Deductions Engine",
            ],
        ),
        (
            "M4: Payroll & Time Integration",
            "W8-W9",
            80,
            40,
            20,
            vec![
                "Payroll Data Migration Engine (DWS, PWS, WorkSchedules ECP)",
                "Time Data Integration (Absences, Time Accounts, Work Schedules)",
            ],
        ),
        (
            "M5: Testing & Deployment",
            "W10-W12",
            145,
            53,
            20,
            vec![
                "Integration Testing & Performance Report",
                "UAT Execution & Documentation",
                "Security Implementation & Production Deployment",
            ],
        ),
    ];

    rows.into_iter()
        .map(
            |(name, week_range, lead_hours, intern_hours, billing_percent, deliverables)| {
                Milestone {
                    name: name.to_owned(),
                    week_range: week_range.to_owned(),
                    lead_hours,
                    intern_hours,
                    billing_percent,
                    deliverables: deliverables.into_iter().map(str::to_owned).collect(),
                }
            },
        )
        .collect()
}

pub(crate) fn module_overviews() -> Vec<ModuleOverview> {
    let rows = [
        (Category::EmployeeData, 38, "W5-W7", 380),
        (Category::FoundationData, 16, "W3-W4", 150),
        (Category::PayrollData, 9, "W8", 110),
        (Category::TimeData, 11, "W9", 135),
    ];

    rows.into_iter()
        .map(|(category, objects, weeks, effort_hours)| ModuleOverview {
            category,
            objects,
            weeks: weeks.to_owned(),
            effort_hours,
        })
        .collect()
}

pub(crate) fn allocation() -> WeeklyAllocation {
    WeeklyAllocation {
        lead: vec![40, 40, 40, 40, 40, 35, 30, 25, 20, 15, 10, 10, 10, 10],
        intern: vec![5, 5, 5, 10, 15, 15, 15, 15, 15, 15, 15, 13, 10, 10],
    }
}
