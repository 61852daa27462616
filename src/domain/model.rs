use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

const LEAD_MARKERS: [&str; 2] = ["senior", "manager"];

/// One line of input split into its fields, before any parsing.
pub type RawRow = Vec<String>;

/// One employee as loaded from a data row.
///
/// Identity is the `employee_id` alone: two records carrying the same id
/// compare equal whatever their other fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    employee_id: u32,
    name: String,
    department: String,
    salary: f64,
    years_of_service: u32,
    position: String,
}

impl EmployeeRecord {
    pub fn new(
        employee_id: u32,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        years_of_service: u32,
        position: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            name: name.into(),
            department: department.into(),
            salary,
            years_of_service,
            position: position.into(),
        }
    }

    pub fn employee_id(&self) -> u32 {
        self.employee_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn years_of_service(&self) -> u32 {
        self.years_of_service
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    pub fn set_years_of_service(&mut self, years_of_service: u32) {
        self.years_of_service = years_of_service;
    }

    pub fn set_position(&mut self, position: impl Into<String>) {
        self.position = position.into();
    }

    /// Whether the position title marks a lead ("senior" or "manager",
    /// any case). Evaluated against the current position on every call.
    pub fn is_lead(&self) -> bool {
        let position = self.position.to_lowercase();
        LEAD_MARKERS.iter().any(|marker| position.contains(marker))
    }
}

impl PartialEq for EmployeeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
    }
}

impl Eq for EmployeeRecord {}

impl Hash for EmployeeRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.employee_id.hash(state);
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Department: {}, Salary: ${:.2}, Years of Service: {}, Position: {}",
            self.employee_id,
            self.name,
            self.department,
            self.salary,
            self.years_of_service,
            self.position
        )
    }
}
