use crate::domain::model::EmployeeRecord;
use std::fmt;

/// Employees sharing one department name, kept in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentGroup {
    name: String,
    employees: Vec<EmployeeRecord>,
}

impl DepartmentGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_employee(&mut self, employee: EmployeeRecord) {
        self.employees.push(employee);
    }

    /// Read-only view of the members. Use `.to_vec()` for an owned copy.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn average_salary(&self) -> f64 {
        if self.employees.is_empty() {
            return 0.0;
        }

        let total: f64 = self.employees.iter().map(EmployeeRecord::salary).sum();
        total / self.employees.len() as f64
    }

    /// Lowest salary in the group; the earliest member wins a tie.
    pub fn lowest_paid_employee(&self) -> Option<&EmployeeRecord> {
        self.employees.iter().fold(None::<&EmployeeRecord>, |lowest, employee| match lowest {
            Some(current) if employee.salary() < current.salary() => Some(employee),
            Some(current) => Some(current),
            None => Some(employee),
        })
    }

    pub fn lead_count(&self) -> usize {
        self.employees.iter().filter(|e| e.is_lead()).count()
    }

    pub fn max_years_of_service(&self) -> Option<u32> {
        self.employees.iter().map(EmployeeRecord::years_of_service).max()
    }

    pub fn longest_tenure_employees(&self) -> Vec<&EmployeeRecord> {
        match self.max_years_of_service() {
            Some(max_years) => self
                .employees
                .iter()
                .filter(|e| e.years_of_service() == max_years)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for DepartmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Department: {}, Employees: {}", self.name, self.employees.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engineering() -> DepartmentGroup {
        let mut group = DepartmentGroup::new("Engineering");
        group.add_employee(EmployeeRecord::new(
            1,
            "Jane Doe",
            "Engineering",
            95000.0,
            5,
            "Senior Engineer",
        ));
        group.add_employee(EmployeeRecord::new(
            2,
            "John Smith",
            "Engineering",
            70000.0,
            2,
            "Engineer",
        ));
        group
    }

    #[test]
    fn test_empty_group_statistics() {
        let group = DepartmentGroup::new("Empty");
        assert!(group.is_empty());
        assert_eq!(group.average_salary(), 0.0);
        assert!(group.lowest_paid_employee().is_none());
        assert_eq!(group.lead_count(), 0);
        assert!(group.longest_tenure_employees().is_empty());
    }

    #[test]
    fn test_engineering_example() {
        let group = engineering();
        assert_eq!(group.len(), 2);
        assert!((group.average_salary() - 82500.0).abs() < 1e-9);
        assert_eq!(group.lowest_paid_employee().unwrap().name(), "John Smith");
        assert_eq!(group.lead_count(), 1);
    }

    #[test]
    fn test_lowest_paid_tie_keeps_first_member() {
        let mut group = DepartmentGroup::new("Sales");
        group.add_employee(EmployeeRecord::new(1, "A One", "Sales", 50000.0, 1, "Rep"));
        group.add_employee(EmployeeRecord::new(2, "B Two", "Sales", 40000.0, 1, "Rep"));
        group.add_employee(EmployeeRecord::new(3, "C Three", "Sales", 40000.0, 1, "Rep"));

        let lowest = group.lowest_paid_employee().unwrap();
        assert_eq!(lowest.employee_id(), 2);
    }

    #[test]
    fn test_longest_tenure_includes_all_ties() {
        let mut group = engineering();
        group.add_employee(EmployeeRecord::new(
            3,
            "Ann Lee",
            "Engineering",
            88000.0,
            5,
            "Engineer",
        ));

        let longest = group.longest_tenure_employees();
        let ids: Vec<u32> = longest.iter().map(|e| e.employee_id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(group.max_years_of_service(), Some(5));
    }

    #[test]
    fn test_employees_view_is_a_snapshot() {
        let mut group = engineering();
        let snapshot = group.employees().to_vec();
        group.add_employee(EmployeeRecord::new(9, "Late Hire", "Engineering", 1.0, 0, "Intern"));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_add_employee_does_not_deduplicate() {
        let mut group = DepartmentGroup::new("Ops");
        let record = EmployeeRecord::new(1, "Sam Roe", "Ops", 10.0, 1, "Tech");
        group.add_employee(record.clone());
        group.add_employee(record);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(engineering().to_string(), "Department: Engineering, Employees: 2");
    }
}
