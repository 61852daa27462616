use crate::domain::department::DepartmentGroup;
use crate::domain::model::EmployeeRecord;
use crate::utils::error::ReportError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data rows need first name, last name, department, position, salary,
/// years of service and the lead flag.
pub const MIN_FIELDS: usize = 7;
pub const NEW_HIRE_YEARS: u32 = 4;
pub const MARKETING_DEPARTMENT: &str = "Marketing";

/// A data row that had enough fields but could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based position of the row in the input, header included.
    pub row_number: usize,
    pub row: String,
    pub reason: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error parsing line: {}", self.row)
    }
}

impl From<RowError> for ReportError {
    fn from(err: RowError) -> Self {
        ReportError::RowParseError {
            line: err.row_number,
            row: err.row,
            reason: err.reason,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadOutcome {
    pub loaded: usize,
    pub skipped_short: usize,
    pub row_errors: Vec<RowError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TenureLeaders<'a> {
    pub years: u32,
    pub employees: Vec<&'a EmployeeRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSummary<'a> {
    pub total_employees: usize,
    pub total_departments: usize,
    pub department_names: Vec<&'a str>,
}

/// Owns every loaded record and its department grouping.
///
/// Each record lives once in the flat load-order sequence and once in the
/// group for its department. Departments iterate in first-seen order.
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    employees: Vec<EmployeeRecord>,
    departments: IndexMap<String, DepartmentGroup>,
    next_id: u32,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationEngine {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            departments: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Load raw rows. The first row is a header and is always dropped.
    ///
    /// Rows shorter than [`MIN_FIELDS`] are skipped without consuming an id.
    /// Rows with enough fields consume an id before their numbers are
    /// parsed, so a row with a bad salary or tenure leaves a gap in the ids.
    /// Bad rows never abort the load; they are reported in the outcome.
    ///
    /// Years of service must be a non-negative integer: a negative value
    /// such as `-1` is a row error rather than a record.
    pub fn load<I, R>(&mut self, rows: I) -> LoadOutcome
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut outcome = LoadOutcome::default();

        for (index, row) in rows.into_iter().enumerate().skip(1) {
            let row_number = index + 1;
            let raw: Vec<String> = row.into_iter().map(|f| f.as_ref().to_string()).collect();

            if raw.len() < MIN_FIELDS {
                tracing::debug!(row_number, fields = raw.len(), "Skipping short row");
                outcome.skipped_short += 1;
                continue;
            }

            let employee_id = self.next_id;
            self.next_id += 1;

            match parse_record(employee_id, row_number, &raw) {
                Ok(record) => {
                    self.insert(record);
                    outcome.loaded += 1;
                }
                Err(err) => {
                    tracing::warn!(row_number, reason = %err.reason, "{}", err);
                    outcome.row_errors.push(err);
                }
            }
        }

        tracing::debug!(
            "Loaded {} employees into {} departments ({} short rows, {} bad rows)",
            outcome.loaded,
            self.departments.len(),
            outcome.skipped_short,
            outcome.row_errors.len()
        );

        outcome
    }

    fn insert(&mut self, record: EmployeeRecord) {
        self.departments
            .entry(record.department().to_string())
            .or_insert_with_key(|name| DepartmentGroup::new(name.clone()))
            .add_employee(record.clone());
        self.employees.push(record);
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn departments(&self) -> impl Iterator<Item = &DepartmentGroup> {
        self.departments.values()
    }

    pub fn department(&self, name: &str) -> Option<&DepartmentGroup> {
        self.departments.get(name)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn lowest_paid_by_department(&self) -> Vec<(&DepartmentGroup, &EmployeeRecord)> {
        self.departments
            .values()
            .filter_map(|group| group.lowest_paid_employee().map(|e| (group, e)))
            .collect()
    }

    pub fn employees_with_less_than_four_years(&self) -> Vec<&EmployeeRecord> {
        self.employees_with_tenure_below(NEW_HIRE_YEARS)
    }

    /// Records with strictly fewer than `years` of service, in load order.
    pub fn employees_with_tenure_below(&self, years: u32) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| e.years_of_service() < years)
            .collect()
    }

    pub fn marketing_average_salary(&self) -> Option<f64> {
        self.department_average_salary(MARKETING_DEPARTMENT)
    }

    /// Exact, case-sensitive lookup.
    pub fn department_average_salary(&self, name: &str) -> Option<f64> {
        self.departments.get(name).map(DepartmentGroup::average_salary)
    }

    /// Company-wide longest tenure, every tied record included.
    pub fn longest_tenure_employees(&self) -> Option<TenureLeaders<'_>> {
        let years = self
            .employees
            .iter()
            .map(EmployeeRecord::years_of_service)
            .max()?;

        let employees = self
            .employees
            .iter()
            .filter(|e| e.years_of_service() == years)
            .collect();

        Some(TenureLeaders { years, employees })
    }

    pub fn lead_count_by_department(&self) -> Vec<(&str, usize)> {
        self.departments
            .values()
            .map(|group| (group.name(), group.lead_count()))
            .collect()
    }

    pub fn average_salary_by_department(&self) -> Vec<(&str, f64)> {
        self.departments
            .values()
            .map(|group| (group.name(), group.average_salary()))
            .collect()
    }

    pub fn summary(&self) -> EngineSummary<'_> {
        EngineSummary {
            total_employees: self.employees.len(),
            total_departments: self.departments.len(),
            department_names: self.departments.keys().map(String::as_str).collect(),
        }
    }
}

fn parse_record(
    employee_id: u32,
    row_number: usize,
    raw: &[String],
) -> std::result::Result<EmployeeRecord, RowError> {
    let fields: Vec<&str> = raw.iter().map(|f| f.trim()).collect();
    let row_error = |reason: String| RowError {
        row_number,
        row: raw.join(","),
        reason,
    };

    let name = format!("{} {}", fields[0], fields[1]);
    let department = fields[2];
    let position = fields[3];
    let salary: f64 = fields[4]
        .parse()
        .map_err(|e| row_error(format!("invalid salary '{}': {}", fields[4], e)))?;
    let years_of_service: u32 = fields[5]
        .parse()
        .map_err(|e| row_error(format!("invalid years of service '{}': {}", fields[5], e)))?;
    // fields[6] is the lead flag; leads are derived from the position instead
    let _lead_flag = fields[6];

    Ok(EmployeeRecord::new(
        employee_id,
        name,
        department,
        salary,
        years_of_service,
        position,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const HEADER: [&str; 7] = [
        "First Name",
        "Last Name",
        "Department",
        "Position",
        "Salary",
        "Years of Service",
        "Lead",
    ];

    fn sample_rows() -> Vec<Vec<&'static str>> {
        vec![
            HEADER.to_vec(),
            vec!["Jane", "Doe", "Engineering", "Senior Engineer", "95000.00", "5", "Yes"],
            vec!["John", "Smith", "Engineering", "Engineer", "70000.00", "2", "No"],
            vec!["Mia", "Wong", "Marketing", "Marketing Manager", "80000.00", "7", "Yes"],
            vec!["Leo", "Park", "Marketing", "Analyst", "60000.00", "3", "No"],
            vec!["Ava", "Cruz", "Sales", "Rep", "50000.00", "7", "No"],
        ]
    }

    fn loaded() -> AggregationEngine {
        let mut engine = AggregationEngine::new();
        engine.load(sample_rows());
        engine
    }

    #[test]
    fn test_load_groups_by_department() {
        let mut engine = AggregationEngine::new();
        let outcome = engine.load(sample_rows());

        assert_eq!(outcome.loaded, 5);
        assert_eq!(outcome.skipped_short, 0);
        assert!(outcome.row_errors.is_empty());

        let names: Vec<&str> = engine.departments().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Engineering", "Marketing", "Sales"]);

        let ids: Vec<u32> = engine.employees().iter().map(|e| e.employee_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_load_trims_fields_and_joins_name() {
        let mut engine = AggregationEngine::new();
        engine.load(vec![
            HEADER.to_vec(),
            vec![" Jane ", " Doe", "Engineering ", " Senior Engineer ", " 95000.00 ", " 5 ", " Yes"],
        ]);

        let record = &engine.employees()[0];
        assert_eq!(record.name(), "Jane Doe");
        assert_eq!(record.department(), "Engineering");
        assert_eq!(record.position(), "Senior Engineer");
        assert_eq!(record.salary(), 95000.0);
        assert_eq!(record.years_of_service(), 5);
    }

    #[test]
    fn test_header_is_dropped_even_when_it_looks_like_data() {
        let mut engine = AggregationEngine::new();
        engine.load(vec![
            vec!["Jane", "Doe", "Engineering", "Senior Engineer", "95000.00", "5", "Yes"],
            vec!["John", "Smith", "Engineering", "Engineer", "70000.00", "2", "No"],
        ]);

        assert_eq!(engine.len(), 1);
        assert_eq!(engine.employees()[0].name(), "John Smith");
        assert_eq!(engine.employees()[0].employee_id(), 1);
    }

    #[test]
    fn test_short_row_skipped_without_consuming_id() {
        let mut engine = AggregationEngine::new();
        let outcome = engine.load(vec![
            HEADER.to_vec(),
            vec!["Jane", "Doe", "Engineering", "Senior Engineer", "95000.00", "5"],
            vec!["John", "Smith", "Engineering", "Engineer", "70000.00", "2", "No"],
        ]);

        assert_eq!(outcome.skipped_short, 1);
        assert!(outcome.row_errors.is_empty());
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.employees()[0].employee_id(), 1);
    }

    #[test]
    fn test_bad_number_skipped_but_consumes_id() {
        let mut engine = AggregationEngine::new();
        let outcome = engine.load(vec![
            HEADER.to_vec(),
            vec!["Jane", "Doe", "Engineering", "Senior Engineer", "abc", "5", "Yes"],
            vec!["Sam", "Roe", "Engineering", "Engineer", "1.0", "x", "No"],
            vec!["John", "Smith", "Engineering", "Engineer", "70000.00", "2", "No"],
        ]);

        assert_eq!(outcome.loaded, 1);
        assert_eq!(outcome.row_errors.len(), 2);
        assert_eq!(outcome.row_errors[0].row_number, 2);
        assert_eq!(
            outcome.row_errors[0].to_string(),
            "Error parsing line: Jane,Doe,Engineering,Senior Engineer,abc,5,Yes"
        );
        assert!(outcome.row_errors[1].reason.contains("years of service"));

        // both bad rows consumed an id before failing
        assert_eq!(engine.employees()[0].employee_id(), 3);
    }

    #[test]
    fn test_negative_years_is_a_parse_error() {
        let mut engine = AggregationEngine::new();
        let outcome = engine.load(vec![
            HEADER.to_vec(),
            vec!["Jane", "Doe", "Engineering", "Engineer", "1000", "-1", "No"],
        ]);
        assert_eq!(outcome.row_errors.len(), 1);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_partition_matches_flat_sequence() {
        let engine = loaded();

        let flat: HashSet<u32> = engine.employees().iter().map(|e| e.employee_id()).collect();
        let grouped: Vec<u32> = engine
            .departments()
            .flat_map(|d| d.employees().iter().map(|e| e.employee_id()))
            .collect();

        assert_eq!(grouped.len(), engine.len());
        assert_eq!(grouped.into_iter().collect::<HashSet<_>>(), flat);

        for group in engine.departments() {
            assert!(group.employees().iter().all(|e| e.department() == group.name()));
        }
    }

    #[test]
    fn test_lowest_paid_by_department() {
        let engine = loaded();
        let lowest: Vec<(&str, &str)> = engine
            .lowest_paid_by_department()
            .into_iter()
            .map(|(d, e)| (d.name(), e.name()))
            .collect();

        assert_eq!(
            lowest,
            vec![
                ("Engineering", "John Smith"),
                ("Marketing", "Leo Park"),
                ("Sales", "Ava Cruz"),
            ]
        );
    }

    #[test]
    fn test_employees_with_less_than_four_years() {
        let engine = loaded();
        let names: Vec<&str> = engine
            .employees_with_less_than_four_years()
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["John Smith", "Leo Park"]);
        assert_eq!(engine.employees_with_tenure_below(8).len(), 5);
        assert!(engine.employees_with_tenure_below(0).is_empty());
    }

    #[test]
    fn test_marketing_average_salary() {
        let engine = loaded();
        assert_eq!(engine.marketing_average_salary(), Some(70000.0));
        assert_eq!(engine.department_average_salary("marketing"), None);
    }

    #[test]
    fn test_longest_tenure_is_company_wide() {
        let engine = loaded();
        let leaders = engine.longest_tenure_employees().unwrap();
        assert_eq!(leaders.years, 7);
        let names: Vec<&str> = leaders.employees.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Mia Wong", "Ava Cruz"]);
    }

    #[test]
    fn test_per_department_statistics() {
        let engine = loaded();
        assert_eq!(
            engine.lead_count_by_department(),
            vec![("Engineering", 1), ("Marketing", 1), ("Sales", 0)]
        );
        assert_eq!(
            engine.average_salary_by_department(),
            vec![("Engineering", 82500.0), ("Marketing", 70000.0), ("Sales", 50000.0)]
        );
    }

    #[test]
    fn test_summary() {
        let engine = loaded();
        let summary = engine.summary();
        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.total_departments, 3);
        assert_eq!(summary.department_names, vec!["Engineering", "Marketing", "Sales"]);
    }

    #[test]
    fn test_queries_before_load_are_empty() {
        let engine = AggregationEngine::new();
        assert!(engine.lowest_paid_by_department().is_empty());
        assert!(engine.employees_with_less_than_four_years().is_empty());
        assert!(engine.marketing_average_salary().is_none());
        assert!(engine.longest_tenure_employees().is_none());
        assert!(engine.lead_count_by_department().is_empty());
        assert!(engine.average_salary_by_department().is_empty());
        assert_eq!(engine.summary().total_employees, 0);
    }

    #[test]
    fn test_repeated_load_keeps_ids_unique() {
        let mut engine = loaded();
        engine.load(sample_rows());
        let ids: HashSet<u32> = engine.employees().iter().map(|e| e.employee_id()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(engine.department("Engineering").unwrap().len(), 4);
    }
}
