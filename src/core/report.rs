use crate::config::OutputFormat;
use crate::core::engine::{AggregationEngine, LoadOutcome, MARKETING_DEPARTMENT, NEW_HIRE_YEARS};
use crate::domain::model::EmployeeRecord;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Knobs for the two parameterised sections of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub tenure_threshold: u32,
    pub spotlight_department: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            tenure_threshold: NEW_HIRE_YEARS,
            spotlight_department: MARKETING_DEPARTMENT.to_string(),
        }
    }
}

impl ReportSettings {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            tenure_threshold: config.tenure_threshold(),
            spotlight_department: config.spotlight_department().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarySection {
    pub total_employees: usize,
    pub total_departments: usize,
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentEmployee {
    pub department: String,
    pub employee: EmployeeRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewHireSection {
    pub threshold_years: u32,
    pub employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpotlightSection {
    pub department: String,
    /// `None` when the department does not exist.
    pub average_salary: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LongestTenureSection {
    pub years: u32,
    pub employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentLeads {
    pub department: String,
    pub leads: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentAverage {
    pub department: String,
    pub average_salary: f64,
}

/// Owned snapshot of every query the engine answers, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub summary: SummarySection,
    pub lowest_paid_by_department: Vec<DepartmentEmployee>,
    pub new_hires: NewHireSection,
    pub spotlight: SpotlightSection,
    pub longest_tenure: Option<LongestTenureSection>,
    pub lead_counts: Vec<DepartmentLeads>,
    pub average_salaries: Vec<DepartmentAverage>,
    pub diagnostics: LoadOutcome,
}

impl Report {
    pub fn from_engine(
        engine: &AggregationEngine,
        settings: &ReportSettings,
        diagnostics: LoadOutcome,
    ) -> Self {
        let summary = engine.summary();

        Self {
            generated_at: Utc::now(),
            summary: SummarySection {
                total_employees: summary.total_employees,
                total_departments: summary.total_departments,
                departments: summary
                    .department_names
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
            lowest_paid_by_department: engine
                .lowest_paid_by_department()
                .into_iter()
                .map(|(group, employee)| DepartmentEmployee {
                    department: group.name().to_string(),
                    employee: employee.clone(),
                })
                .collect(),
            new_hires: NewHireSection {
                threshold_years: settings.tenure_threshold,
                employees: engine
                    .employees_with_tenure_below(settings.tenure_threshold)
                    .into_iter()
                    .cloned()
                    .collect(),
            },
            spotlight: SpotlightSection {
                department: settings.spotlight_department.clone(),
                average_salary: engine.department_average_salary(&settings.spotlight_department),
            },
            longest_tenure: engine
                .longest_tenure_employees()
                .map(|leaders| LongestTenureSection {
                    years: leaders.years,
                    employees: leaders.employees.into_iter().cloned().collect(),
                }),
            lead_counts: engine
                .lead_count_by_department()
                .into_iter()
                .map(|(department, leads)| DepartmentLeads {
                    department: department.to_string(),
                    leads,
                })
                .collect(),
            average_salaries: engine
                .average_salary_by_department()
                .into_iter()
                .map(|(department, average_salary)| DepartmentAverage {
                    department: department.to_string(),
                    average_salary,
                })
                .collect(),
            diagnostics,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Text => {
                let mut buffer = Vec::new();
                self.write_text(&mut buffer)?;
                Ok(buffer)
            }
            OutputFormat::Json => Ok(self.to_json()?.into_bytes()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Console layout: one titled section per query, each closed by a
    /// blank line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "=== Employee Data Analysis Program ===")?;
        writeln!(out)?;

        writeln!(out, "=== Data Summary ===")?;
        writeln!(out, "Total Employees: {}", self.summary.total_employees)?;
        writeln!(out, "Total Departments: {}", self.summary.total_departments)?;
        writeln!(out, "Departments: {}", self.summary.departments.join(", "))?;
        writeln!(out)?;

        writeln!(out, "===  Lowest-Paid Employee by Department ===")?;
        for entry in &self.lowest_paid_by_department {
            writeln!(
                out,
                "Department: {} - {} (Salary: ${:.2})",
                entry.department,
                entry.employee.name(),
                entry.employee.salary()
            )?;
        }
        writeln!(out)?;

        let threshold = self.new_hires.threshold_years;
        writeln!(
            out,
            "===  Employees with Less Than {} Years of Service ===",
            threshold
        )?;
        if self.new_hires.employees.is_empty() {
            writeln!(
                out,
                "No employees found with less than {} years of service.",
                threshold
            )?;
        } else {
            for employee in &self.new_hires.employees {
                writeln!(out, "{}", employee)?;
            }
        }
        writeln!(out)?;

        let department = &self.spotlight.department;
        writeln!(out, "===  Average Salary in {} Department ===", department)?;
        match self.spotlight.average_salary {
            Some(average) => writeln!(out, "Average salary in {}: ${:.2}", department, average)?,
            None => writeln!(out, "{} department not found.", department)?,
        }
        writeln!(out)?;

        writeln!(out, "===  Employee(s) with Longest Tenure ===")?;
        match &self.longest_tenure {
            Some(section) => {
                writeln!(out, "Longest tenure: {} years", section.years)?;
                for employee in &section.employees {
                    writeln!(out, "{}", employee)?;
                }
            }
            None => writeln!(out, "No employees found.")?,
        }
        writeln!(out)?;

        writeln!(out, "===  Departments with Lead Count ===")?;
        for entry in &self.lead_counts {
            writeln!(out, "Department: {} - Leads: {}", entry.department, entry.leads)?;
        }
        writeln!(out)?;

        writeln!(out, "===  Departments with Average Salary ===")?;
        for entry in &self.average_salaries {
            writeln!(
                out,
                "Department: {} - Average Salary: ${:.2}",
                entry.department, entry.average_salary
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Analysis completed successfully!")?;
        Ok(())
    }
}
