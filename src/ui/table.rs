use crate::report::BugReport;
use crate::ui::theme;
use owo_colors::OwoColorize;
use tabled::{settings::Style, Table, Tabled};

pub const EMPTY_HEADING: &str = "No Bugs!";
pub const LIST_HEADING: &str = "Found Bugs:";

#[derive(Tabled)]
pub struct ReportRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Found")]
    pub found: String,
    #[tabled(rename = "Type")]
    pub category: String,
    #[tabled(rename = "How to replicate")]
    pub steps: String,
}

impl From<&BugReport> for ReportRow {
    fn from(report: &BugReport) -> Self {
        Self {
            id: report.id,
            found: report.created_at.clone(),
            category: report.category.clone(),
            steps: report.reproduction_steps.clone(),
        }
    }
}

/// Render reports as a table, empty string for no reports
pub fn report_table(reports: &[BugReport]) -> String {
    if reports.is_empty() {
        return String::new();
    }

    let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// The list view: a heading followed by the table
pub fn report_list(reports: &[BugReport]) -> String {
    let heading = if reports.is_empty() { EMPTY_HEADING } else { LIST_HEADING };
    let heading = heading.style(theme().heading.clone()).to_string();
    if reports.is_empty() {
        return heading;
    }
    format!("{}\n{}", heading, report_table(reports))
}
