//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fishbone_correlation::{
    AnalysisReport, AnalysisSummary, CasePattern, CategorySolutions, CorrelationReport,
    PriorityByCategory, SolutionRelationships,
};
use fishbone_domain::category::format_category_name;
use fishbone_domain::{Catalog, Category, Priority, Selection};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    category: Category,
    id: &'a str,
    cause: &'a str,
    priority: &'a str,
    group: Option<&'a str>,
    solutions: usize,
}

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    summary: &'a AnalysisSummary,
    #[serde(flatten)]
    correlation: &'a CorrelationReport,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the catalog, optionally restricted to one category.
    pub fn format_catalog(&self, catalog: &Catalog, only: Option<Category>) -> Result<String> {
        let entries: Vec<CatalogEntry> = catalog
            .iter()
            .filter(|(category, _)| only.is_none_or(|c| c == *category))
            .flat_map(|(category, causes)| {
                causes.iter().map(move |cause| CatalogEntry {
                    category,
                    id: &cause.id,
                    cause: &cause.cause,
                    priority: cause.priority_label(),
                    group: cause.group.as_deref(),
                    solutions: cause.clean_solutions().count(),
                })
            })
            .collect();

        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&entries)?);
        }
        if entries.is_empty() {
            return Ok(self.colorize("No causes found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "ID", "Cause", "Priority", "Group", "Solutions"]);
        for entry in &entries {
            builder.push_record([
                entry.category.display_name().to_string(),
                entry.id.to_string(),
                entry.cause.to_string(),
                self.priority(entry.priority),
                entry.group.unwrap_or("-").to_string(),
                entry.solutions.to_string(),
            ]);
        }
        Ok(render(builder))
    }

    /// Format the current selection.
    pub fn format_selection(&self, selection: &Selection, catalog: &Catalog) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(selection)?);
        }
        if selection.is_empty() {
            return Ok(self.colorize("No causes selected.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "ID", "Cause", "Priority"]);
        for (key, ids) in selection.iter() {
            let category = Category::parse(key);
            for id in ids {
                let cause = category.and_then(|c| catalog.find(c, id));
                let (title, priority) = match cause {
                    Some(cause) => (cause.cause.clone(), self.priority(cause.priority_label())),
                    None => (self.colorize("(not in catalog)", "yellow"), "-".to_string()),
                };
                builder.push_record([format_category_name(key), id.clone(), title, priority]);
            }
        }
        Ok(render(builder))
    }

    /// Format the correlation results of the analyze command.
    pub fn format_analysis(&self, summary: &AnalysisSummary, report: &CorrelationReport) -> Result<String> {
        if self.format == OutputFormat::Json {
            let output = AnalysisOutput {
                summary,
                correlation: report,
            };
            return Ok(serde_json::to_string_pretty(&output)?);
        }

        let sections = [
            self.summary_section(summary),
            self.priority_section(&report.priority_by_category),
            self.solutions_section(&report.top_solutions),
            self.relationships_section(&report.relationships),
            self.patterns_section(&report.case_patterns),
        ];
        Ok(sections.join("\n\n"))
    }

    /// Format the full analysis report.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }

        let mut sections = vec![
            self.colorize(&report.title.to_uppercase(), "cyan"),
            self.summary_section(&report.summary),
            self.priority_section(&report.priority_distribution),
        ];

        for detail in &report.details {
            let mut lines = vec![self.heading(&format!(
                "{} ({}): {} selected",
                detail.name, detail.category, detail.selected
            ))];
            for cause in &detail.causes {
                lines.push(format!("  {}  {} [{}]", cause.id, cause.title, self.priority(&cause.priority)));
                lines.push(format!("      {}", cause.description));
                lines.extend(cause.solutions.iter().map(|s| format!("      - {}", s)));
            }
            sections.push(lines.join("\n"));
        }

        sections.push(self.solutions_section(&report.top_solutions));
        sections.push(self.category_solutions_section(&report.solutions_by_category));
        sections.push(self.relationships_section(&report.relationships));
        sections.push(self.patterns_section(&report.case_patterns));

        if let Some(approval) = &report.approval {
            sections.push(format!(
                "{}\n  Prepared by: {}\n  Approved by: {}",
                self.heading("Approval"),
                or_dash(&approval.creator),
                or_dash(&approval.supervisor)
            ));
        }

        Ok(sections.join("\n\n"))
    }

    fn summary_section(&self, summary: &AnalysisSummary) -> String {
        format!(
            "{}\n  Total causes:    {}\n  Resolved causes: {}\n  Critical causes: {}\n  Categories:      {}",
            self.heading("Summary"),
            summary.total_causes,
            summary.resolved_causes,
            summary.critical_causes,
            summary.categories_with_causes
        )
    }

    fn priority_section(&self, distribution: &PriorityByCategory) -> String {
        let heading = self.heading("Priority by category");
        if distribution.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No resolvable causes.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "Critical", "High", "Medium", "Low", "Total"]);
        let counts_row = |name: String, counts: &fishbone_domain::PriorityCounts| {
            let mut row = vec![name];
            row.extend(Priority::ALL.iter().map(|p| counts.get(*p).to_string()));
            row.push(counts.total().to_string());
            row
        };
        for (category, counts) in distribution.iter() {
            builder.push_record(counts_row(category.display_name().to_string(), counts));
        }
        builder.push_record(counts_row("Total".to_string(), &distribution.totals()));

        format!("{}\n{}", heading, render(builder))
    }

    fn solutions_section(&self, solutions: &[String]) -> String {
        let heading = self.heading("Top solutions");
        if solutions.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No solutions.", "yellow"));
        }
        let lines: Vec<String> = solutions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("  {}. {}", i + 1, s))
            .collect();
        format!("{}\n{}", heading, lines.join("\n"))
    }

    fn category_solutions_section(&self, groups: &[CategorySolutions]) -> String {
        let heading = self.heading("Solutions by category");
        if groups.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No solutions.", "yellow"));
        }
        let lines: Vec<String> = groups
            .iter()
            .map(|g| format!("  {}: {}", g.name, g.solutions.join(", ")))
            .collect();
        format!("{}\n{}", heading, lines.join("\n"))
    }

    fn relationships_section(&self, relationships: &SolutionRelationships) -> String {
        let heading = self.heading("Solution relationships");
        if relationships.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No shared solutions.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Cause", "Shares solutions with"]);
        for (id, related) in relationships {
            let related: Vec<&str> = related.iter().map(String::as_str).collect();
            builder.push_record([id.clone(), related.join(", ")]);
        }
        format!("{}\n{}", heading, render(builder))
    }

    fn patterns_section(&self, patterns: &[CasePattern]) -> String {
        let heading = self.heading("Case patterns");
        if patterns.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No recurring keywords.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Keyword", "Count"]);
        for pattern in patterns {
            builder.push_record([pattern.keyword.clone(), pattern.count.to_string()]);
        }
        format!("{}\n{}", heading, render(builder))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Priority label colored by level.
    fn priority(&self, label: &str) -> String {
        let color = match Priority::classify(Some(label)) {
            Priority::Critical => "red",
            Priority::High => "yellow",
            Priority::Medium => "blue",
            Priority::Low => "green",
        };
        self.colorize(label, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn or_dash(name: &str) -> &str {
    if name.is_empty() {
        "-"
    } else {
        name
    }
}
