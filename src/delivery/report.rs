//! Results report: layout, pagination and file output
//!
//! The report is laid out as lines of text on A4 pages with a 10mm margin
//! on every edge. Content that does not fit one page flows onto as many
//! further pages as needed.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use tracing::info;

use super::{ReportError, ReportRenderer};
use crate::config::defaults::{
    LINE_HEIGHT_MM, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM, REPORT_FILE_SUFFIX,
};
use crate::format::{format_currency, format_number, format_plain};
use crate::types::{Analysis, ClinicInputs};

/// Printable lines per page after top and bottom margins.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const LINES_PER_PAGE: usize = ((PAGE_HEIGHT_MM - 2.0 * PAGE_MARGIN_MM) / LINE_HEIGHT_MM) as usize;

/// Approximate monospace character width (mm).
const CHAR_WIDTH_MM: f64 = 2.1;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const CHARS_PER_LINE: usize = ((PAGE_WIDTH_MM - 2.0 * PAGE_MARGIN_MM) / CHAR_WIDTH_MM) as usize;

const PAGE_BREAK: char = '\u{000C}';

// ============================================================================
// File naming
// ============================================================================

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").expect("slug pattern is a valid regex"))
}

/// `<clinic name with every non-alphanumeric char as '_'>_Profit_Analysis`
pub fn report_file_stem(clinic_name: &str) -> String {
    format!(
        "{}{REPORT_FILE_SUFFIX}",
        unsafe_chars().replace_all(clinic_name, "_")
    )
}

// ============================================================================
// Document
// ============================================================================

/// One page of laid-out text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPage {
    pub number: usize,
    pub lines: Vec<String>,
}

/// A laid-out results report, ready to paginate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub clinic_name: String,
    pub title: String,
    lines: Vec<String>,
}

impl ReportDocument {
    pub fn new(inputs: &ClinicInputs, analysis: &Analysis, generated_at: DateTime<Utc>) -> Self {
        let mut layout = Layout::default();
        let p = &analysis.projection;
        let b = &analysis.waste_breakdown;
        let title = format!("{} - Profit Leak Analysis", inputs.clinic_name);

        layout.line(&title);
        layout.line(&format!("Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC")));
        layout.line(&format!(
            "{} clinic | {} providers | {} scenario",
            inputs.clinic_type.display_name(),
            inputs.providers,
            analysis.scenario.label
        ));

        layout.heading("PROJECTED IMPACT");
        layout.line(&format!("Additional annual revenue: {}", format_currency(p.deltas.revenue)));
        layout.line(&format!("Additional gross profit: {}", format_currency(p.deltas.gross_profit)));
        layout.line(&format!("Business valuation impact: {}", format_currency(p.valuation_impact)));
        layout.line(&format!("Additional annual visits: {}", format_number(p.deltas.visits)));

        layout.heading("CURRENT VS IMPROVED");
        for c in &analysis.comparisons {
            let line = match c.metric {
                "annual_revenue" => format!(
                    "Annual revenue: {} -> {}",
                    format_currency(c.current),
                    format_currency(c.improved)
                ),
                "gross_profit" => format!(
                    "Gross profit: {} -> {}",
                    format_currency(c.current),
                    format_currency(c.improved)
                ),
                _ => format!(
                    "Annual visits: {} -> {}",
                    format_number(c.current),
                    format_number(c.improved)
                ),
            };
            layout.line(&line);
        }
        let r = &p.improved_rates;
        layout.line(&format!(
            "Target rates: show {}%, lead-to-book {}%, package {}%, rebook {}%",
            format_plain(r.show_rate),
            format_plain(r.lead_to_book),
            format_plain(r.package_attach),
            format_plain(r.rebook_rate)
        ));

        layout.heading("WHERE YOUR PROFIT IS LEAKING");
        layout.line(&format!("No-shows: {}", format_currency(p.waste.no_show)));
        layout.line(&format!("Slow lead response: {}", format_currency(p.waste.slow_lead)));
        layout.line(&format!("Missed treatment plans: {}", format_currency(p.waste.missed_package)));
        layout.line(&format!("Missed rebooking: {}", format_currency(p.waste.missed_rebook)));
        layout.line(&format!("Total annual waste: {}", format_currency(p.waste.total)));
        layout.wrapped(
            &format!(
                "That is {} per day, {} per business hour, {} per week and {} per month.",
                format_currency(b.per_day),
                format_currency(b.per_business_hour),
                format_currency(b.per_week),
                format_currency(b.per_month)
            ),
            "",
        );
        layout.wrapped(
            &format!(
                "It could fund {} new hires, {} treatment rooms, {} marketing campaigns or {} equipment packages.",
                b.hires, b.treatment_rooms, b.marketing_campaigns, b.equipment_packages
            ),
            "",
        );

        layout.heading("PROBLEMS AND SOLUTIONS");
        for (i, problem) in analysis.problems.iter().enumerate() {
            layout.line(&format!("{}. {}", i + 1, problem.title));
            layout.wrapped(&problem.description, "   ");
            layout.wrapped(&format!("Solution: {}", problem.solution), "   ");
            for detail in &problem.details {
                layout.wrapped(&format!("- {detail}"), "     ");
            }
        }

        layout.heading("EXPECTED FIRST-YEAR OUTCOMES");
        for o in &analysis.outcomes {
            layout.line(&format!(
                "{}: {} to {} additional gross profit",
                o.package.display_name(),
                format_currency(o.low),
                format_currency(o.high)
            ));
        }

        layout.heading("YOUR INPUTS");
        layout.line(&format!("Weekly visits: {}", format_plain(inputs.visits_per_week)));
        layout.line(&format!("Revenue per visit: {}", format_currency(inputs.revenue_per_visit)));
        layout.line(&format!("Monthly leads: {}", format_plain(inputs.leads_per_month)));
        layout.line(&format!("Show rate: {}%", format_plain(inputs.current_show_rate)));
        layout.line(&format!("Lead-to-book rate: {}%", format_plain(inputs.current_lead_to_book)));
        layout.line(&format!("Package attach rate: {}%", format_plain(inputs.current_package_attach)));
        layout.line(&format!("Rebook rate: {}%", format_plain(inputs.current_rebook_rate)));

        Self {
            clinic_name: inputs.clinic_name.clone(),
            title,
            lines: layout.lines,
        }
    }

    /// File name stem the report is saved under.
    pub fn file_stem(&self) -> String {
        report_file_stem(&self.clinic_name)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Split into pages of at most [`LINES_PER_PAGE`] lines.
    pub fn pages(&self) -> Vec<ReportPage> {
        self.lines
            .chunks(LINES_PER_PAGE)
            .enumerate()
            .map(|(i, chunk)| ReportPage {
                number: i + 1,
                lines: chunk.to_vec(),
            })
            .collect()
    }

    /// Plain-text rendering with pages separated by form feeds.
    pub fn to_text(&self) -> String {
        let pages: Vec<String> = self
            .pages()
            .into_iter()
            .map(|page| {
                let mut text = page.lines.join("\n");
                text.push('\n');
                text
            })
            .collect();
        pages.join(&PAGE_BREAK.to_string())
    }
}

/// Line accumulator with word wrapping at the printable width.
#[derive(Default)]
struct Layout {
    lines: Vec<String>,
}

impl Layout {
    fn line(&mut self, text: &str) {
        self.wrapped(text, "");
    }

    fn heading(&mut self, text: &str) {
        self.lines.push(String::new());
        self.lines.push(text.to_string());
    }

    fn wrapped(&mut self, text: &str, indent: &str) {
        let width = CHARS_PER_LINE.saturating_sub(indent.len()).max(1);
        let mut current = String::new();
        for word in text.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                self.lines.push(format!("{indent}{current}"));
                current.clear();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        self.lines.push(format!("{indent}{current}"));
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Writes reports as paginated text files into a directory.
#[derive(Debug, Clone)]
pub struct TextReportRenderer {
    output_dir: PathBuf,
}

impl TextReportRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl ReportRenderer for TextReportRenderer {
    async fn render(&self, document: &ReportDocument) -> Result<PathBuf, ReportError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ReportError::CreateDir(self.output_dir.clone(), e))?;

        let path = self.output_dir.join(format!("{}.txt", document.file_stem()));
        let text = document.to_text();
        tokio::fs::write(&path, text.as_bytes())
            .await
            .map_err(|e| ReportError::Write(path.clone(), e))?;

        info!(path = %path.display(), pages = document.pages().len(), "Report saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::types::Scenario;

    fn document(name: &str) -> ReportDocument {
        let inputs = ClinicInputs {
            clinic_name: name.to_string(),
            email: "owner@clinic.example".to_string(),
            ..ClinicInputs::default()
        };
        ReportDocument::new(&inputs, &analyze(&inputs, Scenario::Expected), Utc::now())
    }

    #[test]
    fn test_a4_page_capacity() {
        assert_eq!(LINES_PER_PAGE, 46);
        assert_eq!(CHARS_PER_LINE, 90);
    }

    #[test]
    fn test_file_stem_replaces_non_alphanumerics() {
        assert_eq!(report_file_stem("Smith & Co. Physio"), "Smith___Co__Physio_Profit_Analysis");
        assert_eq!(report_file_stem("ABC123"), "ABC123_Profit_Analysis");
        assert_eq!(report_file_stem(""), "_Profit_Analysis");
        // Kelvin sign and long s case-fold into a-z but are not ASCII letters
        assert_eq!(
            report_file_stem("\u{212A}ine \u{017F}port"),
            "_ine__port_Profit_Analysis"
        );
        assert_eq!(report_file_stem("Clinique Hôtel"), "Clinique_H_tel_Profit_Analysis");
    }

    #[test]
    fn test_report_contains_key_figures() {
        let doc = document("Northside Physio");
        let text = doc.to_text();
        assert!(text.starts_with("Northside Physio - Profit Leak Analysis\n"));
        assert!(text.contains("Additional annual revenue: $232,898"));
        assert!(text.contains("Total annual waste: $167,238"));
        assert!(text.contains("1. High No-Show Rate"));
        assert!(text.contains("5. Missing Digital Infrastructure"));
        assert!(text.contains("Setup & Train: $110,859 to $158,371"));
    }

    #[test]
    fn test_pages_respect_capacity_and_keep_every_line() {
        let doc = document("Northside Physio");
        let pages = doc.pages();
        assert!(pages.len() >= 2, "full report spans more than one page");
        assert!(pages.iter().all(|p| p.lines.len() <= LINES_PER_PAGE));
        let total: usize = pages.iter().map(|p| p.lines.len()).sum();
        assert_eq!(total, doc.lines().len());
        assert_eq!(pages.last().map(|p| p.number), Some(pages.len()));
    }

    #[test]
    fn test_lines_fit_printable_width() {
        let doc = document("Northside Physio");
        for line in doc.lines() {
            let words_fit = line.split_whitespace().all(|w| w.chars().count() <= CHARS_PER_LINE);
            assert!(line.chars().count() <= CHARS_PER_LINE || !words_fit, "overlong line: {line}");
        }
    }

    #[tokio::test]
    async fn test_renderer_writes_file_before_resolving() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = TextReportRenderer::new(dir.path().join("reports"));
        let doc = document("Northside Physio");

        let path = renderer.render(&doc).await.unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("Northside_Physio_Profit_Analysis.txt")
        );
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.to_text());
        assert_eq!(written.matches(PAGE_BREAK).count(), doc.pages().len() - 1);
    }
}
