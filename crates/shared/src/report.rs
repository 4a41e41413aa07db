use chrono::NaiveDate;

use crate::models::{DigestRun, SummaryRecord};

/// Fixed text around the generated content
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    pub title: String,
    pub promo: String,
    pub section: String,
    pub sign_off: String,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            title: "tldreth".to_string(),
            promo: "Sign Up | View Online".to_string(),
            section: "Ethereum news today:".to_string(),
            sign_off: "If you have any comments or feedback, just respond to this email!\n\n\
                       Thanks for reading,\nBob Jiang"
                .to_string(),
        }
    }
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(
        template: &ReportTemplate,
        records: &[SummaryRecord],
        digest: Option<&str>,
        date: NaiveDate,
    ) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "# {} {}\n{}\n\n## {}\n",
            template.title,
            date.format("%Y-%m-%d"),
            template.promo,
            template.section
        ));

        for record in records {
            md.push_str(&format!(
                "\n[**{}**]({})\n{}\n",
                Self::escape_link_text(&record.title),
                record.url,
                record.body
            ));
        }

        if let Some(digest) = digest {
            md.push_str(&format!("\n{}\n", digest));
        }

        md.push('\n');
        md.push_str(&template.sign_off);
        md
    }

    pub fn generate_run(template: &ReportTemplate, run: &DigestRun, date: NaiveDate) -> String {
        Self::generate(template, &run.records, run.digest.as_deref(), date)
    }

    fn escape_link_text(text: &str) -> String {
        text.replace('[', "\\[").replace(']', "\\]")
    }
}
