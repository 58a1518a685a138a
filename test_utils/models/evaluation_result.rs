use listing_dedupe::{CompanyName, Deduplication, TickerSymbol};
use std::collections::{BTreeMap, BTreeSet};

/// Differences between a deduplication run and a fixture's expectations.
#[derive(Debug, Default)]
pub struct EvaluationResult {
    /// `(company, expected ticker, selected ticker)` for every wrong pick.
    pub wrong_selections: Vec<(CompanyName, TickerSymbol, TickerSymbol)>,
    /// Expected companies absent from the output.
    pub missing_companies: Vec<CompanyName>,
    /// Output companies the fixture does not mention.
    pub unexpected_companies: Vec<CompanyName>,
    /// Companies whose fallback status disagrees with `EXPECTED_FALLBACK:` lines.
    pub fallback_mismatches: Vec<CompanyName>,
    /// Companies whose issue status disagrees with `EXPECTED_ISSUE:` lines.
    pub issue_mismatches: Vec<CompanyName>,
}

impl EvaluationResult {
    pub fn new(
        expected_selections: &BTreeMap<CompanyName, TickerSymbol>,
        expected_fallbacks: &BTreeSet<CompanyName>,
        expected_issues: &BTreeSet<CompanyName>,
        deduplication: &Deduplication,
    ) -> Self {
        let mut evaluation_result = Self::default();

        for (company_name, expected_ticker) in expected_selections {
            match deduplication.get(company_name) {
                Some(company) if company.record.ticker() != expected_ticker => {
                    evaluation_result.wrong_selections.push((
                        company_name.clone(),
                        expected_ticker.clone(),
                        company.record.ticker().to_string(),
                    ));
                }
                Some(_) => {}
                None => evaluation_result.missing_companies.push(company_name.clone()),
            }
        }

        for report in deduplication.reports() {
            if !expected_selections.contains_key(&report.company_name) {
                evaluation_result
                    .unexpected_companies
                    .push(report.company_name.clone());
            }

            if report.is_fallback() != expected_fallbacks.contains(&report.company_name) {
                evaluation_result
                    .fallback_mismatches
                    .push(report.company_name.clone());
            }

            if report.has_issues() != expected_issues.contains(&report.company_name) {
                evaluation_result
                    .issue_mismatches
                    .push(report.company_name.clone());
            }
        }

        evaluation_result
    }

    pub fn is_success(&self) -> bool {
        self.wrong_selections.is_empty()
            && self.missing_companies.is_empty()
            && self.unexpected_companies.is_empty()
            && self.fallback_mismatches.is_empty()
            && self.issue_mismatches.is_empty()
    }
}
