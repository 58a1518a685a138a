use crate::models::{RepresentativeRecord, SelectionReport};

/// One company's output: the merged record and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupedCompany {
    pub record: RepresentativeRecord,
    pub report: SelectionReport,
}

/// The result of a deduplication run, one entry per distinct company name, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplication {
    companies: Vec<DedupedCompany>,
}

impl Deduplication {
    /// `companies` must already be sorted by company name.
    pub(crate) fn new(companies: Vec<DedupedCompany>) -> Self {
        Self { companies }
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn companies(&self) -> &[DedupedCompany] {
        &self.companies
    }

    pub fn records(&self) -> impl Iterator<Item = &RepresentativeRecord> {
        self.companies.iter().map(|company| &company.record)
    }

    pub fn reports(&self) -> impl Iterator<Item = &SelectionReport> {
        self.companies.iter().map(|company| &company.report)
    }

    /// Looks up a company's output by exact name.
    pub fn get(&self, company_name: &str) -> Option<&DedupedCompany> {
        self.companies
            .binary_search_by(|company| company.report.company_name.as_str().cmp(company_name))
            .ok()
            .map(|index| &self.companies[index])
    }

    /// Number of companies represented by an arbitrarily chosen foreign listing.
    pub fn fallback_count(&self) -> usize {
        self.reports().filter(|report| report.is_fallback()).count()
    }

    /// Total listings that could not be classified, across all companies.
    pub fn issue_count(&self) -> usize {
        self.reports().map(|report| report.issues.len()).sum()
    }

    pub fn has_issues(&self) -> bool {
        self.reports().any(SelectionReport::has_issues)
    }

    pub fn into_records(self) -> Vec<RepresentativeRecord> {
        self.companies
            .into_iter()
            .map(|company| company.record)
            .collect()
    }
}

impl IntoIterator for Deduplication {
    type Item = DedupedCompany;
    type IntoIter = std::vec::IntoIter<DedupedCompany>;

    fn into_iter(self) -> Self::IntoIter {
        self.companies.into_iter()
    }
}
