// Report catalogue - the four exception report kinds are fixed configuration,
// identified by stable backend ids and parameterized by enum tag everywhere else.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    MissingTrx,
    MissingBw,
    MultiTrade,
    DuplicateOrMissing,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::MissingTrx,
        ReportKind::MissingBw,
        ReportKind::MultiTrade,
        ReportKind::DuplicateOrMissing,
    ];

    /// Stable backend identifier for the report. These are fixed in the
    /// backend's configuration and never change.
    pub fn id(&self) -> &'static str {
        match self {
            ReportKind::MissingTrx => "16da88e2-2721-44ae-a0f3-5706dcde7e98",
            ReportKind::MissingBw => "24add57e-1b40-4a49-b586-ccc2dff4faad",
            ReportKind::MultiTrade => "d5cd1b59-6416-4c1d-a021-2d7f9342b49b",
            ReportKind::DuplicateOrMissing => "abc12345-duplicate-or-missing-transactions",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::MissingTrx => "Missing Transaction - TRX",
            ReportKind::MissingBw => "Missing Transaction - BW",
            ReportKind::MultiTrade => "Multi Trade",
            ReportKind::DuplicateOrMissing => "Duplicate or Missing Transactions",
        }
    }

    /// Short slug used on the command line (`recon-desk report missing-trx`).
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::MissingTrx => "missing-trx",
            ReportKind::MissingBw => "missing-bw",
            ReportKind::MultiTrade => "multi-trade",
            ReportKind::DuplicateOrMissing => "duplicate-or-missing",
        }
    }

    /// Prefix of the source spreadsheet files the importer produces for this
    /// report. Used to label import summary lines with a friendly name.
    pub fn import_file_prefix(&self) -> &'static str {
        match self {
            ReportKind::MissingTrx => "trx_agent_missing_bw_agent_match",
            ReportKind::MissingBw => "bw_agent_missing_trx_agent_match",
            ReportKind::MultiTrade => "deal_sums_mismatch",
            ReportKind::DuplicateOrMissing => "bw_ses_report",
        }
    }

    /// Display columns pulled out of each task's `data_row` payload, in
    /// table order. The payload itself is opaque; these are the keys the
    /// source system populates for each report.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ReportKind::MissingTrx => &[
                "BrokerWolfTransactionKeyNumeric",
                "Number",
                "TransactionKeyNumeric",
                "TransactionNumber",
                "Transaction2KeyNumeric",
                "Transaction2Number",
                "MemberKeyNumeric",
                "MemberFullName",
                "SourceSystemModificationTimestamp",
                "ClosePrice",
                "CloseDate",
                "StatusCode",
                "UnitsBuyer",
                "UnitsSeller",
                "IsBuyerAgent",
                "Percentage",
                "Amount",
            ],
            ReportKind::MissingBw => &[
                "BrokerWolfTransactionKeyNumeric",
                "Number",
                "TransactionKeyNumeric",
                "TransactionNumber",
                "explanation",
                "Transaction2KeyNumeric",
                "Transaction2Number",
                "MemberKeyNumeric",
                "MemberFullName",
                "SourceSystemModificationTimestamp",
                "SalesPriceVolume",
                "ActualCloseDate",
                "LifecycleStatus",
                "UnitsBuyer",
                "UnitsSeller",
                "IsBuyerAgent",
                "CoAgentPercentage",
                "NCIBAS",
            ],
            ReportKind::MultiTrade => &[
                "BrokerWolfTransactionKeyNumeric",
                "Number",
                "ErrorType",
                "MemberKeyNumeric",
                "MemberFullName",
                "SourceSystemModificationTimestamp",
                "ClosePrice",
                "CloseDate",
                "StatusCode",
                "Subtrade",
                "UnitsBuyer",
                "UnitsSeller",
                "IsBuyerAgent",
                "Percentage",
                "Amount",
            ],
            ReportKind::DuplicateOrMissing => &[
                "BrokerWolfTransactionKeyNumeric",
                "Number",
                "MemberKeyNumeric",
                "MemberFullName",
                "SourceSystemModificationTimestamp",
                "ClosePrice",
                "CloseDate",
                "StatusCode",
            ],
        }
    }

    /// Match an import result's source file name back to a report kind.
    /// File names look like `deal_sums_mismatch_2024-05-01.xlsx`.
    pub fn from_import_file(file: &str) -> Option<ReportKind> {
        let base = file.to_lowercase();
        let base = base.strip_suffix(".xlsx").unwrap_or(&base);
        ReportKind::ALL
            .into_iter()
            .find(|kind| base.starts_with(kind.import_file_prefix()))
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s || kind.id() == s)
            .ok_or_else(|| {
                format!(
                    "unknown report '{}' (expected one of: {})",
                    s,
                    ReportKind::ALL
                        .iter()
                        .map(|k| k.slug())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.slug().parse::<ReportKind>(), Ok(kind));
        }
    }

    #[test]
    fn backend_ids_parse_too() {
        assert_eq!(
            "d5cd1b59-6416-4c1d-a021-2d7f9342b49b".parse::<ReportKind>(),
            Ok(ReportKind::MultiTrade)
        );
    }

    #[test]
    fn import_files_map_back_to_kinds() {
        assert_eq!(
            ReportKind::from_import_file("bw_ses_report_2024-06-03.xlsx"),
            Some(ReportKind::DuplicateOrMissing)
        );
        assert_eq!(
            ReportKind::from_import_file("DEAL_SUMS_MISMATCH.XLSX"),
            Some(ReportKind::MultiTrade)
        );
        assert_eq!(ReportKind::from_import_file("unrelated.csv"), None);
    }
}
