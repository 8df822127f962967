//! Batch services for the crop ranking precompute job

pub mod ranking_report;

pub use ranking_report::RankingReportService;
