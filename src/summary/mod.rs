//! Summaries of the ledger: totals per day or per month drawn as bar charts.
//!
//! This module contains:
//! - The aggregate queries that group transaction amounts by date
//! - Chart generation with charming (ECharts)
//! - Route handlers for the daily and monthly summary pages

mod aggregation;
mod charts;
mod page;

pub use page::{get_daily_summary_page, get_monthly_summary_page};
