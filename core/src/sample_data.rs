//! Static sample data behind the dashboard.

use crate::client_store::NewClient;
use chrono::NaiveDate;
use serde::Serialize;

/// (name, age, risk score, investment total, goal progress)
const SAMPLE_CLIENTS: [(&str, u32, f64, u64, u32); 5] = [
    ("Sarah Johnson", 42, 7.2, 425_000,   68),
    ("Robert Chen",   58, 4.3, 890_000,   82),
    ("Maria Garcia",  35, 8.1, 210_000,   45),
    ("James Wilson",  67, 3.2, 1_250_000, 94),
    ("Aisha Patel",   29, 9.0, 125_000,   35),
];

/// Seed clients, in the order they receive ids 1..=5.
pub fn sample_clients() -> Vec<NewClient> {
    SAMPLE_CLIENTS
        .iter()
        .map(|&(name, age, risk_score, investment_total, goal_progress)| NewClient {
            name: name.to_string(),
            age,
            risk_score,
            investment_total,
            goal_progress,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PerformancePoint {
    pub month:     &'static str,
    pub portfolio: f64,
    pub benchmark: f64,
}

/// Monthly returns in percent, client portfolio vs benchmark.
pub const PERFORMANCE: [PerformancePoint; 6] = [
    PerformancePoint { month: "Jan", portfolio: 5.2,  benchmark: 4.8 },
    PerformancePoint { month: "Feb", portfolio: 3.1,  benchmark: 2.7 },
    PerformancePoint { month: "Mar", portfolio: -1.2, benchmark: -2.1 },
    PerformancePoint { month: "Apr", portfolio: 2.8,  benchmark: 2.4 },
    PerformancePoint { month: "May", portfolio: 1.9,  benchmark: 1.5 },
    PerformancePoint { month: "Jun", portfolio: 4.5,  benchmark: 3.8 },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PortfolioSlice {
    pub name:  &'static str,
    pub value: u32,
}

pub const MODEL_PORTFOLIO: [PortfolioSlice; 5] = [
    PortfolioSlice { name: "US Stocks",    value: 45 },
    PortfolioSlice { name: "Int'l Stocks", value: 25 },
    PortfolioSlice { name: "Bonds",        value: 20 },
    PortfolioSlice { name: "Alternatives", value: 7 },
    PortfolioSlice { name: "Cash",         value: 3 },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Approved,
    Pending,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecentRecommendation {
    pub client: &'static str,
    pub date:   NaiveDate,
    pub kind:   &'static str,
    pub status: ReviewStatus,
}

const RECENT: [(&str, (i32, u32, u32), &str, ReviewStatus); 3] = [
    ("Sarah Johnson", (2025, 3, 25), "Portfolio Rebalance", ReviewStatus::Approved),
    ("Robert Chen",   (2025, 3, 23), "New Investment",      ReviewStatus::Pending),
    ("Maria Garcia",  (2025, 3, 20), "Tax Optimization",    ReviewStatus::Approved),
];

/// Most recent first.
pub fn recent_recommendations() -> Vec<RecentRecommendation> {
    RECENT
        .iter()
        .filter_map(|&(client, (y, m, d), kind, status)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| RecentRecommendation {
                client,
                date,
                kind,
                status,
            })
        })
        .collect()
}
