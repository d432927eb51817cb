//! Agricultural news models and the curated news feed

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::NewsCategory;

/// A news or policy item shown on the insights page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub category: NewsCategory,
    pub content: String,
    pub date: DateTime<Utc>,
    pub source: String,
}

/// Static definition of a news item, dated relative to "now"
#[derive(Debug, Clone, Copy)]
pub struct NewsFixture {
    pub id: &'static str,
    pub title: &'static str,
    pub category: NewsCategory,
    pub content: &'static str,
    pub days_ago: i64,
    pub source: &'static str,
}

impl NewsFixture {
    pub fn to_item(&self, now: DateTime<Utc>) -> NewsItem {
        NewsItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            category: self.category,
            content: self.content.to_string(),
            date: now - Duration::days(self.days_ago),
            source: self.source.to_string(),
        }
    }
}

pub const AGRICULTURAL_NEWS: [NewsFixture; 5] = [
    NewsFixture {
        id: "news-1",
        title: "Government Announces KES 5 Billion Fertilizer Subsidy Program",
        category: NewsCategory::Subsidy,
        content: "The Ministry of Agriculture has launched a new fertilizer subsidy program targeting 2 million smallholder farmers across Kenya. Farmers will access subsidized fertilizer at KES 3,500 per 50kg bag, down from the current market price of KES 6,500.",
        days_ago: 2,
        source: "Ministry of Agriculture",
    },
    NewsFixture {
        id: "news-2",
        title: "Fuel Prices Drop by KES 5 per Liter, Transportation Costs Expected to Decrease",
        category: NewsCategory::Fuel,
        content: "The Energy and Petroleum Regulatory Authority (EPRA) has announced a reduction in fuel prices. Super Petrol will retail at KES 192.84, Diesel at KES 178.70, and Kerosene at KES 168.19 per liter in Nairobi.",
        days_ago: 1,
        source: "EPRA",
    },
    NewsFixture {
        id: "news-3",
        title: "Climate Change Advisory: Long Rains Expected in March-May Period",
        category: NewsCategory::Climate,
        content: "Kenya Meteorological Department forecasts above-average rainfall during the March-April-May season. Farmers in the Central Highlands and Western regions are advised to prepare for planting season and implement proper drainage systems.",
        days_ago: 3,
        source: "Kenya Met Department",
    },
    NewsFixture {
        id: "news-4",
        title: "New Agricultural Policy to Support Small-Scale Farmers with Technology",
        category: NewsCategory::Policy,
        content: "The government has unveiled a digital agriculture policy aimed at connecting farmers to markets through technology platforms. The initiative includes provision of smartphones and training for 500,000 farmers nationwide.",
        days_ago: 5,
        source: "Ministry of Agriculture",
    },
    NewsFixture {
        id: "news-5",
        title: "Diesel Subsidy Extended for Agricultural Machinery Operators",
        category: NewsCategory::Fuel,
        content: "The Treasury has extended the diesel subsidy for agricultural machinery operators by another six months. Registered farmers can now access diesel at subsidized rates for tractors and irrigation pumps.",
        days_ago: 7,
        source: "National Treasury",
    },
];

/// Materialize the news feed as of `now`
pub fn agricultural_news(now: DateTime<Utc>) -> Vec<NewsItem> {
    AGRICULTURAL_NEWS.iter().map(|fixture| fixture.to_item(now)).collect()
}
