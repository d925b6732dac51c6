use serde::{Deserialize, Serialize};

use crate::technology::{default_catalog, TechCategory, Technology};

/// Website type requested in the order questionnaire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WebsiteType {
    ECommerce,
    Blog,
    Portfolio,
    Corporate,
    /// Any type without a dedicated scoring bonus.
    Other,
}

impl WebsiteType {
    /// Map the questionnaire label to a type. Unknown labels score no
    /// type bonus but are not an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "e-commerce" | "ecommerce" => WebsiteType::ECommerce,
            "blog" => WebsiteType::Blog,
            "portfolio" => WebsiteType::Portfolio,
            "corporate" => WebsiteType::Corporate,
            _ => WebsiteType::Other,
        }
    }
}

/// A technology with its computed fitness score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyScore {
    pub technology: Technology,
    pub score: i32,
}

impl TechnologyScore {
    /// Displayed match percentage, clamped into `[0, 99]` so no entry is
    /// ever shown as a perfect match.
    pub fn match_percentage(&self) -> u8 {
        let pct = (self.score as f64 / 2.0).round() as i64;
        pct.clamp(0, 99) as u8
    }
}

/// Top-ranked technology per core category.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedStack {
    pub frontend: Option<TechnologyScore>,
    pub backend: Option<TechnologyScore>,
    pub database: Option<TechnologyScore>,
}

impl RecommendedStack {
    /// Pick the first entry per category out of an already-ranked list.
    pub fn from_ranked(ranked: &[TechnologyScore]) -> Self {
        let pick = |category: TechCategory| {
            ranked
                .iter()
                .find(|s| s.technology.category == category)
                .cloned()
        };

        Self {
            frontend: pick(TechCategory::Frontend),
            backend: pick(TechCategory::Backend),
            database: pick(TechCategory::Database),
        }
    }
}

/// Scores the technology catalog against a requested website type and the
/// selected feature flags.
pub struct TechnologyRecommender {
    catalog: Vec<Technology>,
}

impl TechnologyRecommender {
    pub fn new(catalog: Vec<Technology>) -> Self {
        Self { catalog }
    }

    /// Rank the full catalog, highest score first.
    ///
    /// The sort is stable: entries with equal scores keep their catalog
    /// order. Unknown website types and unrecognized feature keys simply
    /// contribute nothing, leaving the popularity/complexity baseline.
    pub fn recommend(&self, website_type: WebsiteType, features: &[String]) -> Vec<TechnologyScore> {
        let mut scores: Vec<TechnologyScore> = self
            .catalog
            .iter()
            .map(|technology| TechnologyScore {
                score: score_technology(technology, website_type, features),
                technology: technology.clone(),
            })
            .collect();

        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }

    /// Rank and reduce to the top pick per core category.
    pub fn recommend_stack(&self, website_type: WebsiteType, features: &[String]) -> RecommendedStack {
        RecommendedStack::from_ranked(&self.recommend(website_type, features))
    }
}

impl Default for TechnologyRecommender {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

/// Restrict a ranked list to one category, preserving rank order.
pub fn filter_by_category(
    ranked: &[TechnologyScore],
    category: TechCategory,
) -> Vec<&TechnologyScore> {
    ranked
        .iter()
        .filter(|s| s.technology.category == category)
        .collect()
}

fn score_technology(technology: &Technology, website_type: WebsiteType, features: &[String]) -> i32 {
    let mut score = 0i32;

    // Website-type bonus. Only these four type/tag pairs grant one.
    score += match website_type {
        WebsiteType::ECommerce if technology.has_tag("ecommerce") => 30,
        WebsiteType::Blog if technology.has_tag("blog") => 30,
        WebsiteType::Portfolio if technology.has_tag("frontend") => 20,
        WebsiteType::Corporate if technology.has_tag("enterprise") => 20,
        _ => 0,
    };

    // Additive per-feature bonuses keyed on tag membership.
    for feature in features {
        score += match feature.as_str() {
            "ecommerce" if technology.has_tag("ecommerce") => 25,
            "blog" if technology.has_tag("blog") || technology.has_tag("cms") => 20,
            "gallery" if technology.has_tag("frontend") => 10,
            "contactForm" if technology.has_tag("backend") => 10,
            "booking" if technology.has_tag("api") => 15,
            _ => 0,
        };
    }

    score += i32::from(technology.popularity) * 2;
    score -= i32::from(technology.complexity);

    score
}
