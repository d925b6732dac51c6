use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitekit_shared::Amount;
use uuid::Uuid;

/// A website template offered in the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub base_price: Amount,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        category: impl Into<String>,
        base_price: Amount,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            category: category.into(),
            base_price,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),
}

/// The set of templates customers can order from.
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Catalog seeded with the storefront's stock templates.
    pub fn with_defaults() -> Self {
        Self::new(default_templates())
    }

    pub fn get(&self, id: &Uuid) -> Result<&Template, TemplateError> {
        self.templates
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Templates currently purchasable.
    pub fn list_active(&self) -> Vec<&Template> {
        self.templates.iter().filter(|t| t.is_active).collect()
    }

    pub fn list_by_category(&self, category: &str) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.is_active && t.category.eq_ignore_ascii_case(category))
            .collect()
    }
}

fn default_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Portfolio Starter",
            Some("Single-page portfolio with project gallery".to_string()),
            "Portfolio",
            4999,
        ),
        Template::new(
            "Business Pro",
            Some("Multi-page corporate site with team and services pages".to_string()),
            "Corporate",
            9999,
        ),
        Template::new(
            "Storefront Plus",
            Some("Product listings, cart and checkout pages".to_string()),
            "E-commerce",
            14999,
        ),
        Template::new(
            "Blog Classic",
            Some("Article listing, tags and author pages".to_string()),
            "Blog",
            3999,
        ),
        Template::new(
            "Launch Landing",
            Some("Single conversion-focused landing page".to_string()),
            "Marketing",
            2999,
        ),
    ]
}
