use serde::{Deserialize, Serialize};

/// Catalog category a technology belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Cms,
    Ecommerce,
    Styling,
    Hosting,
}

/// A technology in the static recommendation catalog.
///
/// Immutable reference data shipped with the crate; `popularity` and
/// `complexity` are both on a 1..10 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub category: TechCategory,
    pub tags: Vec<String>,
    pub popularity: u8,
    pub complexity: u8,
}

impl Technology {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn tech(
    id: &str,
    name: &str,
    category: TechCategory,
    tags: &[&str],
    popularity: u8,
    complexity: u8,
) -> Technology {
    Technology {
        id: id.to_string(),
        name: name.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        popularity,
        complexity,
    }
}

/// The technology catalog the recommender scores against.
pub fn default_catalog() -> Vec<Technology> {
    use TechCategory::*;

    vec![
        tech("react", "React", Frontend, &["frontend", "ecommerce"], 10, 6),
        tech("nextjs", "Next.js", Frontend, &["frontend", "blog", "ecommerce"], 9, 6),
        tech("vue", "Vue.js", Frontend, &["frontend"], 8, 4),
        tech("angular", "Angular", Frontend, &["frontend", "enterprise"], 7, 8),
        tech("svelte", "Svelte", Frontend, &["frontend"], 6, 3),
        tech("nodejs", "Node.js", Backend, &["backend", "api"], 9, 5),
        tech("django", "Django", Backend, &["backend", "api", "enterprise"], 7, 6),
        tech("laravel", "Laravel", Backend, &["backend", "api"], 7, 5),
        tech("rails", "Ruby on Rails", Backend, &["backend", "api"], 6, 6),
        tech("postgresql", "PostgreSQL", Database, &["database", "enterprise"], 9, 6),
        tech("mongodb", "MongoDB", Database, &["database"], 8, 4),
        tech("mysql", "MySQL", Database, &["database"], 8, 5),
        tech("wordpress", "WordPress", Cms, &["cms", "blog"], 10, 3),
        tech("strapi", "Strapi", Cms, &["cms", "blog", "api"], 6, 5),
        tech("sanity", "Sanity", Cms, &["cms", "blog"], 5, 5),
        tech("shopify", "Shopify", Ecommerce, &["ecommerce"], 9, 3),
        tech("woocommerce", "WooCommerce", Ecommerce, &["ecommerce", "cms"], 8, 4),
        tech("medusa", "Medusa", Ecommerce, &["ecommerce", "api"], 5, 6),
        tech("tailwind", "Tailwind CSS", Styling, &["frontend"], 9, 3),
        tech("bootstrap", "Bootstrap", Styling, &["frontend"], 8, 2),
        tech("vercel", "Vercel", Hosting, &["hosting"], 8, 2),
        tech("netlify", "Netlify", Hosting, &["hosting"], 7, 2),
        tech("aws", "AWS", Hosting, &["hosting", "enterprise"], 9, 8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = default_catalog();
        assert!(!catalog.is_empty());

        for entry in &catalog {
            assert!((1..=10).contains(&entry.popularity), "popularity out of range: {}", entry.id);
            assert!((1..=10).contains(&entry.complexity), "complexity out of range: {}", entry.id);
        }
    }

    #[test]
    fn test_has_tag() {
        let catalog = default_catalog();
        let react = catalog.iter().find(|t| t.id == "react").unwrap();
        assert!(react.has_tag("frontend"));
        assert!(!react.has_tag("backend"));
    }
}
