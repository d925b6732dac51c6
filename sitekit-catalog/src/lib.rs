pub mod recommender;
pub mod technology;
pub mod template;

pub use recommender::{RecommendedStack, TechnologyRecommender, TechnologyScore, WebsiteType};
pub use technology::{TechCategory, Technology};
pub use template::{Template, TemplateCatalog, TemplateError};
