use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sitekit_catalog::Template;
use sitekit_shared::Amount;
use uuid::Uuid;

use crate::session::CartError;

/// Snapshot of the template a line item was customized from.
///
/// Carried on the line item so the cart renders correctly even if the
/// catalog entry is edited later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRef {
    pub name: String,
    pub description: Option<String>,
    pub base_price: Amount,
}

impl From<&Template> for TemplateRef {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            description: template.description.clone(),
            base_price: template.base_price,
        }
    }
}

/// One customized template selected into the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: Uuid,
    /// Final price after customization upcharges. Never negative.
    pub price: Amount,
    pub template: TemplateRef,
    pub customizations: HashMap<String, String>,
}

impl CartLineItem {
    pub fn new(
        template: TemplateRef,
        price: Amount,
        customizations: HashMap<String, String>,
    ) -> Result<Self, CartError> {
        if price < 0 {
            return Err(CartError::NegativePrice(price));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            price,
            template,
            customizations,
        })
    }
}
