//! HTML renderers for the storefront sections.
//!
//! Renderers are pure functions of a view snapshot and a set of labels.
//! Shop copy defaults to Spanish and can be overridden from configuration.

mod collection;
mod index;
mod newsletter;
mod product_card;

pub use collection::*;
pub use index::*;
pub use newsletter::*;
pub use product_card::*;

use serde::{Deserialize, Serialize};

/// All shop copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub card: CardLabels,
    pub newsletter: NewsletterLabels,
    pub index: IndexLabels,
}

/// Product card copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLabels {
    pub add_to_cart: String,
    pub adding: String,
    pub sold_out: String,
    pub featured: String,
    pub no_image: String,
    pub unavailable: String,
}

impl Default for CardLabels {
    fn default() -> Self {
        Self {
            add_to_cart: "Agregar".to_string(),
            adding: "Agregando...".to_string(),
            sold_out: "Agotado".to_string(),
            featured: "Destacado".to_string(),
            no_image: "Sin imagen".to_string(),
            unavailable: "No disponible".to_string(),
        }
    }
}

/// Newsletter copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterLabels {
    pub heading: String,
    pub pitch: String,
    pub placeholder: String,
    pub subscribe: String,
    pub subscribing: String,
    pub thanks: String,
    pub thanks_detail: String,
}

impl Default for NewsletterLabels {
    fn default() -> Self {
        Self {
            heading: "¿Quieres ofertas exclusivas?".to_string(),
            pitch: "Suscríbete y recibe descuentos especiales en tu email".to_string(),
            placeholder: "tu@email.com".to_string(),
            subscribe: "Suscribirse".to_string(),
            subscribing: "Suscribiendo...".to_string(),
            thanks: "¡Gracias por suscribirte!".to_string(),
            thanks_detail: "Pronto recibirás nuestras mejores ofertas y promociones exclusivas."
                .to_string(),
        }
    }
}

/// Home page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexLabels {
    pub collections_heading: String,
    pub featured_heading: String,
    pub show_all: String,
    pub view_collection: String,
    pub empty: String,
}

impl Default for IndexLabels {
    fn default() -> Self {
        Self {
            collections_heading: "Nuestras Colecciones".to_string(),
            featured_heading: "Productos Destacados".to_string(),
            show_all: "Ver Todos los Productos".to_string(),
            view_collection: "Ver Productos".to_string(),
            empty: "No hay productos disponibles.".to_string(),
        }
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
