//! Validate catalog data.

use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::Serialize;
use storefront_commerce::variants::IndexedProduct;

use super::ValidateArgs;
use crate::context::Context;

#[derive(Serialize)]
struct Report {
    products: usize,
    collections: usize,
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

#[derive(Serialize)]
struct Finding {
    subject: String,
    message: String,
}

/// Run the validate command.
pub async fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;

    ctx.output.header("Validating catalog");

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for product in &catalog.products {
        let id = product.id.to_string();
        match IndexedProduct::new(product.clone()) {
            Ok(indexed) => {
                ctx.output.debug(&format!(
                    "{}: {} variant(s) over {} axis(es)",
                    id,
                    indexed.index().len(),
                    indexed.index().axes().len()
                ));

                if product.has_variants() && !product.variants.iter().any(|v| v.is_purchasable()) {
                    warnings.push(Finding {
                        subject: id,
                        message: "every variant is sold out".to_string(),
                    });
                }
            }
            Err(err) => {
                tracing::error!(product_id = %product.id, error = %err, "invalid catalog data");
                errors.push(Finding {
                    subject: id,
                    message: err.to_string(),
                });
            }
        }
    }

    let known: HashSet<_> = catalog.products.iter().map(|p| &p.id).collect();
    for collection in &catalog.collections {
        for product_id in collection.product_ids.iter().filter(|id| !known.contains(id)) {
            warnings.push(Finding {
                subject: collection.id.to_string(),
                message: format!("references unknown product '{}'", product_id),
            });
        }
    }

    let report = Report {
        products: catalog.products.len(),
        collections: catalog.collections.len(),
        errors,
        warnings,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.kv("products", &report.products.to_string());
        ctx.output.kv("collections", &report.collections.to_string());

        for error in &report.errors {
            ctx.output.error(&format!("{}: {}", error.subject, error.message));
        }
        for warning in &report.warnings {
            ctx.output.warn(&format!("{}: {}", warning.subject, warning.message));
        }
    }

    if !report.errors.is_empty() {
        bail!("Catalog has {} invalid product(s)", report.errors.len());
    }

    if report.warnings.is_empty() {
        ctx.output.success("Catalog is valid");
    } else {
        ctx.output.success("Catalog is valid (with warnings)");
    }

    Ok(())
}
