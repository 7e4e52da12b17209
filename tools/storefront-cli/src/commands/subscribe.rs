//! Run the newsletter flow against a dry-run service.

use std::sync::Arc;

use anyhow::{bail, Result};
use storefront_headless::sections::render_newsletter;
use storefront_headless::{HeadlessError, NewsletterLogic, SubscribeOutcome};

use super::services::DryRunSubscriptions;
use super::SubscribeArgs;
use crate::context::Context;

/// Run the subscribe command.
pub async fn run(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let service = Arc::new(DryRunSubscriptions {
        fail_with: args.fail.clone(),
    });
    let newsletter = NewsletterLogic::new(service);
    newsletter.set_email(args.email.as_str());

    let outcome = match newsletter.handle_subscribe() {
        Ok(Some(task)) => Some(task.await),
        Ok(None) => None,
        Err(HeadlessError::InvalidEmail(err)) => {
            if ctx.output.is_json() {
                ctx.output.json(&newsletter.view());
            }
            bail!("Invalid email: {}", err);
        }
        Err(err) => return Err(err.into()),
    };

    let view = newsletter.view();
    if ctx.output.is_json() {
        ctx.output.json(&view);
    } else if ctx.output.is_verbose() {
        ctx.output.debug(&render_newsletter(&view, &ctx.config.labels.newsletter));
    }

    match outcome {
        Some(SubscribeOutcome::Subscribed) => {
            ctx.output.success(&format!("Subscribed {}", view.email.trim()));
            Ok(())
        }
        Some(SubscribeOutcome::Failed(reason)) => bail!("Subscription failed: {}", reason),
        Some(SubscribeOutcome::Discarded) | None => Ok(()),
    }
}
