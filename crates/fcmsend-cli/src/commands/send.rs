//! send command - forward a notification file to the push endpoint

use super::CommandContext;
use crate::output::{write_payload, write_response};
use anyhow::{Context, Result};
use fcmsend_core::types::{InputNotification, OutgoingPayload};
use fcmsend_core::Forwarder;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

pub struct SendOptions {
    pub dryrun: bool,
}

pub async fn execute<W: Write>(
    ctx: &CommandContext,
    path: &Path,
    opts: SendOptions,
    out: &mut W,
) -> Result<()> {
    ctx.log_config();

    if opts.dryrun {
        return preview(path, out);
    }

    let forwarder = Forwarder::new(ctx.config.clone())?;
    let delivery = forwarder.send(path).await?;

    if !(200..300).contains(&delivery.status) {
        debug!("Push endpoint answered with status {}", delivery.status);
    }

    write_response(out, &delivery.body).context("Failed to write response")?;

    Ok(())
}

fn preview<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let input = InputNotification::from_file(path)?;
    let target = input.target();

    if target.is_unspecified() {
        warn!("Notification has neither registrationId nor topic");
    }
    debug!("(dryrun) would send to {}", target);

    write_payload(out, &OutgoingPayload::with_target(&input, &target))
        .context("Failed to write payload")?;

    Ok(())
}
