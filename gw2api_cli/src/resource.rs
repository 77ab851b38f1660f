use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use gw2api::{Api, Batch};

#[derive(Args)]
pub struct GetArgs {
    /// Resource path, like items, recipes or continents/1/floors
    resource: String,

    /// Ids to fetch. Numbers or names
    ids: Vec<String>,
}

#[derive(Args)]
pub struct IdsArgs {
    /// Resource path, like items, recipes or continents/1/floors
    resource: String,
}

pub(crate) fn get(args: GetArgs, api: &Api) -> Result<()> {
    print_batch(api.get_resource(&args.resource, &args.ids))
}

pub(crate) fn ids(args: IdsArgs, api: &Api) -> Result<()> {
    for id in api.get_resource_ids(&args.resource)? {
        println!("{id}");
    }
    Ok(())
}

pub(crate) fn all(args: IdsArgs, api: &Api) -> Result<()> {
    print_batch(api.get_all(&args.resource)?)
}

fn print_batch(batch: Batch) -> Result<()> {
    for value in &batch.values {
        println!("{}", serde_json::to_string_pretty(value)?);
    }

    for failure in &batch.failures {
        eprintln!(
            "{} batch {} ({} ids starting at {}): {}",
            "Failed".red().bold(),
            failure.index,
            failure.ids.len(),
            failure.ids.first().map_or("-", String::as_str),
            failure.error,
        );
    }

    if !batch.is_complete() {
        bail!("{} of {} requests failed", batch.failures.len(), batch.requests());
    }

    Ok(())
}
