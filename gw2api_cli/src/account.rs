use anyhow::{Context, Result};
use gw2api::Api;

pub(crate) fn account(api: &Api) -> Result<()> {
    anyhow::ensure!(api.token().is_some(), "An API key is needed. Pass --key or set GW2_API_KEY.");

    let account = api.get_account().context("failed to get account")?;
    println!("{}", serde_json::to_string_pretty(&account)?);

    let wallet = api.get_account_wallet().context("failed to get wallet")?;
    println!("{}", serde_json::to_string_pretty(&wallet)?);

    Ok(())
}

pub(crate) fn tokeninfo(api: &Api) -> Result<()> {
    anyhow::ensure!(api.token().is_some(), "An API key is needed. Pass --key or set GW2_API_KEY.");

    eprintln!("{}", api.connection_details());
    let info = api.get_tokeninfo().context("failed to get token info")?;
    println!("{}", serde_json::to_string_pretty(&info)?);

    Ok(())
}
