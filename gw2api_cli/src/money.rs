use clap::Args;
use colored::Colorize;
use gw2api::{
    coins::{Coins, coins_to_gold},
    commerce,
};

#[derive(Args)]
pub struct CoinsArgs {
    /// Amount in copper
    #[arg(allow_negative_numbers = true)]
    copper: i64,
}

#[derive(Args)]
pub struct ProfitArgs {
    /// Price the item sells for. Copper, or a form like "1g 20s 5c"
    sell: Coins,

    /// What the item cost
    buy: Option<Coins>,
}

pub(crate) fn coins(args: CoinsArgs) {
    println!("{}", signed(args.copper));
}

pub(crate) fn profit(args: ProfitArgs) {
    let result = commerce::profit(args.sell.total(), args.buy.map_or(0, |c| c.total()));

    println!("{:>8}: {}", "Listing".bold(), signed(result.fee));
    println!("{:>8}: {}", "Exchange".bold(), signed(result.tax));
    println!("{:>8}: {}", "Profit".bold(), signed(result.profit));
}

/// `coins_to_gold` drops the sign, so it is put back in front.
fn signed(copper: i64) -> String {
    let sign = if copper < 0 { "-" } else { "" };
    format!("{sign}{:#}", coins_to_gold(copper))
}
