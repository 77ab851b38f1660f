use crate::{Api, Batch, Id, Result, Transport};
use serde_json::Value;
use std::{cmp::Ordering, fmt::Display};

/// Percent of the sell price taken when listing an item.
pub const LISTING_FEE_PERCENT: i64 = 5;
/// Percent of the sell price taken when the item sells.
pub const EXCHANGE_FEE_PERCENT: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profit {
    /// Listing fee.
    pub fee: i64,
    /// Exchange fee.
    pub tax: i64,
    pub profit: i64,
}

/// What is left of `sell_price` after trading post fees, minus what the item cost.
///
/// Each fee is rounded to the nearest copper, ties to even, and is at least one
/// copper when the sell price is positive.
#[must_use]
pub fn profit(sell_price: i64, buy_price: i64) -> Profit {
    let fee = trading_post_cut(sell_price, LISTING_FEE_PERCENT);
    let tax = trading_post_cut(sell_price, EXCHANGE_FEE_PERCENT);

    let profit = sell_price.saturating_sub(fee).saturating_sub(tax).saturating_sub(buy_price);

    Profit { fee, tax, profit }
}

fn trading_post_cut(price: i64, percent: i64) -> i64 {
    if price <= 0 {
        return 0;
    }

    // price * percent, split so it cannot overflow for any price
    let (hundreds, cents) = (price / 100, price % 100);
    let whole = hundreds * percent + cents * percent / 100;
    let rest = cents * percent % 100;
    let rounded = match rest.cmp(&50) {
        Ordering::Less => whole,
        Ordering::Greater => whole + 1,
        Ordering::Equal => whole + whole % 2,
    };

    rounded.max(1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transactions {
    CurrentBuys,
    CurrentSells,
    HistoryBuys,
    HistorySells,
}
impl Transactions {
    fn location(self) -> &'static str {
        match self {
            Self::CurrentBuys => "commerce/transactions/current/buys",
            Self::CurrentSells => "commerce/transactions/current/sells",
            Self::HistoryBuys => "commerce/transactions/history/buys",
            Self::HistorySells => "commerce/transactions/history/sells",
        }
    }
}

impl<T: Transport> Api<T> {
    /// Buy and sell listings for `ids`, batched. With no ids, the ids of every listed item.
    #[must_use]
    pub fn get_commerce_listings<I: Display>(&self, ids: &[I]) -> Batch {
        self.get_resource("commerce/listings", ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_commerce_listings_ids(&self) -> Result<Vec<Id>> {
        self.get_resource_ids("commerce/listings")
    }

    /// Listings of every item on the trading post.
    ///
    /// # Errors
    ///
    /// See [`Api::get_all`].
    pub fn get_all_commerce_listings(&self) -> Result<Batch> {
        self.get_all("commerce/listings")
    }

    /// Highest buy order and lowest sell offer for `ids`, batched.
    /// With no ids, the ids of every traded item.
    #[must_use]
    pub fn get_commerce_prices<I: Display>(&self, ids: &[I]) -> Batch {
        self.get_resource("commerce/prices", ids)
    }

    /// # Errors
    ///
    /// See [`Api::get_resource_ids`].
    pub fn get_commerce_prices_ids(&self) -> Result<Vec<Id>> {
        self.get_resource_ids("commerce/prices")
    }

    /// Prices of every item on the trading post. The endpoint refuses `ids=all`,
    /// so this goes through the id listing.
    ///
    /// # Errors
    ///
    /// See [`Api::get_all`].
    pub fn get_all_commerce_prices(&self) -> Result<Batch> {
        self.get_all("commerce/prices")
    }

    /// Currencies accepted by the gem exchange.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_commerce_exchange(&self) -> Result<Value> {
        self.request("commerce/exchange", &[])
    }

    /// How many gems `coins` copper buys right now.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_commerce_exchange_coins(&self, coins: u64) -> Result<Value> {
        self.request("commerce/exchange/coins", &[("quantity", coins.to_string().as_str())])
    }

    /// How many copper `gems` gems sell for right now.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`].
    pub fn get_commerce_exchange_gems(&self, gems: u64) -> Result<Value> {
        self.request("commerce/exchange/gems", &[("quantity", gems.to_string().as_str())])
    }

    /// Trading post transactions of the key's account. History covers the past 90 days.
    ///
    /// # Errors
    ///
    /// See [`crate::Error`].
    // TODO: follow the `page` parameter; only the first page comes back.
    pub fn get_commerce_transactions(&self, kind: Transactions) -> Result<Value> {
        self.request(kind.location(), &[])
    }
}
