//! Prices and the pricing endpoint payload.

use hcloud_core::ids::{LoadBalancerTypeId, ServerTypeId};
use serde::{Deserialize, Serialize};

/// A price with and without VAT, as decimal strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    /// Price without VAT
    pub net: String,
    /// Price with VAT
    pub gross: String,
}

/// Hourly and monthly price of a product in one location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricePerLocation {
    /// Location name
    pub location: String,
    /// Hourly price
    pub price_hourly: Price,
    /// Monthly price
    pub price_monthly: Price,
    /// Free traffic included, in bytes
    #[serde(default)]
    pub included_traffic: Option<u64>,
    /// Price per additional TB of traffic
    #[serde(default)]
    pub price_per_tb_traffic: Option<Price>,
}

/// Monthly-only price of a product in one location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyPricePerLocation {
    /// Location name
    pub location: String,
    /// Monthly price
    pub price_monthly: Price,
    /// Hourly price, for products billed hourly
    #[serde(default)]
    pub price_hourly: Option<Price>,
}

/// Per-GB monthly price.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerGbMonthPrice {
    /// Price per GB per month
    pub price_per_gb_month: Price,
}

/// Backup surcharge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupPricing {
    /// Percentage added to the server price
    pub percentage: String,
}

/// Prices for one IP type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpTypePricing {
    /// IP type (`ipv4` / `ipv6`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Prices per location
    #[serde(default)]
    pub prices: Vec<MonthlyPricePerLocation>,
}

/// Prices for one server type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerTypePricing {
    /// Server type id
    pub id: ServerTypeId,
    /// Server type name
    pub name: String,
    /// Prices per location
    #[serde(default)]
    pub prices: Vec<PricePerLocation>,
}

/// Prices for one load balancer type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadBalancerTypePricing {
    /// Load balancer type id
    pub id: LoadBalancerTypeId,
    /// Load balancer type name
    pub name: String,
    /// Prices per location
    #[serde(default)]
    pub prices: Vec<PricePerLocation>,
}

/// All prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pricing {
    /// Currency of all prices
    pub currency: String,
    /// VAT rate applied to gross prices
    pub vat_rate: String,
    /// Snapshot/backup image storage
    #[serde(default)]
    pub image: PerGbMonthPrice,
    /// Volume storage
    #[serde(default)]
    pub volume: PerGbMonthPrice,
    /// Backup surcharge
    #[serde(default)]
    pub server_backup: BackupPricing,
    /// Floating IP prices per type
    #[serde(default)]
    pub floating_ips: Vec<IpTypePricing>,
    /// Primary IP prices per type
    #[serde(default)]
    pub primary_ips: Vec<IpTypePricing>,
    /// Server type prices
    #[serde(default)]
    pub server_types: Vec<ServerTypePricing>,
    /// Load balancer type prices
    #[serde(default)]
    pub load_balancer_types: Vec<LoadBalancerTypePricing>,
}

/// Envelope of `GET /pricing`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingResponse {
    /// Pricing
    pub pricing: Pricing,
}
