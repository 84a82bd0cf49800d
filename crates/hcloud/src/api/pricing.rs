//! Pricing endpoint.

use crate::client::HcloudClient;
use crate::models::{Pricing, PricingResponse};
use crate::Result;

impl HcloudClient {
    /// Fetch all prices.
    pub async fn get_pricing(&self) -> Result<Pricing> {
        let response: PricingResponse = self.get_json(self.url("pricing")?).await?;
        Ok(response.pricing)
    }
}
