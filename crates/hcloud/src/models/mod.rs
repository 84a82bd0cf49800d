//! Request and response models, grouped by resource.
//!
//! All models use the API's snake_case wire names. Optional response fields
//! default to `None`/empty when absent; unknown fields are ignored.

pub mod actions;
pub mod certificates;
pub mod firewalls;
pub mod floating_ips;
pub mod images;
pub mod load_balancers;
pub mod locations;
pub mod metrics;
pub mod networks;
pub mod placement_groups;
pub mod pricing;
pub mod primary_ips;
pub mod server_types;
pub mod servers;
pub mod ssh_keys;
pub mod volumes;

pub use actions::*;
pub use certificates::*;
pub use firewalls::*;
pub use floating_ips::*;
pub use images::*;
pub use load_balancers::*;
pub use locations::*;
pub use metrics::*;
pub use networks::*;
pub use placement_groups::*;
pub use pricing::*;
pub use primary_ips::*;
pub use server_types::*;
pub use servers::*;
pub use ssh_keys::*;
pub use volumes::*;
