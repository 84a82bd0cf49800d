//! Strongly-typed identifiers for Hetzner Cloud resources.
//!
//! Every resource is addressed by a 64-bit integer id. Wrapping them per
//! resource keeps a volume id from being passed where a server id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

id_type!(ActionId, "Action id");
id_type!(ServerId, "Server id");
id_type!(ServerTypeId, "Server type id");
id_type!(ImageId, "Image id");
id_type!(IsoId, "ISO id");
id_type!(SshKeyId, "SSH key id");
id_type!(VolumeId, "Volume id");
id_type!(NetworkId, "Network id");
id_type!(FloatingIpId, "Floating IP id");
id_type!(PrimaryIpId, "Primary IP id");
id_type!(LoadBalancerId, "Load balancer id");
id_type!(LoadBalancerTypeId, "Load balancer type id");
id_type!(FirewallId, "Firewall id");
id_type!(PlacementGroupId, "Placement group id");
id_type!(CertificateId, "Certificate id");
id_type!(LocationId, "Location id");
id_type!(DatacenterId, "Datacenter id");
