//! Resource services
//!
//! Each service holds a [`Client`](crate::Client) handle and maps one group
//! of endpoints onto typed calls. Domain names are canonicalized right
//! before they are placed in a path, query or body.

mod config;
mod cryptokeys;
mod metadata;
mod records;
mod search;
mod servers;
mod statistics;
mod tsigkeys;
mod zones;

pub use config::ConfigService;
pub use cryptokeys::CryptokeysService;
pub use metadata::MetadataService;
pub use records::RecordsService;
pub use search::SearchService;
pub use servers::ServersService;
pub use statistics::StatisticsService;
pub use tsigkeys::TsigKeysService;
pub use zones::ZonesService;
