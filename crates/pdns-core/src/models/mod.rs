//! JSON resource models for the PowerDNS API
//!
//! Optional fields are `Option<T>` and are left out of request bodies when
//! `None`, so a partially filled model only changes what it names.
//!
//! - [`Zone`]: zones and their kinds
//! - [`RRset`] / [`Record`] / [`Comment`]: resource record sets
//! - [`Cryptokey`]: DNSSEC keys
//! - [`Metadata`]: per-zone metadata
//! - [`TsigKey`]: TSIG keys
//! - [`Server`], [`Statistic`], [`SearchResult`], [`ConfigSetting`]: server level data

/// Declare a string-valued enum whose unknown values round-trip through
/// an `Other` variant instead of failing to decode.
///
/// Prefix the declaration with `@ignore_case` to accept known values in any
/// ASCII case; they are always written back in their canonical spelling.
macro_rules! string_enum {
    (@ignore_case $($rest:tt)*) => {
        string_enum!(@impl str::eq_ignore_ascii_case; $($rest)*);
    };
    (
        @impl $matches:expr;
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this crate does not know about
            Other(String),
        }

        impl $name {
            /// The wire representation
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $(
                    if $matches(value.as_str(), $value) {
                        return Self::$variant;
                    }
                )+
                Self::Other(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
    ($($rest:tt)*) => {
        string_enum!(@impl <str as PartialEq>::eq; $($rest)*);
    };
}

pub mod config_setting;
pub mod cryptokey;
pub mod metadata;
pub mod record;
pub mod search;
pub mod server;
pub mod statistic;
pub mod tsigkey;
pub mod zone;

pub use config_setting::ConfigSetting;
pub use cryptokey::{Cryptokey, CryptokeyActivation};
pub use metadata::{Metadata, MetadataKind};
pub use record::{ChangeType, Comment, RRType, RRset, RRsets, Record, canonical_record_values};
pub use search::{SearchObjectType, SearchResult};
pub use server::{CacheFlushResult, Server};
pub use statistic::{Statistic, StatisticEntry, StatisticValue};
pub use tsigkey::TsigKey;
pub use zone::{AxfrRetrieveResult, NotifyResult, Zone, ZoneKind, ZoneType};
