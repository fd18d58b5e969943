//! Domain models for ctprix

pub mod centre;
pub mod dataset;
pub mod filter;
pub mod record;
pub mod stats;

pub use centre::{Centre, Tarif, REF_ENERGIES, REF_VEHICULE};
pub use dataset::{Dataset, DatasetMetadata};
pub use filter::{FilterState, ReferencePoint, SortBy, SortOrder};
pub use record::RawPriceRecord;
pub use stats::{ConflictReport, ConflictingFilters, GroupStat, PriceSpread, Stats};
