//! Fetch, filter, sort and group a remote item listing, and publish the
//! outcome through an observable state machine.

pub mod config;
pub mod controller;
pub mod fetcher;
pub mod transform;

pub use config::{load_settings, Settings};
pub use controller::PipelineController;
pub use fetcher::{DataFetcher, HttpDataFetcher};
pub use shared::{
    domain::{GroupedRecords, Record},
    error::{FetchError, FetchErrorKind},
    state::PipelineState,
};
pub use transform::group_records;
