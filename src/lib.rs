pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{storage::LocalStorage, ExportConfig};
pub use crate::core::{client::DinoApi, pipeline::SheetPipeline};
pub use crate::domain::model::{ExportReport, FetchMode, Record, SheetRow};
pub use crate::domain::ports::{ConfigProvider, DinoSource, SheetStorage};
pub use crate::utils::error::{EtlError, Result};
