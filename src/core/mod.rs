pub mod client;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{ExportReport, FetchMode, Record, SheetRow};
pub use crate::domain::ports::{ConfigProvider, DinoSource, SheetStorage};
pub use crate::utils::error::Result;
