use crate::domain::model::{FetchMode, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DinoSource: Send + Sync {
    async fn fetch_list(&self, mode: FetchMode) -> Result<Vec<Record>>;
    async fn fetch_details(&self, genus: &str) -> Result<Record>;
}

pub trait SheetStorage: Send + Sync {
    fn create_sheet(&self, path: &str) -> Result<Box<dyn std::io::Write + Send>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn site_url(&self) -> &str;
    fn sheet_filename(&self) -> &str;
    fn fetch_mode(&self) -> FetchMode;
}
