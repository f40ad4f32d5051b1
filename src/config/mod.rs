pub mod storage;

use crate::domain::model::FetchMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const DINO_API_ENDPOINT: &str = "https://www.nhm.ac.uk/api/dino-directory-api/dinosaurs";
pub const DINO_SITE_URL: &str = "https://www.nhm.ac.uk";
pub const SHEET_FILENAME: &str = "data/data.csv";
pub const DEFAULT_FETCH_MODE: FetchMode = FetchMode::Bulk;

/// 匯出任務設定，預設值即正式環境參數
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub api_endpoint: String,
    pub site_url: String,
    pub sheet_filename: String,
    pub fetch_mode: FetchMode,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DINO_API_ENDPOINT.to_string(),
            site_url: DINO_SITE_URL.to_string(),
            sheet_filename: SHEET_FILENAME.to_string(),
            fetch_mode: DEFAULT_FETCH_MODE,
        }
    }
}

impl ConfigProvider for ExportConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn site_url(&self) -> &str {
        &self.site_url
    }

    fn sheet_filename(&self) -> &str {
        &self.sheet_filename
    }

    fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }
}

impl Validate for ExportConfig {
    fn validate(&self) -> Result<()> {
        // 驗證 API 端點
        crate::utils::validation::validate_url("api_endpoint", &self.api_endpoint)?;

        // 驗證網站基底位址
        crate::utils::validation::validate_url("site_url", &self.site_url)?;

        // 驗證輸出路徑
        crate::utils::validation::validate_path("sheet_filename", &self.sheet_filename)?;

        Ok(())
    }
}
