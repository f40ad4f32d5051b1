use crate::core::{
    transform, ConfigProvider, DinoSource, ExportReport, FetchMode, SheetRow, SheetStorage,
};
use crate::utils::error::Result;

/// 匯出管道：抓清單、視需要補查詳細資料、逐筆寫進表格
pub struct SheetPipeline<A: DinoSource, S: SheetStorage, C: ConfigProvider> {
    api: A,
    storage: S,
    config: C,
}

impl<A: DinoSource, S: SheetStorage, C: ConfigProvider> SheetPipeline<A, S, C> {
    pub fn new(api: A, storage: S, config: C) -> Self {
        Self {
            api,
            storage,
            config,
        }
    }

    pub async fn run(&self) -> Result<ExportReport> {
        let sheet = self.storage.create_sheet(self.config.sheet_filename())?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sheet);

        // 標頭先落地，清單抓取失敗時檔案仍然是合法的空表
        writer.write_record(SheetRow::HEADERS)?;

        println!("Getting dinosaurs list...");
        let dinosaurs = self.api.fetch_list(self.config.fetch_mode()).await?;
        tracing::info!("📊 Extracted {} dinosaurs", dinosaurs.len());

        let mut rows_written = 0;
        let mut skipped = Vec::new();
        let mut failed_rows = 0;

        for dino in dinosaurs {
            let genus = match transform::genus_of(&dino) {
                Ok(genus) => genus,
                Err(e) => {
                    tracing::error!("❌ Record without usable genus: {}", e);
                    tracing::error!("Record data: {:?}", dino.data);
                    failed_rows += 1;
                    continue;
                }
            };

            println!("Getting {} details...", genus);
            let details = match self.config.fetch_mode() {
                FetchMode::Bulk => dino,
                FetchMode::ShortList => match self.api.fetch_details(&genus).await {
                    Ok(details) => details,
                    Err(e) => {
                        tracing::warn!("⏭️ Skipped {} due to HTTP error: {}", genus, e);
                        skipped.push(genus);
                        continue;
                    }
                },
            };

            let row = match transform::sheet_row(&details, &genus, self.config.site_url()) {
                Ok(row) => row,
                Err(e) => {
                    tracing::error!("❌ ERROR on {}: {}", genus, e);
                    tracing::error!("Record data: {:?}", details.data);
                    failed_rows += 1;
                    continue;
                }
            };

            if let Err(e) = writer.serialize(&row) {
                tracing::error!("❌ ERROR on {}: {}", genus, e);
                tracing::error!("Row data: {:?}", row);
                failed_rows += 1;
                continue;
            }

            rows_written += 1;
        }

        writer.flush()?;
        tracing::info!("💾 Sheet saved to: {}", self.config.sheet_filename());

        Ok(ExportReport {
            output_path: self.config.sheet_filename().to_string(),
            rows_written,
            skipped,
            failed_rows,
        })
    }
}
