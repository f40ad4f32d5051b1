use dino_etl::utils::{logger, validation::Validate};
use dino_etl::{ConfigProvider, DinoApi, ExportConfig, LocalStorage, SheetPipeline};
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting dino-etl");

    let config = ExportConfig::default();

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    // 建立 API 端、存儲與管道，整個流程共用同一個 HTTP client
    let api = DinoApi::new(Client::new(), config.api_endpoint().to_string());
    let storage = LocalStorage::new(".".to_string());
    let pipeline = SheetPipeline::new(api, storage, config);

    match pipeline.run().await {
        Ok(report) => {
            tracing::info!("✅ Export completed successfully!");
            tracing::info!("📁 Output saved to: {}", report.output_path);
            println!("✅ Export completed successfully!");
            println!("📁 Output saved to: {}", report.output_path);
            println!(
                "📊 {} rows written, {} skipped, {} failed",
                report.rows_written,
                report.skipped.len(),
                report.failed_rows
            );
            if !report.skipped.is_empty() {
                println!("⏭️ Skipped: {}", report.skipped.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Export failed: {}", e);
            Err(e.into())
        }
    }
}
