use anyhow::Result;
use dino_etl::{DinoApi, ExportConfig, FetchMode, LocalStorage, SheetPipeline, SheetRow};
use httpmock::prelude::*;
use reqwest::Client;
use tempfile::TempDir;

fn detail_json(genus: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "genus": genus,
        "dietTypeName": "herbivorous",
        "period": {"period": "Late Jurassic"},
        "myaFrom": 156,
        "myaTo": 144,
        "countries": [{"country": country}],
        "bodyShape": {"bodyShape": "Armoured dinosaur"},
        "lengthFrom": 9,
        "taxTaxon": {"taxonomyCSV": "Dinosauria,Ornithischia,Thyreophora"},
        "genusNamedBy": "Marsh",
        "genusYear": 1877,
        "species": "stenops"
    })
}

// 精簡清單模式：清單只回 genus，逐筆補查，其中一筆 504 要被跳過
#[tokio::test]
async fn test_short_list_chain_skips_failed_detail() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let list_data = serde_json::json!([
        {"genus": "Tyrannosaurus"},
        {"genus": "Stegosaurus"},
        {"genus": "Triceratops"}
    ]);

    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/dinosaurs")
            .query_param("view", "genus");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(list_data);
    });

    let tyrannosaurus_mock = server.mock(|when, then| {
        when.method(GET).path("/dinosaurs/tyrannosaurus");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(detail_json("Tyrannosaurus", "USA"));
    });

    // The detail endpoint is known to throw random 504 responses
    let stegosaurus_mock = server.mock(|when, then| {
        when.method(GET).path("/dinosaurs/stegosaurus");
        then.status(504);
    });

    let triceratops_mock = server.mock(|when, then| {
        when.method(GET).path("/dinosaurs/triceratops");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(detail_json("Triceratops", "Canada"));
    });

    let config = ExportConfig {
        api_endpoint: server.url("/dinosaurs"),
        site_url: "https://www.nhm.ac.uk".to_string(),
        sheet_filename: "data/data.csv".to_string(),
        fetch_mode: FetchMode::ShortList,
    };

    let api = DinoApi::new(Client::new(), config.api_endpoint.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SheetPipeline::new(api, storage, config);

    let report = pipeline.run().await?;

    list_mock.assert();
    tyrannosaurus_mock.assert();
    stegosaurus_mock.assert();
    triceratops_mock.assert();

    assert_eq!(report.rows_written, 2);
    assert_eq!(report.skipped, vec!["stegosaurus".to_string()]);
    assert_eq!(report.failed_rows, 0);

    // Header plus two rows, in list order minus the skipped genus
    let mut reader = csv::Reader::from_path(temp_dir.path().join("data/data.csv"))?;
    let rows: Vec<SheetRow> = reader.deserialize().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "tyrannosaurus");
    assert_eq!(rows[1].name, "triceratops");
    assert_eq!(rows[1].period, "Late Jurassic 156-144 million years ago");
    assert_eq!(
        rows[1].link,
        "https://www.nhm.ac.uk/discover/dino-directory/triceratops.html"
    );

    Ok(())
}

// 詳細資料本身壞掉 (空 countries) 時只跳過那一列，不會中斷整個匯出
#[tokio::test]
async fn test_short_list_chain_survives_bad_detail_payload() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let list_data = serde_json::json!([
        {"genus": "Stegosaurus"},
        {"genus": "Triceratops"}
    ]);

    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/dinosaurs")
            .query_param("view", "genus");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(list_data);
    });

    let mut broken = detail_json("Stegosaurus", "USA");
    broken["countries"] = serde_json::json!([]);
    let stegosaurus_mock = server.mock(|when, then| {
        when.method(GET).path("/dinosaurs/stegosaurus");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(broken);
    });

    let triceratops_mock = server.mock(|when, then| {
        when.method(GET).path("/dinosaurs/triceratops");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(detail_json("Triceratops", "Canada"));
    });

    let config = ExportConfig {
        api_endpoint: server.url("/dinosaurs"),
        site_url: "https://www.nhm.ac.uk".to_string(),
        sheet_filename: "data/data.csv".to_string(),
        fetch_mode: FetchMode::ShortList,
    };

    let api = DinoApi::new(Client::new(), config.api_endpoint.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SheetPipeline::new(api, storage, config);

    let report = pipeline.run().await?;

    list_mock.assert();
    stegosaurus_mock.assert();
    triceratops_mock.assert();

    assert_eq!(report.rows_written, 1);
    assert_eq!(report.failed_rows, 1);
    assert!(report.skipped.is_empty());

    let raw = std::fs::read_to_string(temp_dir.path().join("data/data.csv"))?;
    assert!(!raw.contains("stegosaurus"));
    assert!(raw.contains("triceratops"));

    Ok(())
}
