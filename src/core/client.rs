use crate::core::{DinoSource, FetchMode, Record};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

/// 恐龍名錄 API 的存取端，共用同一個 HTTP 連線池
pub struct DinoApi {
    client: Client,
    endpoint: String,
}

impl DinoApi {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

fn object_into_record(obj: serde_json::Map<String, serde_json::Value>) -> Record {
    let mut data = HashMap::new();
    for (key, value) in obj {
        data.insert(key, value);
    }
    Record { data }
}

#[async_trait]
impl DinoSource for DinoApi {
    async fn fetch_list(&self, mode: FetchMode) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        tracing::debug!("Making API request to: {}", self.endpoint);
        let mut request = self.client.get(&self.endpoint);
        if mode == FetchMode::ShortList {
            // view=genus 讓回應小很多，但之後要逐筆補查詳細資料
            request = request.query(&[("view", "genus")]);
        }
        let response = request.send().await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(EtlError::ProcessingError {
                message: format!(
                    "Dinosaur list request failed with status: {}",
                    response.status()
                ),
            });
        }

        let json_data: serde_json::Value = response.json().await?;

        // 清單回應必須是物件陣列，非物件的項目直接忽略
        if let serde_json::Value::Array(items) = json_data {
            for item in items {
                if let serde_json::Value::Object(obj) = item {
                    records.push(object_into_record(obj));
                }
            }
        } else {
            return Err(EtlError::ProcessingError {
                message: "Dinosaur list response is not a JSON array".to_string(),
            });
        }

        Ok(records)
    }

    async fn fetch_details(&self, genus: &str) -> Result<Record> {
        let url = format!("{}/{}", self.endpoint, genus);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(EtlError::ProcessingError {
                message: format!(
                    "Details request for '{}' failed with status: {}",
                    genus,
                    response.status()
                ),
            });
        }

        let json_data: serde_json::Value = response.json().await?;

        if let serde_json::Value::Object(obj) = json_data {
            Ok(object_into_record(obj))
        } else {
            Err(EtlError::ProcessingError {
                message: format!("Details response for '{}' is not a JSON object", genus),
            })
        }
    }
}
