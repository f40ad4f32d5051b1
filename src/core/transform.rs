use crate::domain::model::{Record, SheetRow};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

/// 從清單項目取出 genus 識別碼，轉為小寫
pub fn genus_of(record: &Record) -> Result<String> {
    match record.data.get("genus") {
        Some(Value::String(genus)) if !genus.is_empty() => Ok(genus.to_lowercase()),
        Some(_) => Err(invalid("genus", "expected a non-empty string")),
        None => Err(missing("genus")),
    }
}

/// 把一筆詳細資料轉成固定十欄的輸出列
pub fn sheet_row(details: &Record, genus: &str, site_url: &str) -> Result<SheetRow> {
    Ok(SheetRow {
        name: genus.to_string(),
        diet: text_or_empty(require(details, "dietTypeName")?),
        period: period_text(details)?,
        lived_in: first_country(details)?,
        r#type: body_shape(details)?,
        length: length_text(details)?,
        taxonomy: taxonomy_text(details)?,
        named_by: named_by_text(details)?,
        species: text_or_empty(require(details, "species")?),
        link: format!("{}/discover/dino-directory/{}.html", site_url, genus),
    })
}

// 期間名稱接上 "<from>-<to> million years ago"，兩個邊界都沒有時整段省略
fn period_text(details: &Record) -> Result<String> {
    let name = match require(details, "period")? {
        Value::Null => String::new(),
        Value::Object(period) => period
            .get("period")
            .map(text_or_empty)
            .ok_or_else(|| invalid("period", "object without a period name"))?,
        _ => return Err(invalid("period", "expected an object or null")),
    };

    let from = mya_bound(details, "myaFrom")?;
    let to = mya_bound(details, "myaTo")?;

    let span = if from.is_some() || to.is_some() {
        let from_text = from.map(|v| v.to_string()).unwrap_or_default();
        let to_text = to.map(|v| v.to_string()).unwrap_or_default();
        format!("{}-{} million years ago", from_text, to_text)
    } else {
        String::new()
    };

    Ok(format!("{} {}", name, span).trim().to_string())
}

fn first_country(details: &Record) -> Result<String> {
    let countries = require(details, "countries")?
        .as_array()
        .ok_or_else(|| invalid("countries", "expected a list"))?;

    let first = countries
        .first()
        .ok_or_else(|| invalid("countries", "empty countries list"))?;

    first
        .get("country")
        .map(text_or_empty)
        .ok_or_else(|| invalid("countries", "entry without a country name"))
}

fn body_shape(details: &Record) -> Result<String> {
    require(details, "bodyShape")?
        .get("bodyShape")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .ok_or_else(|| invalid("bodyShape", "expected a nested bodyShape name"))
}

fn length_text(details: &Record) -> Result<String> {
    match require(details, "lengthFrom")? {
        Value::Number(n) => Ok(format!("{}m", n)),
        Value::String(s) => Ok(format!("{}m", s)),
        _ => Err(invalid("lengthFrom", "expected a numeric length")),
    }
}

fn taxonomy_text(details: &Record) -> Result<String> {
    require(details, "taxTaxon")?
        .get("taxonomyCSV")
        .and_then(Value::as_str)
        .map(|taxonomy| taxonomy.replace(',', " "))
        .ok_or_else(|| invalid("taxTaxon", "expected a nested taxonomyCSV string"))
}

fn named_by_text(details: &Record) -> Result<String> {
    let author = text_or_empty(require(details, "genusNamedBy")?);
    let year = text_or_empty(require(details, "genusYear")?);
    Ok(format!("{} ({})", author, year))
}

// 年代邊界可能是數字、數字字串或 null，缺值視為沒有邊界
fn mya_bound(details: &Record, field: &str) -> Result<Option<i64>> {
    match details.data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| invalid(field, "expected an integer value")),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| invalid(field, "expected an integer value")),
        Some(_) => Err(invalid(field, "expected an integer value")),
    }
}

fn require<'a>(details: &'a Record, field: &str) -> Result<&'a Value> {
    details.data.get(field).ok_or_else(|| missing(field))
}

fn text_or_empty(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn missing(field: &str) -> EtlError {
    EtlError::RecordFieldError {
        field: field.to_string(),
        reason: "missing from record".to_string(),
    }
}

fn invalid(field: &str, reason: &str) -> EtlError {
    EtlError::RecordFieldError {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
