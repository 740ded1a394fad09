//! Open Food Facts API client
//!
//! Fetches product data by barcode and converts the loosely typed response
//! into a `RawProductRecord`. Conversion is lenient: wrongly typed values are
//! treated as missing instead of failing the request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use shared::{Nutriments, RawProductRecord};

use super::{GatewayError, ProductGateway};
use crate::config::{OpenFoodConfig, BARCODE_PLACEHOLDER};
use crate::error::{AppError, AppResult};

/// Open Food Facts API client
#[derive(Clone)]
pub struct OpenFoodClient {
    client: Client,
    url_template: String,
}

/// Open Food Facts product response envelope
#[derive(Debug, Deserialize)]
struct OffResponse {
    #[serde(default, deserialize_with = "lenient_i64")]
    status: Option<i64>,
    #[serde(default)]
    product: Option<OffProduct>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OffProduct {
    #[serde(rename = "_id", deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    code: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    product_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    brands: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    categories: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    countries: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    creator: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    image_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    image_ingredients_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    image_nutrition_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    ingredients_text: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    nutriscore_grade: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    nutriscore_score: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    nova_group: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    ecoscore_grade: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    ecoscore_score: Option<i64>,
    #[serde(deserialize_with = "lenient_tags")]
    allergens_tags: Vec<String>,
    #[serde(deserialize_with = "lenient_tags")]
    additives_tags: Vec<String>,
    #[serde(deserialize_with = "lenient_tags")]
    labels_tags: Vec<String>,
    nutriments: OffNutriments,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OffNutriments {
    #[serde(rename = "energy-kcal_100g", deserialize_with = "lenient_amount")]
    energy_kcal: Option<f64>,
    #[serde(rename = "proteins_100g", deserialize_with = "lenient_amount")]
    proteins: Option<f64>,
    #[serde(rename = "carbohydrates_100g", deserialize_with = "lenient_amount")]
    carbohydrates: Option<f64>,
    #[serde(rename = "sugars_100g", deserialize_with = "lenient_amount")]
    sugars: Option<f64>,
    #[serde(rename = "fat_100g", deserialize_with = "lenient_amount")]
    fat: Option<f64>,
    #[serde(rename = "saturated-fat_100g", deserialize_with = "lenient_amount")]
    saturated_fat: Option<f64>,
    #[serde(rename = "salt_100g", deserialize_with = "lenient_amount")]
    salt: Option<f64>,
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Nutriment amounts must be finite and non-negative
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|amount| amount.is_finite() && *amount >= 0.0))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

impl From<OffProduct> for RawProductRecord {
    fn from(p: OffProduct) -> Self {
        RawProductRecord {
            barcode: p.id.or(p.code),
            name: p.product_name,
            brand: p.brands,
            categories: p.categories,
            countries: p.countries,
            creator: p.creator,
            image_url: p.image_url,
            image_ingredients_url: p.image_ingredients_url,
            image_nutrition_url: p.image_nutrition_url,
            ingredients_text: p.ingredients_text,
            nutri_score_grade: p.nutriscore_grade,
            nutri_score_points: p.nutriscore_score,
            nova_group: p.nova_group,
            eco_score_grade: p.ecoscore_grade,
            eco_score_points: p.ecoscore_score,
            nutriments: Nutriments {
                energy_kcal: p.nutriments.energy_kcal,
                proteins: p.nutriments.proteins,
                carbohydrates: p.nutriments.carbohydrates,
                sugars: p.nutriments.sugars,
                fat: p.nutriments.fat,
                saturated_fat: p.nutriments.saturated_fat,
                salt: p.nutriments.salt,
            },
            allergens: p.allergens_tags,
            additives: p.additives_tags,
            labels: p.labels_tags,
        }
    }
}

impl OffResponse {
    /// A product is present only when status is 1 and the product object exists
    fn into_record(self, barcode: &str) -> Result<RawProductRecord, GatewayError> {
        match (self.status, self.product) {
            (Some(1), Some(product)) => Ok(product.into()),
            _ => Err(GatewayError::NotFound {
                barcode: barcode.to_string(),
            }),
        }
    }
}

impl OpenFoodClient {
    /// Create a new OpenFoodClient from configuration
    pub fn new(config: &OpenFoodConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url_template: config.api_url.clone(),
        })
    }

    /// Create a new OpenFoodClient with a custom URL template (for testing)
    pub fn with_url_template(url_template: String) -> Self {
        Self {
            client: Client::new(),
            url_template,
        }
    }

    /// Product URL for a barcode
    pub fn product_url(&self, barcode: &str) -> String {
        self.url_template.replace(BARCODE_PLACEHOLDER, barcode)
    }
}

#[async_trait]
impl ProductGateway for OpenFoodClient {
    async fn fetch_product(&self, barcode: &str) -> Result<RawProductRecord, GatewayError> {
        let url = self.product_url(barcode);
        tracing::debug!(%url, "fetching product from Open Food Facts");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(barcode, error = %e, "Open Food Facts request failed");
            GatewayError::Transient(format!("Network error occurred: {}", e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!(barcode, "product not found upstream");
            return Err(GatewayError::NotFound {
                barcode: barcode.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!(barcode, %status, "Open Food Facts returned an error status");
            return Err(GatewayError::Transient(format!(
                "OpenFood API error: {}",
                status
            )));
        }

        let data: OffResponse = response.json().await.map_err(|e| {
            tracing::warn!(barcode, error = %e, "failed to decode Open Food Facts response");
            GatewayError::Transient(format!("Failed to parse product response: {}", e))
        })?;

        data.into_record(barcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<RawProductRecord, GatewayError> {
        let response: OffResponse = serde_json::from_value(body).expect("response decodes");
        response.into_record("3017620422003")
    }

    #[test]
    fn test_full_product_conversion() {
        let record = parse(json!({
            "status": 1,
            "product": {
                "_id": "3017620422003",
                "product_name": "Nutella",
                "brands": "Ferrero",
                "categories": "Spreads",
                "nutriscore_grade": "E",
                "nutriscore_score": 26,
                "nova_group": 4,
                "ecoscore_grade": "d",
                "ecoscore_score": 30,
                "allergens_tags": ["en:milk", "en:nuts"],
                "additives_tags": ["en:e322"],
                "labels_tags": ["en:green-dot"],
                "nutriments": {
                    "energy-kcal_100g": 539,
                    "proteins_100g": 6.3,
                    "sugars_100g": 56.3,
                    "saturated-fat_100g": 10.6,
                    "salt_100g": 0.107
                }
            }
        }))
        .expect("product found");

        assert_eq!(record.barcode.as_deref(), Some("3017620422003"));
        assert_eq!(record.name.as_deref(), Some("Nutella"));
        assert_eq!(record.nutri_score_grade.as_deref(), Some("E"));
        assert_eq!(record.nutri_score_points, Some(26));
        assert_eq!(record.nova_group, Some(4));
        assert_eq!(record.nutriments.energy_kcal, Some(539.0));
        assert_eq!(record.nutriments.fat, None);
        assert_eq!(record.allergens, vec!["en:milk", "en:nuts"]);
        assert_eq!(record.labels, vec!["en:green-dot"]);
    }

    #[test]
    fn test_lenient_values() {
        let record = parse(json!({
            "status": 1,
            "product": {
                "code": "123",
                "nova_group": "3",
                "nutriscore_score": 4.0,
                "ecoscore_grade": 7,
                "additives_tags": ["en:e330", 12, null],
                "labels_tags": "en:organic",
                "nutriments": {
                    "fat_100g": "1.5",
                    "salt_100g": -0.2,
                    "sugars_100g": "n/a"
                }
            }
        }))
        .expect("product found");

        assert_eq!(record.barcode.as_deref(), Some("123"));
        assert_eq!(record.nova_group, Some(3));
        assert_eq!(record.nutri_score_points, Some(4));
        assert_eq!(record.eco_score_grade, None);
        assert_eq!(record.additives, vec!["en:e330"]);
        assert!(record.labels.is_empty());
        assert_eq!(record.nutriments.fat, Some(1.5));
        assert_eq!(record.nutriments.salt, None);
        assert_eq!(record.nutriments.sugars, None);
    }

    #[test]
    fn test_status_zero_is_not_found() {
        let result = parse(json!({ "status": 0, "status_verbose": "product not found" }));
        assert_eq!(
            result,
            Err(GatewayError::NotFound {
                barcode: "3017620422003".to_string()
            })
        );
    }

    #[test]
    fn test_missing_product_is_not_found() {
        assert!(matches!(
            parse(json!({ "status": 1 })),
            Err(GatewayError::NotFound { .. })
        ));
    }

    /// Serve a single canned HTTP response and return a URL template pointing at it
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            socket.shutdown().await.ok();
        });

        format!("http://{}/api/v2/product/{{barcode}}.json", addr)
    }

    async fn fetch(
        status_line: &'static str,
        body: &'static str,
    ) -> Result<RawProductRecord, GatewayError> {
        let client = OpenFoodClient::with_url_template(serve_once(status_line, body).await);
        client.fetch_product("123").await
    }

    #[tokio::test]
    async fn test_http_404_is_not_found() {
        assert_eq!(
            fetch("404 Not Found", "").await,
            Err(GatewayError::NotFound {
                barcode: "123".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_http_server_error_is_transient() {
        match fetch("500 Internal Server Error", "").await {
            Err(GatewayError::Transient(message)) => {
                assert_eq!(message, "OpenFood API error: 500 Internal Server Error")
            }
            other => panic!("expected transient error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transient() {
        match fetch("200 OK", "not json").await {
            Err(GatewayError::Transient(message)) => {
                assert!(message.starts_with("Failed to parse product response"))
            }
            other => panic!("expected transient error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_ok_with_status_zero_is_not_found() {
        assert!(matches!(
            fetch("200 OK", r#"{"status":0,"status_verbose":"product not found"}"#).await,
            Err(GatewayError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_http_ok_with_product_is_converted() {
        let record = fetch(
            "200 OK",
            r#"{"status":1,"product":{"code":"123","product_name":"X","nova_group":"2"}}"#,
        )
        .await
        .expect("product found");

        assert_eq!(record.barcode.as_deref(), Some("123"));
        assert_eq!(record.name.as_deref(), Some("X"));
        assert_eq!(record.nova_group, Some(2));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_transient() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client =
            OpenFoodClient::with_url_template(format!("http://{}/product/{{barcode}}.json", addr));
        assert!(matches!(
            client.fetch_product("123").await,
            Err(GatewayError::Transient(_))
        ));
    }

    #[test]
    fn test_product_url() {
        let client = OpenFoodClient::with_url_template(
            "https://world.openfoodfacts.org/api/v2/product/{barcode}.json".to_string(),
        );
        assert_eq!(
            client.product_url("5449000000996"),
            "https://world.openfoodfacts.org/api/v2/product/5449000000996.json"
        );
    }
}
