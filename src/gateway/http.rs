use std::time::Duration;

use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::gateway::FoodGateway;
use crate::models::{FavoritePayload, Food, OrderDraft};

/// `reqwest`-backed gateway.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Map a non-2xx response to [`AppError::Api`], keeping the body as the message.
async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown").to_string()
    } else {
        body
    };

    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait::async_trait]
impl FoodGateway for HttpGateway {
    async fn fetch_food(&self, id: i64) -> Result<Food> {
        let url = self.url(&format!("foods/{}", id));
        debug!(%url, "fetching food");

        let resp = self.http.get(&url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(AppError::FoodNotFound(id));
        }

        let food: Food = check_status(resp).await?.json().await?;
        debug!(food = %food.debug_string(), "food loaded");
        Ok(food)
    }

    async fn create_order(&self, order: &OrderDraft) -> Result<()> {
        let url = self.url("orders");
        debug!(%url, product_id = order.product_id, extras = order.extra_units(), "submitting order");

        let resp = self.http.post(&url).json(order).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn create_favorite(&self, favorite: &FavoritePayload) -> Result<()> {
        let url = self.url("favorites");
        debug!(%url, name = %favorite.name, "creating favorite");

        let resp = self.http.post(&url).json(favorite).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn gateway(server: &MockServer) -> HttpGateway {
        HttpGateway::new(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let gw = HttpGateway::with_client(reqwest::Client::new(), "http://localhost:3333/");
        assert_eq!(gw.url("foods/1"), "http://localhost:3333/foods/1");
    }

    #[tokio::test]
    async fn test_fetch_food_decodes_response() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/foods/3");
                then.status(200).json_body(json!({
                    "id": 3,
                    "name": "A la Camarón",
                    "description": "Shrimp pasta",
                    "price": 25.9,
                    "category": 1,
                    "image_url": "https://img/camarao.png",
                    "thumbnail_url": "https://img/camarao_thumb.png",
                    "extras": [{"id": 7, "name": "Shrimp", "value": 4, "quantity": 2}]
                }));
            })
            .await;

        let food = gateway(&server).fetch_food(3).await.unwrap();

        mock.assert_async().await;
        assert_eq!(food.name, "A la Camarón");
        assert_eq!(food.price, Decimal::new(259, 1));
        assert_eq!(food.extras[0].value, Decimal::from(4));
    }

    #[tokio::test]
    async fn test_fetch_food_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/foods/42");
                then.status(404);
            })
            .await;

        let err = gateway(&server).fetch_food(42).await.unwrap_err();
        assert!(matches!(err, AppError::FoodNotFound(42)));
    }

    #[tokio::test]
    async fn test_create_order_posts_draft() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/orders").json_body(json!({
                    "product_id": 1,
                    "name": "Veggie",
                    "description": "",
                    "price": 10.0,
                    "category": 2,
                    "thumbnail_url": "https://img/veggie.png",
                    "extras": []
                }));
                then.status(201);
            })
            .await;

        let order = OrderDraft {
            product_id: 1,
            name: "Veggie".to_string(),
            description: String::new(),
            price: Decimal::from(10),
            category: 2,
            thumbnail_url: "https://img/veggie.png".to_string(),
            extras: vec![],
        };
        gateway(&server).create_order(&order).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/favorites");
                then.status(500).body("boom");
            })
            .await;

        let favorite = FavoritePayload {
            name: "Veggie".to_string(),
            description: String::new(),
            price: Decimal::from(10),
            category: 2,
            image_url: String::new(),
            thumbnail_url: String::new(),
        };
        let err = gateway(&server).create_favorite(&favorite).await.unwrap_err();
        match err {
            AppError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
