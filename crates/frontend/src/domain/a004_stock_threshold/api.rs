use contracts::domain::a004_stock_threshold::{
    BrandThreshold, ProductThreshold, ThresholdBook, ThresholdSettings,
};

use crate::shared::api_client;

pub async fn fetch_settings() -> Result<ThresholdSettings, String> {
    api_client::get_json("/inventory/settings").await
}

pub async fn save_settings(settings: &ThresholdSettings) -> Result<(), String> {
    api_client::put_json("/inventory/settings", settings).await
}

pub async fn fetch_brand_thresholds() -> Result<Vec<BrandThreshold>, String> {
    api_client::get_json("/inventory/brand-thresholds").await
}

pub async fn save_brand_threshold(row: &BrandThreshold) -> Result<(), String> {
    match &row.id {
        Some(id) => api_client::put_json(&format!("/inventory/brand-thresholds/{}", id), row).await,
        None => api_client::post_ack("/inventory/brand-thresholds", row).await,
    }
}

pub async fn delete_brand_threshold(id: &str) -> Result<(), String> {
    api_client::delete(&format!("/inventory/brand-thresholds/{}", id)).await
}

pub async fn fetch_product_thresholds() -> Result<Vec<ProductThreshold>, String> {
    api_client::get_json("/inventory/product-thresholds").await
}

pub async fn save_product_threshold(row: &ProductThreshold) -> Result<(), String> {
    match &row.id {
        Some(id) => {
            api_client::put_json(&format!("/inventory/product-thresholds/{}", id), row).await
        }
        None => api_client::post_ack("/inventory/product-thresholds", row).await,
    }
}

pub async fn delete_product_threshold(id: &str) -> Result<(), String> {
    api_client::delete(&format!("/inventory/product-thresholds/{}", id)).await
}

/// All three tiers. A tier that fails to load is logged and treated as
/// empty, so low-stock flags degrade instead of the whole page failing.
pub async fn load_threshold_book() -> ThresholdBook {
    let settings = fetch_settings().await.unwrap_or_else(|e| {
        log::warn!("Failed to load global threshold: {}", e);
        ThresholdSettings::default()
    });
    let brands = fetch_brand_thresholds().await.unwrap_or_else(|e| {
        log::warn!("Failed to load brand thresholds: {}", e);
        Vec::new()
    });
    let products = fetch_product_thresholds().await.unwrap_or_else(|e| {
        log::warn!("Failed to load product thresholds: {}", e);
        Vec::new()
    });
    ThresholdBook::new(&settings, &brands, &products)
}
