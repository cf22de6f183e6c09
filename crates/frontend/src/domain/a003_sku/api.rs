//! Master lists from the inventory service, fetched once per page.

use contracts::domain::a003_sku::{Brand, ProjectType, SkuRecord};

use crate::shared::api_client;

pub async fn fetch_skus() -> Result<Vec<SkuRecord>, String> {
    api_client::get_json("/inventory/skus").await
}

pub async fn fetch_project_types() -> Result<Vec<ProjectType>, String> {
    api_client::get_json("/inventory/project-types").await
}

pub async fn fetch_brands() -> Result<Vec<Brand>, String> {
    api_client::get_json("/inventory/brands").await
}
