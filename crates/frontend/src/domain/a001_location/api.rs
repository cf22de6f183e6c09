use contracts::shared::location::{
    ApplyOutcome, FetchRequest, LocationCascade, LocationLevel, LocationNode, Selection,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client;
use crate::shared::api_utils::query_string;

/// `GET /location/{collection}?parentId=..&isActive=true`
pub async fn fetch_locations(
    level: LocationLevel,
    parent_ids: &[String],
) -> Result<Vec<LocationNode>, String> {
    let parent = (!parent_ids.is_empty()).then(|| parent_ids.join(","));
    let path = format!(
        "/location/{}{}",
        level.collection(),
        query_string(&[("parentId", parent), ("isActive", Some("true".to_string()))])
    );
    api_client::get_json(&path).await
}

/// Performs one cascade fetch and hands the result back. A response that
/// arrives after the selection moved on, or after the page was closed, is dropped.
pub fn run_fetch(cascade: RwSignal<LocationCascade>, request: FetchRequest) {
    spawn_local(async move {
        let result = fetch_locations(request.level, &request.parent_ids).await;
        match cascade.try_update(|c| c.apply_options(&request, result)) {
            Some(ApplyOutcome::Applied(count)) => {
                log::debug!("{} {} loaded", count, request.level.collection())
            }
            Some(ApplyOutcome::Failed(e)) => {
                log::error!("Failed to load {}: {}", request.level.collection(), e)
            }
            Some(ApplyOutcome::Stale) => {
                log::debug!("Dropped stale {} response", request.level.collection())
            }
            None => {}
        }
    });
}

/// Loads the root level.
pub fn start(cascade: RwSignal<LocationCascade>) {
    if let Some(request) = cascade.try_update(|c| c.initial_request()) {
        run_fetch(cascade, request);
    }
}

/// Applies a user selection and loads the child level if one is due.
pub fn select_level(cascade: RwSignal<LocationCascade>, level: LocationLevel, selection: Selection) {
    match cascade.try_update(|c| c.select(level, selection)) {
        Some(Ok(Some(request))) => run_fetch(cascade, request),
        Some(Ok(None)) | None => {}
        Some(Err(e)) => log::error!("Location selection rejected: {}", e),
    }
}

/// Seeds an edit form and loads every level the preset makes resolvable.
pub fn preset_levels<I>(cascade: RwSignal<LocationCascade>, values: I)
where
    I: IntoIterator<Item = (LocationLevel, Selection)>,
{
    match cascade.try_update(|c| c.preset(values)) {
        Some(Ok(requests)) => {
            for request in requests {
                run_fetch(cascade, request);
            }
        }
        Some(Err(e)) => log::error!("Location preset rejected: {}", e),
        None => {}
    }
}
