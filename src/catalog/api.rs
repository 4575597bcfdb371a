use reqwest::{
    Client,
    Response,
};

use crate::core::{
    models::{
        FilterOptions,
        PlantQuery,
        PlantRecord,
    },
    VerdantError,
};

/// Fetches the catalog-wide filter option lists. Called once at startup.
/// The timestamp parameter busts any stale intermediary cache.
pub async fn fetch_filter_options(base_url: &str) -> Result<FilterOptions, VerdantError> {
    let url = format!("{}/api/filters", base_url);
    let cache_bust = chrono::Utc::now().timestamp_millis().to_string();

    let response = Client::new().get(&url).query(&[("t", cache_bust)]).send().await?;
    ensure_success(&response)?;

    let mut options: FilterOptions = response.json().await?;
    options.sort_for_display();
    Ok(options)
}

/// Lists the plants matching the query. The server owns all filtering and
/// search semantics; the returned order is preserved as-is.
pub async fn fetch_plants(
    base_url: &str,
    query: &PlantQuery,
) -> Result<Vec<PlantRecord>, VerdantError> {
    let url = format!("{}/api/plants", base_url);

    let response = Client::new().get(&url).query(&query.params()).send().await?;
    ensure_success(&response)?;

    Ok(response.json().await?)
}

/// Images are served as static files, referenced by name only.
pub fn image_url(base_url: &str, image_name: &str) -> String {
    format!("{}/images/{}", base_url, image_name)
}

fn ensure_success(response: &Response) -> Result<(), VerdantError> {
    if !response.status().is_success() {
        return Err(VerdantError::Custom(format!(
            "HTTP error {} from {}",
            response.status(),
            response.url()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_joins_base_and_name() {
        assert_eq!(
            image_url("http://localhost:8000", "ficus_elastica.png"),
            "http://localhost:8000/images/ficus_elastica.png"
        );
    }
}
