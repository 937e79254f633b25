use reqwest::Client;
use tracing::{debug, info};

use crate::rank;
use crate::render;
use crate::stackexchange::{StackExchangeClient, StackExchangeError};

/// Credentials supplied by the hosting application's settings layer.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Stack Exchange API key.
    pub api_key: Option<String>,
}

/// One search invocation.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search keyword; encoded for the query string before sending.
    pub keyword: String,
}

/// Search Stack Overflow and render the top questions with their top answers
/// as an HTML fragment.
///
/// Fails before any network traffic when no API key is configured. Zero
/// search matches is not an error; it renders the no-results fragment.
pub async fn render_search_results(
    http: &Client,
    params: &SearchParams,
    settings: &Settings,
) -> Result<String, StackExchangeError> {
    let client = StackExchangeClient::new(http.clone(), settings.api_key.as_deref())?;
    render_with(&client, &params.keyword).await
}

async fn render_with(
    client: &StackExchangeClient,
    keyword: &str,
) -> Result<String, StackExchangeError> {
    let response = client.search(keyword).await?;
    if response.items.is_empty() {
        info!(%keyword, "search returned no results");
        return Ok(render::no_results());
    }

    let questions = rank::select_top(response.items);
    let ids: Vec<u64> = questions.iter().map(|q| q.id).collect();
    debug!(?ids, "fetching top answers");
    let answers = client.fetch_top_answers(&ids).await?;

    Ok(render::results(&questions, &answers))
}
