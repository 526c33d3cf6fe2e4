//! HTTP download of the registry.

use crate::config;
use colored::Colorize;
use reqwest::{Client, StatusCode};
use std::error::Error;

/// Client sending our user agent.
pub fn build_client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(config::USER_AGENT)
        .build()
        .map_err(|e| format!("Error building HTTP client: {e}"))?;
    Ok(client)
}

/// Download the registry CSV from `url`.
pub async fn fetch_csv(url: &str) -> Result<String, Box<dyn Error>> {
    let client = build_client()?;
    fetch_csv_with(&client, url).await
}

/// Download with a caller-supplied client. Only `200 OK` is accepted.
pub async fn fetch_csv_with(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    log::info!("Downloading registry CSV from {}", url.on_blue());

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to download CSV from {url}: {e}"))?;

    let status = response.status();
    if status != StatusCode::OK {
        log::warn!("{} GET {url} -> {status}", "failed".on_red());
        return Err(format!("Failed to download CSV from {url}: HTTP {status}").into());
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read CSV body from {url}: {e}"))?;
    log::debug!("Downloaded {} bytes", text.len());

    Ok(text)
}
