//! Simulated remote ad source.
//!
//! No network I/O happens here. The simulation waits for a configurable
//! latency and returns hardcoded campaigns, mirroring what a real backend
//! client would hand back.

use std::time::Duration;

use async_trait::async_trait;
use tracing::Instrument;

use crate::error::{RemoteError, RemoteResult};
use crate::models::{AdContent, AdContentBuilder, WeightTriple};
use crate::presets::content_presets;
use crate::tracing::span_names;

/// Latency applied by [`SimulatedRemoteSource::new`] to content fetches.
pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(500);

/// Latency applied to preference uploads and preset listings.
pub const DEFAULT_UPLOAD_LATENCY: Duration = Duration::from_millis(300);

const SAMPLE_VIDEO_URL: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Source of ad content outside the process
#[async_trait]
pub trait RemoteAdSource: Send + Sync {
    /// Fetches the content configured for a campaign
    async fn fetch_content(&self, campaign_id: &str) -> RemoteResult<AdContent>;

    /// Reports the weights a user settled on; returns whether it was accepted
    async fn upload_preference(
        &self,
        user_id: &str,
        ad_id: &str,
        weights: WeightTriple,
    ) -> RemoteResult<bool>;

    /// Lists the content presets the backend offers
    async fn fetch_presets(&self) -> RemoteResult<Vec<AdContent>>;
}

/// Hardcoded stand-in for a backend client
#[derive(Debug, Clone)]
pub struct SimulatedRemoteSource {
    fetch_latency: Duration,
    upload_latency: Duration,
}

impl SimulatedRemoteSource {
    /// Creates a source with the default simulated latencies
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fetch_latency: DEFAULT_FETCH_LATENCY,
            upload_latency: DEFAULT_UPLOAD_LATENCY,
        }
    }

    /// Creates a source that applies `latency` to every call
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self {
            fetch_latency: latency,
            upload_latency: latency,
        }
    }

    async fn wait(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for SimulatedRemoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteAdSource for SimulatedRemoteSource {
    async fn fetch_content(&self, campaign_id: &str) -> RemoteResult<AdContent> {
        let span = tracing::debug_span!(span_names::REMOTE_FETCH, campaign_id = %campaign_id);
        let campaign = campaign_id.trim();
        if campaign.is_empty() || campaign.contains('/') {
            return Err(RemoteError::InvalidCampaign(campaign_id.to_string()));
        }

        async {
            Self::wait(self.fetch_latency).await;
            tracing::debug!("Campaign content fetched");
            Ok(AdContentBuilder::new()
                .top_image(
                    format!("https://picsum.photos/seed/{campaign}-top/1024/760"),
                    1.0,
                )
                .middle_video(SAMPLE_VIDEO_URL, 2.0)
                .bottom_image(
                    format!("https://picsum.photos/seed/{campaign}-bottom/1024/760"),
                    1.0,
                )
                .build())
        }
        .instrument(span)
        .await
    }

    async fn upload_preference(
        &self,
        user_id: &str,
        ad_id: &str,
        weights: WeightTriple,
    ) -> RemoteResult<bool> {
        Self::wait(self.upload_latency).await;
        tracing::info!(
            user_id = %user_id,
            ad_id = %ad_id,
            weights = %weights,
            "Uploaded resize preference"
        );
        Ok(true)
    }

    async fn fetch_presets(&self) -> RemoteResult<Vec<AdContent>> {
        Self::wait(self.upload_latency).await;
        Ok(content_presets()
            .into_iter()
            .map(|preset| preset.content)
            .collect())
    }
}
