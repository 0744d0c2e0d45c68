use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use catalog_config::CatalogConfig;
use catalog_core::enums::FetchState;
use catalog_fetch::{HttpItemSource, ItemSource, StaticItemSource};
use catalog_search::SearchPipeline;

use crate::progress::Progress;

/// Load layered configuration, including `.env` from the working directory.
pub fn load_config() -> anyhow::Result<CatalogConfig> {
    CatalogConfig::load_with_dotenv().context("failed to load catalog configuration")
}

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: CatalogConfig,
    pub pipeline: SearchPipeline,
    /// Where items come from, for log lines and error messages.
    pub source_label: String,
}

impl AppContext {
    /// Build the item source (fixture file or HTTP) and the pipeline over it.
    pub fn init(config: CatalogConfig, fixture: Option<&Path>) -> anyhow::Result<Self> {
        let (source, source_label): (Arc<dyn ItemSource>, String) = match fixture {
            Some(path) => {
                let source = StaticItemSource::from_json_file(path)
                    .with_context(|| format!("failed to load fixture {}", path.display()))?;
                (Arc::new(source), path.display().to_string())
            }
            None => {
                let source = HttpItemSource::new(&config.api)
                    .context("failed to build catalog HTTP client")?;
                (Arc::new(source), config.api.objects_url())
            }
        };
        tracing::debug!(source = %source_label, "item source ready");

        let pipeline = SearchPipeline::from_config(source, &config.search);
        Ok(Self {
            config,
            pipeline,
            source_label,
        })
    }

    /// Run one fetch to completion behind a spinner and report how it went.
    ///
    /// A failed fetch is not an error here; callers decide what to do with
    /// [`FetchState::Failed`].
    pub async fn fetch(&self) -> anyhow::Result<FetchState> {
        let spinner = Progress::spinner(&format!("fetching {}…", self.source_label));
        self.pipeline
            .fetch_data()
            .await
            .context("catalog fetch task panicked")?;

        let state = self.pipeline.fetch_state();
        match &state {
            FetchState::Failed { message } => spinner.finish_err(message),
            _ => spinner.finish_clear(),
        }
        Ok(state)
    }

    /// The row cap for printed lists: `--limit`, else `general.default_limit`.
    #[must_use]
    pub fn limit(&self, flag: Option<u32>) -> usize {
        let limit = flag.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

/// Turn a failed fetch into the command's error, after output was printed.
pub fn ensure_fetched(state: &FetchState, source_label: &str) -> anyhow::Result<()> {
    if let FetchState::Failed { message } = state {
        anyhow::bail!("failed to fetch catalog from {source_label}: {message}");
    }
    Ok(())
}
