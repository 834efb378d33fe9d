use crate::config::Config;
use crate::snapshot::{JsonFileSource, SnapshotCache, SnapshotSource};
use farepath_core::SearchConfig;
use std::{sync::Arc, time::Duration};

pub struct AppState {
    pub snapshots: SnapshotCache,
    pub search_config: SearchConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let source = Arc::new(JsonFileSource::new(config.dataset_path.clone()));
        let search_config = SearchConfig::new(config.default_algorithm, config.max_stopovers);
        Self::with_source(source, config.snapshot_ttl, search_config)
    }

    pub fn with_source(
        source: Arc<dyn SnapshotSource>,
        snapshot_ttl: Duration,
        search_config: SearchConfig,
    ) -> Self {
        Self {
            snapshots: SnapshotCache::new(source, snapshot_ttl),
            search_config,
        }
    }
}
