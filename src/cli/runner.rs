//! CLI runner - executes commands

use crate::analyzer::{
    analyze, analyze_concurrent, analyze_store, AnalysisResult, DatabaseReport, StoreKey,
    StoreReport,
};
use crate::cli::commands::{Cli, Commands};
use crate::config::ProfilerConfig;
use crate::error::{Error, Result, ResultExt};
use crate::output::{render_inventory, render_report, write_report, RenderOptions};
use crate::snapshot::{load_snapshot, Snapshot};
use crate::types::LogLevel;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Effective log level
    pub fn log_level(&self) -> LogLevel {
        if self.cli.verbose {
            LogLevel::Debug
        } else {
            self.cli.log_level
        }
    }

    /// Run the CLI command and write its report
    pub async fn run(&self) -> Result<()> {
        let report = self.execute().await?;
        let output = match &self.cli.command {
            Commands::Analyze { output, .. } => output.as_deref(),
            _ => None,
        };
        write_report(&report, output).with_context(|| "Failed to write report".to_string())?;
        Ok(())
    }

    /// Run the CLI command and return the rendered report
    pub async fn execute(&self) -> Result<String> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Analyze {
                snapshot,
                database,
                parallel,
                ..
            } => {
                self.analyze(
                    &config,
                    snapshot,
                    database.as_deref(),
                    *parallel || config.parallel,
                )
                .await
            }
            Commands::Stores { snapshot } => self.stores(&config, snapshot),
            Commands::Fields {
                snapshot,
                database,
                store,
            } => self.fields(&config, snapshot, database, store),
        }
    }

    /// Load configuration and apply command line overrides
    fn load_config(&self) -> Result<ProfilerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ProfilerConfig::from_file(path)?,
            None => ProfilerConfig::default(),
        };

        if let Some(format) = self.cli.format {
            config.output.format = format;
        }
        if let Some(key) = &self.cli.snapshot_key {
            config.snapshot_key = key.clone();
        }

        config.validate()?;
        debug!("Effective config: {:?}", config);
        Ok(config)
    }

    fn render_options(config: &ProfilerConfig) -> RenderOptions {
        RenderOptions {
            pretty_json: config.output.pretty_json,
            thresholds: config.cardinality,
        }
    }

    fn load(config: &ProfilerConfig, path: &Path) -> Result<Snapshot> {
        load_snapshot(path, &config.snapshot_key)
            .with_context(|| format!("Failed to load snapshot '{}'", path.display()))
    }

    /// Full analysis
    async fn analyze(
        &self,
        config: &ProfilerConfig,
        path: &Path,
        database: Option<&str>,
        parallel: bool,
    ) -> Result<String> {
        let mut snapshot = Self::load(config, path)?;

        if let Some(name) = database {
            snapshot.databases.retain(|db| db.display_name() == name);
            if snapshot.is_empty() {
                return Err(Error::DatabaseNotFound {
                    database: name.to_string(),
                });
            }
        }

        let started = Instant::now();
        let result = if parallel {
            analyze_concurrent(Arc::new(snapshot)).await?
        } else {
            analyze(&snapshot)
        };
        info!("Analysis finished in {:?}", started.elapsed());

        render_report(
            &result,
            config.output.format,
            &Self::render_options(config),
        )
    }

    /// Store listing
    fn stores(&self, config: &ProfilerConfig, path: &Path) -> Result<String> {
        let snapshot = Self::load(config, path)?;
        render_inventory(
            &snapshot,
            config.output.format,
            &Self::render_options(config),
        )
    }

    /// Single store report
    fn fields(
        &self,
        config: &ProfilerConfig,
        path: &Path,
        database: &str,
        store: &str,
    ) -> Result<String> {
        let snapshot = Self::load(config, path)?;

        // Later entries win, as they do in a full report
        let db = snapshot
            .databases_named(database)
            .last()
            .ok_or_else(|| Error::DatabaseNotFound {
                database: database.to_string(),
            })?;
        let found = db.store_by_report_key(store).ok_or_else(|| Error::StoreNotFound {
            database: database.to_string(),
            store: store.to_string(),
        })?;

        let mut stores: IndexMap<StoreKey, StoreReport> = IndexMap::new();
        stores.insert(StoreKey::from(found.name.clone()), analyze_store(found));

        let mut result = AnalysisResult::new();
        result.insert(
            database,
            DatabaseReport {
                version: db.version.clone(),
                stores,
            },
        );

        render_report(
            &result,
            config.output.format,
            &Self::render_options(config),
        )
    }
}
