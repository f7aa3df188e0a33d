use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub rows: usize,
    /// `None` for dry runs.
    pub output_path: Option<String>,
}

/// Drives a pipeline through extract, transform and load.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting formatting run");

        tracing::info!("Extracting summary statistics...");
        let table = self.pipeline.extract()?;
        tracing::info!("Extracted {} rows ({} columns)", table.len(), table.columns.len());
        self.monitor.log_stats("extract");

        tracing::info!("Transforming rows...");
        let result = self.pipeline.transform(table)?;
        let rows = result.records.len();
        tracing::info!("Transformed {} rows", rows);
        self.monitor.log_stats("transform");

        tracing::info!("Loading formatted output...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("load");
        self.monitor.log_final_stats();

        Ok(RunReport {
            rows,
            output_path: Some(output_path),
        })
    }

    /// Extract and transform only; nothing is written.
    pub fn dry_run(&self) -> Result<RunReport> {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");

        let table = self.pipeline.extract()?;
        tracing::info!("Extracted {} rows ({} columns)", table.len(), table.columns.len());
        self.monitor.log_stats("extract");

        let result = self.pipeline.transform(table)?;
        tracing::info!("{} rows would be written", result.records.len());
        self.monitor.log_final_stats();

        Ok(RunReport {
            rows: result.records.len(),
            output_path: None,
        })
    }
}
