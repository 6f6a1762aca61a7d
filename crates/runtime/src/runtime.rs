//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker and the tick scheduler, wires up the
//! command channel and event bus, and exposes a builder-based API for clients
//! to drive the simulation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use pet_content::{ContentLoader, ContentPack};
use pet_core::GameState;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::clock::{Clock, SystemClock};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::schedule::Scheduler;
use crate::workers::{Command, SimulationWorker};

/// Main runtime that orchestrates the simulation
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    scheduler: Option<Scheduler>,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Builds and starts a runtime from `config` with the system clock.
    pub async fn start(config: RuntimeConfig) -> Result<Self> {
        Self::builder().config(config).build().await
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stops the timers, then lets the worker drain and exit.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.shutdown();
        }

        self.handle.shutdown().await?;
        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        info!(target: "runtime", "runtime stopped");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    clock: Option<Arc<dyn Clock>>,
    content: Option<ContentPack>,
    scheduler: bool,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            clock: None,
            content: None,
            scheduler: true,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state. Its seed wins over `config.seed`.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Replace the system clock, e.g. with a [`ManualClock`](crate::ManualClock).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Use this content pack instead of loading `config.content_path`.
    pub fn content(mut self, content: ContentPack) -> Self {
        self.content = Some(content);
        self
    }

    /// Disable the timers to drive ticks by hand through
    /// [`RuntimeHandle::tick`].
    pub fn with_scheduler(mut self, enabled: bool) -> Self {
        self.scheduler = enabled;
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let content = match self.content {
            Some(content) => content,
            None => ContentLoader::load_or_default(self.config.content_path.as_deref())
                .map_err(|e| RuntimeError::Content(format!("{e:#}")))?,
        };

        let initial_state = self.state.unwrap_or_else(|| {
            GameState::with_seed(self.config.seed.unwrap_or_else(rand::random))
        });
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx.clone(), event_bus.clone(), clock.clone());

        info!(
            target: "runtime",
            seed = initial_state.seed,
            scheduler = self.scheduler,
            "starting runtime"
        );

        let sim_worker = SimulationWorker::new(
            initial_state,
            OracleManager::new(content),
            clock,
            command_rx,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        let scheduler = self
            .scheduler
            .then(|| Scheduler::spawn(command_tx, &self.config.cadences));

        Ok(Runtime {
            handle,
            scheduler,
            sim_worker_handle,
        })
    }
}
