//! Runtime orchestration for the tamagotchi simulation.
//!
//! This crate wires the pure reducer from `pet-core` to wall-clock time. A
//! single simulation worker owns the [`pet_core::GameState`]; timers and
//! clients talk to it over a command channel, and everything that happens is
//! published on a topic-based [`EventBus`]. Consumers embed [`Runtime`] and
//! interact with the world through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`schedule`] runs the periodic timers and turns ticks into actions
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`clock`] abstracts wall-clock time so tests can drive it by hand
//! - [`config`] reads runtime settings from the environment
//! - [`dialog`] and [`oracle`] adapt the content pack for the worker
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod clock;
pub mod config;
pub mod dialog;
pub mod events;
pub mod oracle;
pub mod runtime;
pub mod schedule;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Cadences, RuntimeConfig};
pub use events::{DialogEvent, EffectEvent, Event, EventBus, SkippedEvent, Topic};
pub use oracle::OracleManager;
pub use runtime::{Runtime, RuntimeBuilder};
pub use schedule::{Scheduler, TickKind, plan_tick};
