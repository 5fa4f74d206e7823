//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                    |
//! |----------------|--------------|--------------------------------|
//! | `config_store` | ConfigPort   | any StoragePort (postcard blob)|
//! | `log_sink`     | EventSink    | `log` facade                   |
//! | `memory_store` | StoragePort  | in-memory key/value map        |

pub mod config_store;
pub mod log_sink;
pub mod memory_store;

pub use config_store::StorageConfig;
pub use log_sink::LogEventSink;
pub use memory_store::MemoryStore;
