//! Shared plumbing for the fixture applications.
//!
//! - `body` - response bodies and their status/content-type mapping
//! - `error` - the default error response for propagated handler failures
//! - `tasks` - detached (fire-and-forget) background calls
//! - `telemetry` - tracing subscriber setup for the binaries

pub mod body;
pub mod error;
pub mod tasks;
pub mod telemetry;

pub use body::ResponseBody;
pub use error::{HandlerError, HandlerResult};
pub use tasks::detach;
pub use telemetry::init_logging;
