// Application Layer - Use Cases and Business Logic

pub mod constants;
mod shutdown;
pub mod sweeper;
pub mod website;

// Re-exports
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
pub use sweeper::{SweepReport, Sweeper, SweeperHandle, SweeperState};
pub use website::{WebsiteService, WebsiteStats};
