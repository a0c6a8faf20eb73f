mod config;
mod inventory;
mod job;
mod report;

pub use config::JobConfig;
pub use inventory::{Disposition, Inventory, classify};
pub use job::{plan, run};
pub use report::{LOG_HEADER, render_line, write_inventory_log};
