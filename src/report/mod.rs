//! Output rendering: plain-text console reports and the JSON graph export.

pub mod console;
pub mod graph;

pub use console::{
    write_capture_effort, write_system_details, write_systems_table, write_warzone_summary,
};
pub use graph::{GraphEdge, GraphNode, WarzoneGraph};
