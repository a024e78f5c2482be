//! # Capacity Session
//!
//! 單一互動工作階段的狀態：情境清單與計算入口

pub mod scenario;
pub mod session;

// Re-export 主要類型
pub use scenario::{ScenarioStore, ScenarioTotal};
pub use session::CapacitySession;
