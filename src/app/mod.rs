pub mod export;
pub mod menu;
pub mod report;
