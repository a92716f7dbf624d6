pub mod audit;
pub mod completions;
pub mod export;
pub mod init;
pub mod milestones;
pub mod modules;
pub mod objects;
pub mod overview;
pub mod resources;
pub mod tasks;
