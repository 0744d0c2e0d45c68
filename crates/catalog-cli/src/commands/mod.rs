pub mod browse;
pub mod dispatch;
pub mod list;
pub mod search;
pub mod shared;
pub mod show;
