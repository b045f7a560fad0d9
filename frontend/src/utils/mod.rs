pub mod date;
pub mod message;
pub mod navigation;
pub mod storage;
