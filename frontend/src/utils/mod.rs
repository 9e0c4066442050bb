pub mod geolocation;
pub mod status;
pub mod storage;
pub mod time;
