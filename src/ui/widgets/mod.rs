pub mod current;
pub mod daily;
pub mod header;
pub mod hourly;
pub mod loading;
pub mod search;
pub mod shared;
pub mod sun;
