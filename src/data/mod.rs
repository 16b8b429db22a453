pub mod forecast;
pub mod geocode;
