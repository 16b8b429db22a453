pub mod buckets;
pub mod solar;
pub mod weather;
