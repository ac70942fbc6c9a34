pub mod geocode;
pub mod ip_lookup;
pub mod position;
pub mod present;
