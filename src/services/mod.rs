pub mod concierge;
pub mod intent;
