pub mod disease;
pub mod field_value;
pub mod options;
pub mod patient;
pub mod prediction;
pub mod token_count;
pub mod transaction;
