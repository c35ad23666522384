pub mod history;
pub mod instrument_id;
pub mod response_set;
pub mod result;
pub mod severity;
