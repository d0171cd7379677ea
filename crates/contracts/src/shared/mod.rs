pub mod envelope;
pub mod error;

pub use envelope::{decode_ack, decode_data, decode_list, ApiEnvelope, ListPayload, STATUS_OK};
pub use error::ApiError;
