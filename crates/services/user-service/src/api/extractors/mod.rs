//! Custom extractors mapping rejections onto the JSON envelope.

mod email_path;
mod json_body;
mod user_id;

pub use email_path::EmailPath;
pub use json_body::JsonBody;
pub use user_id::UserId;
