pub mod acceptance;
pub mod alphabet;
pub mod cipher;
pub mod request;

pub use crate::domain::model::{CircleId, DecodedRequest};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::{CodecError, CodecResult};
