pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::Session;
pub use config::toml_config::TomlConfig;
pub use crate::core::acceptance::{check_acceptance, compute_acceptance};
pub use crate::core::alphabet::{rotate, unrotate, ALPHABET};
pub use crate::core::cipher::{substitution_cipher, substitution_decipher};
pub use crate::core::request::{day_of_year, decode_request, encode_request, request_plaintext};
pub use domain::model::{Action, CircleId, DecodedRequest};
pub use utils::error::{CodecError, HamedError, Result};
