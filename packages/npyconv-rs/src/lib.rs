pub mod deoverlap;
pub mod error;
pub mod mat;
pub mod npy;
pub mod reconstruct;
pub mod stride;
pub mod types;
pub mod window;

pub use deoverlap::{deoverlap_file, DeoverlapRequest, DeoverlapResult};
pub use error::{NpyConvError, Result};
pub use types::*;
