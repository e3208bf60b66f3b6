pub mod claude;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod provider;
pub mod traits;
pub mod util;

pub use claude::Claude;
pub use error::{AiError, Result};
pub use gemini::Gemini;
pub use openai::OpenAi;
pub use provider::Provider;
pub use traits::TextGenerator;
pub use util::truncate_to_char_boundary;
