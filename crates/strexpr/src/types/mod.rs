mod token;
mod value;

pub use token::{Token, TokenKind};
pub use value::Value;
