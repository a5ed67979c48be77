pub mod node;
pub mod parser;
pub mod serializer;
pub mod visit;

pub use node::{BlockNode, Chunk};
pub use parser::parse;
pub use serializer::{serialize, serialize_block};
pub use visit::BlockPath;
