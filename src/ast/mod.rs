pub mod node;
pub mod root;
