pub mod matrix;
pub mod score;
pub mod segment;
pub mod variable;
