pub mod io;
pub mod tree;
