pub mod fs;
pub mod imports;
