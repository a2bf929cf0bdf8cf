pub mod reader;
pub mod writer;

pub use reader::FileSourceReader;
pub use writer::FileMockWriter;
