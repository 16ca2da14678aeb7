pub mod import;
pub mod upload;

pub use import::{CsvItemRecord, ImportBatch};
pub use upload::UploadedFile;
