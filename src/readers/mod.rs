pub mod directory_reader;
pub mod discovery;
pub mod monthly_reader;

pub use directory_reader::{DirectoryReader, FileReadings, IngestedData, SkippedFile};
pub use discovery::discover_csv_files;
pub use monthly_reader::MonthlyCsvReader;
