mod sqlite;

pub use sqlite::StatusDatabase;
