pub mod preloader;
pub mod results_table;
pub mod search;
pub mod template;

pub use preloader::Preloader;
pub use results_table::ResultsTable;
pub use search::SearchPanel;
pub use template::{ColumnTemplate, RowTemplate};
