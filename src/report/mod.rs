pub mod chart;
pub mod export;
pub mod narration;
pub mod summary;
pub mod table;

pub use chart::{series_up_to, ChartPoint};
pub use export::{write_report, ExportDocument, ExportError, ExportFormat};
pub use summary::{format_ratio, Summary};
pub use table::{render_rows, render_table, ReportRow};
