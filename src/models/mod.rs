pub mod detail_row;
pub mod summary_row;
pub mod wide_row;

pub use detail_row::DetailRow;
pub use summary_row::{SummaryKey, SummaryRow};
pub use wide_row::{ActivityBlock, WideRow, WideTable};
