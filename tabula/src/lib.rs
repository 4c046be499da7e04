//! Tabula
//!
//! A searchable, filterable, sortable, paginated table view over in-memory
//! rows. The table owns its view state, takes interaction as [`Action`]s and
//! produces a plain [`ViewOutput`] that front-ends render.

pub mod column;
pub mod error;
pub mod filter;
pub mod labels;
pub mod pagination;
pub mod render;
pub mod selection;
pub mod sort;
pub mod state;
pub mod value;
pub mod view;

mod table;

pub use column::Column;
pub use error::CellError;
pub use filter::{FilterByCol, FilterValue};
pub use labels::{EnglishLabels, Labels};
pub use pagination::PageInfo;
pub use render::render_text;
pub use selection::{Selection, SelectionMode};
pub use sort::{Direction, SortSpec};
pub use state::{Action, ColumnDomain, DEFAULT_PAGE_SIZE, ViewState, VisibilitySeed};
pub use table::*;
pub use value::CellValue;
pub use view::{Body, Cell, ViewOutput};
