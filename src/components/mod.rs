//! UI Components
//!
//! Leptos components for the objects dashboard.

mod api_status;
mod indicators_table;
mod object_card;
mod object_details;
mod pagination_bar;
mod person_combobox;
mod search_and_filter;

pub use api_status::ApiStatus;
pub use indicators_table::IndicatorsTable;
pub use object_card::ObjectCard;
pub use object_details::ObjectDetails;
pub use pagination_bar::PaginationBar;
pub use person_combobox::PersonCombobox;
pub use search_and_filter::SearchAndFilter;
