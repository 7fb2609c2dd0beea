//! UI Components
//!
//! Reusable Leptos components.

mod item_form;
mod item_list;
mod result_panel;
mod spin_button;
mod wheel_view;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use result_panel::ResultPanel;
pub use spin_button::SpinButton;
pub use wheel_view::WheelView;
