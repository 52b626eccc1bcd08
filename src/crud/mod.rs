//! Generic CRUD Page Logic
//!
//! One state machine shared by the Boxes, Tasks and Transports pages,
//! parameterized by an `EntityDescriptor`.

mod controller;
mod descriptor;
mod reducer;
mod state;

pub use controller::{CrudController, Dispatch, RefSource};
pub use descriptor::{filter_rows, matches_search, matches_tab, EntityDescriptor, Messages};
pub use reducer::reduce;
pub use state::{Notification, PageAction, PageState, Severity};
