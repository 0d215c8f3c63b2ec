/// Interactive console front end
///
/// This module runs the read-eval-print loop: it reads command lines, runs
/// them against the address book and renders the results through a UserView.

pub mod session;
pub mod view;

pub use session::*;
pub use view::*;
