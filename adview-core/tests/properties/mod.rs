//! Property test modules

mod layout_tests;
mod resize_tests;
mod session_tests;
mod weights_tests;
