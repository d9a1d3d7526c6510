//! Integration test modules

mod config_loading_tests;
mod drag_scenario_tests;
mod remote_source_tests;
