//! Runner tests

mod utils;
