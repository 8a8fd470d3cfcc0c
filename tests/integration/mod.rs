//! Integration tests for the railjson binary and library

mod helpers;
mod test_check;
mod test_generate;
mod test_init;
mod test_inspect;
mod test_library;
