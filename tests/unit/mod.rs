/// Unit test harness for the public API
mod basic_tests;
