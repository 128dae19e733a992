//! Cache Provider Tests

mod memory_test;
