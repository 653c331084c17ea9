//! Unit tests for the session orchestrator

mod service_tests;
