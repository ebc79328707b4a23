//! Integration tests for llm-guard

mod pipeline_tests;
mod rules_tests;
