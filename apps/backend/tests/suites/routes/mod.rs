pub mod error_shape;
pub mod new_game;
pub mod territories;
// trace_span is in its own test binary (trace_span_tests.rs)
