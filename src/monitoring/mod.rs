/*!
 * Monitoring
 * Tracing setup and timed operation spans
 */

mod tracer;

pub use tracer::{
    generate_trace_id, init_tracing, span_fs, span_operation, FsOpSpan, OperationSpan,
};
