#![deny(missing_docs)]
//! Node.js bindings that surface mdlive's Rust implementation.

use mdlive_core::CompileError;
use napi::bindgen_prelude::*;
use napi_derive::napi;

/// Batch processing types and functions.
pub mod batch;
/// The stateful compiler and its configuration.
pub mod compiler;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
pub use types::*;

/// Compiles multiple Markdown documents in parallel using Rayon.
///
/// All files share the configuration carried in `options.config`. Failures
/// are reported per file so one broken document does not abort the batch
/// unless `continueOnError` is set to false.
///
/// # Arguments
///
/// * `inputs` - Array of files to compile, each with an id, source, and optional filepath
/// * `options` - Optional batch processing options (thread count, error handling, config)
///
/// # Returns
///
/// Returns a `BatchProcessingResult` containing individual results and statistics.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { compileBatch } = require('mdlive-napi');
///
/// const inputs = [
///   { id: '/docs/intro.md', source: '# Intro' },
///   { id: '/docs/usage.md', source: '# Usage' },
/// ];
///
/// const result = compileBatch(inputs, { continueOnError: true });
/// console.log(`Processed ${result.stats.total} files in ${result.stats.processingTimeMs}ms`);
/// ```
#[napi(js_name = "compileBatch")]
pub fn compile_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let config = compiler::InternalCompilerConfig::new(opts.config.clone());

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let filepath = input.filepath.clone().unwrap_or_else(|| input.id.clone());
        match compiler::compile_document(&config, &input.source, filepath, None) {
            Ok(result) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(result),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        // Process all files regardless of errors
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error
        let mut results = Vec::with_capacity(inputs.len());
        let mut had_error = false;

        for input in inputs {
            if had_error {
                break;
            }
            let result = process_input(input);
            if result.error.is_some() {
                had_error = true;
            }
            results.push(result);
        }
        results
    };

    let elapsed = start.elapsed();

    Ok(BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    })
}

/// Maps compile errors onto NAPI statuses.
fn convert_error(err: CompileError) -> Error {
    match err {
        // Bad caller input gets an InvalidArg status
        CompileError::MissingFilepath => Error::new(Status::InvalidArg, err.to_string()),
        CompileError::Parse { message } => {
            Error::from_reason(format!("markdown parse error: {}", message))
        }
    }
}
