//! Synchronous and background execution of key jobs
//!
//! A job owns every input it needs, so it can be moved onto a worker
//! thread after the caller's borrowed data is gone. Jobs touch no shared
//! state besides the read-only curve table. Once started, a job runs to
//! completion and reports exactly one `Result`.

use crate::agreement::derive_bits;
use crate::curves::resolve;
use crate::format::{export_key, EncodedKey};
use crate::key::KeyMaterial;
use crate::keygen::generate;
use eckit_api::{KeyFormat, ParamEncoding, Result};
use tracing::debug;
use zeroize::Zeroizing;

/// Where a job runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobMode {
    /// Inline on the calling thread
    #[default]
    Sync,
    /// On the runtime's blocking thread pool
    Async,
}

/// A self-contained unit of key work
pub trait CryptoJob: Send + 'static {
    type Output: Send + 'static;

    /// Short label used in log events
    fn name(&self) -> &'static str;

    fn run(self) -> Result<Self::Output>;
}

/// Generate a key pair on a named curve
#[derive(Debug, Clone)]
pub struct KeyGenJob {
    pub curve_name: String,
    pub param_encoding: ParamEncoding,
}

impl KeyGenJob {
    pub fn new(curve_name: impl Into<String>, param_encoding: ParamEncoding) -> Self {
        Self {
            curve_name: curve_name.into(),
            param_encoding,
        }
    }
}

impl CryptoJob for KeyGenJob {
    type Output = KeyMaterial;

    fn name(&self) -> &'static str {
        "keygen"
    }

    fn run(self) -> Result<KeyMaterial> {
        let curve = resolve(&self.curve_name)?;
        generate(curve, self.param_encoding)
    }
}

/// Agree on a shared secret between two key objects
#[derive(Debug, Clone)]
pub struct DeriveBitsJob {
    pub private: KeyMaterial,
    pub public: KeyMaterial,
}

impl CryptoJob for DeriveBitsJob {
    type Output = Zeroizing<Vec<u8>>;

    fn name(&self) -> &'static str {
        "derive_bits"
    }

    fn run(self) -> Result<Self::Output> {
        derive_bits(&self.private, &self.public)
    }
}

/// Export a key
#[derive(Debug, Clone)]
pub struct KeyExportJob {
    pub key: KeyMaterial,
    pub format: KeyFormat,
}

impl CryptoJob for KeyExportJob {
    type Output = EncodedKey;

    fn name(&self) -> &'static str {
        "key_export"
    }

    fn run(self) -> Result<EncodedKey> {
        export_key(&self.key, self.format)
    }
}

/// Run a job on the calling thread
pub fn run_job_blocking<J: CryptoJob>(job: J) -> Result<J::Output> {
    let name = job.name();
    debug!(job = name, "running job inline");
    let result = job.run();
    if let Err(e) = &result {
        debug!(job = name, code = e.code(), "job failed");
    }
    result
}

/// Run a job inline or on tokio's blocking pool
///
/// Must be awaited inside a tokio runtime when `mode` is
/// [`JobMode::Async`]. A panicking or cancelled worker is reported as
/// `OperationFailed`.
#[cfg(feature = "async-jobs")]
pub async fn run_job<J: CryptoJob>(mode: JobMode, job: J) -> Result<J::Output> {
    match mode {
        JobMode::Sync => run_job_blocking(job),
        JobMode::Async => {
            let name = job.name();
            debug!(job = name, "scheduling job on blocking pool");
            tokio::task::spawn_blocking(move || run_job_blocking(job))
                .await
                .map_err(|e| {
                    eckit_api::Error::operation_failed(
                        "run_job",
                        format!("{} job did not complete: {}", name, e),
                    )
                })?
        }
    }
}
