//! Inline and background execution of key jobs

use eckit_api::KeyFormat;
use eckit_ecdh::{
    run_job, run_job_blocking, DeriveBitsJob, Error, JobMode, KeyExportJob, KeyGenJob,
    ParamEncoding,
};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_jobs_agree() {
    let mut handles = Vec::new();
    for curve in ["P-256", "P-384", "P-521", "secp256k1"] {
        handles.push(tokio::spawn(async move {
            let a = run_job(JobMode::Async, KeyGenJob::new(curve, ParamEncoding::Named)).await?;
            let b = run_job(JobMode::Async, KeyGenJob::new(curve, ParamEncoding::Named)).await?;

            let ab = run_job(
                JobMode::Async,
                DeriveBitsJob {
                    private: a.clone(),
                    public: b.to_public()?,
                },
            )
            .await?;
            let ba = run_job(
                JobMode::Sync,
                DeriveBitsJob {
                    private: b,
                    public: a.to_public()?,
                },
            )
            .await?;
            Ok::<_, Error>(ab == ba)
        }));
    }

    for handle in handles {
        assert!(handle.await.expect("task joined").expect("jobs succeeded"));
    }
}

#[tokio::test]
async fn test_failures_are_typed() {
    let err = run_job(JobMode::Async, KeyGenJob::new("brainpoolP256r1", ParamEncoding::Named))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCurve { .. }));

    let key = run_job_blocking(KeyGenJob::new("P-256", ParamEncoding::Explicit)).unwrap();
    let err = run_job(
        JobMode::Async,
        KeyExportJob {
            key: key.clone(),
            format: KeyFormat::Spki,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::InvalidKeyType { .. }));

    let pkcs8 = run_job(
        JobMode::Async,
        KeyExportJob {
            key,
            format: KeyFormat::Pkcs8,
        },
    )
    .await
    .unwrap();
    assert_eq!(pkcs8.format(), KeyFormat::Pkcs8);
}
