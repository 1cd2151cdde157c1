use crate::data::cache::LoadOnce;
use crate::data::datasets::LISTINGS_URL;
use crate::data::{DataError, DatasetUrls, Datasets};
use crate::errors::ServerError;
use crate::tests::utils::{StaticSource, LISTINGS_CSV};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

#[test]
fn load_once_runs_loader_a_single_time() {
    let cache: LoadOnce<u32> = LoadOnce::new("numbers");
    let calls = AtomicUsize::new(0);

    let load = || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(7)
    };
    let first = cache.get_or_load(load).unwrap();
    let second = cache.get_or_load(|| Ok(99)).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.value, 7);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn failed_load_is_not_cached() {
    let cache: LoadOnce<u32> = LoadOnce::new("numbers");

    let err = cache
        .get_or_load(|| Err(DataError::Network("offline".into())))
        .unwrap_err();
    assert!(matches!(err, DataError::Network(_)));

    let value = cache.get_or_load(|| Ok(3)).unwrap();
    assert_eq!(value.value, 3);
}

#[test]
fn invalidate_forces_a_fresh_load() {
    let cache: LoadOnce<u32> = LoadOnce::new("numbers");

    let first = cache.get_or_load(|| Ok(1)).unwrap();
    assert!(cache.invalidate().unwrap());
    assert!(!cache.invalidate().unwrap());

    let second = cache.get_or_load(|| Ok(2)).unwrap();
    assert_eq!(second.value, 2);
    assert!(!Arc::ptr_eq(&first, &second));
    // Holders of the old value keep it.
    assert_eq!(first.value, 1);
}

#[test]
fn datasets_fetch_each_url_once() {
    let source = StaticSource::fixtures();
    let datasets = Datasets::new(Box::new(source.clone()), DatasetUrls::default());

    let a = datasets.listings().unwrap();
    let b = datasets.listings().unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(a.value.listings.len(), 3);

    datasets.incidents().unwrap();
    datasets.incidents().unwrap();
    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn datasets_refetch_after_invalidate() {
    let source = StaticSource::fixtures();
    let datasets = Datasets::new(Box::new(source.clone()), DatasetUrls::default());

    let a = datasets.listings().unwrap();
    datasets.invalidate().unwrap();
    let b = datasets.listings().unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn unreachable_dataset_surfaces_error() {
    let source = StaticSource::new(&[(LISTINGS_URL, LISTINGS_CSV)]);
    let datasets = Datasets::new(Box::new(source), DatasetUrls::default());

    assert!(datasets.listings().is_ok());
    match datasets.trees() {
        Err(DataError::Http { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[test]
fn concurrent_callers_share_a_single_load() {
    const THREADS: usize = 8;
    let cache: LoadOnce<u32> = LoadOnce::new("numbers");
    let calls = AtomicUsize::new(0);
    let start = Barrier::new(THREADS);

    let (cache, calls, start) = (&cache, &calls, &start);
    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(move || {
                    start.wait();
                    cache
                        .get_or_load(move || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(50));
                            Ok(42)
                        })
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
    assert_eq!(results[0].value, 42);
}

#[test]
fn concurrent_requests_fetch_listings_once() {
    let source = StaticSource::fixtures();
    let datasets = Datasets::new(Box::new(source.clone()), DatasetUrls::default());

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| assert_eq!(datasets.listings().unwrap().value.listings.len(), 3));
        }
    });

    assert_eq!(source.fetch_count(), 1);
}

#[test]
fn poisoned_cache_is_an_internal_error() {
    let cache: LoadOnce<u32> = LoadOnce::new("numbers");

    thread::scope(|s| {
        let crashed = s
            .spawn(|| cache.get_or_load(|| panic!("loader blew up")))
            .join();
        assert!(crashed.is_err());
    });

    let err = cache.get_or_load(|| Ok(1)).unwrap_err();
    assert!(matches!(err, DataError::Poisoned("numbers")));

    let server_err = ServerError::from(err);
    assert!(matches!(server_err, ServerError::InternalError));
    assert_eq!(server_err.status(), 500);
}
