use std::sync::{Arc, Barrier};
use std::thread;

use loki_config::{LogConfig, init_logging};

#[test]
fn concurrent_init_never_fails() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                init_logging(LogConfig::new(format!("loki-config-{i}")))
            })
        })
        .collect();

    let errors: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().expect("init thread"))
        .filter_map(|result| result.err().map(|err| err.to_string()))
        .collect();

    assert!(errors.is_empty(), "concurrent init failed: {errors:?}");
}
