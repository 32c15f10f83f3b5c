use notesum::setup_logging;

#[test]
fn test_logging_setup() {
    // setup_logging installs a global subscriber; it must not panic on first use
    let result = std::panic::catch_unwind(|| {
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
