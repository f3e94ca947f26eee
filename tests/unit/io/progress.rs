//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use spotgen::io::progress::ProgressManager;

    // Tests construction starts with nothing completed
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::new();
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }

    // Tests completions are counted with or without a bar
    // Verified by counting only when a bar exists
    #[test]
    fn test_complete_counts() {
        let mut pm = ProgressManager::default();
        pm.complete("00000001");
        assert_eq!(pm.completed(), 1);

        pm.initialize(3);
        assert_eq!(pm.completed(), 0);
        for seed in ["0000000A", "0000000B", "0000000C"] {
            pm.complete(seed);
        }
        assert_eq!(pm.completed(), 3);
        pm.finish();
    }

    // Tests an empty batch initializes and finishes cleanly
    // Verified by panicking on zero totals
    #[test]
    fn test_empty_batch() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.finish();
        assert_eq!(pm.completed(), 0);
    }
}
