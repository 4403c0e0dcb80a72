mod synthesize_tests;
