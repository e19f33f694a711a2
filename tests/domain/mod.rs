mod analysis_test;
