mod pipeline_tests;
mod worker_tests;
