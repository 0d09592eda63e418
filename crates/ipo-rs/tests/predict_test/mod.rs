mod endpoints_test;
mod models_test;
