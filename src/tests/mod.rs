mod cache_tests;
mod router_tests;
mod utils;
