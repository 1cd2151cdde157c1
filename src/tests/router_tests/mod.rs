mod dashboard_tests;
mod export_tests;
mod map_pages_tests;
