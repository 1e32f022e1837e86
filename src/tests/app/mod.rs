mod navigation_tests;
mod talent_flow_tests;
