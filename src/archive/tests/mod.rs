mod locator_tests;
mod extractor_tests;
