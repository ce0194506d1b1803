#[cfg(test)]
mod common;

#[cfg(test)]
mod search_client_tests;

#[cfg(test)]
mod request_validation_tests;

#[cfg(test)]
mod excerpt_rewrite_tests;
