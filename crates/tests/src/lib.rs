#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod profile_tests;

#[cfg(test)]
mod admin_tests;

#[cfg(test)]
mod analytics_tests;

#[cfg(test)]
mod record_tests;
