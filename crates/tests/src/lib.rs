#[cfg(test)]
mod common;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod scenario_tests;

#[cfg(test)]
mod config_tests;
