// Copyright 2025 Irreducible Inc.

const TRUTHY: [&str; 7] = ["1", "on", "ON", "true", "TRUE", "yes", "YES"];

/// Read boolean flag from the environment variable.
///
/// Unset, non-unicode and unrecognized values all read as `false`.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|val| parse_flag(&val))
}

fn parse_flag(val: &str) -> bool {
	TRUTHY.contains(&val)
}
