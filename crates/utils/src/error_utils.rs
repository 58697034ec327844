// Copyright 2025 Irreducible Inc.

/// Return early with the given error, converted into the function's error type.
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into())
	};
}

/// Return early with the given error unless the condition holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}
