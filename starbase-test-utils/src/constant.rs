/// Plain text password given to every fixture user.
pub const TEST_PASSWORD: &str = "orbital-password";

/// bcrypt cost for fixture hashes, kept at the minimum so tests stay fast.
pub const TEST_HASH_COST: u32 = 4;
