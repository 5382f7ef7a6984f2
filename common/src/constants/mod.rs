pub const SMALLEST_PRIME: u32 = 2;
