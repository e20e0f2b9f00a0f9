/// Record framing
pub const DELIMITER: u8 = b';';
pub const EOL: u8 = b'\n';

/// FNV-1a hash parameters
pub const FNV1A_OFFSET: u64 = 14695981039346656037;
pub const FNV1A_PRIME: u64 = 1099511628211;

/// Aggregate table sizing. Capacity is a power of two (masked modulo) kept
/// well above the expected distinct-station bound so probe chains stay short.
pub const TABLE_CAPACITY: usize = 1 << 14;
pub const EXPECTED_MAX_STATIONS: usize = 10_000;

/// Inline key buffer per slot: power of two above the 100-byte station name
/// contract, for alignment.
pub const KEY_BUFFER_SIZE: usize = 128;

/// Input contract limits
pub const MAX_STATION_NAME_LEN: usize = 100;

/// Block size for the sequential-read sourcing strategy (8 MiB)
pub const READ_BLOCK_SIZE: usize = 8 * 1024 * 1024;
