/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `\x89PNG\r\n\x1a\n` read as a big endian u64
pub const PNG_SIGNATURE: u64 = u64::from_be_bytes([137, 80, 78, 71, 13, 10, 26, 10]);

/// Length + chunk type + crc
pub const CHUNK_OVERHEAD: usize = 12;

pub const IHDR_LENGTH: usize = 13;

/// The inflate size hint is at most this many times the compressed length
pub const SIZE_HINT_RATIO: usize = 8;

/// Upper bound on the inflate size hint, the output grows past it on demand
pub const MAX_SIZE_HINT: usize = 1 << 26;

/// Extra room the inflate output limit allows past a complete image
pub const INFLATE_LIMIT_SLACK: usize = 1 << 16;
