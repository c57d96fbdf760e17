//! CRC-32 as used by png chunks (ISO 3309 / ITU-T V.42),
//! computed over the chunk type and chunk data.

const CRC_TABLE: [u32; 256] = make_table();

const fn make_table() -> [u32; 256]
{
    let mut table = [0_u32; 256];
    let mut n = 0;

    while n < 256
    {
        let mut c = n as u32;
        let mut k = 0;

        while k < 8
        {
            if c & 1 == 1
            {
                c = 0xEDB8_8320 ^ (c >> 1);
            }
            else
            {
                c >>= 1;
            }
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Update a running crc with `data`.
///
/// Start with `u32::MAX` and invert the final value.
pub fn crc32_update(data: &[u8], mut crc: u32) -> u32
{
    for byte in data
    {
        crc = CRC_TABLE[usize::from((crc as u8) ^ byte)] ^ (crc >> 8);
    }
    crc
}

/// Compute the crc of a chunk type followed by its data
pub fn chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32
{
    !crc32_update(data, crc32_update(chunk_type, u32::MAX))
}
