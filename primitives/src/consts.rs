/// Number of field elements in a blob, and the size of the evaluation domain.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// Size of a serialized scalar (little-endian, canonical).
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 48;

pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 96;

pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// Domain separator prepended to the blob challenge transcript.
pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8; 16] = b"FSBLOBVERIFY_V1_";

/// Width of the little-endian polynomial degree written into the challenge transcript.
pub const CHALLENGE_DEGREE_BYTES: usize = 16;
