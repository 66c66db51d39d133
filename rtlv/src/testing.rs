#![cfg(test)]

use crate::{varint, Config, Record};
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::Rng;

/// Largest value generated by [`gen_record`], to keep randomized tests fast.
const MAX_GENERATED_VALUE: u64 = 1024;

/// Generates a random value in the given range.
pub fn gen_range<T: SampleUniform>(range: impl SampleRange<T>) -> T {
    rand::thread_rng().gen_range(range)
}

/// Generates a buffer of `len` random bytes.
pub fn gen_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill(&mut bytes[..]);
    bytes
}

/// Generates a [`Record`] whose type and length fit the chunk widths of `config`.
pub fn gen_record(config: &Config) -> Record {
    let tag = gen_range(0..=varint::max_value(config.type_bits()));
    let max_length = varint::max_value(config.length_bits()).min(MAX_GENERATED_VALUE);
    let length = usize::try_from(gen_range(0..=max_length)).expect("should fit in usize");
    Record::new(tag, gen_bytes(length))
}
