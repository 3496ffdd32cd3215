#![allow(dead_code)]

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

static RANDOM_DATA_STATS: &[(&str, u8, usize)] = &[
    ("qua-128b", 4, 128),
    ("txt-128b", 127, 128),
    ("bin-128b", 255, 128),
    ("qua-4k", 4, 4096),
    ("txt-4k", 127, 4096),
    ("bin-4k", 255, 4096),
    ("qua-64k", 4, 65536),
    ("txt-64k", 127, 65536),
    ("bin-64k", 255, 65536),
];

/// Generates every sample in `RANDOM_DATA_STATS` directly in memory; there
/// is no corpus to download here, so unlike the reference crate's bench
/// harness this never touches the filesystem or the network.
pub fn make_samples() -> Vec<(&'static str, Vec<u8>)> {
    RANDOM_DATA_STATS
        .iter()
        .map(|&(name, scale, length)| {
            let mut buf = vec![0u8; length];
            random_bytes(scale, &mut buf);
            (name, buf)
        })
        .collect()
}

fn random_bytes(scale: u8, buf: &mut [u8]) {
    let uni = Uniform::from(0..=scale);
    let mut rng = thread_rng();
    buf.iter_mut().for_each(|c| *c = rng.sample(uni));
}

// dirty hack
pub fn set_criterion_samples(crit: &mut criterion::Criterion, mut n: usize) {
    if n < 2 {
        n = 2;
    }

    let mut tmp = std::mem::replace(crit, criterion::Criterion::default());
    tmp = tmp.sample_size(n);
    std::mem::replace(crit, tmp);
}
