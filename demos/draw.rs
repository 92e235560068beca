//! Reads from a tarot device backed by system entropy.
//!
//! Usage: `cargo run --example draw -- [bytes] [reads]`

use std::env;

use devtarot::{DeviceOptions, TarotDevice};

fn main() {
    let mut args = env::args().skip(1);
    let count = parse_arg(args.next(), 32);
    let reads = parse_arg(args.next(), 1);

    let device = TarotDevice::system(DeviceOptions::default());

    for _ in 0..reads {
        let mut buf = vec![0u8; count];
        match device.read(&mut buf[..], count) {
            Ok(n) => println!("{}", render(&buf[..n])),
            Err(err) => {
                println!("Read error: {err} (errno {})", err.errno());
                break;
            }
        }
    }
}

fn parse_arg(arg: Option<String>, default: usize) -> usize {
    arg.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Shows zero padding as `.`.
fn render(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b == 0 { '.' } else { char::from(b) })
        .collect()
}
