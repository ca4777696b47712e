#![allow(dead_code)]

use flagkit_derive::FlagSet;

#[derive(FlagSet)]
struct Named {
    bits: u32,
}

fn main() {}
