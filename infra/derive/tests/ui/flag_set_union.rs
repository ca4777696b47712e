#![allow(dead_code)]

use flagkit_derive::FlagSet;

#[derive(FlagSet)]
union Bits {
    raw: u32,
}

fn main() {}
