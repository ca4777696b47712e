#![allow(dead_code)]

use flagkit_derive::FlagSet;

#[derive(FlagSet)]
enum Browsers {
    None,
    Chrome(u8),
}

fn main() {}
