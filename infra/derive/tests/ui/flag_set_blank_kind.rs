#![allow(dead_code)]

use flagkit_derive::FlagSet;

#[derive(FlagSet)]
#[flagset(kind = " ")]
enum Browsers {
    Chrome = 1,
}

fn main() {}
