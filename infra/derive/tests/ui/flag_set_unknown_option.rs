#![allow(dead_code)]

use flagkit_derive::FlagSet;

#[derive(FlagSet)]
#[flagset(rename = "Other")]
enum Browsers {
    Chrome = 1,
}

fn main() {}
