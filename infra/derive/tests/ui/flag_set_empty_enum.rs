#![allow(dead_code)]

use flagkit_derive::FlagSet;

#[derive(FlagSet)]
enum Empty {}

fn main() {}
