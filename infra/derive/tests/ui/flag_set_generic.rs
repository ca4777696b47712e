#![allow(dead_code)]

use flagkit_derive::FlagSet;

#[derive(FlagSet)]
enum Wrapper<T> {
    Value(T),
}

fn main() {}
