use flagkit_derive::flagkit_error;

#[flagkit_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
