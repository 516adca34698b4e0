use siarrow::shape::morph;

fn main() {
    let _ = morph::<(i32, char), i32>();
}
