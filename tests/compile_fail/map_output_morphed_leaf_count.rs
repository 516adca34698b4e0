use siarrow::category::{Arrow, SemiIsoArrow};
use siarrow::combinators::map_output_morphed;
use siarrow::semi_iso::identity;

fn widen<K: SemiIsoArrow>(pair: Arrow<K, (), (u8, char)>) -> Arrow<K, (), (u8, char, bool)> {
    map_output_morphed(identity::<(u8, char, bool)>(), pair)
}

fn main() {}
