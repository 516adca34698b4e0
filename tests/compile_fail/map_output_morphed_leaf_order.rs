use siarrow::category::{Arrow, SemiIsoArrow};
use siarrow::combinators::map_output_morphed;
use siarrow::semi_iso::identity;

fn reorder<K: SemiIsoArrow>(pair: Arrow<K, (), (u8, char)>) -> Arrow<K, (), (char, u8)> {
    map_output_morphed(identity::<(char, u8)>(), pair)
}

fn main() {}
