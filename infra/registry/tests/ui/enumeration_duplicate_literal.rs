use ordum_registry::enumeration;

pub struct Suit;

#[enumeration(crate = "ordum_registry")]
impl Suit {
    pub const HEARTS: &'static str = "H";
    pub const SPADES: &'static str = "S";
    pub const JOKER: &'static str = "H";
}

fn main() {
    let _ = Suit;
}
